//! Host doubles shared by the scenarios and benchmarks.

use shared_types::{Cell, LookTarget, LookTargets, MapId, MessageType, Notification};
use zd_02_spatial_resolver::{MockSpatialIndex, MockWorld};
use zd_03_fingerprint_registry::MockTemplateRenderer;
use zd_05_instruction_patcher::{
    Instruction, Label, MethodBody, MethodRef, MethodSignature, MockMethodRepository, OpCode,
    Operand,
};

/// Map used by every scenario.
pub const MAP: MapId = MapId(0);

/// Shelf standing inside the stockpile.
pub const SHELF_ID: i32 = 100;
pub const SHELF_CELL: Cell = Cell::new(10, 10);

/// Stockpile zone around the shelf.
pub const STOCKPILE_ID: i32 = 200;
/// Stockpile cell with no shelf.
pub const STOCKPILE_CELL: Cell = Cell::new(11, 10);

/// Growing zone away from the stockpile.
pub const GROWING_ZONE_ID: i32 = 300;
pub const GROWING_CELL: Cell = Cell::new(20, 20);

/// Cell with nothing on it.
pub const OPEN_GROUND: Cell = Cell::new(40, 40);

/// One map: a shelf at `SHELF_CELL` inside a two-cell stockpile, plus a
/// growing zone.
pub fn colony() -> MockWorld {
    MockWorld::new().with_map(
        MockSpatialIndex::new(MAP)
            .with_storage(SHELF_CELL, SHELF_ID, "wooden shelf")
            .with_stockpile(STOCKPILE_ID, "Stockpile zone 1", [SHELF_CELL, STOCKPILE_CELL])
            .with_zone(GROWING_ZONE_ID, "Growing zone 1", [GROWING_CELL]),
    )
}

/// The host's English templates for the stock tracked categories.
pub fn english_templates() -> MockTemplateRenderer {
    MockTemplateRenderer::new()
        .with_template("MessageDeterioratedAway", "{0} has deteriorated away.")
        .with_template("MessageRottedAwayInStorage", "{0} has rotted away in storage.")
        .with_template(
            "MessagePlantDiedOfCold",
            "{0} has died of cold. Plants need warm temperatures to grow.",
        )
        .with_template("MessagePlantDiedOfPoison", "{0} has died from toxic fallout.")
        .with_template("MessagePlantDiedOfPollution", "{0} has died from pollution.")
        .with_template("MessagePlantDiedOfNoPollution", "{0} has died from a lack of pollution.")
        .with_template("MessageTraderArrived", "{0} has arrived to trade.")
}

/// Tracked notification pointing at `cell`.
pub fn deteriorated_at(label: &str, cell: Cell) -> Notification {
    Notification::new(
        format!("{label} has deteriorated away."),
        LookTargets::single(LookTarget::Cell { cell, map: MAP }),
        MessageType::NegativeEvent,
    )
}

pub fn make_leafless_sig() -> MethodSignature {
    MethodSignature::new("Plant", "MakeLeafless").with_param("LeaflessCause")
}

pub fn tick_long_sig() -> MethodSignature {
    MethodSignature::new("Plant", "TickLong")
}

pub fn rot_tick_sig() -> MethodSignature {
    MethodSignature::new("CompRottable", "Tick").with_param("int")
}

/// `if (PlantUtility.MessageShowAllowed(this)) Messages.Message(...);`
fn plant_body(signature: MethodSignature) -> MethodBody {
    MethodBody::new(
        signature,
        vec![
            Instruction::load_arg(0),
            Instruction::call(MethodRef::new("PlantUtility", "MessageShowAllowed")),
            Instruction::branch_false(Label(1)),
            Instruction::with_operand(OpCode::LoadString, Operand::Str("MessagePlantDiedOfCold".into())),
            Instruction::call(MethodRef::new("Messages", "Message")),
            Instruction::ret().labeled(Label(1)),
        ],
    )
}

/// `if (parent.IsInAnyStorage()) Messages.Message("MessageRottedAwayInStorage", ...);`
fn rot_body() -> MethodBody {
    MethodBody::new(
        rot_tick_sig(),
        vec![
            Instruction::load_arg(0),
            Instruction::with_operand(OpCode::LoadField, Operand::Field("parent".into())),
            Instruction::call(MethodRef::new("StoreUtility", "IsInAnyStorage")),
            Instruction::branch_false(Label(2)),
            Instruction::with_operand(
                OpCode::LoadString,
                Operand::Str("MessageRottedAwayInStorage".into()),
            ),
            Instruction::call(MethodRef::new("Messages", "Message")),
            Instruction::ret().labeled(Label(2)),
        ],
    )
}

/// Host method table as shipped by the supported host version.
pub fn host_methods() -> MockMethodRepository {
    MockMethodRepository::new()
        .with_body(plant_body(make_leafless_sig()))
        .with_body(plant_body(tick_long_sig()))
        .with_body(rot_body())
}

/// A host version whose `TickLong` no longer calls `MessageShowAllowed`.
pub fn drifted_tick_long() -> MethodBody {
    MethodBody::new(
        tick_long_sig(),
        vec![
            Instruction::load_arg(0),
            Instruction::call(MethodRef::new("PlantUtility", "CanNotify")),
            Instruction::branch_false(Label(1)),
            Instruction::call(MethodRef::new("Messages", "Message")),
            Instruction::ret().labeled(Label(1)),
        ],
    )
}
