//! Instruction IR
//!
//! A host method body as an ordered sequence of opaque instructions. Only
//! the opcode and the operand's text are inspected; everything else is
//! carried through untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Branch target marker attached to an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(pub u32);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{:03}", self.0)
    }
}

/// Reference to a callable method, e.g. `Plant::MessageShowAllowed`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodRef {
    pub declaring_type: String,
    pub name: String,
}

impl MethodRef {
    pub fn new(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.declaring_type, self.name)
    }
}

/// Identity of a patchable host method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    pub method: MethodRef,
    pub params: Vec<String>,
}

impl MethodSignature {
    pub fn new(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            method: MethodRef::new(declaring_type, name),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.method, self.params.join(", "))
    }
}

/// Instruction opcodes the patcher needs to name. Anything else the host
/// emits is carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpCode {
    Nop,
    LoadArg,
    LoadLocal,
    StoreLocal,
    LoadField,
    LoadConst,
    LoadString,
    Call,
    CallVirt,
    Branch,
    BranchTrue,
    BranchFalse,
    Pop,
    Return,
    Other(String),
}

impl OpCode {
    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call | Self::CallVirt)
    }

    pub fn is_conditional_branch(&self) -> bool {
        matches!(self, Self::BranchTrue | Self::BranchFalse)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = match self {
            Self::Nop => "nop",
            Self::LoadArg => "ldarg",
            Self::LoadLocal => "ldloc",
            Self::StoreLocal => "stloc",
            Self::LoadField => "ldfld",
            Self::LoadConst => "ldc",
            Self::LoadString => "ldstr",
            Self::Call => "call",
            Self::CallVirt => "callvirt",
            Self::Branch => "br",
            Self::BranchTrue => "brtrue",
            Self::BranchFalse => "brfalse",
            Self::Pop => "pop",
            Self::Return => "ret",
            Self::Other(name) => name,
        };
        f.write_str(mnemonic)
    }
}

/// Instruction operand. Patterns are matched against its `Display` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Method(MethodRef),
    Field(String),
    Int(i64),
    Str(String),
    Label(Label),
    Arg(u16),
    Local(u16),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method(method) => write!(f, "{}", method),
            Self::Field(field) => f.write_str(field),
            Self::Int(value) => write!(f, "{}", value),
            Self::Str(value) => write!(f, "{:?}", value),
            Self::Label(label) => write!(f, "{}", label),
            Self::Arg(index) => write!(f, "arg.{}", index),
            Self::Local(index) => write!(f, "loc.{}", index),
        }
    }
}

/// One instruction in a method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: OpCode,
    pub operand: Option<Operand>,
    /// Branch targets landing on this instruction.
    pub labels: Vec<Label>,
}

impl Instruction {
    pub fn new(opcode: OpCode) -> Self {
        Self {
            opcode,
            operand: None,
            labels: Vec::new(),
        }
    }

    pub fn with_operand(opcode: OpCode, operand: Operand) -> Self {
        Self {
            opcode,
            operand: Some(operand),
            labels: Vec::new(),
        }
    }

    pub fn call(method: MethodRef) -> Self {
        Self::with_operand(OpCode::Call, Operand::Method(method))
    }

    pub fn call_virt(method: MethodRef) -> Self {
        Self::with_operand(OpCode::CallVirt, Operand::Method(method))
    }

    pub fn load_arg(index: u16) -> Self {
        Self::with_operand(OpCode::LoadArg, Operand::Arg(index))
    }

    pub fn branch_false(target: Label) -> Self {
        Self::with_operand(OpCode::BranchFalse, Operand::Label(target))
    }

    pub fn branch_true(target: Label) -> Self {
        Self::with_operand(OpCode::BranchTrue, Operand::Label(target))
    }

    pub fn ret() -> Self {
        Self::new(OpCode::Return)
    }

    /// Attach a label to this instruction.
    pub fn labeled(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }

    /// Copy of this instruction with no labels, for reissuing it elsewhere
    /// without creating a second jump target.
    pub fn unlabeled(&self) -> Self {
        Self {
            opcode: self.opcode.clone(),
            operand: self.operand.clone(),
            labels: Vec::new(),
        }
    }

    /// Operand text; empty when the instruction has no operand.
    pub fn operand_text(&self) -> String {
        self.operand
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.labels {
            write!(f, "{}: ", label)?;
        }
        match &self.operand {
            Some(operand) => write!(f, "{} {}", self.opcode, operand),
            None => write!(f, "{}", self.opcode),
        }
    }
}

/// A method's instruction stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodBody {
    pub signature: MethodSignature,
    pub instructions: Vec<Instruction>,
}

impl MethodBody {
    pub fn new(signature: MethodSignature, instructions: Vec<Instruction>) -> Self {
        Self {
            signature,
            instructions,
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl fmt::Display for MethodBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.signature)?;
        for (index, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "  {:04}  {}", index, instruction)?;
        }
        Ok(())
    }
}
