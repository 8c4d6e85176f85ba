//! # Interceptor Benchmarks
//!
//! The notification hook runs for every message the host emits, so the
//! untracked path must stay a plain substring scan.
//!
//! | Path | Work |
//! |------|------|
//! | untracked | fingerprint scan only |
//! | tracked, open ground | scan + two spatial lookups |
//! | tracked, hidden shelf | scan + lookup + policy read |

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shared_types::{EntityId, LookTarget, LookTargets, MessageType, Notification};
use zd_01_policy_store::PolicyStore;
use zd_03_fingerprint_registry::RegistryBuilder;
use zd_04_notification_interceptor::{NoOpMetrics, NotificationInterceptor};
use zd_runtime::default_tracked_templates;
use zd_tests::fixtures::{colony, deteriorated_at, english_templates, MAP, OPEN_GROUND, SHELF_CELL, SHELF_ID};

fn bench_intercept(c: &mut Criterion) {
    let (registry, _) = RegistryBuilder::new()
        .categories(default_tracked_templates())
        .build(&english_templates());
    let interceptor = NotificationInterceptor::with_recorder(Arc::new(registry), NoOpMetrics)
        .expect("stock templates produce fingerprints");
    let world = colony();
    let mut store = PolicyStore::new();
    store.toggle(EntityId(SHELF_ID));

    let untracked = Notification::new(
        "Pirate trader has arrived to trade.",
        LookTargets::single(LookTarget::Cell {
            cell: SHELF_CELL,
            map: MAP,
        }),
        MessageType::PositiveEvent,
    );
    let open_ground = deteriorated_at("Wooden chair", OPEN_GROUND);
    let hidden_shelf = deteriorated_at("Wooden chair", SHELF_CELL);

    let mut group = c.benchmark_group("zd-04-notification-interceptor");
    group.bench_function("untracked", |b| {
        b.iter(|| black_box(interceptor.intercept(&untracked, &world, &mut store)))
    });
    group.bench_function("tracked_open_ground", |b| {
        b.iter(|| black_box(interceptor.intercept(&open_ground, &world, &mut store)))
    });
    group.bench_function("tracked_hidden_shelf", |b| {
        b.iter(|| black_box(interceptor.intercept(&hidden_shelf, &world, &mut store)))
    });
    group.finish();
}

criterion_group!(benches, bench_intercept);
criterion_main!(benches);
