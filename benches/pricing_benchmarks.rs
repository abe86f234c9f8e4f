//! Pricing benchmarks
//!
//! Measures the calculator, stored-pricing resolution and the shipment store
//! under the shapes the HTTP handlers produce.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use preclear::core::types::{Package, PickupType, Product, ServiceLevel, Shipment, StoredPricing};
use preclear::services::pricing::{
    FeeSchedules, PricingInputs, PricingService, calculate_clearance, compute_pricing,
    resolve_pricing,
};
use preclear::services::shipments::{ShipmentAction, ShipmentStore};
use std::hint::black_box;

fn shipment(id: usize, products: usize) -> Shipment {
    Shipment {
        customs_value: Some(1200.0),
        service_level: Some(ServiceLevel::Express),
        pickup_type: Some(PickupType::ScheduledPickup),
        origin_country: Some("India".to_string()),
        dest_country: Some("US".to_string()),
        packages: vec![Package {
            products: (0..products)
                .map(|i| Product {
                    name: Some(format!("Item {}", i)),
                    total_value: Some(100.0),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }],
        ..Shipment::new(format!("SHP-{:05}", id))
    }
}

/// Benchmark the pure calculators
fn bench_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");

    let inputs = PricingInputs {
        customs_value: 12_000.0,
        service_level: ServiceLevel::Express,
        pickup_type: PickupType::ScheduledPickup,
        origin_country: "IN".to_string(),
        dest_country: "IN".to_string(),
        line_item_count: 9,
        is_special_commodity: true,
    };

    group.bench_function("compute_pricing", |b| {
        b.iter(|| black_box(compute_pricing(black_box(&inputs))))
    });

    for dest in ["US", "DE", "ZZ"] {
        group.bench_with_input(BenchmarkId::new("clearance", dest), &dest, |b, dest| {
            b.iter(|| black_box(calculate_clearance(dest, 1000.0, 7, false)))
        });
    }

    group.finish();
}

/// Benchmark stored pricing resolution across line item counts
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for products in [1usize, 10, 100] {
        let mut stored = shipment(1, products);
        stored.pricing = Some(StoredPricing {
            customs_clearance: Some(150.0),
            ..Default::default()
        });

        group.throughput(Throughput::Elements(products as u64));
        group.bench_with_input(
            BenchmarkId::new("resolve_pricing", products),
            &stored,
            |b, shipment| b.iter(|| black_box(resolve_pricing(black_box(shipment)))),
        );
    }

    let service = PricingService::new(FeeSchedules::default());
    let quoted = shipment(2, 5);
    group.bench_function("quote", |b| b.iter(|| black_box(service.quote(&quoted))));

    group.finish();
}

/// Benchmark store writes and reads
fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("save", |b| {
        let store = ShipmentStore::new();
        let mut next = 0usize;
        b.iter(|| {
            next += 1;
            let action = ShipmentAction::Save {
                shipment: Box::new(shipment(next % 1000, 3)),
            };
            black_box(store.dispatch(action).ok())
        })
    });

    let store = ShipmentStore::with_shipments((0..1000).map(|i| shipment(i, 3)));
    group.bench_function("awaiting_broker", |b| {
        b.iter(|| black_box(store.awaiting_broker()))
    });

    group.finish();
}

criterion_group!(benches, bench_calculator, bench_resolve, bench_store);
criterion_main!(benches);
