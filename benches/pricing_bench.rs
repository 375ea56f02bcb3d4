use std::hint::black_box;

use chrono::NaiveDateTime;
use criterion::{Criterion, criterion_group, criterion_main};
use skipcart_rs::api::{SelectorEngine, SelectorEngineConfig};
use skipcart_rs::core::{Cart, PriceBreakdown, Skip, SkipId};
use skipcart_rs::render::NullRenderer;

fn fixture_skip(id: u64, size: u32, price_before_vat: i64, surcharged: bool) -> Skip {
    let stamp = NaiveDateTime::parse_from_str("2025-04-03T13:51:46.897146", "%Y-%m-%dT%H:%M:%S%.f")
        .expect("valid fixture timestamp");

    Skip {
        id: SkipId(id),
        size,
        hire_period_days: 14,
        transport_cost: surcharged.then_some(236),
        per_tonne_cost: surcharged.then_some(236),
        price_before_vat,
        vat: 20,
        postcode: "NR32".to_owned(),
        area: "Lowestoft".to_owned(),
        forbidden: false,
        created_at: stamp,
        updated_at: stamp,
        allowed_on_road: true,
        allows_heavy_waste: true,
    }
}

fn synthetic_catalog(count: u64) -> Vec<Skip> {
    (0..count)
        .map(|i| fixture_skip(i + 1, 4 + (i % 36) as u32, 200 + (i % 900) as i64, i % 3 == 0))
        .collect()
}

fn bench_price_breakdown_10k(c: &mut Criterion) {
    let skips = synthetic_catalog(10_000);

    c.bench_function("price_breakdown_10k", |b| {
        b.iter(|| {
            let mut total = 0_i64;
            for skip in &skips {
                total += PriceBreakdown::for_skip(black_box(skip)).final_price;
            }
            black_box(total)
        })
    });
}

fn bench_cart_churn_32(c: &mut Criterion) {
    let skips = synthetic_catalog(32);

    c.bench_function("cart_churn_32", |b| {
        b.iter(|| {
            let mut cart = Cart::new();
            for skip in &skips {
                cart.add(skip);
                cart.add(skip);
            }
            for skip in &skips {
                cart.remove(skip.id);
            }
            black_box(cart.total_price())
        })
    });
}

fn bench_engine_snapshot_json_32(c: &mut Criterion) {
    let mut engine = SelectorEngine::new(NullRenderer::default(), SelectorEngineConfig::new())
        .expect("engine init");
    let ticket = engine.begin_catalog_load();
    engine.complete_catalog_load(ticket, Ok(synthetic_catalog(32)));
    for id in 1..9 {
        engine.add_to_cart(SkipId(id)).expect("known id");
    }

    c.bench_function("engine_snapshot_json_32", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_price_breakdown_10k,
    bench_cart_churn_32,
    bench_engine_snapshot_json_32
);
criterion_main!(benches);
