#![allow(dead_code)]

use chrono::NaiveDateTime;
use skipcart_rs::api::{SelectorEngine, SelectorEngineConfig};
use skipcart_rs::core::{Skip, SkipId};
use skipcart_rs::render::NullRenderer;

pub fn timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").expect("valid fixture timestamp")
}

pub fn skip(id: u64, size: u32, price_before_vat: i64, vat: u32) -> Skip {
    Skip {
        id: SkipId(id),
        size,
        hire_period_days: 14,
        transport_cost: None,
        per_tonne_cost: None,
        price_before_vat,
        vat,
        postcode: "NR32".to_owned(),
        area: "Lowestoft".to_owned(),
        forbidden: false,
        created_at: timestamp("2025-04-03T13:51:46.897146"),
        updated_at: timestamp("2025-04-07T13:16:52.813"),
        allowed_on_road: true,
        allows_heavy_waste: true,
    }
}

pub fn skip_with_surcharges(
    id: u64,
    size: u32,
    price_before_vat: i64,
    vat: u32,
    transport_cost: Option<i64>,
    per_tonne_cost: Option<i64>,
) -> Skip {
    let mut skip = skip(id, size, price_before_vat, vat);
    skip.transport_cost = transport_cost;
    skip.per_tonne_cost = per_tonne_cost;
    skip
}

/// Five offerings shaped like the live NR32 catalog: three plain sizes and
/// two large ones carrying both surcharges and road/heavy-waste warnings.
pub fn catalog() -> Vec<Skip> {
    let mut twenty_yard = skip_with_surcharges(17942, 20, 992, 20, Some(236), Some(236));
    twenty_yard.allowed_on_road = false;

    let mut forty_yard = skip_with_surcharges(17944, 40, 992, 20, Some(236), Some(236));
    forty_yard.allowed_on_road = false;
    forty_yard.allows_heavy_waste = false;

    vec![
        skip(17933, 4, 278, 20),
        skip(17934, 6, 305, 20),
        skip(17936, 8, 375, 20),
        twenty_yard,
        forty_yard,
    ]
}

pub fn ready_engine() -> SelectorEngine<NullRenderer> {
    let mut engine = SelectorEngine::new(NullRenderer::default(), SelectorEngineConfig::new())
        .expect("engine init");
    let ticket = engine.begin_catalog_load();
    engine.complete_catalog_load(ticket, Ok(catalog()));
    engine
}
