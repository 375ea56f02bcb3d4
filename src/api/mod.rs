mod cart_controller;
mod catalog_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod frame_builder;
mod json_contract;
mod selector_model;
mod snapshot_controller;
mod view_controller;

pub use engine::SelectorEngine;
pub use engine_config::{
    DEFAULT_AREA, DEFAULT_CATALOG_ENDPOINT, DEFAULT_POSTCODE, SelectorEngineConfig,
};
pub use engine_snapshot::{CartEntrySnapshot, CartSnapshot, EngineSnapshot, SkipRowSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use selector_model::SelectorModel;
