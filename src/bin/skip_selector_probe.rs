//! Live-catalog diagnostic tool.
//!
//! Fetches the by-location catalog, drives one engine through the load,
//! and prints either the rendered text frame or the versioned snapshot
//! contract JSON.
//!
//! Usage: `skip_selector_probe [--json] [POSTCODE AREA]`

use std::io;
use std::process::ExitCode;

use skipcart_rs::SelectorResult;
use skipcart_rs::api::{SelectorEngine, SelectorEngineConfig};
use skipcart_rs::catalog::CatalogClient;
use skipcart_rs::render::TextRenderer;

fn main() -> ExitCode {
    let _ = skipcart_rs::telemetry::init_default_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("skip_selector_probe: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> SelectorResult<()> {
    let mut emit_json = false;
    let mut location: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            emit_json = true;
        } else {
            location.push(arg);
        }
    }

    let mut config = SelectorEngineConfig::new();
    if location.len() == 2 {
        config = config.with_location(location[0].clone(), location[1].clone());
    }

    let renderer = TextRenderer::new(io::stdout());
    let mut engine = SelectorEngine::new(renderer, config)?;

    let postcode = engine.config().postcode.clone();
    let area = engine.config().area.clone();
    let client = CatalogClient::new(engine.config())?;

    let ticket = engine.begin_catalog_load();
    engine.complete_catalog_load(ticket, client.fetch(&postcode, &area));

    if emit_json {
        println!("{}", engine.snapshot_json_contract_v1_pretty()?);
    } else {
        engine.render()?;
    }

    Ok(())
}
