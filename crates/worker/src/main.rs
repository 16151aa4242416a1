//! Achievement evaluation worker entry point (PRD-26).
//!
//! Loads and validates the deployment's achievement catalog at startup;
//! a rejected catalog aborts the process. Evaluation passes are driven
//! by the backend scheduler. Configuration:
//!
//! - `TIPJAR_CATALOG_PATH` — optional path to a catalog JSON file;
//!   falls back to the built-in seed catalog.
//! - `TIPJAR_ACTIVE_PHASE` — active release phase (`mvp`, `phase_1`,
//!   `phase_2`); defaults to `mvp`.

use tipjar_core::achievement::ReleasePhase;
use tipjar_core::catalog::Catalog;
use tipjar_core::seed;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tipjar_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let active_phase = std::env::var("TIPJAR_ACTIVE_PHASE")
        .map(|s| ReleasePhase::from_str(&s))
        .unwrap_or(ReleasePhase::Mvp);

    let catalog = match load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "Catalog rejected, refusing to start");
            std::process::exit(1);
        }
    };

    tracing::info!(
        definitions = catalog.len(),
        active = catalog.active(active_phase).count(),
        phase = active_phase.as_str(),
        "Worker starting with validated achievement catalog"
    );
}

/// Load the catalog from `TIPJAR_CATALOG_PATH`, or the built-in seed.
fn load_catalog() -> Result<Catalog, Box<dyn std::error::Error>> {
    match std::env::var("TIPJAR_CATALOG_PATH") {
        Ok(path) => {
            tracing::info!(path = %path, "Loading achievement catalog from file");
            let json = std::fs::read_to_string(&path)?;
            Ok(Catalog::from_json_str(&json)?)
        }
        Err(_) => {
            tracing::info!("No catalog path configured, using built-in seed catalog");
            Ok(Catalog::load(seed::default_catalog())?)
        }
    }
}
