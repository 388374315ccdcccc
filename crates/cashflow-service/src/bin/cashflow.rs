//! `cashflow` — settle a group ledger from the command line.
//!
//! Reads a JSON array of `{"debtor", "creditor", "amount"}` objects from the
//! file given as the first argument (or stdin when absent or `-`), records
//! each through the service, and prints the settlement report as JSON.
//!
//! ```text
//! cashflow ledger.json
//! echo '[{"debtor":"A","creditor":"B","amount":"100"}]' | cashflow
//! ```

use std::io::Read;
use std::process::ExitCode;

use cashflow_service::{settle_json, telemetry};
use cashflow_types::{Result, SettlementConfig, constants};

fn main() -> ExitCode {
    telemetry::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "cashflow failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let input = match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    tracing::info!(
        engine = constants::ENGINE_NAME,
        version = constants::VERSION,
        "Starting"
    );
    let report = settle_json(&input, SettlementConfig::from_env()?)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
