//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `census_core` linkage and schema bootstrap without the mobile UI.
//! - Keep output deterministic for quick local sanity checks.

use census_core::db::{open_db_in_memory, schema_version, CENSUS_TABLES};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("census_core ping={}", census_core::ping());
    println!("census_core version={}", census_core::core_version());

    match open_db_in_memory().and_then(|conn| schema_version(&conn)) {
        Ok(version) => {
            println!("census_core schema_version={version}");
            println!("census_core tables={}", CENSUS_TABLES.join(","));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("census_core bootstrap failed: {err}");
            ExitCode::FAILURE
        }
    }
}
