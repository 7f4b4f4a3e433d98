//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — config file loading + subject data-dir resolution.
//! - `discovery.rs` — date discovery from the directory convention.
//! - `outputs.rs` — output/report path layout + idempotency check.
//! - `convert.rs` — converter seam (trait + external command impl).
//! - `driver.rs` — sequential batch loop with failure containment.
//! - `reports.rs` — inspector-report relocation (per-item + sweep).
//! - `audit.rs` — best-effort JSONL audit trail.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod config;
pub mod convert;
pub mod discovery;
pub mod driver;
pub mod output;
pub mod outputs;
pub mod reports;
