//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `batch.rs` — the `run` and `single` conversion entry points.
//! - `reports.rs` — the standalone `reports sweep`.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod batch;
pub mod reports;

pub use batch::handle_batch_commands;
pub use reports::handle_report_commands;
