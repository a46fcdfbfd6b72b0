//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `visibility.rs` — tiered message collection + nested/outer views.
//! - `areas.rs` — rectangle/triangle area prompts and results.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate drill logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod areas;
pub mod visibility;

pub use areas::handle_areas;
pub use visibility::handle_visibility;
