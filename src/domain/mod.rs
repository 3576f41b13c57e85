//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains what it needs of:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching the app's fixture records
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — App-owned state containers with update methods
//! - `fixture.rs` — The built-in simulated dataset

pub mod catalog;
pub mod limits;
pub mod offers;
pub mod portfolio;
pub mod pricing;
pub mod trade;
