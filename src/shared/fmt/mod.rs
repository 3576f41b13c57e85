//! Display formatting for amounts shown in the UI.

pub mod money;
pub mod num;
