//! Shared helpers for the courseinfo crates: logging setup and the raw
//! request types handed over by the view layer.

pub mod types;
pub mod utils;
