//! Command handlers, one module per command group.

pub mod check;
pub mod entries;
pub mod misc;
pub mod ratio;
