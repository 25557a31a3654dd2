//! High-level chart types.
//!
//! Provides ready-to-use visualization types with builder APIs.

mod grouped_bar;

pub use grouped_bar::{GroupedBarChart, Series};
