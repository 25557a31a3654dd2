//! # barviz
//!
//! Pure-Rust grouped bar charts with value labels and PNG export.
//!
//! The core is a pure grouped-bar layout engine: given N categories and M
//! named series of equal length, it computes per-bar centers so each group
//! of M bars sits symmetric on its category tick, with configurable bar
//! width and intra-group gap. Rendering draws through a small surface
//! trait, so the layout is testable without any pixels.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use barviz::prelude::*;
//!
//! let chart = GroupedBarChart::new()
//!     .categories(["Q1", "Q2", "Q3", "Q4"])
//!     .add_series(Series::new("Web Ads", &[220.0, 245.0, 270.0, 310.0]))
//!     .add_series(Series::new("Email", &[150.0, 165.0, 160.0, 175.0]))
//!     .bar_width(0.22)
//!     .gap(0.12)
//!     .build()?;
//!
//! let fb = chart.to_framebuffer()?;
//! PngEncoder::write_to_file(&fb, "chart.png")?;
//! # Ok::<(), barviz::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and series palettes.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Grouped bar layout engine (pure, no drawing).
pub mod layout;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

/// Embedded bitmap font for labels and ticks.
pub mod text;

// ============================================================================
// Visualization Modules
// ============================================================================

/// High-level chart types.
pub mod plots;

/// Showcase dataset synthesis.
pub mod dataset;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rendering surface abstraction and rasterization primitives.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for barviz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use barviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Palette, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::layout::{BarPosition, GroupedLayout};
    pub use crate::output::PngEncoder;
    pub use crate::plots::{GroupedBarChart, Series};
    pub use crate::render::Surface;
    pub use crate::scale::{LinearScale, Scale};
}
