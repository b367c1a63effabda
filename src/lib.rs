//! Interactive showcases for the portfolio site: animated dot-grid patterns,
//! an onboarding greeting, and a scroll-driven gradient palette.
//!
//! The animation math lives in plain modules that build and test on any
//! target. DOM and canvas glue is in [`wasm`], compiled for wasm32 only.

pub mod aurora;
pub mod config;
pub mod easing;
pub mod error;
pub mod gradients;
pub mod grid;
pub mod logging;
pub mod onboard;
pub mod palette;
pub mod patterns;

pub use config::{PlayMode, Settings, View};
pub use error::CraftError;
pub use grid::{DotGrid, GridSize};
pub use patterns::{Pattern, PatternResult};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
