//! Geometry resolution and cabinet grid optimization for LED walls.
//!
//! A target screen is described by any two of width, height, diagonal and aspect ratio. [`resolve`]
//! completes the geometry in millimeters, [`optimize`] then finds, per cabinet type, the grids just
//! below and just above the target height whose aspect ratio is closest to the target.

pub mod cabinet;
pub mod format;
pub mod geometry;
pub mod optimizer;
pub mod ratio;

pub use cabinet::{CabinetError, CabinetType, default_catalog};
pub use geometry::{InputField, InputValues, ResolutionError, ResolvedGeometry, resolve};
pub use ledwall_units::Unit;
pub use optimizer::{CalculationResult, CandidateKind, ScreenConfig, optimize};
