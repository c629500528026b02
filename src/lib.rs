//! VP8 intra-frame spatial prediction core.
//!
//! This crate implements the part of a VP8 decoder that synthesizes a
//! predicted pixel block for every macroblock and every 4x4/8x8/16x16
//! sub-block of an intra-coded frame, from already-reconstructed neighbors
//! on the top, top-left, top-right, and left. It does not decode the VP8
//! bitstream, run the loop filter, or perform the inverse transform —
//! those are external collaborators; this crate only owns the raster
//! ownership model and the ten bit-exact intra prediction formulas.
//!
//! # Example
//!
//! ```
//! use vp8_intra::{IntraMbMode, Raster};
//!
//! let mut raster = Raster::new(4, 3, 64, 48).unwrap();
//! let mut mb = raster.macroblock(0, 0).unwrap();
//! mb.predict_luma(IntraMbMode::DcPred).unwrap();
//! mb.predict_chroma(IntraMbMode::DcPred, IntraMbMode::DcPred).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`grid`]: the neighbor-aware `Grid2D<T>` container.
//! - [`window`]: non-owning rectangular views over a pixel plane.
//! - [`plane`]: a padded `Grid2D<u8>` plus its logical display extent.
//! - [`predictors`]: per-block neighbor snapshot and the `avg2`/`avg3`
//!   primitives.
//! - [`block`]: `Block<S>` and the ten intra prediction mode
//!   implementations.
//! - [`macroblock`]: the per-macroblock facade the decoder drives.
//! - [`raster`]: the frame-level owner of the planes and block grids.
//! - [`modes`]: the `IntraMbMode`/`IntraBMode` enums.
//! - [`error`]: `PredictError` and this crate's `Result` alias.

pub mod block;
pub mod error;
pub mod grid;
pub mod macroblock;
pub mod modes;
pub mod plane;
pub mod predictors;
pub mod raster;
pub mod window;

pub use block::Block;
pub use error::{PredictError, Result};
pub use grid::{Context, Grid2D};
pub use macroblock::Macroblock;
pub use modes::{IntraBMode, IntraMbMode};
pub use plane::Plane;
pub use predictors::Predictors;
pub use raster::Raster;
pub use window::SubWindow;
