//! Error types for the intra-prediction core.

use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, PredictError>;

/// Unrecoverable failures of the prediction core.
///
/// Every variant corresponds to one of the three error kinds in the core's
/// error handling design: out-of-range access, an invalid mode/size
/// combination, or degenerate construction parameters. All three abort the
/// current frame; none of them leave a block partially written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
  /// `at`/`maybe_at` addressed a coordinate outside a grid or sub-window.
  #[error("coordinate ({col}, {row}) out of range for {width}x{height} grid")]
  OutOfRange {
    col: usize,
    row: usize,
    width: usize,
    height: usize,
  },

  /// A sub-window extends beyond its parent grid or view.
  #[error("sub-window at ({col0}, {row0}) size {width}x{height} exceeds parent {parent_width}x{parent_height}")]
  WindowOutOfBounds {
    col0: usize,
    row0: usize,
    width: usize,
    height: usize,
    parent_width: usize,
    parent_height: usize,
  },

  /// `B_PRED` was passed to a 16x16 or 8x8 `intra_predict`, which only
  /// accepts `DC_PRED` | `V_PRED` | `H_PRED` | `TM_PRED`.
  #[error("B_PRED is not a valid mode for a {size}x{size} predictor; 4x4 sub-blocks must be predicted individually with an IntraBMode")]
  BPredAtMacroblockGranularity { size: usize },

  /// `Grid2D::new` or `Raster::new` was asked to build a grid with a zero
  /// dimension.
  #[error("grid dimensions must be nonzero, got {width}x{height}")]
  ZeroDimension { width: usize, height: usize },
}
