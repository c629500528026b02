// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Top-level owner of the three pixel planes and the six block grids built
// over them, sized to a macroblock grid for one frame.

use crate::block::Block;
use crate::error::{PredictError, Result};
use crate::grid::Grid2D;
use crate::macroblock::Macroblock;
use crate::modes::{IntraBMode, IntraMbMode};
use crate::plane::Plane;
use tracing::debug;

pub struct Raster {
  pub(crate) y_plane: Plane,
  pub(crate) u_plane: Plane,
  pub(crate) v_plane: Plane,

  pub(crate) y_bigblocks: Grid2D<Block<16>>,
  pub(crate) u_bigblocks: Grid2D<Block<8>>,
  pub(crate) v_bigblocks: Grid2D<Block<8>>,

  pub(crate) y_subblocks: Grid2D<Block<4>>,
  pub(crate) u_subblocks: Grid2D<Block<4>>,
  pub(crate) v_subblocks: Grid2D<Block<4>>,

  mb_width: usize,
  mb_height: usize,
}

impl Raster {
  pub fn new(
    mb_width: usize,
    mb_height: usize,
    display_width: usize,
    display_height: usize,
  ) -> Result<Self> {
    if mb_width == 0 || mb_height == 0 {
      return Err(PredictError::ZeroDimension {
        width: mb_width,
        height: mb_height,
      });
    }

    let y_plane = Plane::new(16 * mb_width, 16 * mb_height, display_width, display_height)?;
    let uv_display_width = display_width.div_ceil(2);
    let uv_display_height = display_height.div_ceil(2);
    let u_plane = Plane::new(8 * mb_width, 8 * mb_height, uv_display_width, uv_display_height)?;
    let v_plane = Plane::new(8 * mb_width, 8 * mb_height, uv_display_width, uv_display_height)?;

    let y_bigblocks = Grid2D::new(mb_width, mb_height, |c| Block::<16>::new(&c))?;
    let u_bigblocks = Grid2D::new(mb_width, mb_height, |c| Block::<8>::new(&c))?;
    let v_bigblocks = Grid2D::new(mb_width, mb_height, |c| Block::<8>::new(&c))?;

    let y_subblocks = Grid2D::new(4 * mb_width, 4 * mb_height, |c| Block::<4>::new(&c))?;
    let u_subblocks = Grid2D::new(2 * mb_width, 2 * mb_height, |c| Block::<4>::new(&c))?;
    let v_subblocks = Grid2D::new(2 * mb_width, 2 * mb_height, |c| Block::<4>::new(&c))?;

    debug!(mb_width, mb_height, display_width, display_height, "Raster::new");

    let mut raster = Self {
      y_plane,
      u_plane,
      v_plane,
      y_bigblocks,
      u_bigblocks,
      v_bigblocks,
      y_subblocks,
      u_subblocks,
      v_subblocks,
      mb_width,
      mb_height,
    };
    raster.fixup_rightmost_luma_subblocks()?;
    Ok(raster)
  }

  pub fn mb_width(&self) -> usize {
    self.mb_width
  }

  pub fn mb_height(&self) -> usize {
    self.mb_height
  }

  pub fn y_plane(&self) -> &Plane {
    &self.y_plane
  }

  pub fn u_plane(&self) -> &Plane {
    &self.u_plane
  }

  pub fn v_plane(&self) -> &Plane {
    &self.v_plane
  }

  /// Obtains the facade for macroblock `(col, row)`.
  pub fn macroblock(&mut self, col: usize, row: usize) -> Result<Macroblock<'_>> {
    if col >= self.mb_width || row >= self.mb_height {
      return Err(PredictError::OutOfRange {
        col,
        row,
        width: self.mb_width,
        height: self.mb_height,
      });
    }
    Ok(Macroblock::new(self, col, row))
  }

  pub(crate) fn predict_luma_macroblock(
    &mut self,
    col: usize,
    row: usize,
    mode: IntraMbMode,
  ) -> Result<()> {
    let plane = self.y_plane.samples_mut();
    let block = self.y_bigblocks.at(col, row)?;
    block.intra_predict(plane, mode)
  }

  pub(crate) fn predict_chroma_macroblock(
    &mut self,
    col: usize,
    row: usize,
    mode_u: IntraMbMode,
    mode_v: IntraMbMode,
  ) -> Result<()> {
    {
      let plane = self.u_plane.samples_mut();
      let block = self.u_bigblocks.at(col, row)?;
      block.intra_predict(plane, mode_u)?;
    }
    let plane = self.v_plane.samples_mut();
    let block = self.v_bigblocks.at(col, row)?;
    block.intra_predict(plane, mode_v)
  }

  pub(crate) fn predict_luma_subblocks(
    &mut self,
    col: usize,
    row: usize,
    modes: &[IntraBMode; 16],
  ) -> Result<()> {
    let plane = self.y_plane.samples_mut();
    for sub_row in 0..4usize {
      for sub_col in 0..4usize {
        let block = self
          .y_subblocks
          .at(4 * col + sub_col, 4 * row + sub_row)?;
        block.intra_predict_b(plane, modes[sub_row * 4 + sub_col])?;
      }
    }
    Ok(())
  }

  /// Spec §4.6: the rightmost 4x4 luma sub-block in decode order within a
  /// macroblock (column 3, rows 1..3) would otherwise see an
  /// `above_right` neighbor belonging to the next macroblock over, which
  /// is only reconstructed at 16x16 granularity by the time this
  /// sub-block predicts - its own 4x4 sub-blocks don't exist yet. Instead
  /// every such sub-block borrows the `above_right_bottom_row` window
  /// already established for the top-right sub-block (column 3, row 0) of
  /// the same macroblock. Only that row source is borrowed - each
  /// sub-block keeps its own `has_own_above_right` flag, so one still
  /// falls back to the synthetic 127 row rather than a real reconstructed
  /// sample where its own above-right neighbor was never in range.
  fn fixup_rightmost_luma_subblocks(&mut self) -> Result<()> {
    for mb_row in 0..self.mb_height {
      for mb_col in 0..self.mb_width {
        let top_right = self.y_subblocks.at(4 * mb_col + 3, 4 * mb_row)?;
        let above_right_bottom_row = top_right.predictors().above_right_bottom_row_window();
        for sub_row in 1..4usize {
          let block = self.y_subblocks.at_mut(4 * mb_col + 3, 4 * mb_row + sub_row)?;
          block
            .predictors_mut()
            .set_above_right_bottom_row(above_right_bottom_row);
        }
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_zero_macroblock_dimensions() {
    assert!(matches!(
      Raster::new(0, 1, 16, 16),
      Err(PredictError::ZeroDimension { .. })
    ));
  }

  #[test]
  fn out_of_range_macroblock_is_an_error() {
    let mut raster = Raster::new(2, 2, 32, 32).unwrap();
    assert!(raster.macroblock(2, 0).is_err());
    assert!(raster.macroblock(0, 2).is_err());
    assert!(raster.macroblock(1, 1).is_ok());
  }

  #[test]
  fn fixup_propagates_top_right_above_right_down_the_rightmost_column() {
    let raster = Raster::new(2, 2, 32, 32).unwrap();
    let top_right = raster.y_subblocks.at(3, 0).unwrap();
    let expected = top_right.predictors().above_right_bottom_row_window();
    for sub_row in 1..4usize {
      let block = raster.y_subblocks.at(3, sub_row).unwrap();
      assert_eq!(
        block.predictors().above_right_bottom_row_window(),
        expected
      );
    }
  }

  /// On the top macroblock row, the top-right luma sub-block's own
  /// above-right neighbor is out of frame, so its `above_right_bottom_row`
  /// is `None` (the synthetic 127 row). The fix-up propagates that `None`
  /// down the rightmost column, but rows 1..3 typically still have a real
  /// above-right neighbor of their own (the macroblock to the right, same
  /// row) - so `has_own_above_right` must stay `true` for them, or they'd
  /// wrongly read a real reconstructed pixel instead of 127.
  #[test]
  fn fixup_does_not_clear_has_own_above_right_on_rows_below_the_top() {
    let raster = Raster::new(2, 1, 32, 16).unwrap();
    for sub_row in 1..4usize {
      let block = raster.y_subblocks.at(3, sub_row).unwrap();
      assert_eq!(block.predictors().above_right_bottom_row_window(), None);
      assert!(block.predictors().has_own_above_right());
    }
  }
}
