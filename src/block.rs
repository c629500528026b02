// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// A single S x S prediction unit: its window into a pixel plane, plus the
// neighbor snapshot (`Predictors`) it was built with. `S` is one of 4, 8,
// 16 via const generics, matching the original's `template<unsigned int
// size>` specializations one-for-one.

use crate::error::Result;
use crate::grid::{Context, Grid2D};
use crate::modes::{IntraBMode, IntraMbMode};
use crate::predictors::{avg2, avg3, clamp_u8, Predictors};
use crate::window::SubWindow;
use crate::PredictError;
use tracing::trace;

const fn log2_of_size(size: usize) -> u32 {
  match size {
    4 => 2,
    8 => 3,
    16 => 4,
    _ => 0,
  }
}

pub struct Block<const S: usize> {
  col: usize,
  row: usize,
  window: SubWindow,
  predictors: Predictors<S>,
}

impl<const S: usize> Block<S> {
  pub fn new<T>(context: &Context<'_, T>) -> Self {
    let window = SubWindow::at_position(S * context.col, S * context.row, S, S);
    let predictors = Predictors::new(context);
    Self {
      col: context.col,
      row: context.row,
      window,
      predictors,
    }
  }

  pub fn col(&self) -> usize {
    self.col
  }

  pub fn row(&self) -> usize {
    self.row
  }

  pub fn window(&self) -> SubWindow {
    self.window
  }

  pub fn predictors(&self) -> &Predictors<S> {
    &self.predictors
  }

  pub fn predictors_mut(&mut self) -> &mut Predictors<S> {
    &mut self.predictors
  }

  fn set_many(
    &self,
    plane: &mut Grid2D<u8>,
    positions: &[(usize, usize)],
    value: u8,
  ) -> Result<()> {
    for &(c, r) in positions {
      self.window.set(plane, c, r, value)?;
    }
    Ok(())
  }

  /// `DC_PRED` assuming both neighbors exist (the only case `B_PRED`
  /// ever needs, since a 4x4 sub-block only runs `B_DC_PRED` when its
  /// macroblock has already committed to full reconstruction of its
  /// spatial neighbors).
  pub fn dc_predict_simple(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let log2s = log2_of_size(S);
    let sum = self.predictors.above_row_sum(plane) + self.predictors.left_column_sum(plane);
    let value = clamp_u8(((sum + (1 << log2s)) >> (log2s + 1)) as i32);
    self.window.fill(plane, value)
  }

  /// `DC_PRED` with the edge-of-frame fallbacks: average whichever of
  /// above/left exist, or 128 if neither does.
  pub fn dc_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    if self.predictors.has_above() && self.predictors.has_left() {
      return self.dc_predict_simple(plane);
    }

    let log2s = log2_of_size(S);
    let value = if self.predictors.has_above() {
      let sum = self.predictors.above_row_sum(plane);
      clamp_u8(((sum + (1 << (log2s - 1))) >> log2s) as i32)
    } else if self.predictors.has_left() {
      let sum = self.predictors.left_column_sum(plane);
      clamp_u8(((sum + (1 << (log2s - 1))) >> log2s) as i32)
    } else {
      128
    };
    self.window.fill(plane, value)
  }

  pub fn vertical_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    for col in 0..S {
      let value = self.predictors.above(plane, col as isize);
      for row in 0..S {
        self.window.set(plane, col, row, value)?;
      }
    }
    Ok(())
  }

  pub fn horizontal_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    for row in 0..S {
      let value = self.predictors.left(plane, row as isize);
      for col in 0..S {
        self.window.set(plane, col, row, value)?;
      }
    }
    Ok(())
  }

  pub fn true_motion_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let above_left = self.predictors.above(plane, -1);
    for row in 0..S {
      let left = self.predictors.left(plane, row as isize);
      for col in 0..S {
        let above = self.predictors.above(plane, col as isize);
        let value = clamp_u8(left as i32 + above as i32 - above_left as i32);
        self.window.set(plane, col, row, value)?;
      }
    }
    Ok(())
  }

  /// Dispatches a macroblock-granularity mode (8x8 chroma or 16x16 luma).
  /// `B_PRED` is a programmer error at this granularity: the caller must
  /// instead predict the sixteen 4x4 luma sub-blocks individually with
  /// `Block::<4>::intra_predict_b`.
  pub fn intra_predict(
    &self,
    plane: &mut Grid2D<u8>,
    mode: IntraMbMode,
  ) -> Result<()> {
    trace!(size = S, col = self.col, row = self.row, ?mode, "intra_predict");
    match mode {
      IntraMbMode::DcPred => self.dc_predict(plane),
      IntraMbMode::VPred => self.vertical_predict(plane),
      IntraMbMode::HPred => self.horizontal_predict(plane),
      IntraMbMode::TmPred => self.true_motion_predict(plane),
      IntraMbMode::BPred => Err(PredictError::BPredAtMacroblockGranularity { size: S }),
    }
  }
}

impl Block<4> {
  pub fn vertical_smoothed_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let p = &self.predictors;
    for col in 0..4isize {
      let value = avg3(
        p.above(plane, col - 1),
        p.above(plane, col),
        p.above(plane, col + 1),
      );
      for row in 0..4usize {
        self.window.set(plane, col as usize, row, value)?;
      }
    }
    Ok(())
  }

  pub fn horizontal_smoothed_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let p = &self.predictors;
    // Last row is special: left(4) is not defined, so it reuses left(3).
    let values = [
      avg3(p.left(plane, -1), p.left(plane, 0), p.left(plane, 1)),
      avg3(p.left(plane, 0), p.left(plane, 1), p.left(plane, 2)),
      avg3(p.left(plane, 1), p.left(plane, 2), p.left(plane, 3)),
      avg3(p.left(plane, 2), p.left(plane, 3), p.left(plane, 3)),
    ];
    for (row, &value) in values.iter().enumerate() {
      for col in 0..4usize {
        self.window.set(plane, col, row, value)?;
      }
    }
    Ok(())
  }

  pub fn left_down_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let p = &self.predictors;
    let a = |i: isize| p.above(plane, i);
    let v0 = avg3(a(0), a(1), a(2));
    let v1 = avg3(a(1), a(2), a(3));
    let v2 = avg3(a(2), a(3), a(4));
    let v3 = avg3(a(3), a(4), a(5));
    let v4 = avg3(a(4), a(5), a(6));
    let v5 = avg3(a(5), a(6), a(7));
    // above(8) is undefined; the last anti-diagonal reuses above(7).
    let v6 = avg3(a(6), a(7), a(7));

    self.set_many(plane, &[(0, 0)], v0)?;
    self.set_many(plane, &[(1, 0), (0, 1)], v1)?;
    self.set_many(plane, &[(2, 0), (1, 1), (0, 2)], v2)?;
    self.set_many(plane, &[(3, 0), (2, 1), (1, 2), (0, 3)], v3)?;
    self.set_many(plane, &[(3, 1), (2, 2), (1, 3)], v4)?;
    self.set_many(plane, &[(3, 2), (2, 3)], v5)?;
    self.set_many(plane, &[(3, 3)], v6)
  }

  pub fn right_down_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let p = &self.predictors;
    let e = |i: isize| p.east(plane, i);
    let v0 = avg3(e(0), e(1), e(2));
    let v1 = avg3(e(1), e(2), e(3));
    let v2 = avg3(e(2), e(3), e(4));
    let v3 = avg3(e(3), e(4), e(5));
    let v4 = avg3(e(4), e(5), e(6));
    let v5 = avg3(e(5), e(6), e(7));
    let v6 = avg3(e(6), e(7), e(8));

    self.set_many(plane, &[(0, 3)], v0)?;
    self.set_many(plane, &[(1, 3), (0, 2)], v1)?;
    self.set_many(plane, &[(2, 3), (1, 2), (0, 1)], v2)?;
    self.set_many(plane, &[(3, 3), (2, 2), (1, 1), (0, 0)], v3)?;
    self.set_many(plane, &[(3, 2), (2, 1), (1, 0)], v4)?;
    self.set_many(plane, &[(3, 1), (2, 0)], v5)?;
    self.set_many(plane, &[(3, 0)], v6)
  }

  pub fn vertical_right_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let p = &self.predictors;
    let e = |i: isize| p.east(plane, i);
    let row3_col0 = avg3(e(1), e(2), e(3));
    let row2_col0 = avg3(e(2), e(3), e(4));
    let diag_a3 = avg3(e(3), e(4), e(5));
    let diag_a2 = avg2(e(4), e(5));
    let diag_b3 = avg3(e(4), e(5), e(6));
    let diag_b2 = avg2(e(5), e(6));
    let diag_c3 = avg3(e(5), e(6), e(7));
    let diag_c2 = avg2(e(6), e(7));
    let row1_col3 = avg3(e(6), e(7), e(8));
    let row0_col3 = avg2(e(7), e(8));

    self.set_many(plane, &[(0, 3)], row3_col0)?;
    self.set_many(plane, &[(0, 2)], row2_col0)?;
    self.set_many(plane, &[(1, 3), (0, 1)], diag_a3)?;
    self.set_many(plane, &[(1, 2), (0, 0)], diag_a2)?;
    self.set_many(plane, &[(2, 3), (1, 1)], diag_b3)?;
    self.set_many(plane, &[(2, 2), (1, 0)], diag_b2)?;
    self.set_many(plane, &[(3, 3), (2, 1)], diag_c3)?;
    self.set_many(plane, &[(3, 2), (2, 0)], diag_c2)?;
    self.set_many(plane, &[(3, 1)], row1_col3)?;
    self.set_many(plane, &[(3, 0)], row0_col3)
  }

  pub fn vertical_left_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let p = &self.predictors;
    let a = |i: isize| p.above(plane, i);

    let v00 = avg2(a(0), a(1));
    let v01 = avg3(a(0), a(1), a(2));
    let v02_10 = avg2(a(1), a(2));
    let v11_03 = avg3(a(1), a(2), a(3));
    let v12_20 = avg2(a(2), a(3));
    let v13_21 = avg3(a(2), a(3), a(4));
    let v22_30 = avg2(a(3), a(4));
    let v23_31 = avg3(a(3), a(4), a(5));
    let v32 = avg3(a(4), a(5), a(6));
    let v33 = avg3(a(5), a(6), a(7));

    self.set_many(plane, &[(0, 0)], v00)?;
    self.set_many(plane, &[(0, 1)], v01)?;
    self.set_many(plane, &[(0, 2), (1, 0)], v02_10)?;
    self.set_many(plane, &[(1, 1), (0, 3)], v11_03)?;
    self.set_many(plane, &[(1, 2), (2, 0)], v12_20)?;
    self.set_many(plane, &[(1, 3), (2, 1)], v13_21)?;
    self.set_many(plane, &[(2, 2), (3, 0)], v22_30)?;
    self.set_many(plane, &[(2, 3), (3, 1)], v23_31)?;
    self.set_many(plane, &[(3, 2)], v32)?;
    self.set_many(plane, &[(3, 3)], v33)
  }

  pub fn horizontal_down_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let p = &self.predictors;
    let e = |i: isize| p.east(plane, i);

    let v03 = avg2(e(0), e(1));
    let v13 = avg3(e(0), e(1), e(2));
    let v02_23 = avg2(e(1), e(2));
    let v12_33 = avg3(e(1), e(2), e(3));
    let v22_01 = avg2(e(2), e(3));
    let v32_11 = avg3(e(2), e(3), e(4));
    let v21_00 = avg2(e(3), e(4));
    let v31_10 = avg3(e(3), e(4), e(5));
    let v20 = avg3(e(4), e(5), e(6));
    let v30 = avg3(e(5), e(6), e(7));

    self.set_many(plane, &[(0, 3)], v03)?;
    self.set_many(plane, &[(1, 3)], v13)?;
    self.set_many(plane, &[(0, 2), (2, 3)], v02_23)?;
    self.set_many(plane, &[(1, 2), (3, 3)], v12_33)?;
    self.set_many(plane, &[(2, 2), (0, 1)], v22_01)?;
    self.set_many(plane, &[(3, 2), (1, 1)], v32_11)?;
    self.set_many(plane, &[(2, 1), (0, 0)], v21_00)?;
    self.set_many(plane, &[(3, 1), (1, 0)], v31_10)?;
    self.set_many(plane, &[(2, 0)], v20)?;
    self.set_many(plane, &[(3, 0)], v30)
  }

  pub fn horizontal_up_predict(&self, plane: &mut Grid2D<u8>) -> Result<()> {
    let p = &self.predictors;
    let l = |i: isize| p.left(plane, i);

    let v00 = avg2(l(0), l(1));
    let v10 = avg3(l(0), l(1), l(2));
    let v20_01 = avg2(l(1), l(2));
    let v30_11 = avg3(l(1), l(2), l(3));
    let v21_02 = avg2(l(2), l(3));
    // left(4) is not defined; row 2 reuses left(3) twice, matching the
    // spec's "last line is special" note for the smoothed modes.
    let v31_12 = avg3(l(2), l(3), l(3));
    let last = l(3);

    self.set_many(plane, &[(0, 0)], v00)?;
    self.set_many(plane, &[(1, 0)], v10)?;
    self.set_many(plane, &[(2, 0), (0, 1)], v20_01)?;
    self.set_many(plane, &[(3, 0), (1, 1)], v30_11)?;
    self.set_many(plane, &[(2, 1), (0, 2)], v21_02)?;
    self.set_many(plane, &[(3, 1), (1, 2)], v31_12)?;
    self.set_many(
      plane,
      &[(2, 2), (3, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
      last,
    )
  }

  pub fn intra_predict_b(
    &self,
    plane: &mut Grid2D<u8>,
    mode: IntraBMode,
  ) -> Result<()> {
    trace!(col = self.col, row = self.row, ?mode, "intra_predict_b");
    match mode {
      IntraBMode::BDcPred => self.dc_predict_simple(plane),
      IntraBMode::BTmPred => self.true_motion_predict(plane),
      IntraBMode::BVePred => self.vertical_smoothed_predict(plane),
      IntraBMode::BHePred => self.horizontal_smoothed_predict(plane),
      IntraBMode::BLdPred => self.left_down_predict(plane),
      IntraBMode::BRdPred => self.right_down_predict(plane),
      IntraBMode::BVrPred => self.vertical_right_predict(plane),
      IntraBMode::BVlPred => self.vertical_left_predict(plane),
      IntraBMode::BHdPred => self.horizontal_down_predict(plane),
      IntraBMode::BHuPred => self.horizontal_up_predict(plane),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  // Builds a `Predictors<S>` with exactly the given neighbor presence,
  // independent of any real `Grid2D<Block<S>>` - only the four booleans
  // matter to `Predictors::new`, so an inert `()` stands in for `T`.
  fn predictors_at<const S: usize>(
    col: usize,
    row: usize,
    above: bool,
    left: bool,
    above_left: bool,
    above_right: bool,
  ) -> Predictors<S> {
    let unit = ();
    let context = Context {
      col,
      row,
      left: left.then_some(&unit),
      above_left: above_left.then_some(&unit),
      above: above.then_some(&unit),
      above_right: above_right.then_some(&unit),
    };
    Predictors::new(&context)
  }

  fn block_at<const S: usize>(col: usize, row: usize, predictors: Predictors<S>) -> Block<S> {
    Block {
      col,
      row,
      window: SubWindow::at_position(S * col, S * row, S, S),
      predictors,
    }
  }

  /// S1: 16x16 DC_PRED at the top-left of the frame, no neighbors at all.
  #[test]
  fn dc_pred_with_no_neighbors_fills_with_128() {
    let predictors = predictors_at::<16>(0, 0, false, false, false, false);
    let block = block_at(0, 0, predictors);
    let mut plane = Grid2D::new(16, 16, |_| 0u8).unwrap();
    block.dc_predict(&mut plane).unwrap();
    for row in 0..16 {
      for col in 0..16 {
        assert_eq!(plane.at(col, row).unwrap(), &128);
      }
    }
  }

  /// S2: 16x16 V_PRED at the top of the frame, no above neighbor - every
  /// output sample falls back to the synthetic above-row value 127.
  #[test]
  fn v_pred_with_no_above_neighbor_fills_with_127() {
    let predictors = predictors_at::<16>(0, 0, false, false, false, false);
    let block = block_at(0, 0, predictors);
    let mut plane = Grid2D::new(16, 16, |_| 0u8).unwrap();
    block.vertical_predict(&mut plane).unwrap();
    for row in 0..16 {
      for col in 0..16 {
        assert_eq!(plane.at(col, row).unwrap(), &127);
      }
    }
  }

  /// S3: 16x16 H_PRED reading a crafted left-neighbor column
  /// `[0, 1, .., 15]` - every output row is constant at its row index.
  #[test]
  fn h_pred_reproduces_a_crafted_left_column() {
    let predictors = predictors_at::<16>(1, 0, false, true, false, false);
    let block = block_at(1, 0, predictors);
    let mut plane = Grid2D::new(32, 16, |_| 0u8).unwrap();
    for row in 0..16u8 {
      // The left neighbor's own window is (0,0,16,16); its rightmost
      // column is what `left_column_sample` reads.
      *plane.at_mut(15, row as usize).unwrap() = row;
    }
    block.horizontal_predict(&mut plane).unwrap();
    for row in 0..16usize {
      for col in 16..32usize {
        assert_eq!(*plane.at(col, row).unwrap(), row as u8);
      }
    }
  }

  /// S4: B_TM_PRED corner values against the closed-form clamp formula.
  #[test]
  fn b_tm_pred_matches_the_closed_form_clamp() {
    let predictors = predictors_at::<4>(1, 1, true, true, true, false);
    let block = block_at(1, 1, predictors);
    let mut plane = Grid2D::new(8, 8, |_| 0u8).unwrap();

    let above_row = [10u8, 20, 30, 40];
    let left_column = [50u8, 60, 70, 80];
    let above_left = 15u8;
    for (i, &v) in above_row.iter().enumerate() {
      *plane.at_mut(4 + i, 3).unwrap() = v;
    }
    for (i, &v) in left_column.iter().enumerate() {
      *plane.at_mut(3, 4 + i).unwrap() = v;
    }
    *plane.at_mut(3, 3).unwrap() = above_left;

    block.true_motion_predict(&mut plane).unwrap();

    for r in 0..4usize {
      for c in 0..4usize {
        let expected =
          clamp_u8(left_column[r] as i32 + above_row[c] as i32 - above_left as i32);
        assert_eq!(*plane.at(4 + c, 4 + r).unwrap(), expected, "({c},{r})");
      }
    }
  }

  /// B_VE_PRED column fill values against the `avg3` closed form, with a
  /// real above/above-left/above-right neighbor triple.
  #[test]
  fn b_ve_pred_matches_avg3_of_the_above_strip() {
    let predictors = predictors_at::<4>(1, 1, true, false, true, true);
    let block = block_at(1, 1, predictors);
    let mut plane = Grid2D::new(12, 8, |_| 0u8).unwrap();

    // above(-1..=4) = [100, 110, 120, 130, 140, 150]
    *plane.at_mut(3, 3).unwrap() = 100; // above_left bottom-right pixel
    for (i, &v) in [110u8, 120, 130, 140].iter().enumerate() {
      *plane.at_mut(4 + i, 3).unwrap() = v; // above neighbor bottom row
    }
    *plane.at_mut(8, 3).unwrap() = 150; // above_right bottom row, first sample

    block.vertical_smoothed_predict(&mut plane).unwrap();

    let expected = [
      avg3(100, 110, 120),
      avg3(110, 120, 130),
      avg3(120, 130, 140),
      avg3(130, 140, 150),
    ];
    for (col, &value) in expected.iter().enumerate() {
      for row in 0..4usize {
        assert_eq!(*plane.at(4 + col, 4 + row).unwrap(), value);
      }
    }
  }

  #[test]
  fn b_pred_is_rejected_at_macroblock_granularity() {
    let predictors = predictors_at::<16>(0, 0, false, false, false, false);
    let block = block_at(0, 0, predictors);
    let mut plane = Grid2D::new(16, 16, |_| 0u8).unwrap();
    let err = block.intra_predict(&mut plane, IntraMbMode::BPred).unwrap_err();
    assert!(matches!(
      err,
      PredictError::BPredAtMacroblockGranularity { size: 16 }
    ));
  }

  #[test]
  fn intra_predict_b_dispatches_every_mode_without_error() {
    let modes = [
      IntraBMode::BDcPred,
      IntraBMode::BTmPred,
      IntraBMode::BVePred,
      IntraBMode::BHePred,
      IntraBMode::BLdPred,
      IntraBMode::BRdPred,
      IntraBMode::BVrPred,
      IntraBMode::BVlPred,
      IntraBMode::BHdPred,
      IntraBMode::BHuPred,
    ];
    for mode in modes {
      let predictors = predictors_at::<4>(1, 1, true, true, true, true);
      let block = block_at(1, 1, predictors);
      let mut plane = Grid2D::new(12, 12, |_| 128u8).unwrap();
      block.intra_predict_b(&mut plane, mode).unwrap();
    }
  }

  proptest! {
    /// Invariant 6: V_PRED is row-invariant - the result at (c,r) equals
    /// the result at (c,r') for every r,r'.
    #[test]
    fn v_pred_is_row_invariant(above_row in proptest::collection::vec(0u8..=255, 16)) {
      let predictors = predictors_at::<16>(0, 1, true, false, false, false);
      let block = block_at(0, 1, predictors);
      let mut plane = Grid2D::new(16, 32, |_| 0u8).unwrap();
      for (col, &v) in above_row.iter().enumerate() {
        *plane.at_mut(col, 15).unwrap() = v;
      }
      block.vertical_predict(&mut plane).unwrap();
      for col in 0..16usize {
        let first = *plane.at(col, 16).unwrap();
        for row in 16..32usize {
          prop_assert_eq!(*plane.at(col, row).unwrap(), first);
        }
      }
    }

    /// Invariant 7: H_PRED is column-invariant.
    #[test]
    fn h_pred_is_column_invariant(left_column in proptest::collection::vec(0u8..=255, 16)) {
      let predictors = predictors_at::<16>(1, 0, false, true, false, false);
      let block = block_at(1, 0, predictors);
      let mut plane = Grid2D::new(32, 16, |_| 0u8).unwrap();
      for (row, &v) in left_column.iter().enumerate() {
        *plane.at_mut(15, row).unwrap() = v;
      }
      block.horizontal_predict(&mut plane).unwrap();
      for row in 0..16usize {
        let first = *plane.at(16, row).unwrap();
        for col in 16..32usize {
          prop_assert_eq!(*plane.at(col, row).unwrap(), first);
        }
      }
    }

    /// Invariant 4: TM_PRED result at (c,r) equals
    /// `clamp_u8(left_column[r] + above_row[c] - above_left)`.
    #[test]
    fn tm_pred_matches_closed_form(
      above_row in proptest::collection::vec(0u8..=255, 4),
      left_column in proptest::collection::vec(0u8..=255, 4),
      above_left in 0u8..=255,
    ) {
      let predictors = predictors_at::<4>(1, 1, true, true, true, false);
      let block = block_at(1, 1, predictors);
      let mut plane = Grid2D::new(8, 8, |_| 0u8).unwrap();
      for (i, &v) in above_row.iter().enumerate() {
        *plane.at_mut(4 + i, 3).unwrap() = v;
      }
      for (i, &v) in left_column.iter().enumerate() {
        *plane.at_mut(3, 4 + i).unwrap() = v;
      }
      *plane.at_mut(3, 3).unwrap() = above_left;

      block.true_motion_predict(&mut plane).unwrap();

      for r in 0..4usize {
        for c in 0..4usize {
          let expected =
            clamp_u8(left_column[r] as i32 + above_row[c] as i32 - above_left as i32);
          prop_assert_eq!(*plane.at(4 + c, 4 + r).unwrap(), expected);
        }
      }
    }

    /// Invariant 5, generalized: DC_PRED with no neighbors always fills
    /// with exactly 128, for every block size.
    #[test]
    fn dc_pred_with_no_neighbors_is_always_128(seed in 0u8..=255) {
      let predictors = predictors_at::<8>(0, 0, false, false, false, false);
      let block = block_at(0, 0, predictors);
      let mut plane = Grid2D::new(8, 8, move |_| seed).unwrap();
      block.dc_predict(&mut plane).unwrap();
      for row in 0..8 {
        for col in 0..8 {
          prop_assert_eq!(*plane.at(col, row).unwrap(), 128);
        }
      }
    }
  }
}
