// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Per-block neighbor snapshot: which neighbor blocks exist, and where to
// read their already-reconstructed samples from.
//
// `above_row`/`left_column`/etc. in the spec are read lazily through the
// `SubWindow` descriptors here rather than copied eagerly, because at the
// time a `Predictors` is built (grid construction, once per frame) the
// neighbor's actual pixel contents don't exist yet - only its position
// does. By the time `intra_predict` runs for a given block, raster decode
// order guarantees the neighbor is already reconstructed.

use crate::grid::{Context, Grid2D};
use crate::window::SubWindow;

/// The right row/column sample value substituted when a neighbor is absent
/// at the raster boundary.
pub const ABOVE_FALLBACK: u8 = 127;
pub const LEFT_FALLBACK: u8 = 129;

/// Neighbor-derived context a block needs to run any intra prediction mode.
///
/// `above_right_bottom_row` and `has_own_above_right` are kept as two
/// separate fields, matching the original's `above_right_bottom_row`
/// (a `Row`, defaulting to the synthetic all-127 row when no above-right
/// neighbor exists) and `use_row` (a `bool` fixed at construction time):
/// the macroblock facade fix-up (spec §4.6) overrides only the former, on
/// the rightmost luma sub-blocks, while `use_row`/`has_own_above_right`
/// keeps recording whether *that* sub-block's own context actually had an
/// above-right neighbor. Collapsing the two into one `Option<SubWindow>`
/// would make the fix-up also flip `has_own_above_right`, which changes
/// `above_right_sample`'s fallback from the synthetic 127 row to the real
/// `above_bottom_right_pixel` sample - not bit-exact.
#[derive(Clone, Copy, Debug)]
pub struct Predictors<const S: usize> {
  above: Option<SubWindow>,
  left: Option<SubWindow>,
  above_left: Option<SubWindow>,
  above_right_bottom_row: Option<SubWindow>,
  has_own_above_right: bool,
}

impl<const S: usize> Predictors<S> {
  /// Builds the snapshot for a block at `(col, row)` from the grid
  /// `Context` describing which neighbors exist.
  pub fn new<T>(context: &Context<'_, T>) -> Self {
    // Positions are purely a function of (col, row, S); we only need
    // presence, not the neighbor's own contents, to build each
    // descriptor.
    let block_window =
      |nb_col: usize, nb_row: usize| SubWindow::at_position(S * nb_col, S * nb_row, S, S);

    let above = context
      .above
      .is_some()
      .then(|| block_window(context.col, context.row - 1));
    let left = context
      .left
      .is_some()
      .then(|| block_window(context.col - 1, context.row));
    let above_left = context
      .above_left
      .is_some()
      .then(|| block_window(context.col - 1, context.row - 1));
    let has_own_above_right = context.above_right.is_some();
    let above_right_bottom_row =
      has_own_above_right.then(|| block_window(context.col + 1, context.row - 1));

    Self {
      above,
      left,
      above_left,
      above_right_bottom_row,
      has_own_above_right,
    }
  }

  pub fn has_above(&self) -> bool {
    self.above.is_some()
  }

  pub fn has_left(&self) -> bool {
    self.left.is_some()
  }

  /// Overrides `above_right_bottom_row` to equal another block's, used by
  /// the macroblock facade fix-up (spec §4.6). Deliberately leaves
  /// `has_own_above_right` untouched: it still reflects whether *this*
  /// block's own grid position had an above-right neighbor, which governs
  /// whether the (possibly borrowed) row is consulted at all.
  pub fn set_above_right_bottom_row(&mut self, above_right_bottom_row: Option<SubWindow>) {
    self.above_right_bottom_row = above_right_bottom_row;
  }

  pub fn above_right_bottom_row_window(&self) -> Option<SubWindow> {
    self.above_right_bottom_row
  }

  /// Whether this block's own grid position had an above-right neighbor,
  /// fixed at construction and never altered by the fix-up above.
  pub fn has_own_above_right(&self) -> bool {
    self.has_own_above_right
  }

  fn above_row_sample(&self, plane: &Grid2D<u8>, i: usize) -> u8 {
    match self.above {
      Some(w) => w.at(plane, i, S - 1).expect("above_row index in range"),
      None => ABOVE_FALLBACK,
    }
  }

  fn left_column_sample(&self, plane: &Grid2D<u8>, i: usize) -> u8 {
    match self.left {
      Some(w) => w.at(plane, S - 1, i).expect("left_column index in range"),
      None => LEFT_FALLBACK,
    }
  }

  fn above_left_sample(&self, plane: &Grid2D<u8>) -> u8 {
    match self.above_left {
      Some(w) => w
        .at(plane, S - 1, S - 1)
        .expect("above_left index in range"),
      None if self.above.is_some() => LEFT_FALLBACK,
      None => ABOVE_FALLBACK,
    }
  }

  fn above_right_bottom_row_sample(&self, plane: &Grid2D<u8>, k: usize) -> u8 {
    match self.above_right_bottom_row {
      Some(w) => w
        .at(plane, k, S - 1)
        .expect("above_right_bottom_row index in range"),
      None => ABOVE_FALLBACK,
    }
  }

  fn above_bottom_right_pixel_sample(&self, plane: &Grid2D<u8>) -> u8 {
    match self.above {
      Some(w) => w
        .at(plane, S - 1, S - 1)
        .expect("above_bottom_right_pixel index in range"),
      None => ABOVE_FALLBACK,
    }
  }

  fn above_right_sample(&self, plane: &Grid2D<u8>, k: usize) -> u8 {
    if self.has_own_above_right {
      self.above_right_bottom_row_sample(plane, k)
    } else {
      self.above_bottom_right_pixel_sample(plane)
    }
  }

  /// `above(i)` for `i in -1 .. 2*S`: `-1` is the above-left corner,
  /// `0..S` is the row above, `S..2*S` continues into the above-right
  /// strip (or its single-pixel fallback).
  pub fn above(&self, plane: &Grid2D<u8>, i: isize) -> u8 {
    debug_assert!(i >= -1 && i < (2 * S) as isize);
    if i == -1 {
      self.above_left_sample(plane)
    } else if (i as usize) < S {
      self.above_row_sample(plane, i as usize)
    } else {
      self.above_right_sample(plane, i as usize - S)
    }
  }

  /// `left(i)` for `i in -1 .. S`: `-1` is the above-left corner, `0..S`
  /// is the column to the left.
  pub fn left(&self, plane: &Grid2D<u8>, i: isize) -> u8 {
    debug_assert!(i >= -1 && i < S as isize);
    if i == -1 {
      self.above_left_sample(plane)
    } else {
      self.left_column_sample(plane, i as usize)
    }
  }

  /// Walks the L-shaped neighbor strip from four-below-left up around the
  /// corner and along the row above, linearizing it for the diagonal
  /// modes: `east(0..=4)` comes from `left(3..=-1)`, `east(5..=2S)` from
  /// `above(0..=2S-5)`.
  pub fn east(&self, plane: &Grid2D<u8>, k: isize) -> u8 {
    debug_assert!(k >= 0 && k <= (2 * S) as isize);
    if k <= 4 {
      self.left(plane, 3 - k)
    } else {
      self.above(plane, k - 5)
    }
  }

  /// Sum of the `S` samples in the row above, for `DC_PRED`.
  pub fn above_row_sum(&self, plane: &Grid2D<u8>) -> u32 {
    (0..S).map(|i| self.above_row_sample(plane, i) as u32).sum()
  }

  /// Sum of the `S` samples in the column to the left, for `DC_PRED`.
  pub fn left_column_sum(&self, plane: &Grid2D<u8>) -> u32 {
    (0..S)
      .map(|i| self.left_column_sample(plane, i) as u32)
      .sum()
  }
}

/// `(x + y + 1) >> 1`
pub fn avg2(x: u8, y: u8) -> u8 {
  (((x as u16) + (y as u16) + 1) >> 1) as u8
}

/// `(x + 2y + z + 2) >> 2`
pub fn avg3(x: u8, y: u8, z: u8) -> u8 {
  (((x as u16) + 2 * (y as u16) + (z as u16) + 2) >> 2) as u8
}

/// Clamps a wide sum into a valid 8-bit sample.
pub fn clamp_u8(value: i32) -> u8 {
  value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn avg3_rounding_matches_spec_scenario_s6() {
    assert_eq!(avg3(0, 0, 1), 0);
    assert_eq!(avg3(1, 1, 2), 1);
    assert_eq!(avg2(255, 255), 255);
  }

  #[test]
  fn clamp_saturates_both_directions() {
    assert_eq!(clamp_u8(-5), 0);
    assert_eq!(clamp_u8(300), 255);
    assert_eq!(clamp_u8(128), 128);
  }
}
