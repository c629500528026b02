// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Binds the three planes' windows for one macroblock so the decoder can
// invoke prediction at the right granularity without reaching into
// `Raster`'s block grids directly.

use crate::error::Result;
use crate::modes::{IntraBMode, IntraMbMode};
use crate::raster::Raster;

pub struct Macroblock<'a> {
  raster: &'a mut Raster,
  col: usize,
  row: usize,
}

impl<'a> Macroblock<'a> {
  pub(crate) fn new(raster: &'a mut Raster, col: usize, row: usize) -> Self {
    Self { raster, col, row }
  }

  pub fn col(&self) -> usize {
    self.col
  }

  pub fn row(&self) -> usize {
    self.row
  }

  /// Predicts the whole 16x16 luma block in one pass. Fails if `mode` is
  /// `IntraMbMode::BPred` — use [`Macroblock::predict_luma_subblocks`]
  /// instead.
  pub fn predict_luma(&mut self, mode: IntraMbMode) -> Result<()> {
    self.raster.predict_luma_macroblock(self.col, self.row, mode)
  }

  /// Predicts the sixteen 4x4 luma sub-blocks independently, in raster
  /// order within the macroblock (row-major). Used when the macroblock's
  /// luma mode is `IntraMbMode::BPred`.
  pub fn predict_luma_subblocks(&mut self, modes: &[IntraBMode; 16]) -> Result<()> {
    self.raster
      .predict_luma_subblocks(self.col, self.row, modes)
  }

  /// Predicts the 8x8 U and V blocks. Chroma is never `B_PRED`.
  pub fn predict_chroma(&mut self, mode_u: IntraMbMode, mode_v: IntraMbMode) -> Result<()> {
    self.raster
      .predict_chroma_macroblock(self.col, self.row, mode_u, mode_v)
  }
}
