// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

/// Intra prediction mode at 8x8 (chroma) or 16x16 (luma macroblock)
/// granularity, as signaled by the entropy decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntraMbMode {
  DcPred,
  VPred,
  HPred,
  TmPred,
  /// "Predict 4x4 sub-blocks independently" - only meaningful for the
  /// luma macroblock mode; chroma never signals it.
  BPred,
}

/// Intra prediction mode for a single 4x4 luma sub-block, used only when
/// the macroblock's luma mode is `IntraMbMode::BPred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntraBMode {
  BDcPred,
  BTmPred,
  BVePred,
  BHePred,
  BLdPred,
  BRdPred,
  BVrPred,
  BVlPred,
  BHdPred,
  BHuPred,
}
