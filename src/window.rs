// Non-owning rectangular view over a `Grid2D<u8>` pixel plane.
//
// Unlike a conventional "view" type, `SubWindow` does not borrow its parent
// grid: it is a plain `Copy` geometry descriptor (offset + size). The grid
// it was built against is instead passed explicitly to every accessor. This
// lets a `Block`'s `Predictors` hold descriptors for up to four neighbors
// simultaneously without tripping the borrow checker over multiple
// concurrent mutable views into one shared plane, while still resolving
// neighbor samples lazily at prediction time rather than copying them at
// construction time (see DESIGN.md).

use crate::error::{PredictError, Result};
use crate::grid::Grid2D;

/// A rectangle `(col0, row0, width, height)` within some `Grid2D<u8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubWindow {
  col0: usize,
  row0: usize,
  width: usize,
  height: usize,
}

impl SubWindow {
  /// A window covering the full extent of a `parent_width x parent_height`
  /// plane.
  pub fn full(parent_width: usize, parent_height: usize) -> Self {
    Self {
      col0: 0,
      row0: 0,
      width: parent_width,
      height: parent_height,
    }
  }

  /// An unchecked window descriptor at `(col0, row0)`. Used internally
  /// wherever the geometry is derived from raster coordinates that are
  /// already known to be valid (e.g. a neighbor block's position); actual
  /// reads still go through the bounds-checked `Grid2D` accessors.
  pub(crate) fn at_position(col0: usize, row0: usize, width: usize, height: usize) -> Self {
    Self {
      col0,
      row0,
      width,
      height,
    }
  }

  /// A `width x height` window at `(col0, row0)` within a
  /// `parent_width x parent_height` plane.
  pub fn new(
    col0: usize,
    row0: usize,
    width: usize,
    height: usize,
    parent_width: usize,
    parent_height: usize,
  ) -> Result<Self> {
    if col0 + width > parent_width || row0 + height > parent_height {
      return Err(PredictError::WindowOutOfBounds {
        col0,
        row0,
        width,
        height,
        parent_width,
        parent_height,
      });
    }
    Ok(Self {
      col0,
      row0,
      width,
      height,
    })
  }

  /// A window nested inside `self`, with `(col0, row0)` given in `self`'s
  /// local coordinates. Offsets compose additively; the returned window's
  /// coordinates are always relative to the same root grid as `self`.
  pub fn nested(&self, col0: usize, row0: usize, width: usize, height: usize) -> Result<Self> {
    if col0 + width > self.width || row0 + height > self.height {
      return Err(PredictError::WindowOutOfBounds {
        col0,
        row0,
        width,
        height,
        parent_width: self.width,
        parent_height: self.height,
      });
    }
    Ok(Self {
      col0: self.col0 + col0,
      row0: self.row0 + row0,
      width,
      height,
    })
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  /// Reads the sample at local `(col, row)` from `plane`.
  pub fn at(&self, plane: &Grid2D<u8>, col: usize, row: usize) -> Result<u8> {
    if col >= self.width || row >= self.height {
      return Err(PredictError::OutOfRange {
        col,
        row,
        width: self.width,
        height: self.height,
      });
    }
    plane.at(self.col0 + col, self.row0 + row).copied()
  }

  /// Writes `value` at local `(col, row)` in `plane`.
  pub fn set(&self, plane: &mut Grid2D<u8>, col: usize, row: usize, value: u8) -> Result<()> {
    if col >= self.width || row >= self.height {
      return Err(PredictError::OutOfRange {
        col,
        row,
        width: self.width,
        height: self.height,
      });
    }
    *plane.at_mut(self.col0 + col, self.row0 + row)? = value;
    Ok(())
  }

  /// Fills every sample in the window with `value`.
  pub fn fill(&self, plane: &mut Grid2D<u8>, value: u8) -> Result<()> {
    for row in 0..self.height {
      for col in 0..self.width {
        self.set(plane, col, row, value)?;
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn plane(w: usize, h: usize) -> Grid2D<u8> {
    Grid2D::new(w, h, |_| 0u8).unwrap()
  }

  #[test]
  fn nesting_composes_offsets() {
    let outer = SubWindow::new(2, 2, 8, 8, 20, 20).unwrap();
    let inner = outer.nested(3, 1, 4, 4).unwrap();
    let mut p = plane(20, 20);
    inner.set(&mut p, 0, 0, 42).unwrap();
    assert_eq!(p.at(5, 3).unwrap(), &42);
  }

  #[test]
  fn rejects_windows_exceeding_parent() {
    assert!(SubWindow::new(18, 0, 4, 4, 20, 20).is_err());
    let outer = SubWindow::new(0, 0, 8, 8, 20, 20).unwrap();
    assert!(outer.nested(6, 6, 4, 4).is_err());
  }

  #[test]
  fn fill_writes_every_pixel() {
    let mut p = plane(8, 8);
    let w = SubWindow::new(2, 2, 4, 4, 8, 8).unwrap();
    w.fill(&mut p, 127).unwrap();
    for row in 2..6 {
      for col in 2..6 {
        assert_eq!(p.at(col, row).unwrap(), &127);
      }
    }
    assert_eq!(p.at(1, 1).unwrap(), &0);
  }
}
