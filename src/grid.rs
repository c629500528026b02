// Two-dimensional, neighbor-aware container.
//
// Construction happens strictly in raster order (row 0 left to right, then
// row 1, ...) so that each element's `Context` can carry read-only
// references to whichever of its four neighbors already exist. The
// container is move-only: cloning would duplicate potentially large pixel
// or block storage and is never needed internally.

use crate::error::{PredictError, Result};

/// What a `Grid2D<T>` element sees of its already-built neighbors at the
/// moment it is constructed.
pub struct Context<'a, T> {
  pub col: usize,
  pub row: usize,
  pub left: Option<&'a T>,
  pub above_left: Option<&'a T>,
  pub above: Option<&'a T>,
  pub above_right: Option<&'a T>,
}

/// A fixed-size, row-major, move-only 2D container.
///
/// Elements are built one at a time via a caller-supplied closure that
/// receives a [`Context`] describing the element's position and its
/// already-constructed neighbors. `Grid2D` never exposes `Clone`: the only
/// way to move one around is, well, to move it.
pub struct Grid2D<T> {
  width: usize,
  height: usize,
  data: Vec<T>,
}

impl<T> Grid2D<T> {
  /// Builds a `width x height` grid, constructing elements in raster
  /// order via `build`.
  pub fn new<F>(width: usize, height: usize, mut build: F) -> Result<Self>
  where
    F: FnMut(Context<'_, T>) -> T,
  {
    if width == 0 || height == 0 {
      return Err(PredictError::ZeroDimension { width, height });
    }

    let mut data: Vec<T> = Vec::with_capacity(width * height);
    for row in 0..height {
      for col in 0..width {
        let context = Context {
          col,
          row,
          left: neighbor(&data, width, col.checked_sub(1), Some(row)),
          above_left: neighbor(&data, width, col.checked_sub(1), row.checked_sub(1)),
          above: neighbor(&data, width, Some(col), row.checked_sub(1)),
          above_right: neighbor(&data, width, Some(col + 1), row.checked_sub(1)),
        };
        data.push(build(context));
      }
    }

    Ok(Self {
      width,
      height,
      data,
    })
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  /// Bounds-checked mutable access.
  pub fn at_mut(&mut self, col: usize, row: usize) -> Result<&mut T> {
    if col >= self.width || row >= self.height {
      return Err(PredictError::OutOfRange {
        col,
        row,
        width: self.width,
        height: self.height,
      });
    }
    let idx = row * self.width + col;
    Ok(&mut self.data[idx])
  }

  /// Bounds-checked shared access.
  pub fn at(&self, col: usize, row: usize) -> Result<&T> {
    if col >= self.width || row >= self.height {
      return Err(PredictError::OutOfRange {
        col,
        row,
        width: self.width,
        height: self.height,
      });
    }
    let idx = row * self.width + col;
    Ok(&self.data[idx])
  }

  /// Returns the element at `(col, row)` iff it is in range.
  pub fn maybe_at(&self, col: usize, row: usize) -> Option<&T> {
    if col < self.width && row < self.height {
      Some(&self.data[row * self.width + col])
    } else {
      None
    }
  }
}

fn neighbor<T>(
  data: &[T],
  width: usize,
  col: Option<usize>,
  row: Option<usize>,
) -> Option<&T> {
  let (col, row) = (col?, row?);
  if col < width {
    data.get(row * width + col)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_zero_dimensions() {
    let result = Grid2D::new(0, 4, |_| 0u8);
    assert!(matches!(result, Err(PredictError::ZeroDimension { .. })));
  }

  #[test]
  fn every_element_is_built_at_its_own_position() {
    let grid = Grid2D::new(3, 2, |c| (c.col, c.row)).unwrap();
    for row in 0..2 {
      for col in 0..3 {
        assert_eq!(*grid.at(col, row).unwrap(), (col, row));
      }
    }
    assert!(grid.at(3, 0).is_err());
    assert!(grid.at(0, 2).is_err());
  }

  #[test]
  fn neighbor_presence_matches_range() {
    // Record which neighbors were present at each position, then check
    // that presence matches "coordinate in range" exactly (testable
    // property 2).
    let grid = Grid2D::new(
      3,
      3,
      |c| {
        (
          c.left.is_some(),
          c.above_left.is_some(),
          c.above.is_some(),
          c.above_right.is_some(),
        )
      },
    )
    .unwrap();

    for row in 0..3usize {
      for col in 0..3usize {
        let (left, above_left, above, above_right) = *grid.at(col, row).unwrap();
        assert_eq!(left, col > 0);
        assert_eq!(above_left, col > 0 && row > 0);
        assert_eq!(above, row > 0);
        assert_eq!(above_right, row > 0 && col + 1 < 3);
      }
    }
  }

  #[test]
  fn maybe_at_mirrors_at() {
    let grid = Grid2D::new(2, 2, |c| c.col + c.row).unwrap();
    assert_eq!(grid.maybe_at(1, 1), Some(&2));
    assert_eq!(grid.maybe_at(2, 0), None);
    assert_eq!(grid.maybe_at(0, 2), None);
  }
}
