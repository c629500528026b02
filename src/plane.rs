// Pixel plane: a `Grid2D<u8>` padded up to a whole number of macroblocks,
// paired with the logical (display) extent within it.

use crate::error::Result;
use crate::grid::Grid2D;

/// One reconstructed sample plane (Y, U, or V).
///
/// `data` is always sized to a macroblock-aligned extent; `display_width`/
/// `display_height` record the logical image size a renderer should crop
/// to. Freshly allocated samples start at 128, the same neutral gray a
/// neighborless `DC_PRED` falls back to.
pub struct Plane {
  data: Grid2D<u8>,
  display_width: usize,
  display_height: usize,
}

impl Plane {
  /// `padded_width`/`padded_height` must already be multiples of the
  /// block size this plane is diced into (16 for luma, 8 for chroma at
  /// 4:2:0); `display_width`/`display_height` are the true image extent
  /// and may be smaller.
  pub fn new(
    padded_width: usize,
    padded_height: usize,
    display_width: usize,
    display_height: usize,
  ) -> Result<Self> {
    let data = Grid2D::new(padded_width, padded_height, |_| 128u8)?;
    Ok(Self {
      data,
      display_width,
      display_height,
    })
  }

  pub fn display_width(&self) -> usize {
    self.display_width
  }

  pub fn display_height(&self) -> usize {
    self.display_height
  }

  pub fn width(&self) -> usize {
    self.data.width()
  }

  pub fn height(&self) -> usize {
    self.data.height()
  }

  pub fn samples(&self) -> &Grid2D<u8> {
    &self.data
  }

  pub fn samples_mut(&mut self) -> &mut Grid2D<u8> {
    &mut self.data
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_plane_is_neutral_gray() {
    let plane = Plane::new(16, 16, 12, 9).unwrap();
    assert_eq!(plane.samples().at(0, 0).unwrap(), &128);
    assert_eq!(plane.samples().at(15, 15).unwrap(), &128);
    assert_eq!(plane.display_width(), 12);
    assert_eq!(plane.display_height(), 9);
  }
}
