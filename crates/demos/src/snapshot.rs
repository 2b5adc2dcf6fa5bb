//! CPU-side PNG capture of a rendered [`BufferSurface`].
//!
//! Feature-gated behind `png` (default on) so consumers that never write
//! files can depend on this crate without pulling in the `image` crate.
//! The pixel conversion itself lives in [`crate::pixel`] (always available).

use phosphor_core::error::DemoError;
use phosphor_core::surface::{BufferSurface, Surface};
use std::path::Path;

use crate::pixel::surface_to_rgba;

/// Writes a rendered surface as a PNG image.
///
/// Returns `DemoError::Io` on conversion or write failure.
pub fn write_png(surface: &BufferSurface, path: &Path) -> Result<(), DemoError> {
    let rgba = surface_to_rgba(surface);
    let img = image::RgbaImage::from_raw(surface.width(), surface.height(), rgba)
        .ok_or_else(|| DemoError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| DemoError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use phosphor_core::color::Argb;
    use phosphor_core::surface::{Rect, Surface};

    #[test]
    fn write_png_round_trip() {
        let mut surface = BufferSurface::new(16, 16).unwrap();
        surface.fill_rect(Rect::new(4, 4, 8, 8), Argb(0xFFFF9315));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&surface, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        assert_eq!(img.get_pixel(8, 8).0, [0xFF, 0x93, 0x15, 0xFF]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0xFF]);
    }
}
