//! Pure-computation pixel conversion from a rendered [`BufferSurface`].
//!
//! Always available (no feature gate) so the PNG snapshot path and any
//! other consumer share the same conversion.

use phosphor_core::surface::BufferSurface;

/// Unpacks a surface's ARGB words into an RGBA8 byte buffer.
///
/// The buffer length is `width * height * 4`, row-major, fully opaque.
pub fn surface_to_rgba(surface: &BufferSurface) -> Vec<u8> {
    surface
        .pixels()
        .iter()
        .flat_map(|&argb| {
            [
                (argb >> 16) as u8,
                (argb >> 8) as u8,
                argb as u8,
                (argb >> 24) as u8,
            ]
        })
        .collect()
}
