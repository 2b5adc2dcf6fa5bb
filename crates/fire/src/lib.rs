#![deny(unsafe_code)]
//! Diffusion-decay "fire" generator.
//!
//! A brightness field rises and cools: each tick, every row is recomputed
//! from the row below it as it stood on the previous tick (attenuated
//! neighborhood average), and the bottom row is reborn from a triangular
//! random profile peaking at the center column. Quantized through a fire
//! palette, the result reads as flames licking upward.
//!
//! The update is double-buffered: the new grid is written into a back
//! buffer while the previous tick's grid is read, then the buffers swap.
//! No cell ever reads a value written in the same tick, so the update
//! order carries no meaning.

use phosphor_core::error::DemoError;
use phosphor_core::field::Field;
use phosphor_core::palette::Palette;
use phosphor_core::params::{param_f64, param_usize};
use phosphor_core::rng::Rng;
use phosphor_core::surface::{Rect, Surface};
use phosphor_core::Generator;
use serde_json::{json, Value};

/// Default field width in cells.
const DEFAULT_WIDTH: usize = 300;
/// Default field height in cells.
const DEFAULT_HEIGHT: usize = 300;
/// Default rendered size of one cell, in pixels.
const DEFAULT_POINT_SIZE: usize = 2;
/// Default per-tick attenuation; < 1 so flames fade as they rise.
const DEFAULT_DECAY: f64 = 0.99;

/// Simulation parameters for the fire field.
///
/// Use [`Default`] for the classic 300x300, decay-0.99 configuration.
#[derive(Debug, Clone, Copy)]
pub struct FireParams {
    /// Field width in cells.
    pub width: usize,
    /// Field height in cells.
    pub height: usize,
    /// Rendered size of one cell, in pixels.
    pub point_size: usize,
    /// Attenuation applied to every neighborhood average, in (0, 1].
    pub decay: f64,
}

impl Default for FireParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            point_size: DEFAULT_POINT_SIZE,
            decay: DEFAULT_DECAY,
        }
    }
}

impl FireParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            width: param_usize(params, "width", DEFAULT_WIDTH),
            height: param_usize(params, "height", DEFAULT_HEIGHT),
            point_size: param_usize(params, "point_size", DEFAULT_POINT_SIZE),
            decay: param_f64(params, "decay", DEFAULT_DECAY),
        }
    }
}

/// The fire field generator.
///
/// Owns two brightness grids (front and back), the palette, and the
/// injected random source that drives bottom-row births.
pub struct Fire {
    front: Field,
    back: Field,
    params: FireParams,
    palette: Palette,
    rng: Box<dyn Rng>,
}

impl Fire {
    /// Creates a fire field with a zeroed grid.
    ///
    /// Returns `DemoError::InvalidDimensions` if `width` or `height` is
    /// below 2 or `point_size` is zero: the edge averages and the birth
    /// profile need at least two columns and a row above the generator row.
    /// Returns `DemoError::InvalidPalette` for a decay outside (0, 1].
    pub fn new(params: FireParams, palette: Palette, rng: Box<dyn Rng>) -> Result<Self, DemoError> {
        if params.width < 2 || params.height < 2 || params.point_size == 0 {
            return Err(DemoError::InvalidDimensions);
        }
        if !params.decay.is_finite() || params.decay <= 0.0 || params.decay > 1.0 {
            return Err(DemoError::InvalidPalette(format!(
                "decay must be in (0, 1], got {}",
                params.decay
            )));
        }
        let front = Field::new(params.width, params.height)?;
        let back = front.clone();
        Ok(Self {
            front,
            back,
            params,
            palette,
            rng,
        })
    }

    /// Creates a fire field from a JSON params object.
    pub fn from_json(
        json_params: &Value,
        palette: Palette,
        rng: Box<dyn Rng>,
    ) -> Result<Self, DemoError> {
        Self::new(FireParams::from_json(json_params), palette, rng)
    }

    /// Read-only access to the current brightness grid.
    pub fn field(&self) -> &Field {
        &self.front
    }

    /// Pixel dimensions of the surface this fire renders onto.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            (self.params.width * self.params.point_size) as u32,
            (self.params.height * self.params.point_size) as u32,
        )
    }
}

impl Generator for Fire {
    /// One simulation tick. The rule is per-tick, not time-scaled: the
    /// original demos tick once per distinct millisecond reading and the
    /// decay constant is calibrated to that cadence.
    fn update(&mut self, _dt_ms: u64) -> Result<(), DemoError> {
        let w = self.params.width;
        let h = self.params.height;
        let decay = self.params.decay;

        // Every row above the generator row inherits from the row below it,
        // read from the front buffer (last tick's values throughout).
        let src = self.front.data();
        let dst = self.back.data_mut();
        for y in 0..h - 1 {
            let below = (y + 1) * w;
            for x in 0..w {
                let avg = if x == 0 {
                    (src[below] + src[below + 1]) / 2.0
                } else if x == w - 1 {
                    (src[below + x - 1] + src[below + x]) / 2.0
                } else {
                    (src[below + x - 1] + src[below + x] + src[below + x + 1]) / 3.0
                };
                dst[y * w + x] = (decay * avg).clamp(0.0, 1.0);
            }
        }

        // Regenerate the bottom row: on/off births whose probability falls
        // off linearly with distance from the center column.
        let center = (w / 2) as f64;
        let bottom = (h - 1) * w;
        for x in 0..w {
            let p = 1.0 - (x as f64 - center).abs() / center;
            let u = self.rng.next_f64();
            self.back.data_mut()[bottom + x] = if u < p { 1.0 } else { 0.0 };
        }

        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) {
        let ps = self.params.point_size;
        for (x, y, v) in self.front.iter() {
            surface.fill_rect(
                Rect::new((x * ps) as i32, (y * ps) as i32, ps as u32, ps as u32),
                self.palette.quantize(v),
            );
        }
    }

    fn params(&self) -> Value {
        json!({
            "width": self.params.width,
            "height": self.params.height,
            "point_size": self.params.point_size,
            "decay": self.params.decay,
        })
    }
}
