#![deny(unsafe_code)]
//! Static curve plotter.
//!
//! Renders a piecewise log/linear response curve over golden-ratio guide
//! lines, all through the same surface and quantizer contract the animated
//! demos use. The simulation step is a no-op; the picture is the same every
//! tick.

use phosphor_core::error::DemoError;
use phosphor_core::palette::Palette;
use phosphor_core::params::param_usize;
use phosphor_core::surface::{Rect, Surface};
use phosphor_core::Generator;
use serde_json::{json, Value};

const GOLDEN_RATIO: f64 = 1.61803398875;

/// Default plot width in cells.
const DEFAULT_WIDTH: usize = 300;
/// Default plot height in cells.
const DEFAULT_HEIGHT: usize = 300;
/// Default rendered size of one plotted point, in pixels.
const DEFAULT_POINT_SIZE: usize = 2;

/// Horizontal input range of the plot, mapped onto the surface width.
const INPUT_SPAN: f64 = 20.0;
/// Vertical output range of the plot, mapped onto the surface height.
const OUTPUT_SPAN: f64 = 2.0;
/// Input step between consecutive curve points.
const CURVE_STEP: f64 = 0.03;

/// Parameters for the plotter.
#[derive(Debug, Clone, Copy)]
pub struct PlotParams {
    /// Plot width in cells.
    pub width: usize,
    /// Plot height in cells.
    pub height: usize,
    /// Rendered size of one point, in pixels.
    pub point_size: usize,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl PlotParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            width: param_usize(params, "width", DEFAULT_WIDTH),
            height: param_usize(params, "height", DEFAULT_HEIGHT),
            point_size: param_usize(params, "point_size", DEFAULT_POINT_SIZE),
        }
    }
}

/// The response curve: logarithmic tails splined onto a linear middle
/// segment with slope 1/φ.
pub fn algorithm(i: f64) -> f64 {
    if i < -1.0 {
        -(-i - 0.85).ln() / 14.0 - 0.75
    } else if i > 1.0 {
        (i - 0.85).ln() / 14.0 + 0.75
    } else {
        i / GOLDEN_RATIO
    }
}

/// The curve plotter generator.
pub struct Plot {
    params: PlotParams,
    palette: Palette,
}

impl Plot {
    /// Creates a plotter.
    ///
    /// Returns `DemoError::InvalidDimensions` if either dimension or the
    /// point size is zero.
    pub fn new(params: PlotParams, palette: Palette) -> Result<Self, DemoError> {
        if params.width == 0 || params.height == 0 || params.point_size == 0 {
            return Err(DemoError::InvalidDimensions);
        }
        Ok(Self { params, palette })
    }

    /// Creates a plotter from a JSON params object.
    pub fn from_json(json_params: &Value, palette: Palette) -> Result<Self, DemoError> {
        Self::new(PlotParams::from_json(json_params), palette)
    }

    /// Pixel dimensions of the surface this plot renders onto.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            (self.params.width * self.params.point_size) as u32,
            (self.params.height * self.params.point_size) as u32,
        )
    }

    /// Maps a curve input to a surface x coordinate.
    fn coord_in(&self, i: f64) -> i32 {
        let w = (self.params.width * self.params.point_size) as f64;
        (w * (i / INPUT_SPAN + 0.5)) as i32
    }

    /// Maps a curve output to a surface y coordinate.
    fn coord_out(&self, v: f64) -> i32 {
        let h = (self.params.height * self.params.point_size) as f64;
        (h * (v / OUTPUT_SPAN + 0.5)) as i32
    }

    fn guide_vertical(&self, surface: &mut dyn Surface, i: f64, brightness: f64) {
        let ps = self.params.point_size as u32;
        let h = (self.params.height * self.params.point_size) as u32;
        surface.fill_rect(
            Rect::new(self.coord_in(i), 0, ps, h),
            self.palette.quantize(brightness),
        );
    }

    fn guide_horizontal(&self, surface: &mut dyn Surface, v: f64, brightness: f64) {
        let ps = self.params.point_size as u32;
        let w = (self.params.width * self.params.point_size) as u32;
        surface.fill_rect(
            Rect::new(0, self.coord_out(v), w, ps),
            self.palette.quantize(brightness),
        );
    }
}

impl Generator for Plot {
    fn update(&mut self, _dt_ms: u64) -> Result<(), DemoError> {
        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) {
        // Guides first, dimmest to brightest, so the curve wins overlaps.
        for i in -9..=-2 {
            self.guide_vertical(surface, i as f64, 0.15);
        }
        for i in 2..=9 {
            self.guide_vertical(surface, i as f64, 0.15);
        }
        self.guide_vertical(surface, -1.0, 0.25);
        self.guide_vertical(surface, 1.0, 0.25);
        self.guide_vertical(surface, 0.0, 0.35);
        self.guide_horizontal(surface, -1.0 / GOLDEN_RATIO, 0.25);
        self.guide_horizontal(surface, 1.0 / GOLDEN_RATIO, 0.25);
        self.guide_horizontal(surface, 0.0, 0.5);

        let ps = self.params.point_size as u32;
        let mut i = -10.0;
        while i < 10.0 {
            surface.fill_rect(
                Rect::new(self.coord_in(i), self.coord_out(algorithm(i)), ps, ps),
                self.palette.quantize(1.0),
            );
            i += CURVE_STEP;
        }
    }

    fn params(&self) -> Value {
        json!({
            "width": self.params.width,
            "height": self.params.height,
            "point_size": self.params.point_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phosphor_core::surface::BufferSurface;

    fn small_plot() -> Plot {
        let params = PlotParams {
            width: 300,
            height: 300,
            point_size: 2,
        };
        Plot::new(params, Palette::phosphor()).unwrap()
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        for (w, h, ps) in [(0, 300, 2), (300, 0, 2), (300, 300, 0)] {
            let params = PlotParams {
                width: w,
                height: h,
                point_size: ps,
            };
            assert!(matches!(
                Plot::new(params, Palette::phosphor()),
                Err(DemoError::InvalidDimensions)
            ));
        }
    }

    #[test]
    fn algorithm_is_linear_with_inverse_golden_slope_in_the_middle() {
        assert_eq!(algorithm(0.0), 0.0);
        assert!((algorithm(1.0) - 1.0 / GOLDEN_RATIO).abs() < 1e-12);
        assert!((algorithm(-1.0) + 1.0 / GOLDEN_RATIO).abs() < 1e-12);
    }

    #[test]
    fn algorithm_is_odd() {
        for i in [0.3, 1.0, 1.5, 3.0, 7.5, 10.0] {
            assert!(
                (algorithm(-i) + algorithm(i)).abs() < 1e-12,
                "algorithm not odd at {i}"
            );
        }
    }

    #[test]
    fn algorithm_tails_are_monotone_increasing() {
        let mut last = algorithm(1.0 + 1e-9);
        let mut i = 1.1;
        while i <= 10.0 {
            let v = algorithm(i);
            assert!(v > last, "tail not increasing at {i}");
            last = v;
            i += 0.1;
        }
    }

    #[test]
    fn coord_mappings_cover_the_surface() {
        let plot = small_plot();
        assert_eq!(plot.coord_in(-10.0), 0);
        assert_eq!(plot.coord_in(0.0), 300);
        assert_eq!(plot.coord_in(10.0), 600);
        assert_eq!(plot.coord_out(-1.0), 0);
        assert_eq!(plot.coord_out(0.0), 300);
        assert_eq!(plot.coord_out(1.0), 600);
    }

    #[test]
    fn update_is_a_no_op() {
        let mut plot = small_plot();
        plot.update(12345).unwrap();
        assert_eq!(plot.params()["width"], 300);
    }

    #[test]
    fn render_draws_the_curve_over_the_guides() {
        let plot = small_plot();
        let (w, h) = plot.surface_size();
        let mut surface = BufferSurface::new(w, h).unwrap();
        plot.render(&mut surface);

        // First curve sample, taken at i = -10 exactly: x = 0 and
        // y = 600 * (algorithm(-10)/2 + 0.5) = 27. Quantize(1.0) on the
        // phosphor ramp is pure white.
        assert_eq!(surface.pixel(0, 27).0, 0xFFFFFFFF);
        // The horizontal axis (brightness 0.5) shows where the curve is
        // far away.
        assert_eq!(surface.pixel(100, 300), Palette::phosphor().quantize(0.5));
    }

    #[test]
    fn render_draws_dim_guides() {
        let plot = small_plot();
        let (w, h) = plot.surface_size();
        let mut surface = BufferSurface::new(w, h).unwrap();
        plot.render(&mut surface);

        // Vertical guide at i=5: x = 600 * (0.25 + 0.5) = 450, brightness
        // 0.15 quantizes to stop 2 of the grayscale ramp.
        let guide = Palette::phosphor().quantize(0.15);
        assert_eq!(surface.pixel(450, 10), guide);
        // Background far from any guide stays black.
        assert_eq!(surface.pixel(460, 10).0, 0xFF000000);
    }

    #[test]
    fn render_is_stable_across_updates() {
        let mut plot = small_plot();
        let (w, h) = plot.surface_size();
        let mut first = BufferSurface::new(w, h).unwrap();
        plot.render(&mut first);

        plot.update(999).unwrap();
        let mut second = BufferSurface::new(w, h).unwrap();
        plot.render(&mut second);

        assert_eq!(first.pixels(), second.pixels());
    }
}
