//! Fixed color palettes sampled by index quantization.
//!
//! A `Palette` is an ordered list of ARGB stops. Brightness values in [0, 1]
//! select a stop by `floor(b * (N-1))`, clamped to the valid index range to
//! absorb floating-point overshoot (e.g. a brightness fractionally above 1
//! after averaging). There is no interpolation between stops; the visible
//! banding is the point.

use crate::color::Argb;
use crate::error::DemoError;

/// The 16 stops of the fire demo, black through deep reds to near-white.
const INFERNO16: [u32; 16] = [
    0xFF000000, 0xFF25120C, 0xFF3B1B06, 0xFF5A2211, 0xFF722400, 0xFF9C3E0A, 0xFFBC490A, 0xFFE16205,
    0xFFF4700B, 0xFFFC8409, 0xFFFF9315, 0xFFFFB234, 0xFFFFE14F, 0xFFFFFF53, 0xFFFFFEAB, 0xFFE16205,
];

/// 16 even grayscale steps, black to white, used by the star demos.
const PHOSPHOR16: [u32; 16] = [
    0xFF000000, 0xFF111111, 0xFF222222, 0xFF333333, 0xFF444444, 0xFF555555, 0xFF666666, 0xFF777777,
    0xFF888888, 0xFF999999, 0xFFAAAAAA, 0xFFBBBBBB, 0xFFCCCCCC, 0xFFDDDDDD, 0xFFEEEEEE, 0xFFFFFFFF,
];

/// Names accepted by [`Palette::from_name`].
const PALETTE_NAMES: &[&str] = &["inferno", "phosphor"];

/// An ordered, immutable list of ARGB color stops.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Argb>,
}

impl Palette {
    /// Creates a new palette from a vector of colors.
    ///
    /// Requires at least one color.
    pub fn new(colors: Vec<Argb>) -> Result<Self, DemoError> {
        if colors.is_empty() {
            return Err(DemoError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    ///
    /// Each string can be `"#rrggbb"` or `"rrggbb"` (case insensitive).
    /// Requires at least one color.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, DemoError> {
        let colors: Result<Vec<Argb>, DemoError> =
            hexes.iter().map(|h| Argb::from_hex(h)).collect();
        Self::new(colors?)
    }

    /// Returns the number of color stops in this palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if this palette has no colors. (Always false for valid palettes.)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Quantizes a brightness in [0, 1] to a color stop.
    ///
    /// Computes `floor(b * (N-1))` and clamps the index to `[0, N-1]`, so
    /// out-of-range and NaN inputs still map to a valid stop (NaN maps to
    /// the first). Monotone non-decreasing in `b`; `quantize(0.0)` is the
    /// first stop and `quantize(1.0)` the last.
    pub fn quantize(&self, b: f64) -> Argb {
        let b = if b.is_nan() { 0.0 } else { b };
        let top = (self.colors.len() - 1) as f64;
        let idx = (b * top).floor().clamp(0.0, top) as usize;
        self.colors[idx]
    }

    /// The stop at `index`, for tests and tooling. Panics if out of range.
    pub fn color(&self, index: usize) -> Argb {
        self.colors[index]
    }

    // -- Built-in palettes --

    /// Fire ramp: black through embers and oranges to near-white.
    pub fn inferno() -> Self {
        Self {
            colors: INFERNO16.iter().map(|&w| Argb(w)).collect(),
        }
    }

    /// CRT-style grayscale ramp, black to white in 16 steps.
    pub fn phosphor() -> Self {
        Self {
            colors: PHOSPHOR16.iter().map(|&w| Argb(w)).collect(),
        }
    }

    /// Constructs a built-in palette by name.
    ///
    /// Returns `DemoError::UnknownPalette` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, DemoError> {
        match name {
            "inferno" => Ok(Self::inferno()),
            "phosphor" => Ok(Self::phosphor()),
            _ => Err(DemoError::UnknownPalette(format!(
                "{name} (expected one of: {})",
                PALETTE_NAMES.join(", ")
            ))),
        }
    }

    /// Returns the names of all built-in palettes.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }
}
