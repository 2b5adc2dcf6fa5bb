#![deny(unsafe_code)]
//! Demo registry: maps demo names to implementations and provides CPU-side
//! snapshot rendering.
//!
//! This crate sits between `phosphor-core` (which defines the `Generator`
//! trait) and the individual demo crates. The CLI depends on this crate so
//! dispatch logic lives in one place.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use phosphor_core::error::DemoError;
use phosphor_core::palette::Palette;
use phosphor_core::rng::Xorshift64;
use phosphor_core::surface::Surface;
use phosphor_core::Generator;
use phosphor_fire::Fire;
use phosphor_plot::Plot;
use phosphor_stars::{Radar, Starfield};
use serde_json::Value;

/// All available demo names.
const DEMO_NAMES: &[&str] = &["fire", "stars", "radar", "plot"];

/// Enumeration of all available demos.
///
/// Wraps each implementation and delegates the `Generator` trait methods.
/// Use [`DemoKind::from_name`] for string-based construction.
pub enum DemoKind {
    /// Diffusion-decay fire field.
    Fire(Fire),
    /// Plain star field.
    Stars(Starfield),
    /// Radar-sweep star field.
    Radar(Radar),
    /// Static curve plot.
    Plot(Plot),
}

impl DemoKind {
    /// Constructs a demo by name.
    ///
    /// `seed` fixes the random stream, `palette` overrides the demo's
    /// default palette (inferno for fire, phosphor for the rest), and
    /// `params` supplies per-demo knobs with per-key fallbacks.
    ///
    /// Returns `DemoError::UnknownDemo` if the name is not recognized.
    pub fn from_name(
        name: &str,
        seed: u64,
        palette: Option<Palette>,
        params: &Value,
    ) -> Result<Self, DemoError> {
        let rng = Box::new(Xorshift64::new(seed));
        match name {
            "fire" => Ok(DemoKind::Fire(Fire::from_json(
                params,
                palette.unwrap_or_else(Palette::inferno),
                rng,
            )?)),
            "stars" => Ok(DemoKind::Stars(Starfield::from_json(
                params,
                palette.unwrap_or_else(Palette::phosphor),
                rng,
            )?)),
            "radar" => Ok(DemoKind::Radar(Radar::from_json(
                params,
                palette.unwrap_or_else(Palette::phosphor),
                rng,
            )?)),
            "plot" => Ok(DemoKind::Plot(Plot::from_json(
                params,
                palette.unwrap_or_else(Palette::phosphor),
            )?)),
            _ => Err(DemoError::UnknownDemo(name.to_string())),
        }
    }

    /// Returns a slice of all recognized demo names.
    pub fn list_demos() -> &'static [&'static str] {
        DEMO_NAMES
    }

    /// Pixel dimensions of the surface this demo renders onto.
    pub fn surface_size(&self) -> (u32, u32) {
        match self {
            DemoKind::Fire(d) => d.surface_size(),
            DemoKind::Stars(d) => d.surface_size(),
            DemoKind::Radar(d) => d.surface_size(),
            DemoKind::Plot(d) => d.surface_size(),
        }
    }
}

impl Generator for DemoKind {
    fn update(&mut self, dt_ms: u64) -> Result<(), DemoError> {
        match self {
            DemoKind::Fire(d) => d.update(dt_ms),
            DemoKind::Stars(d) => d.update(dt_ms),
            DemoKind::Radar(d) => d.update(dt_ms),
            DemoKind::Plot(d) => d.update(dt_ms),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            DemoKind::Fire(d) => d.render(surface),
            DemoKind::Stars(d) => d.render(surface),
            DemoKind::Radar(d) => d.render(surface),
            DemoKind::Plot(d) => d.render(surface),
        }
    }

    fn params(&self) -> Value {
        match self {
            DemoKind::Fire(d) => d.params(),
            DemoKind::Stars(d) => d.params(),
            DemoKind::Radar(d) => d.params(),
            DemoKind::Plot(d) => d.params(),
        }
    }
}
