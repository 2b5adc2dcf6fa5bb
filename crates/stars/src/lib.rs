#![deny(unsafe_code)]
//! Star and radar particle generators.
//!
//! Both demos drive the same pool mechanics: a fixed number of point lights
//! fade out at a configured rate and are reborn the moment they cross the
//! brightness threshold. They differ only in where rebirth puts a particle —
//! anywhere in the window ([`Starfield`]) or on the current sweep ray
//! ([`Radar`]).
//!
//! Decay is elapsed-time scaled (`decay_per_ms * dt_ms`), so the visual
//! fade rate is independent of tick cadence.

use glam::DVec2;
use phosphor_core::error::DemoError;
use phosphor_core::palette::Palette;
use phosphor_core::params::{param_f64, param_usize};
use phosphor_core::rng::Rng;
use phosphor_core::surface::{Rect, Surface};
use phosphor_core::Generator;
use serde_json::{json, Value};
use std::f64::consts::TAU;

/// Default window width in pixels.
const DEFAULT_WIDTH: usize = 800;
/// Default window height in pixels.
const DEFAULT_HEIGHT: usize = 600;
/// Default half-side of a rendered particle square, in pixels.
const DEFAULT_RADIUS: usize = 2;
/// Default brightness lost per elapsed millisecond.
const DEFAULT_DECAY_PER_MS: f64 = 0.001;
/// Default brightness at or below which a particle is reborn.
const DEFAULT_THRESHOLD: f64 = 0.05;
/// Default milliseconds for one full radar revolution.
const DEFAULT_SWEEP_DURATION_MS: f64 = 10_000.0;
/// Default particle count for the plain star field.
const DEFAULT_STAR_COUNT: usize = 100;
/// Default particle count for the radar; dense enough to read as a trail.
const DEFAULT_RADAR_COUNT: usize = 10_000;

/// An ephemeral point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: i32,
    pub y: i32,
    pub brightness: f64,
}

/// Parameters shared by both particle demos.
#[derive(Debug, Clone, Copy)]
pub struct StarParams {
    /// Window width in pixels; rebirth positions stay inside it.
    pub width: usize,
    /// Window height in pixels.
    pub height: usize,
    /// Pool size, fixed for the life of the generator.
    pub count: usize,
    /// Half-side of the rendered square.
    pub radius: usize,
    /// Brightness lost per elapsed millisecond.
    pub decay_per_ms: f64,
    /// Brightness at or below which a particle is reborn.
    pub threshold: f64,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            count: DEFAULT_STAR_COUNT,
            radius: DEFAULT_RADIUS,
            decay_per_ms: DEFAULT_DECAY_PER_MS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl StarParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            width: param_usize(params, "width", DEFAULT_WIDTH),
            height: param_usize(params, "height", DEFAULT_HEIGHT),
            count: param_usize(params, "count", DEFAULT_STAR_COUNT),
            radius: param_usize(params, "radius", DEFAULT_RADIUS),
            decay_per_ms: param_f64(params, "decay_per_ms", DEFAULT_DECAY_PER_MS),
            threshold: param_f64(params, "threshold", DEFAULT_THRESHOLD),
        }
    }

    fn validate(&self) -> Result<(), DemoError> {
        if self.width == 0 || self.height == 0 {
            return Err(DemoError::InvalidDimensions);
        }
        Ok(())
    }
}

/// Parameters for the radar variant.
#[derive(Debug, Clone, Copy)]
pub struct RadarParams {
    /// The shared pool parameters.
    pub pool: StarParams,
    /// Milliseconds for one full sweep revolution.
    pub sweep_duration_ms: f64,
    /// Maximum rebirth distance from the center, in pixels.
    pub max_radius: f64,
    /// Sweep origin, in pixels.
    pub center: DVec2,
}

impl Default for RadarParams {
    fn default() -> Self {
        Self {
            pool: StarParams {
                width: 600,
                height: 600,
                count: DEFAULT_RADAR_COUNT,
                decay_per_ms: 0.0012,
                ..StarParams::default()
            },
            sweep_duration_ms: DEFAULT_SWEEP_DURATION_MS,
            max_radius: 300.0,
            center: DVec2::new(300.0, 300.0),
        }
    }
}

impl RadarParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        let pool = StarParams {
            width: param_usize(params, "width", defaults.pool.width),
            height: param_usize(params, "height", defaults.pool.height),
            count: param_usize(params, "count", defaults.pool.count),
            radius: param_usize(params, "radius", defaults.pool.radius),
            decay_per_ms: param_f64(params, "decay_per_ms", defaults.pool.decay_per_ms),
            threshold: param_f64(params, "threshold", defaults.pool.threshold),
        };
        Self {
            pool,
            sweep_duration_ms: param_f64(params, "sweep_duration_ms", defaults.sweep_duration_ms),
            max_radius: param_f64(params, "max_radius", defaults.max_radius),
            center: DVec2::new(
                param_f64(params, "center_x", defaults.center.x),
                param_f64(params, "center_y", defaults.center.y),
            ),
        }
    }

    fn validate(&self) -> Result<(), DemoError> {
        self.pool.validate()?;
        if !self.sweep_duration_ms.is_finite() || self.sweep_duration_ms <= 0.0 {
            return Err(DemoError::InvalidPalette(format!(
                "sweep_duration_ms must be positive, got {}",
                self.sweep_duration_ms
            )));
        }
        Ok(())
    }
}

/// Rebirths a particle anywhere inside the window bounds.
fn birth_anywhere(pool: &StarParams, rng: &mut dyn Rng) -> Particle {
    Particle {
        x: rng.next_range(0.0, pool.width as f64) as i32,
        y: rng.next_range(0.0, pool.height as f64) as i32,
        brightness: rng.next_f64(),
    }
}

/// Rebirths a particle on the current sweep ray, clamped to the window.
fn birth_on_ray(params: &RadarParams, sweep: f64, rng: &mut dyn Rng) -> Particle {
    let distance = rng.next_range(0.0, params.max_radius);
    let bounds = DVec2::new(params.pool.width as f64, params.pool.height as f64);
    let pos = (params.center + distance * DVec2::from_angle(sweep)).clamp(DVec2::ZERO, bounds);
    Particle {
        x: pos.x as i32,
        y: pos.y as i32,
        brightness: rng.next_f64(),
    }
}

/// Fades every particle by `fade` and rebirths the exhausted ones.
fn age_pool<F>(stars: &mut [Particle], fade: f64, threshold: f64, mut rebirth: F)
where
    F: FnMut() -> Particle,
{
    for star in stars {
        star.brightness -= fade;
        if star.brightness <= threshold {
            *star = rebirth();
        }
    }
}

/// Draws each particle as a filled square centered on its position.
fn render_pool(stars: &[Particle], radius: usize, palette: &Palette, surface: &mut dyn Surface) {
    let side = (radius * 2) as u32;
    for star in stars {
        surface.fill_rect(
            Rect::new(star.x - radius as i32, star.y - radius as i32, side, side),
            palette.quantize(star.brightness),
        );
    }
}

/// The plain star field: particles fade and twinkle back anywhere on screen.
pub struct Starfield {
    params: StarParams,
    palette: Palette,
    rng: Box<dyn Rng>,
    stars: Vec<Particle>,
}

impl Starfield {
    /// Creates a star field with every particle freshly born.
    pub fn new(
        params: StarParams,
        palette: Palette,
        mut rng: Box<dyn Rng>,
    ) -> Result<Self, DemoError> {
        params.validate()?;
        let stars = (0..params.count)
            .map(|_| birth_anywhere(&params, rng.as_mut()))
            .collect();
        Ok(Self {
            params,
            palette,
            rng,
            stars,
        })
    }

    /// Creates a star field from a JSON params object.
    pub fn from_json(
        json_params: &Value,
        palette: Palette,
        rng: Box<dyn Rng>,
    ) -> Result<Self, DemoError> {
        Self::new(StarParams::from_json(json_params), palette, rng)
    }

    /// Read-only access to the particle pool.
    pub fn stars(&self) -> &[Particle] {
        &self.stars
    }

    /// Pixel dimensions of the surface this demo renders onto.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.params.width as u32, self.params.height as u32)
    }
}

impl Generator for Starfield {
    fn update(&mut self, dt_ms: u64) -> Result<(), DemoError> {
        let fade = self.params.decay_per_ms * dt_ms as f64;
        let params = self.params;
        let rng = self.rng.as_mut();
        age_pool(&mut self.stars, fade, params.threshold, || {
            birth_anywhere(&params, rng)
        });
        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) {
        render_pool(&self.stars, self.params.radius, &self.palette, surface);
    }

    fn params(&self) -> Value {
        json!({
            "width": self.params.width,
            "height": self.params.height,
            "count": self.params.count,
            "radius": self.params.radius,
            "decay_per_ms": self.params.decay_per_ms,
            "threshold": self.params.threshold,
        })
    }
}

/// The radar variant: rebirth is biased onto a sweeping ray, so the pool
/// reads as a rotating trail of afterglow.
pub struct Radar {
    params: RadarParams,
    palette: Palette,
    rng: Box<dyn Rng>,
    stars: Vec<Particle>,
    /// Current sweep angle, always in [0, 2π).
    sweep: f64,
}

impl Radar {
    /// Creates a radar with every particle born on the initial sweep ray.
    pub fn new(
        params: RadarParams,
        palette: Palette,
        mut rng: Box<dyn Rng>,
    ) -> Result<Self, DemoError> {
        params.validate()?;
        let sweep = 0.0;
        let stars = (0..params.pool.count)
            .map(|_| birth_on_ray(&params, sweep, rng.as_mut()))
            .collect();
        Ok(Self {
            params,
            palette,
            rng,
            stars,
            sweep,
        })
    }

    /// Creates a radar from a JSON params object.
    pub fn from_json(
        json_params: &Value,
        palette: Palette,
        rng: Box<dyn Rng>,
    ) -> Result<Self, DemoError> {
        Self::new(RadarParams::from_json(json_params), palette, rng)
    }

    /// Read-only access to the particle pool.
    pub fn stars(&self) -> &[Particle] {
        &self.stars
    }

    /// The current sweep angle in radians, in [0, 2π).
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Pixel dimensions of the surface this demo renders onto.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.params.pool.width as u32, self.params.pool.height as u32)
    }
}

impl Generator for Radar {
    fn update(&mut self, dt_ms: u64) -> Result<(), DemoError> {
        // Advance the sweep first so this tick's rebirths land on the
        // current ray. rem_euclid keeps the angle in [0, 2π) even when a
        // single dt spans many revolutions.
        let rate = TAU / self.params.sweep_duration_ms;
        self.sweep = (self.sweep + rate * dt_ms as f64).rem_euclid(TAU);

        let fade = self.params.pool.decay_per_ms * dt_ms as f64;
        let params = self.params;
        let sweep = self.sweep;
        let rng = self.rng.as_mut();
        age_pool(&mut self.stars, fade, params.pool.threshold, || {
            birth_on_ray(&params, sweep, rng)
        });
        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) {
        render_pool(&self.stars, self.params.pool.radius, &self.palette, surface);
    }

    fn params(&self) -> Value {
        json!({
            "width": self.params.pool.width,
            "height": self.params.pool.height,
            "count": self.params.pool.count,
            "radius": self.params.pool.radius,
            "decay_per_ms": self.params.pool.decay_per_ms,
            "threshold": self.params.pool.threshold,
            "sweep_duration_ms": self.params.sweep_duration_ms,
            "max_radius": self.params.max_radius,
            "center_x": self.params.center.x,
            "center_y": self.params.center.y,
        })
    }
}
