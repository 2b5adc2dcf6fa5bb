//! The `Generator` trait every demo implements.
//!
//! The trait is object-safe so the scheduler and the registry can drive any
//! demo through `&mut dyn Generator` without knowing which one it is.

use crate::error::DemoError;
use crate::surface::Surface;
use serde_json::Value;

/// A procedural demo: one simulation step and one render pass per tick.
///
/// The scheduler calls `update` then `render` exactly once per distinct
/// clock reading. Implementations own all of their state (field, particle
/// pool, RNG) and never touch the surface outside `render`.
pub trait Generator {
    /// Advances the simulation by `dt_ms` milliseconds.
    ///
    /// The simulation math itself has no fallible paths; errors here mean a
    /// generator detected an unrecoverable inconsistency and the run must
    /// abort.
    fn update(&mut self, dt_ms: u64) -> Result<(), DemoError>;

    /// Draws the current state onto the surface.
    ///
    /// Borrows the surface for this call only, fills rectangles, and
    /// returns; presentation belongs to the scheduler.
    fn render(&self, surface: &mut dyn Surface);

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;
}
