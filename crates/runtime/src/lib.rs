#![deny(unsafe_code)]
//! Tick scheduler and lifecycle state machine for the phosphor demos.
//!
//! One scheduler drives every demo through the `Generator` trait; the
//! clock, input source, and surface it needs are injected capabilities, so
//! the same loop runs against a real window or a headless buffer.

pub mod clock;
pub mod input;
pub mod lifecycle;
pub mod scheduler;

pub use clock::{Clock, FixedStepClock, SystemClock};
pub use input::{Event, InputSource, KeyCode, NullInput, ScriptedInput, TickBudget};
pub use lifecycle::{Lifecycle, LifecycleMachine};
pub use scheduler::{RuntimeError, Scheduler};
