//! The demo loop: one simulation tick and one render pass per distinct
//! clock reading, until a stop signal or a fault.

use crate::clock::Clock;
use crate::input::{Event, InputSource, KeyCode};
use crate::lifecycle::{Lifecycle, LifecycleMachine};
use log::{error, info};
use phosphor_core::color::Argb;
use phosphor_core::error::DemoError;
use phosphor_core::generator::Generator;
use phosphor_core::surface::Surface;
use thiserror::Error;

/// Errors surfaced by a demo run.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A fault inside the loop; the run was torn down and must exit non-zero.
    #[error("demo fault: {0}")]
    Fault(#[from] DemoError),
}

/// Drives a [`Generator`] against injected clock, input, and surface
/// capabilities.
///
/// Single-threaded and cooperative: all state is owned here, the surface is
/// borrowed for one render per tick, and a stop request is observed at the
/// top of the next iteration, never preemptively.
#[derive(Debug, Default)]
pub struct Scheduler {
    lifecycle: LifecycleMachine,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            lifecycle: LifecycleMachine::new(),
            ticks: 0,
        }
    }

    /// The lifecycle state, `Loading` before [`run`](Self::run) and terminal
    /// after it.
    pub fn state(&self) -> Lifecycle {
        self.lifecycle.state()
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs the demo loop until a stop signal or a fault.
    ///
    /// Per distinct clock reading: drain input (a `Quit` event or an Escape
    /// release requests a stop), advance the simulation by the elapsed
    /// milliseconds, clear, render, present. The tick in flight when a stop
    /// is requested still completes; the loop exits at the next top-of-loop
    /// check.
    ///
    /// A fault from `update` or `present` is caught here exactly once:
    /// logged, the state forced to `Failed`, and returned as
    /// `RuntimeError::Fault` after teardown. Teardown runs exactly once on
    /// every path out of the loop.
    pub fn run(
        &mut self,
        clock: &mut dyn Clock,
        input: &mut dyn InputSource,
        generator: &mut dyn Generator,
        surface: &mut dyn Surface,
    ) -> Result<(), RuntimeError> {
        info!("demo starting");
        self.lifecycle.advance(Lifecycle::Playing);

        let mut last_ms = clock.now_ms();
        let mut fault: Option<DemoError> = None;

        while self.lifecycle.alive() {
            let now_ms = clock.now_ms();
            if now_ms == last_ms {
                continue;
            }
            // saturating: a clock that violates monotonicity costs a zero-dt
            // tick instead of a panic.
            let dt_ms = now_ms.saturating_sub(last_ms);
            last_ms = now_ms;

            for event in input.poll() {
                match event {
                    Event::Quit | Event::KeyUp(KeyCode::Escape) => self.lifecycle.stop(),
                    Event::KeyUp(_) => {}
                }
            }

            let result = generator.update(dt_ms).and_then(|()| {
                surface.clear(Argb::BLACK);
                generator.render(surface);
                surface.present()
            });
            match result {
                Ok(()) => self.ticks += 1,
                Err(e) => {
                    error!("demo fault: {e}");
                    self.lifecycle.fail();
                    fault = Some(e);
                }
            }
        }

        // Single exit point: teardown happens exactly once whether the loop
        // ended on a clean stop or a fault. The surface borrow ends here;
        // the caller's ownership releases the rendering resources.
        info!("demo teardown after {} ticks", self.ticks);
        match fault {
            Some(e) => Err(RuntimeError::Fault(e)),
            None => Ok(()),
        }
    }
}
