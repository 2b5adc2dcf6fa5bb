//! The input capability: discrete events drained once per tick.

use std::collections::VecDeque;

/// Key identity carried by a `KeyUp` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// The designated cancel key.
    Escape,
    /// Any other key, by platform scancode.
    Other(u32),
}

/// A single input event.
///
/// The demos recognize exactly two shapes: a window-close request and a key
/// release. Everything else an input backend sees is dropped before it gets
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Quit,
    KeyUp(KeyCode),
}

/// Produces the finite batch of events pending since the last poll.
pub trait InputSource {
    /// Drains all pending events; may be empty.
    fn poll(&mut self) -> Vec<Event>;
}

/// An input source with no device behind it; never produces events.
#[derive(Debug, Default)]
pub struct NullInput;

impl InputSource for NullInput {
    fn poll(&mut self) -> Vec<Event> {
        Vec::new()
    }
}

/// Replays scripted event batches, one batch per poll, then goes quiet.
#[derive(Debug)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<Event>>,
}

impl ScriptedInput {
    pub fn new(batches: Vec<Vec<Event>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<Event> {
        self.batches.pop_front().unwrap_or_default()
    }
}

/// Requests a quit on the nth poll, bounding a headless run to n ticks.
///
/// The quit arrives during tick n's poll, so that tick still completes; a
/// budget of zero behaves like one.
#[derive(Debug)]
pub struct TickBudget {
    remaining: u64,
}

impl TickBudget {
    /// Budgets `ticks` ticks.
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }
}

impl InputSource for TickBudget {
    fn poll(&mut self) -> Vec<Event> {
        if self.remaining > 1 {
            self.remaining -= 1;
            Vec::new()
        } else {
            self.remaining = 0;
            vec![Event::Quit]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_input_never_produces_events() {
        let mut input = NullInput;
        for _ in 0..5 {
            assert!(input.poll().is_empty());
        }
    }

    #[test]
    fn scripted_input_replays_batches_then_goes_quiet() {
        let mut input = ScriptedInput::new(vec![
            vec![Event::KeyUp(KeyCode::Other(32))],
            vec![],
            vec![Event::Quit],
        ]);
        assert_eq!(input.poll(), vec![Event::KeyUp(KeyCode::Other(32))]);
        assert_eq!(input.poll(), vec![]);
        assert_eq!(input.poll(), vec![Event::Quit]);
        assert_eq!(input.poll(), vec![]);
    }

    #[test]
    fn tick_budget_quits_on_the_nth_poll() {
        let mut input = TickBudget::new(3);
        assert!(input.poll().is_empty());
        assert!(input.poll().is_empty());
        assert_eq!(input.poll(), vec![Event::Quit]);
        assert_eq!(input.poll(), vec![Event::Quit]);
    }

    #[test]
    fn tick_budget_of_zero_quits_immediately() {
        let mut input = TickBudget::new(0);
        assert_eq!(input.poll(), vec![Event::Quit]);
    }

    #[test]
    fn input_trait_is_object_safe() {
        let mut input: Box<dyn InputSource> = Box::new(NullInput);
        assert!(input.poll().is_empty());
    }
}
