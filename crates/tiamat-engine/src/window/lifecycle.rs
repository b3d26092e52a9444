/// Window lifecycle phase.
///
/// `Closed` is terminal: once entered, the runtime presents no further
/// frames and winds down the event loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Open,
    Closed,
}

/// Open/closed state machine for a window.
///
/// The runtime consults this at the top of every loop turn; the close
/// transition is the sole loop-termination condition. Kept independent of
/// `winit` so loop-termination behavior is testable with synthetic events.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
}

impl Lifecycle {
    /// A lifecycle starts open, matching window construction.
    #[inline]
    pub fn new() -> Self {
        Self { phase: Phase::Open }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Transitions Open→Closed.
    ///
    /// Returns `true` only on the transition edge. Repeated requests are
    /// no-ops because `Closed` is terminal.
    #[inline]
    pub fn request_close(&mut self) -> bool {
        match self.phase {
            Phase::Open => {
                self.phase = Phase::Closed;
                true
            }
            Phase::Closed => false,
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Synthetic window event for driving the loop shape without a
    /// windowing system. Only the close kind is meaningful here; other
    /// kinds exist to verify they are ignored.
    #[derive(Debug, Copy, Clone)]
    enum SyntheticEvent {
        CloseRequested,
        Resized,
        Focused,
    }

    /// Drives the render loop shape from the original program: each
    /// iteration drains that frame's events, reacts to close, then either
    /// exits or presents. Returns the number of frames presented.
    ///
    /// `max_frames` bounds the run for event sequences that never close.
    fn run_bounded(
        lifecycle: &mut Lifecycle,
        events_per_frame: &[Vec<SyntheticEvent>],
        max_frames: usize,
    ) -> usize {
        let mut presented = 0;
        let mut transitions = 0;

        for frame in 0..max_frames {
            for ev in events_per_frame.get(frame).map_or(&[][..], |v| &v[..]) {
                if let SyntheticEvent::CloseRequested = ev {
                    if lifecycle.request_close() {
                        transitions += 1;
                    }
                }
            }

            if !lifecycle.is_open() {
                break;
            }

            presented += 1;
        }

        assert!(transitions <= 1, "close transition fired more than once");
        presented
    }

    #[test]
    fn starts_open() {
        let lifecycle = Lifecycle::new();
        assert!(lifecycle.is_open());
        assert_eq!(lifecycle.phase(), Phase::Open);
    }

    #[test]
    fn close_transition_fires_exactly_once() {
        let mut lifecycle = Lifecycle::new();
        assert!(lifecycle.request_close());
        assert!(!lifecycle.request_close());
        assert!(!lifecycle.request_close());
        assert_eq!(lifecycle.phase(), Phase::Closed);
    }

    #[test]
    fn loop_without_close_event_keeps_presenting() {
        let mut lifecycle = Lifecycle::new();
        let events = vec![vec![SyntheticEvent::Resized], vec![], vec![SyntheticEvent::Focused]];

        let presented = run_bounded(&mut lifecycle, &events, 1000);

        assert_eq!(presented, 1000);
        assert!(lifecycle.is_open());
    }

    #[test]
    fn close_event_stops_the_loop_within_one_iteration() {
        let mut lifecycle = Lifecycle::new();
        // Close arrives during frame 3's event drain, so frames 0..3 present
        // and no frame is presented after the transition is observed.
        let mut events = vec![Vec::new(); 3];
        events.push(vec![SyntheticEvent::CloseRequested]);

        let presented = run_bounded(&mut lifecycle, &events, 1000);

        assert_eq!(presented, 3);
        assert_eq!(lifecycle.phase(), Phase::Closed);
    }

    #[test]
    fn close_on_first_iteration_presents_zero_frames() {
        let mut lifecycle = Lifecycle::new();
        let events = vec![vec![SyntheticEvent::CloseRequested]];

        let presented = run_bounded(&mut lifecycle, &events, 1000);

        assert_eq!(presented, 0);
        assert!(!lifecycle.is_open());
    }

    #[test]
    fn duplicate_close_events_in_one_frame_transition_once() {
        let mut lifecycle = Lifecycle::new();
        let events = vec![vec![
            SyntheticEvent::CloseRequested,
            SyntheticEvent::CloseRequested,
        ]];

        // run_bounded asserts the single-transition invariant internally.
        let presented = run_bounded(&mut lifecycle, &events, 10);
        assert_eq!(presented, 0);
    }
}
