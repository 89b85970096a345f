//! Application loop lifecycle.
//!
//! Two states, one transition: `Running` from the moment the window exists,
//! `Closed` once a close request is observed. The close check happens at the
//! top of every iteration, before any drawing, and there is no way back to
//! `Running`. `FrameLoop` owns the phase plus a count of frames actually
//! rendered, which keeps the loop's behavior testable without a real window.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Closed,
}

pub struct FrameLoop {
    phase: Phase,
    frames_rendered: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            phase: Phase::Running,
            frames_rendered: 0,
        }
    }

    /// Top-of-iteration check. Returns true when the caller should render a
    /// frame; false once the loop has terminated. Observing `close_requested`
    /// here is the only ordinary path into `Closed`.
    ///
    /// The counter tracks frames attempted: the presentation layer may still
    /// skip a frame (lost surface) after `advance` returns true.
    pub fn advance(&mut self, close_requested: bool) -> bool {
        if self.phase == Phase::Closed {
            return false;
        }
        if close_requested {
            self.phase = Phase::Closed;
            return false;
        }
        self.frames_rendered += 1;
        true
    }

    /// Out-of-band close (window close button, close-bound key). Idempotent.
    pub fn request_close(&mut self) {
        self.phase = Phase::Closed;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Rgba8, PURPLE, SKY_BLUE};
    use crate::frame::clear_color;
    use crate::input::{InputState, Key};

    /// Stand-in for the windowing library: records lifecycle events so the
    /// scenario tests can assert on ordering as well as frame contents.
    #[derive(Debug, PartialEq)]
    enum Event {
        WindowCreated,
        Frame(Rgba8),
        WindowReleased,
    }

    struct MockBackend {
        events: Vec<Event>,
        window_creation_fails: bool,
        // Per-iteration scripts, consumed front to back.
        close_requests: Vec<bool>,
        space_held: Vec<bool>,
    }

    impl MockBackend {
        fn new(close_requests: Vec<bool>, space_held: Vec<bool>) -> Self {
            Self {
                events: Vec::new(),
                window_creation_fails: false,
                close_requests,
                space_held,
            }
        }

        fn failing_window() -> Self {
            let mut backend = Self::new(Vec::new(), Vec::new());
            backend.window_creation_fails = true;
            backend
        }

        /// Drive the loop the way the application does: create the window,
        /// poll close state at the top of each iteration, render one frame
        /// per surviving iteration, release the window after termination.
        /// Window creation failure is fatal and skips the loop entirely.
        fn run(&mut self) -> Result<FrameLoop, String> {
            if self.window_creation_fails {
                return Err("Failed to create window".to_string());
            }
            self.events.push(Event::WindowCreated);
            let mut frame_loop = FrameLoop::new();
            let mut input = InputState::new();
            let mut iteration = 0;
            loop {
                let close = self.close_requests.get(iteration).copied().unwrap_or(true);
                if !frame_loop.advance(close) {
                    break;
                }
                let held = self.space_held.get(iteration).copied().unwrap_or(false);
                if held {
                    input.key_down(Key::Space);
                } else {
                    input.key_up(Key::Space);
                }
                self.events.push(Event::Frame(clear_color(&input)));
                input.end_frame();
                iteration += 1;
            }
            self.events.push(Event::WindowReleased);
            Ok(frame_loop)
        }
    }

    #[test]
    fn one_held_frame_then_close() {
        let mut backend = MockBackend::new(vec![false, true], vec![true]);
        let frame_loop = backend.run().expect("window should open");
        assert_eq!(
            backend.events,
            vec![
                Event::WindowCreated,
                Event::Frame(PURPLE),
                Event::WindowReleased,
            ]
        );
        assert_eq!(frame_loop.frames_rendered(), 1);
        assert!(frame_loop.is_closed());
    }

    #[test]
    fn three_released_frames_then_close() {
        let mut backend = MockBackend::new(
            vec![false, false, false, true],
            vec![false, false, false],
        );
        let frame_loop = backend.run().expect("window should open");
        assert_eq!(
            backend.events,
            vec![
                Event::WindowCreated,
                Event::Frame(SKY_BLUE),
                Event::Frame(SKY_BLUE),
                Event::Frame(SKY_BLUE),
                Event::WindowReleased,
            ]
        );
        assert_eq!(frame_loop.frames_rendered(), 3);
    }

    #[test]
    fn close_on_first_check_renders_zero_frames() {
        let mut backend = MockBackend::new(vec![true], vec![]);
        let frame_loop = backend.run().expect("window should open");
        // Window is still created and released; no frame in between.
        assert_eq!(
            backend.events,
            vec![Event::WindowCreated, Event::WindowReleased]
        );
        assert_eq!(frame_loop.frames_rendered(), 0);
        assert!(frame_loop.is_closed());
    }

    #[test]
    fn window_creation_precedes_first_frame_and_release_follows_loop() {
        let mut backend = MockBackend::new(vec![false, true], vec![false]);
        backend.run().expect("window should open");
        assert_eq!(backend.events.first(), Some(&Event::WindowCreated));
        assert_eq!(backend.events.last(), Some(&Event::WindowReleased));
        assert!(matches!(backend.events[1], Event::Frame(_)));
    }

    #[test]
    fn window_creation_failure_enters_no_frame_loop() {
        let mut backend = MockBackend::failing_window();
        let result = backend.run();
        assert!(result.is_err());
        // No frame is ever rendered and no window lifecycle event fires.
        assert!(backend.events.is_empty());
    }

    #[test]
    fn loop_runs_while_no_close_request_is_observed() {
        let mut frame_loop = FrameLoop::new();
        for _ in 0..1000 {
            assert!(frame_loop.advance(false));
        }
        assert_eq!(frame_loop.phase(), Phase::Running);
        assert_eq!(frame_loop.frames_rendered(), 1000);
    }

    #[test]
    fn closed_is_terminal() {
        let mut frame_loop = FrameLoop::new();
        assert!(frame_loop.advance(false));
        assert!(!frame_loop.advance(true));
        // A later iteration with no close request must not resurrect the loop.
        assert!(!frame_loop.advance(false));
        assert_eq!(frame_loop.phase(), Phase::Closed);
        assert_eq!(frame_loop.frames_rendered(), 1);
    }

    #[test]
    fn request_close_is_idempotent_and_terminal() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.request_close();
        frame_loop.request_close();
        assert!(frame_loop.is_closed());
        assert!(!frame_loop.advance(false));
        assert_eq!(frame_loop.frames_rendered(), 0);
    }
}
