//! Frame clock for pacing diagnostics.
//!
//! Pacing itself belongs to the presentation layer (Fifo present mode blocks
//! on vsync); this clock only observes, smoothing frame times over a short
//! window so the app can log a stable FPS figure instead of per-frame noise.

use std::time::Instant;

const FPS_SAMPLE_COUNT: usize = 60;

// A hitch this long usually means the window was blocked (drag, modal),
// not a render problem.
const HITCH_WARN_SECONDS: f64 = 0.25;

pub struct FrameClock {
    pub frame_count: u64,
    pub real_dt: f64,
    last_instant: Instant,

    fps_samples: [f64; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    pub smoothed_fps: f64,
    pub smoothed_frame_time_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            real_dt: 0.0,
            last_instant: Instant::now(),
            fps_samples: [1.0 / 60.0; FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            smoothed_fps: 60.0,
            smoothed_frame_time_ms: 16.667,
        }
    }

    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        self.real_dt = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.frame_count += 1;

        if self.real_dt > HITCH_WARN_SECONDS {
            log::warn!("Frame took {:.1}ms", self.real_dt * 1000.0);
        }

        // FPS smoothing
        self.fps_samples[self.fps_sample_index] = self.real_dt;
        self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
        let avg_dt: f64 = self.fps_samples.iter().sum::<f64>() / FPS_SAMPLE_COUNT as f64;
        self.smoothed_frame_time_ms = avg_dt * 1000.0;
        self.smoothed_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };
    }

    /// True once per `FPS_SAMPLE_COUNT` frames; gates periodic FPS logging.
    pub fn should_log_fps(&self) -> bool {
        self.frame_count > 0 && self.frame_count % FPS_SAMPLE_COUNT as u64 == 0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
