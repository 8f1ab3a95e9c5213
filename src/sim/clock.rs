//! Time sources for the driving loop
//!
//! The session only ever sees timestamps in milliseconds; where they come
//! from is decided here.

use std::cell::Cell;

/// Monotonic millisecond time source
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic clock (`performance.now()` on web, `Instant` since construction on native)
#[derive(Debug)]
pub struct SystemClock {
    #[cfg(target_arch = "wasm32")]
    performance: Option<web_sys::Performance>,
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        let performance = web_sys::window().and_then(|w| w.performance());
        #[cfg(target_arch = "wasm32")]
        if performance.is_none() {
            log::warn!("performance.now() unavailable; game clock will not advance");
        }

        Self {
            #[cfg(target_arch = "wasm32")]
            performance,
            #[cfg(not(target_arch = "wasm32"))]
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => 0.0,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock for tests and headless runs
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Number of frames averaged for the FPS estimate
const FPS_WINDOW: usize = 60;

/// Per-frame delta and FPS tracking for the driving loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    /// Samples recorded so far, saturating at the window size
    samples: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            samples: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp and return the delta (ms) since the previous one.
    /// The first frame reports a delta of zero.
    pub fn frame(&mut self, time: f64) -> f64 {
        let delta = self.last_time.map_or(0.0, |last| (time - last).max(0.0));
        self.last_time = Some(time);

        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.samples = (self.samples + 1).min(FPS_WINDOW);

        // Once the window is full, the oldest sample sits at the slot we will overwrite next
        if self.samples == FPS_WINDOW {
            let oldest_time = self.frame_times[self.frame_index];
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW as f64 - 1.0) * 1000.0 / elapsed).round() as u32;
            }
        }

        delta
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
