use std::time::Instant;

pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started; drives the animated transforms
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Wall clock for the render loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            frame_number: 0,
            start_time: start,
            last_frame_time: start,
        }
    }

    pub fn tick(&mut self) -> FrameInfo {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`. A timestamp older than the previous frame yields a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let delta = now.saturating_duration_since(self.last_frame_time).as_secs_f32();
        let time = now.saturating_duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a fixed window
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame; returns the new average when a window completes
    pub fn update(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.elapsed;
            self.frame_count = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
