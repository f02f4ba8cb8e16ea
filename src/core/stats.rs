use instant::Instant;

/// Rolling frame-rate window. Every `interval` recorded frames it reports the
/// mean frames per second across that window and starts a new one.
pub struct FrameStats {
    interval: u32,
    window_start: Option<Instant>,
    frames_in_window: u32,
}

impl FrameStats {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            window_start: None,
            frames_in_window: 0,
        }
    }

    pub fn record(&mut self, now: Instant) -> Option<f32> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return None;
        };
        self.frames_in_window += 1;
        if self.frames_in_window < self.interval {
            return None;
        }
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        let frames = self.frames_in_window;
        self.window_start = Some(now);
        self.frames_in_window = 0;
        (elapsed > 0.0).then(|| frames as f32 / elapsed)
    }
}
