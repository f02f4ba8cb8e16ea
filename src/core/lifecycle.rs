use crate::core::field::{ParticleField, Surface, Viewport};

/// Opaque id of a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Opaque id of a resize subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(pub u32);

/// Per-display-frame scheduling primitive (requestAnimationFrame in the
/// browser, a counter in tests).
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Viewport resize notification source.
pub trait ResizeEvents {
    fn subscribe(&mut self) -> Option<ListenerId>;
    fn unsubscribe(&mut self, id: ListenerId);
}

/// Owns a particle field and drives it once per display frame until stopped.
///
/// The host calls [`FieldLoop::on_frame`] from its frame callback; the loop
/// asks the scheduler for the next frame itself. Every registration made in
/// [`FieldLoop::start`] is undone by [`FieldLoop::stop`], which also runs on
/// drop.
pub struct FieldLoop<S: FrameScheduler, R: ResizeEvents> {
    field: ParticleField,
    scheduler: S,
    resize: R,
    pending: Option<FrameHandle>,
    listener: Option<ListenerId>,
    running: bool,
    frames: u64,
}

impl<S: FrameScheduler, R: ResizeEvents> FieldLoop<S, R> {
    pub fn new(field: ParticleField, scheduler: S, resize: R) -> Self {
        Self {
            field,
            scheduler,
            resize,
            pending: None,
            listener: None,
            running: false,
            frames: 0,
        }
    }

    /// Subscribe to resizes and request the first frame. Calling it on a
    /// running loop does nothing. Returns whether the loop is running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return true;
        }
        self.listener = self.resize.subscribe();
        self.pending = self.scheduler.request_frame();
        self.running = self.pending.is_some();
        if !self.running {
            // no frame primitive: undo the subscription so nothing dangles
            if let Some(id) = self.listener.take() {
                self.resize.unsubscribe(id);
            }
        }
        self.running
    }

    /// Render one frame and schedule the next. A callback arriving after
    /// [`FieldLoop::stop`] is ignored and schedules nothing.
    pub fn on_frame<F: Surface + ?Sized>(&mut self, surface: &mut F) -> bool {
        if !self.running {
            return false;
        }
        self.pending = None;
        self.field.frame(surface);
        self.frames += 1;
        self.pending = self.scheduler.request_frame();
        // a refused request ends the loop; the resize subscription stays
        // until stop()
        self.running = self.pending.is_some();
        true
    }

    pub fn on_resize(&mut self, bounds: Viewport) {
        self.field.resize(bounds);
    }

    /// Cancel the pending frame and drop the resize subscription.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(id) = self.listener.take() {
            self.resize.unsubscribe(id);
        }
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

impl<S: FrameScheduler, R: ResizeEvents> Drop for FieldLoop<S, R> {
    fn drop(&mut self) {
        self.stop();
    }
}
