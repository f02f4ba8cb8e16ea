use crate::constants::{LINK_LINE_WIDTH, STATS_LOG_INTERVAL_FRAMES};
use crate::core::{
    FieldConfig, FieldLoop, FrameHandle, FrameScheduler, FrameStats, ListenerId, ParticleField,
    ResizeEvents, Surface, Viewport,
};
use crate::dom;
use crate::error::MountError;
use crate::theme;
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type CanvasLoop = FieldLoop<RafScheduler, WindowResize>;

/// `requestAnimationFrame` driving a callback stored in a shared slot.
pub struct RafScheduler {
    window: web::Window,
    slot: FrameSlot,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.slot.borrow();
        let callback = slot.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Window `resize` events. The handler only records the new size; the frame
/// loop applies it to the field before the next step.
pub struct WindowResize {
    window: web::Window,
    on_resize: Rc<dyn Fn()>,
    listener: Option<(ListenerId, dom::Listener)>,
    next_id: u32,
}

impl ResizeEvents for WindowResize {
    fn subscribe(&mut self) -> Option<ListenerId> {
        let on_resize = self.on_resize.clone();
        let listener = dom::Listener::new(&self.window, "resize", move |_| on_resize())
            .map_err(|e| log::warn!("[field] resize listener: {}", e))
            .ok()?;
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listener = Some((id, listener));
        Some(id)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        if matches!(&self.listener, Some((current, _)) if *current == id) {
            // dropping the Listener removes it from the window
            self.listener = None;
        }
    }
}

/// Canvas2D implementation of the field's drawing seam.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, bounds: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, bounds.width as f64, bounds.height as f64);
    }

    fn dot(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&theme::accent_rgba(alpha));
        self.ctx.fill();
    }

    fn link(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&theme::accent_rgba(alpha));
        self.ctx.set_line_width(LINK_LINE_WIDTH);
        self.ctx.stroke();
    }
}

/// The animated background. Runs until dropped; dropping cancels the pending
/// frame and removes the resize listener.
pub struct NeuronField {
    runner: Rc<RefCell<CanvasLoop>>,
    slot: FrameSlot,
}

impl NeuronField {
    pub fn mount(
        window: &web::Window,
        canvas: &web::HtmlCanvasElement,
        config: FieldConfig,
    ) -> Result<Self, MountError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(dom::js_err)?
            .ok_or(MountError::NoCanvasContext)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoCanvasContext)?;

        let viewport = dom::viewport_size(window).ok_or(MountError::NoWindow)?;
        dom::size_canvas(canvas, viewport);
        let mut rng = StdRng::from_entropy();
        let field = ParticleField::new(config, viewport, &mut rng);
        log::info!(
            "[field] {} particles on {}x{}",
            field.particles().len(),
            viewport.width,
            viewport.height
        );

        let pending_resize: Rc<Cell<Option<Viewport>>> = Rc::new(Cell::new(None));
        let on_resize: Rc<dyn Fn()> = {
            let window = window.clone();
            let canvas = canvas.clone();
            let pending_resize = pending_resize.clone();
            Rc::new(move || {
                if let Some(vp) = dom::viewport_size(&window) {
                    dom::size_canvas(&canvas, vp);
                    pending_resize.set(Some(vp));
                }
            })
        };

        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let runner = Rc::new(RefCell::new(FieldLoop::new(
            field,
            RafScheduler {
                window: window.clone(),
                slot: slot.clone(),
            },
            WindowResize {
                window: window.clone(),
                on_resize,
                listener: None,
                next_id: 0,
            },
        )));

        let weak = Rc::downgrade(&runner);
        let mut surface = CanvasSurface { ctx };
        let mut stats = FrameStats::new(STATS_LOG_INTERVAL_FRAMES);
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            let Some(runner) = weak.upgrade() else {
                return;
            };
            let mut runner = runner.borrow_mut();
            if let Some(vp) = pending_resize.take() {
                runner.on_resize(vp);
            }
            if runner.on_frame(&mut surface) {
                if let Some(fps) = stats.record(Instant::now()) {
                    log::debug!("[field] {:.1} fps over {} frames", fps, runner.frames());
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if !runner.borrow_mut().start() {
            log::warn!("[field] animation frames unavailable; background stays static");
        }
        Ok(Self { runner, slot })
    }
}

impl Drop for NeuronField {
    fn drop(&mut self) {
        self.runner.borrow_mut().stop();
        self.slot.borrow_mut().take();
        log::info!("[field] torn down");
    }
}
