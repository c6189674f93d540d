//! Browser driver for a [`ParticleField`].
//!
//! A [`FrameLoop`] sizes a canvas to the viewport, seeds a field for it, keeps
//! it sized on window `resize`, and ticks it once per `requestAnimationFrame`.
//! Each tick re-arms the next one only after it has finished, so ticks never
//! overlap. The loop keeps itself alive until the page goes away or
//! [`FrameLoop::stop`] is called.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::StarfieldConfig;
use super::error::AttachError;
use super::particles::{Particle, ParticleField};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Everything the frame and resize callbacks share.
struct LoopState {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	field: RefCell<ParticleField<SmallRng>>,
	/// False for a still frame: draw on start and on resize only.
	animated: bool,
	running: Cell<bool>,
	ticks: Cell<u64>,
	frame_id: Cell<Option<i32>>,
	animate: RefCell<Option<Closure<dyn FnMut()>>>,
	on_resize: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
	fn request_frame(&self, window: &Window) {
		if let Some(ref cb) = *self.animate.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				self.frame_id.set(Some(id));
			}
		}
	}

	fn fit_to_viewport(&self, window: &Window) -> Option<(f64, f64)> {
		let (w, h) = viewport_size(window)?;
		Some(size_canvas(&self.canvas, w, h))
	}
}

/// Size `canvas` to `width` × `height` and return the size it actually took.
/// The field must use these values, not the fractional viewport ones.
fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) -> (f64, f64) {
	let (w, h) = whole_pixels(width, height);
	canvas.set_width(w);
	canvas.set_height(h);
	(w as f64, h as f64)
}

fn whole_pixels(width: f64, height: f64) -> (u32, u32) {
	(width.max(0.0) as u32, height.max(0.0) as u32)
}

/// Handle to a running starfield. Cloning shares the same loop.
#[derive(Clone)]
pub struct FrameLoop {
	state: Rc<LoopState>,
}

impl FrameLoop {
	/// Bind a new field to `canvas` and start animating it.
	///
	/// Animates unless `config.honor_reduced_motion` is set and the user
	/// prefers reduced motion, in which case a still frame is drawn.
	pub fn start(canvas: HtmlCanvasElement, config: StarfieldConfig) -> Result<Self, AttachError> {
		let window = web_sys::window().ok_or(AttachError::NoWindow)?;
		let animated = !(config.honor_reduced_motion && prefers_reduced_motion(&window));
		Self::start_with_motion(canvas, config, animated)
	}

	/// Like [`FrameLoop::start`], with the motion decision made by the caller.
	pub fn start_with_motion(
		canvas: HtmlCanvasElement,
		config: StarfieldConfig,
		animated: bool,
	) -> Result<Self, AttachError> {
		let window = web_sys::window().ok_or(AttachError::NoWindow)?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
			.ok_or(AttachError::NoContext)?;

		let (w, h) = match viewport_size(&window) {
			Some((vw, vh)) => size_canvas(&canvas, vw, vh),
			None => (canvas.width() as f64, canvas.height() as f64),
		};

		let field = ParticleField::new(config, w, h, browser_rng());
		info!(
			"starfield: {} stars on {}x{} canvas{}",
			field.len(),
			w,
			h,
			if animated { "" } else { " (reduced motion)" }
		);

		let state = Rc::new(LoopState {
			canvas,
			ctx,
			field: RefCell::new(field),
			animated,
			running: Cell::new(true),
			ticks: Cell::new(0),
			frame_id: Cell::new(None),
			animate: RefCell::new(None),
			on_resize: RefCell::new(None),
		});

		let state_resize = state.clone();
		*state.on_resize.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let Some((nw, nh)) = state_resize.fit_to_viewport(&win) else {
				return;
			};
			let mut field = state_resize.field.borrow_mut();
			field.resize(nw, nh);
			if !state_resize.animated {
				field.draw(&state_resize.ctx);
			}
			debug!("starfield: resized to {}x{}", nw, nh);
		}));
		if let Some(ref cb) = *state.on_resize.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		if animated {
			let state_anim = state.clone();
			*state.animate.borrow_mut() = Some(Closure::new(move || {
				if !state_anim.running.get() {
					return;
				}
				state_anim.frame_id.set(None);
				state_anim.field.borrow_mut().tick(&state_anim.ctx);
				state_anim.ticks.set(state_anim.ticks.get() + 1);
				if let Some(win) = web_sys::window() {
					state_anim.request_frame(&win);
				}
			}));
			state.request_frame(&window);
		} else {
			state.field.borrow().draw(&state.ctx);
		}

		Ok(Self { state })
	}

	/// Cancel the pending frame, detach the resize listener and release the
	/// callbacks. Calling it again does nothing.
	pub fn stop(&self) {
		if !self.state.running.replace(false) {
			return;
		}
		if let Some(window) = web_sys::window() {
			if let Some(id) = self.state.frame_id.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *self.state.on_resize.borrow() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		// Dropping the callbacks breaks the state <-> closure cycle.
		self.state.animate.borrow_mut().take();
		self.state.on_resize.borrow_mut().take();
		info!("starfield: stopped");
	}

	pub fn is_running(&self) -> bool {
		self.state.running.get()
	}

	/// Whether frames are being scheduled (false under reduced motion or after stop).
	pub fn is_animated(&self) -> bool {
		self.state.animated && self.is_running()
	}

	/// Number of stars in the bound field.
	pub fn star_count(&self) -> usize {
		self.state.field.borrow().len()
	}

	/// Animation frames run so far.
	pub fn ticks(&self) -> u64 {
		self.state.ticks.get()
	}

	/// Surface dimensions the field currently wraps against.
	pub fn surface_size(&self) -> (f64, f64) {
		let field = self.state.field.borrow();
		(field.width(), field.height())
	}

	/// Copy of the current stars.
	pub fn stars(&self) -> Vec<Particle> {
		self.state.field.borrow().particles().to_vec()
	}
}

/// Look up `canvas_id` in the current document and start a loop on it.
pub fn attach(canvas_id: &str, config: StarfieldConfig) -> Result<FrameLoop, AttachError> {
	let window = web_sys::window().ok_or(AttachError::NoWindow)?;
	let document = window.document().ok_or(AttachError::NoDocument)?;
	let element = document
		.get_element_by_id(canvas_id)
		.ok_or_else(|| AttachError::MissingElement(canvas_id.to_string()))?;
	let canvas: HtmlCanvasElement = element
		.dyn_into()
		.map_err(|_| AttachError::NotACanvas(canvas_id.to_string()))?;
	FrameLoop::start(canvas, config)
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media(REDUCED_MOTION_QUERY)
		.ok()
		.flatten()
		.is_some_and(|mq| mq.matches())
}

fn browser_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}
