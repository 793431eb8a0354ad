//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a fixed, full-viewport canvas behind the page and
//! listens on the window for pointer moves and resizes. Frames are driven by
//! a [`FrameLoop`] that owns the `requestAnimationFrame` callback and the id
//! of the next scheduled tick, so the loop can be cancelled when the page is
//! unloaded. A `pagehide` into the back/forward cache leaves the loop alone:
//! the browser suspends animation frames and resumes them on return.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PageTransitionEvent, Window,
};

use super::field::ParticleField;
use super::state::{PointerSnapshot, Viewport};
use super::theme::FieldStyle;
use super::types::FieldConfig;
use crate::components::listener::EventListener;
use crate::components::theme::ThemeMode;

/// Fallback used when the window reports no usable size at startup.
const FALLBACK_VIEWPORT: Viewport = Viewport {
	width: 800.0,
	height: 600.0,
};

/// Current window inner size.
fn window_viewport(window: &Window) -> Viewport {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

/// Whether a `pagehide` with the given `persisted` flag should stop the field.
/// Persisted pages go into the back/forward cache and may be shown again.
fn tears_down_on_pagehide(persisted: bool) -> bool {
	!persisted
}

/// Drives a canvas-backed [`ParticleField`] from `requestAnimationFrame`.
pub struct FrameLoop {
	field: RefCell<ParticleField<CanvasRenderingContext2d>>,
	pointer: Rc<Cell<Option<PointerSnapshot>>>,
	theme: RwSignal<ThemeMode>,
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
	pending: Cell<Option<i32>>,
}

impl FrameLoop {
	/// Build the loop and schedule its first tick.
	pub fn start(
		field: ParticleField<CanvasRenderingContext2d>,
		pointer: Rc<Cell<Option<PointerSnapshot>>>,
		theme: RwSignal<ThemeMode>,
	) -> Rc<Self> {
		let this = Rc::new(Self {
			field: RefCell::new(field),
			pointer,
			theme,
			callback: RefCell::new(None),
			pending: Cell::new(None),
		});

		let weak: Weak<Self> = Rc::downgrade(&this);
		*this.callback.borrow_mut() = Some(Closure::new(move || {
			if let Some(frame_loop) = weak.upgrade() {
				frame_loop.tick();
			}
		}));
		this.schedule();
		this
	}

	fn tick(&self) {
		self.pending.set(None);
		let pointer = self.pointer.get();
		let again = {
			let mut field = self.field.borrow_mut();
			field.style = FieldStyle::for_mode(self.theme.get_untracked());
			field.frame(pointer)
		};
		if again {
			self.schedule();
		}
	}

	fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.callback.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.pending.set(Some(id)),
				Err(e) => warn!("portfolio-fx: requestAnimationFrame failed: {e:?}"),
			}
		}
	}

	/// Forward a new viewport to the simulation. Returns whether it was accepted.
	pub fn resize(&self, viewport: Viewport) -> bool {
		self.field.borrow_mut().resize(viewport)
	}

	/// Cancel the pending tick and stop the field from drawing again.
	pub fn cancel(&self) {
		if let Some(id) = self.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		self.field.borrow_mut().cancel();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// Renders the animated particle background on a fixed canvas.
///
/// The field is created once, when the canvas is mounted, from `config`.
/// Colors follow `theme`. If the canvas has no 2D context the field is not
/// started at all.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(optional)] config: FieldConfig,
	theme: RwSignal<ThemeMode>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop: Rc<RefCell<Option<Rc<FrameLoop>>>> = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Vec<EventListener>>> = Rc::new(RefCell::new(Vec::new()));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if frame_loop.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let mut viewport = window_viewport(&window);
		if !viewport.is_usable() {
			viewport = FALLBACK_VIEWPORT;
		}
		canvas.set_width(viewport.width as u32);
		canvas.set_height(viewport.height as u32);

		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
		let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

		let field = match ParticleField::new(ctx, config.clone(), viewport, seed) {
			Ok(field) => field,
			Err(e) => {
				warn!("portfolio-fx: particle field not started: {e}");
				return;
			}
		};

		let pointer: Rc<Cell<Option<PointerSnapshot>>> = Rc::new(Cell::new(None));
		let running = FrameLoop::start(field, pointer.clone(), theme);
		let mut registered = listeners.borrow_mut();

		registered.extend(EventListener::new(&window, "mousemove", move |ev| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				pointer.set(Some(PointerSnapshot {
					x: ev.client_x() as f64,
					y: ev.client_y() as f64,
				}));
			}
		}));

		let (loop_resize, canvas_resize) = (running.clone(), canvas.clone());
		registered.extend(EventListener::new(&window, "resize", move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let viewport = window_viewport(&win);
			if loop_resize.resize(viewport) {
				canvas_resize.set_width(viewport.width as u32);
				canvas_resize.set_height(viewport.height as u32);
			}
		}));

		let loop_hide = Rc::downgrade(&running);
		registered.extend(EventListener::new(&window, "pagehide", move |ev| {
			let persisted = ev
				.dyn_ref::<PageTransitionEvent>()
				.is_some_and(|ev| ev.persisted());
			if !tears_down_on_pagehide(persisted) {
				return;
			}
			if let Some(frame_loop) = loop_hide.upgrade() {
				frame_loop.cancel();
			}
		}));

		*frame_loop.borrow_mut() = Some(running);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particle-canvas"
			aria-hidden="true"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: -1; opacity: 0.6;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cached_page_keeps_animating() {
		assert!(!tears_down_on_pagehide(true));
	}

	#[test]
	fn unloading_page_stops_the_field() {
		assert!(tears_down_on_pagehide(false));
	}

	#[test]
	fn fallback_viewport_can_start_a_field() {
		assert!(FALLBACK_VIEWPORT.is_usable());
	}
}
