//! Fading dot trail that follows the pointer.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use super::listener::EventListener;

/// Number of pointer samples kept.
pub const TRAIL_LENGTH: usize = 20;

/// One dot of the trail, ready to style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailDot {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub opacity: f64,
}

/// Most recent pointer positions, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailBuffer {
	points: VecDeque<(f64, f64)>,
	capacity: usize,
}

impl Default for TrailBuffer {
	fn default() -> Self {
		Self::with_capacity(TRAIL_LENGTH)
	}
}

impl TrailBuffer {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			points: VecDeque::with_capacity(capacity),
			capacity,
		}
	}

	/// Record a position, evicting the oldest once full.
	pub fn push(&mut self, x: f64, y: f64) {
		if self.capacity == 0 {
			return;
		}
		if self.points.len() == self.capacity {
			self.points.pop_front();
		}
		self.points.push_back((x, y));
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Dots from oldest to newest; newer dots are larger and more opaque.
	pub fn dots(&self) -> impl Iterator<Item = TrailDot> + '_ {
		let n = self.points.len() as f64;
		self.points.iter().enumerate().map(move |(i, &(x, y))| {
			let rank = (i + 1) as f64;
			TrailDot {
				x,
				y,
				size: rank * 0.5,
				opacity: rank / n * 0.3,
			}
		})
	}
}

/// Overlay of fixed, non-interactive dots trailing the pointer.
#[component]
pub fn CursorTrail() -> impl IntoView {
	let trail = RwSignal::new(TrailBuffer::default());
	let listener: Rc<RefCell<Option<EventListener>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		if listener.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		*listener.borrow_mut() = EventListener::new(&window, "mousemove", move |ev| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				trail.update(|t| t.push(ev.client_x() as f64, ev.client_y() as f64));
			}
		});
	});

	view! {
		<div class="cursor-trail-layer" aria-hidden="true">
			{move || {
				trail
					.with(|t| t.dots().collect::<Vec<_>>())
					.into_iter()
					.map(|dot| {
						let style = format!(
							"position: fixed; left: {}px; top: {}px; width: {}px; height: {}px; background-color: #4f8cff; border-radius: 50%; pointer-events: none; opacity: {}; z-index: 9999; transform: translate(-50%, -50%); transition: opacity 0.1s ease;",
							dot.x, dot.y, dot.size, dot.size, dot.opacity
						);
						view! { <div class="cursor-trail" style=style></div> }
					})
					.collect_view()
			}}
		</div>
	}
}
