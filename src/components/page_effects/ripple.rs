//! Click ripple on cards.
//!
//! A translucent disc centered on the click point grows out of the card and
//! fades; the `ripple` keyframes live in the page stylesheet.

use std::time::Duration;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::components::listener::EventListener;

/// How long a ripple stays in the DOM; matches the animation length.
pub const LIFETIME: Duration = Duration::from_millis(600);
pub const FILL: &str = "rgba(79, 140, 255, 0.3)";

/// Square box of a ripple, relative to the card's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleBox {
	pub size: f64,
	pub left: f64,
	pub top: f64,
}

/// Place a ripple for a click at client `(x, y)` on a card whose bounding
/// rectangle is `(rect_left, rect_top, width, height)`. The disc is as wide
/// as the card's longer side and centered on the click.
pub fn ripple_box(
	x: f64,
	y: f64,
	rect_left: f64,
	rect_top: f64,
	width: f64,
	height: f64,
) -> RippleBox {
	let size = width.max(height);
	RippleBox {
		size,
		left: x - rect_left - size / 2.0,
		top: y - rect_top - size / 2.0,
	}
}

/// Inline style declarations for a ripple span.
pub fn ripple_style(ripple: RippleBox) -> [(&'static str, String); 10] {
	let px = |v: f64| format!("{v}px");
	[
		("position", "absolute".into()),
		("width", px(ripple.size)),
		("height", px(ripple.size)),
		("left", px(ripple.left)),
		("top", px(ripple.top)),
		("background", FILL.into()),
		("border-radius", "50%".into()),
		("transform", "scale(0)".into()),
		("animation", "ripple 0.6s linear".into()),
		("pointer-events", "none".into()),
	]
}

fn spawn_ripple(document: &Document, card: &HtmlElement, ev: &MouseEvent) {
	let rect = card.get_bounding_client_rect();
	let placed = ripple_box(
		ev.client_x() as f64,
		ev.client_y() as f64,
		rect.left(),
		rect.top(),
		rect.width(),
		rect.height(),
	);

	let Some(span) = document
		.create_element("span")
		.ok()
		.and_then(|e| e.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};
	let style = span.style();
	for (name, value) in ripple_style(placed) {
		let _ = style.set_property(name, &value);
	}

	let _ = card.style().set_property("position", "relative");
	let _ = card.style().set_property("overflow", "hidden");
	if card.append_child(&span).is_err() {
		return;
	}
	set_timeout(move || span.remove(), LIFETIME);
}

/// Attach the click ripple to every card.
pub fn install(document: &Document, cards: &[Element]) -> Vec<EventListener> {
	let mut listeners = Vec::with_capacity(cards.len());

	for card in cards {
		let Ok(card) = card.clone().dyn_into::<HtmlElement>() else {
			continue;
		};
		let (doc, target) = (document.clone(), card.clone());
		listeners.extend(EventListener::new(&card, "click", move |ev| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				spawn_ripple(&doc, &target, ev);
			}
		}));
	}

	debug!("portfolio-fx: ripple attached to {} cards", listeners.len());
	listeners
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centered_on_click_point() {
		// card at (100, 200), 300x120; click at its center
		let placed = ripple_box(250.0, 260.0, 100.0, 200.0, 300.0, 120.0);
		assert_eq!(placed.size, 300.0);
		assert_eq!(placed.left + placed.size / 2.0, 150.0);
		assert_eq!(placed.top + placed.size / 2.0, 60.0);
	}

	#[test]
	fn sized_by_longer_side() {
		assert_eq!(ripple_box(0.0, 0.0, 0.0, 0.0, 80.0, 200.0).size, 200.0);
		assert_eq!(
			ripple_box(10.0, 10.0, 0.0, 0.0, 40.0, 20.0),
			RippleBox {
				size: 40.0,
				left: -10.0,
				top: -10.0,
			}
		);
	}

	#[test]
	fn style_places_and_animates() {
		let style = ripple_style(RippleBox {
			size: 40.0,
			left: -10.0,
			top: 2.5,
		});
		let get = |name: &str| {
			style
				.iter()
				.find(|(n, _)| *n == name)
				.map(|(_, v)| v.as_str())
		};
		assert_eq!(get("width"), Some("40px"));
		assert_eq!(get("left"), Some("-10px"));
		assert_eq!(get("top"), Some("2.5px"));
		assert_eq!(get("animation"), Some("ripple 0.6s linear"));
		assert_eq!(get("pointer-events"), Some("none"));
	}
}
