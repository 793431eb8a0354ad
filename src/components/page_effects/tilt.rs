//! 3D tilt for cards under the pointer.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::components::listener::EventListener;

/// Transform applied when the pointer leaves a card.
pub const RESET_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";

/// Rotation in degrees `(rotate_x, rotate_y)` for a pointer at `(x, y)`
/// relative to the top-left corner of a `width` × `height` card.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
	let (center_x, center_y) = (width / 2.0, height / 2.0);
	((y - center_y) / 10.0, (center_x - x) / 10.0)
}

pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
	let (rotate_x, rotate_y) = tilt_angles(x, y, width, height);
	format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateZ(10px)")
}

/// Attach tilt handlers to every card.
pub fn install(cards: &[Element]) -> Vec<EventListener> {
	let mut listeners = Vec::with_capacity(cards.len() * 2);

	for card in cards {
		let Ok(card) = card.clone().dyn_into::<HtmlElement>() else {
			continue;
		};

		let card_move = card.clone();
		listeners.extend(EventListener::new(&card, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let rect = card_move.get_bounding_client_rect();
			let (x, y) = (
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
			let transform = tilt_transform(x, y, rect.width(), rect.height());
			let _ = card_move.style().set_property("transform", &transform);
		}));

		let card_leave = card.clone();
		listeners.extend(EventListener::new(&card, "mouseleave", move |_| {
			let _ = card_leave.style().set_property("transform", RESET_TRANSFORM);
		}));
	}

	debug!("portfolio-fx: tilt attached to {} cards", cards.len());
	listeners
}
