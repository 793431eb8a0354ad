//! Scroll-linked effects: progress bar, hero parallax and anchored smooth scrolling.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::components::listener::EventListener;

/// Gap left between the sticky header and a scrolled-to section.
pub const ANCHOR_MARGIN: f64 = 20.0;
/// Hero moves at this fraction of the scroll distance.
pub const PARALLAX_RATE: f64 = -0.5;

/// Percentage of the page scrolled, in `[0, 100]`. Pages that do not scroll report 0.
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
	let scrollable = document_height - viewport_height;
	if scrollable <= 0.0 {
		return 0.0;
	}
	(scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Scroll position that puts a section just below the header.
pub fn anchor_scroll_target(section_top: f64, header_height: f64) -> f64 {
	(section_top - header_height - ANCHOR_MARGIN).max(0.0)
}

pub fn parallax_offset(scroll_top: f64) -> f64 {
	scroll_top * PARALLAX_RATE
}

/// Update the progress bar width and hero offset on every scroll.
pub fn install_scroll_effects(
	progress_bar: Option<HtmlElement>,
	hero: Option<HtmlElement>,
) -> Option<EventListener> {
	if progress_bar.is_none() && hero.is_none() {
		return None;
	}
	let window = web_sys::window()?;

	EventListener::new(&window, "scroll", move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let scroll_top = window.scroll_y().unwrap_or(0.0);

		if let Some(ref bar) = progress_bar {
			let document_height = window
				.document()
				.and_then(|d| d.document_element())
				.map(|e| e.scroll_height() as f64)
				.unwrap_or(0.0);
			let viewport_height = window
				.inner_height()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(0.0);
			let percent = scroll_progress(scroll_top, document_height, viewport_height);
			let _ = bar.style().set_property("width", &format!("{percent}%"));
		}

		if let Some(ref hero) = hero {
			let transform = format!("translateY({}px)", parallax_offset(scroll_top));
			let _ = hero.style().set_property("transform", &transform);
		}
	})
}

/// Replace jump-to-anchor with a smooth scroll that clears the header.
pub fn install_smooth_scroll(document: &Document, anchors: &[Element]) -> Vec<EventListener> {
	let mut listeners = Vec::with_capacity(anchors.len());

	for anchor in anchors {
		let Some(href) = anchor.get_attribute("href") else {
			continue;
		};
		let document = document.clone();
		listeners.extend(EventListener::new(anchor, "click", move |ev| {
			// a bare "#" is not a valid selector
			let Some(target) = document
				.query_selector(&href)
				.ok()
				.flatten()
				.and_then(|t| t.dyn_into::<HtmlElement>().ok())
			else {
				return;
			};
			ev.prevent_default();

			let header_height = document
				.query_selector(".site-header")
				.ok()
				.flatten()
				.and_then(|h| h.dyn_into::<HtmlElement>().ok())
				.map(|h| h.offset_height() as f64)
				.unwrap_or(0.0);

			let options = ScrollToOptions::new();
			options.set_top(anchor_scroll_target(target.offset_top() as f64, header_height));
			options.set_behavior(ScrollBehavior::Smooth);
			if let Some(window) = web_sys::window() {
				window.scroll_to_with_scroll_to_options(&options);
			}
		}));
	}

	debug!("portfolio-fx: smooth scroll on {} anchors", listeners.len());
	listeners
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn progress_is_a_clamped_percentage() {
		assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
		assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
		assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
		// rubber-band overscroll
		assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 100.0);
		assert_eq!(scroll_progress(-30.0, 3000.0, 1000.0), 0.0);
	}

	#[test]
	fn short_page_has_no_progress() {
		assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
		assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
	}

	#[test]
	fn anchor_target_clears_header() {
		assert_eq!(anchor_scroll_target(500.0, 64.0), 416.0);
		assert_eq!(anchor_scroll_target(30.0, 64.0), 0.0);
	}

	#[test]
	fn parallax_moves_up_at_half_speed() {
		assert_eq!(parallax_offset(200.0), -100.0);
	}
}
