//! Behaviour attached to the existing page markup.
//!
//! Everything here is optional: each effect looks up its elements and quietly
//! does nothing when the page does not have them.

pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod tilt;
pub mod typing;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::listener::EventListener;
use reveal::Observer;

/// Body class set once the window has finished loading; paused animations
/// resume and the hero fades in.
pub const LOADED_CLASS: &str = "loaded";

/// Handles that keep the installed effects alive.
#[derive(Default)]
struct Installed {
	listeners: Vec<EventListener>,
	observers: Vec<Observer>,
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
	let Ok(nodes) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.get(i))
		.filter_map(|n| n.dyn_into::<Element>().ok())
		.collect()
}

fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
	let element = document.get_element_by_id(id);
	if element.is_none() {
		debug!("portfolio-fx: no #{id} on page");
	}
	element?.dyn_into::<HtmlElement>().ok()
}

fn html_element(document: &Document, selector: &str) -> Option<HtmlElement> {
	document
		.query_selector(selector)
		.ok()
		.flatten()?
		.dyn_into::<HtmlElement>()
		.ok()
}

fn close_mobile_nav(document: &Document) {
	if let Some(toggle) = document
		.get_element_by_id("nav-toggle")
		.and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
	{
		toggle.set_checked(false);
	}
}

/// Mobile menu closes on Escape or when a nav link is followed.
fn install_nav_close(document: &Document, links: &[Element]) -> Vec<EventListener> {
	let mut listeners = Vec::with_capacity(links.len() + 1);

	for link in links {
		let doc = document.clone();
		listeners.extend(EventListener::new(link, "click", move |_| {
			close_mobile_nav(&doc);
		}));
	}

	let doc = document.clone();
	listeners.extend(EventListener::new(document, "keydown", move |ev| {
		if ev
			.dyn_ref::<KeyboardEvent>()
			.is_some_and(|k| k.key() == "Escape")
		{
			close_mobile_nav(&doc);
		}
	}));

	listeners
}

fn stamp_year(document: &Document) {
	if let Some(el) = html_element_by_id(document, "y") {
		let year = js_sys::Date::new_0().get_full_year();
		el.set_text_content(Some(&year.to_string()));
	}
}

/// Whether a `document.readyState` value means `load` has already fired.
pub fn is_fully_loaded(ready_state: &str) -> bool {
	ready_state == "complete"
}

fn add_loaded_class(document: &Document) {
	if let Some(body) = document.body() {
		let _ = body.class_list().add_1(LOADED_CLASS);
	}
}

/// Mark the body as loaded now if the window already loaded, otherwise on `load`.
fn install_loaded_class(document: &Document) -> Option<EventListener> {
	let ready_state = js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
		.ok()
		.and_then(|v| v.as_string())
		.unwrap_or_default();
	if is_fully_loaded(&ready_state) {
		add_loaded_class(document);
		return None;
	}
	let window = web_sys::window()?;
	let doc = document.clone();
	EventListener::new(&window, "load", move |_| add_loaded_class(&doc))
}

/// Start the hero typing intro. The text comes from `data-typing-text`,
/// falling back to the title's own text.
fn start_typing(document: &Document) {
	let Some(title) = html_element(document, ".title") else {
		debug!("portfolio-fx: no .title, skipping typing intro");
		return;
	};
	let text = title
		.get_attribute("data-typing-text")
		.or_else(|| title.text_content())
		.unwrap_or_default();
	typing::start(title, text.trim().to_string());
}

/// Installs the page glue once the app is mounted. Renders nothing.
#[component]
pub fn PageEffects() -> impl IntoView {
	let installed: Rc<RefCell<Option<Installed>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		if installed.borrow().is_some() {
			return;
		}
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		let mut effects = Installed::default();

		stamp_year(&document);
		effects.listeners.extend(install_loaded_class(&document));

		let nav_links = query_all(&document, reveal::NAV_LINK_SELECTOR);
		effects
			.listeners
			.extend(install_nav_close(&document, &nav_links));

		let cards = query_all(&document, ".card");
		effects.listeners.extend(tilt::install(&cards));
		effects.listeners.extend(ripple::install(&document, &cards));

		let anchors = query_all(&document, "a[href^=\"#\"]");
		effects
			.listeners
			.extend(scroll::install_smooth_scroll(&document, &anchors));

		effects.listeners.extend(scroll::install_scroll_effects(
			html_element_by_id(&document, "scroll-progress"),
			html_element(&document, ".hero"),
		));

		let revealed = query_all(&document, reveal::REVEAL_SELECTOR);
		effects.observers.extend(reveal::install_reveal(&revealed));

		let sections = query_all(&document, reveal::SECTION_SELECTOR);
		effects
			.observers
			.extend(reveal::install_nav_highlight(&sections, nav_links));

		start_typing(&document);

		info!(
			"portfolio-fx: page effects installed ({} listeners, {} observers)",
			effects.listeners.len(),
			effects.observers.len()
		);
		*installed.borrow_mut() = Some(effects);
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_complete_counts_as_loaded() {
		assert!(is_fully_loaded("complete"));
		for state in ["loading", "interactive", ""] {
			assert!(!is_fully_loaded(state));
		}
	}
}
