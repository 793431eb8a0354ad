//! Intersection-driven effects: reveal-on-scroll and active nav link.

use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_SELECTOR: &str = ".card, .t-item, .panel";
pub const REVEAL_CLASS: &str = "animate-in";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".site-nav a";
pub const ACTIVE_CLASS: &str = "active";

/// Whether a nav link `href` points at the section with `id`.
pub fn link_targets_section(href: Option<&str>, id: &str) -> bool {
	href.and_then(|h| h.strip_prefix('#')) == Some(id)
}

/// An intersection observer that disconnects when dropped.
pub struct Observer {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
	/// Observe `targets`, calling `on_visible` with each element that starts intersecting.
	pub fn new(
		targets: &[Element],
		threshold: f64,
		root_margin: &str,
		mut on_visible: impl FnMut(Element) + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
			move |entries: Array, _observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if entry.is_intersecting() {
						on_visible(entry.target());
					}
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(threshold));
		options.set_root_margin(root_margin);

		let observer =
			match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
			{
				Ok(observer) => observer,
				Err(e) => {
					warn!("portfolio-fx: IntersectionObserver unavailable: {e:?}");
					return None;
				}
			};
		for target in targets {
			observer.observe(target);
		}

		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for Observer {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Add the entrance animation class to elements as they scroll into view.
pub fn install_reveal(elements: &[Element]) -> Option<Observer> {
	debug!("portfolio-fx: reveal observing {} elements", elements.len());
	Observer::new(elements, 0.1, "0px 0px -50px 0px", |el| {
		let _ = el.class_list().add_1(REVEAL_CLASS);
	})
}

/// Mark the nav link for whichever section is currently in view.
pub fn install_nav_highlight(sections: &[Element], links: Vec<Element>) -> Option<Observer> {
	if links.is_empty() {
		return None;
	}
	Observer::new(sections, 0.3, "0px", move |section| {
		let id = section.id();
		for link in &links {
			let classes = link.class_list();
			if link_targets_section(link.get_attribute("href").as_deref(), &id) {
				let _ = classes.add_1(ACTIVE_CLASS);
			} else {
				let _ = classes.remove_1(ACTIVE_CLASS);
			}
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matches_fragment_links_only() {
		assert!(link_targets_section(Some("#about"), "about"));
		assert!(!link_targets_section(Some("#about"), "projects"));
		assert!(!link_targets_section(Some("about"), "about"));
		assert!(!link_targets_section(Some("/#about"), "about"));
		assert!(!link_targets_section(None, "about"));
	}
}
