//! Typewriter intro for the hero title.
//!
//! The title is cleared and given a caret immediately, then retyped one
//! character per tick after a short delay. Once the text is complete the caret is removed and
//! the original markup restored.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::HtmlElement;

pub const START_DELAY: Duration = Duration::from_millis(1000);
pub const TICK: Duration = Duration::from_millis(50);
pub const HOLD: Duration = Duration::from_millis(1000);
pub const CARET: &str = "2px solid #4f8cff";

/// Character-by-character reveal of a fixed text.
#[derive(Clone, Debug)]
pub struct Typewriter {
	chars: Vec<char>,
	typed: usize,
}

impl Typewriter {
	pub fn new(text: &str) -> Self {
		Self {
			chars: text.chars().collect(),
			typed: 0,
		}
	}

	/// Reveal one more character and return the visible prefix, or `None`
	/// once everything is shown.
	pub fn step(&mut self) -> Option<String> {
		if self.is_finished() {
			return None;
		}
		self.typed += 1;
		Some(self.visible())
	}

	pub fn visible(&self) -> String {
		self.chars[..self.typed].iter().collect()
	}

	pub fn is_finished(&self) -> bool {
		self.typed >= self.chars.len()
	}
}

/// Run the intro on `title`, typing `text` and restoring the original markup afterwards.
pub fn start(title: HtmlElement, text: String) {
	if text.is_empty() {
		return;
	}
	debug!("portfolio-fx: typing intro ({} chars)", text.chars().count());

	let original = title.inner_html();
	let writer = Rc::new(RefCell::new(Typewriter::new(&text)));
	title.set_text_content(Some(&writer.borrow().visible()));
	let _ = title.style().set_property("border-right", CARET);

	set_timeout(
		move || {
			let handle: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));
			let handle_tick = handle.clone();

			let result = set_interval_with_handle(
				move || {
					let next = writer.borrow_mut().step();
					match next {
						Some(visible) => title.set_text_content(Some(&visible)),
						None => {
							if let Some(h) = handle_tick.take() {
								h.clear();
							}
							let (title, original) = (title.clone(), original.clone());
							set_timeout(
								move || {
									let _ = title.style().remove_property("border-right");
									title.set_inner_html(&original);
								},
								HOLD,
							);
						}
					}
				},
				TICK,
			);

			match result {
				Ok(h) => handle.set(Some(h)),
				Err(e) => warn!("portfolio-fx: typing interval not started: {e:?}"),
			}
		},
		START_DELAY,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn types_one_char_per_step() {
		let mut writer = Typewriter::new("Hi!");
		assert_eq!(writer.step().as_deref(), Some("H"));
		assert_eq!(writer.step().as_deref(), Some("Hi"));
		assert_eq!(writer.step().as_deref(), Some("Hi!"));
		assert!(writer.is_finished());
		assert_eq!(writer.step(), None);
	}

	#[test]
	fn starts_blank_before_first_tick() {
		let writer = Typewriter::new("Hello");
		assert_eq!(writer.visible(), "");
		assert!(!writer.is_finished());
	}

	#[test]
	fn steps_by_char_not_byte() {
		let mut writer = Typewriter::new("é&");
		assert_eq!(writer.step().as_deref(), Some("é"));
		assert_eq!(writer.step().as_deref(), Some("é&"));
	}

	#[test]
	fn empty_text_is_finished() {
		let mut writer = Typewriter::new("");
		assert!(writer.is_finished());
		assert_eq!(writer.step(), None);
	}
}
