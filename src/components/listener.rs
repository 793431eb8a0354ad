//! Owned DOM event listener.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// An event listener that is removed from its target when dropped.
pub struct EventListener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
	/// Attach `handler` to `event` on `target`. Returns `None` if the browser
	/// refused the registration.
	pub fn new(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
			Ok(()) => Some(Self {
				target: target.clone(),
				event,
				callback,
			}),
			Err(e) => {
				warn!("portfolio-fx: could not listen for {event}: {e:?}");
				None
			}
		}
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}
