//! Light/dark page theme, persisted in `localStorage`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Storage};

/// `localStorage` key holding the chosen theme.
pub const STORAGE_KEY: &str = "theme";

/// Page color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	Light,
	#[default]
	Dark,
}

impl ThemeMode {
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	/// Button icon: offers the sun while dark, the moon while light.
	pub fn icon(self) -> &'static str {
		match self {
			ThemeMode::Dark => "☀️",
			ThemeMode::Light => "🌙",
		}
	}

	/// Interpret a stored value; anything missing or unknown means dark.
	pub fn from_stored(value: Option<&str>) -> Self {
		value.and_then(|v| v.parse().ok()).unwrap_or_default()
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error for an unrecognized theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeMode {
	type Err = UnknownTheme;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"light" => Ok(ThemeMode::Light),
			"dark" => Ok(ThemeMode::Dark),
			other => Err(UnknownTheme(other.to_string())),
		}
	}
}

fn local_storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

/// Read the saved theme, defaulting to dark.
pub fn load_theme() -> ThemeMode {
	let stored = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
	let mode = ThemeMode::from_stored(stored.as_deref());
	debug!("portfolio-fx: stored theme {stored:?} -> {mode}");
	mode
}

/// Persist the theme. Failures (private mode, quota) are logged and ignored.
pub fn save_theme(mode: ThemeMode) {
	let Some(storage) = local_storage() else {
		warn!("portfolio-fx: localStorage unavailable, theme not saved");
		return;
	};
	if let Err(e) = storage.set_item(STORAGE_KEY, mode.as_str()) {
		warn!("portfolio-fx: failed to save theme: {e:?}");
	}
}

/// Briefly animate every property on `<html>` so the color swap fades.
fn fade_root_transition() {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.and_then(|e| e.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};
	let _ = root.style().set_property("transition", "all 0.3s ease");
	set_timeout(
		move || {
			let _ = root.style().remove_property("transition");
		},
		Duration::from_millis(300),
	);
}

/// Floating button that flips between light and dark.
///
/// Writes the new mode to `localStorage` whenever it changes. The
/// `data-theme` attribute itself is bound on `<html>` by the app.
#[component]
pub fn ThemeToggle(theme: RwSignal<ThemeMode>) -> impl IntoView {
	Effect::new(move |previous: Option<ThemeMode>| {
		let mode = theme.get();
		if previous.is_some_and(|p| p != mode) {
			save_theme(mode);
			info!("portfolio-fx: theme switched to {mode}");
		}
		mode
	});

	let on_click = move |_| {
		fade_root_transition();
		theme.update(|mode| *mode = mode.toggled());
	};

	view! {
		<button
			class="theme-toggle"
			aria-label="Toggle theme"
			on:click=on_click
			style="position: fixed; top: 20px; right: 20px; width: 50px; height: 50px; border-radius: 50%; border: 1px solid var(--border); background: var(--surface); color: var(--text); cursor: pointer; z-index: 1000; display: flex; align-items: center; justify-content: center; font-size: 20px; transition: all 0.3s ease; box-shadow: var(--shadow);"
		>
			{move || theme.get().icon()}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggling_twice_is_identity() {
		for mode in [ThemeMode::Light, ThemeMode::Dark] {
			assert_ne!(mode.toggled(), mode);
			assert_eq!(mode.toggled().toggled(), mode);
		}
	}

	#[test]
	fn stored_values() {
		assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
		assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_stored(Some("sepia")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
	}

	#[test]
	fn string_round_trip_and_icons() {
		assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
		assert_eq!(
			"Light".parse::<ThemeMode>(),
			Err(UnknownTheme("Light".into()))
		);
		assert_eq!(ThemeMode::Dark.to_string(), "dark");
		assert_eq!(ThemeMode::Dark.icon(), "☀️");
		assert_eq!(ThemeMode::Light.icon(), "🌙");
	}
}
