//! portfolio-fx: decorative client-side effects for a single-page portfolio.
//!
//! This crate mounts onto an existing page and adds an animated particle
//! background, a persisted light/dark toggle, a cursor trail, and a handful
//! of scroll and hover effects bound to the page markup.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::cursor_trail::CursorTrail;
pub use components::page_effects::PageEffects;
pub use components::page_styles::PAGE_STYLES;
pub use components::particle_field::{FieldConfig, ParticleFieldCanvas};
pub use components::theme::{ThemeMode, ThemeToggle};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Parse a particle config document, falling back to defaults on bad input.
pub fn parse_field_config(json_text: &str) -> FieldConfig {
	match serde_json::from_str::<FieldConfig>(json_text) {
		Ok(config) => match config.validate() {
			Ok(()) => config,
			Err(e) => {
				warn!("portfolio-fx: {e}, using defaults");
				FieldConfig::default()
			}
		},
		Err(e) => {
			warn!("portfolio-fx: failed to parse particle config: {}", e);
			FieldConfig::default()
		}
	}
}

/// Load particle settings from a script element with id="particle-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let config = parse_field_config(&json_text);
	info!(
		"portfolio-fx: loaded particle config ({} particles, {} shapes)",
		config.particle_count, config.shape_count
	);
	Some(config)
}

/// Main application component.
/// Restores the saved theme and mounts every effect onto the page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let theme = RwSignal::new(components::theme::load_theme());

	view! {
		<Html attr:data-theme=move || theme.get().as_str() />
		<Style id="portfolio-fx-styles">{PAGE_STYLES}</Style>

		<ParticleFieldCanvas config=config theme=theme />
		<CursorTrail />
		<ThemeToggle theme=theme />
		<PageEffects />
	}
}
