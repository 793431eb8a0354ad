//! Colors used by the particle field, per page theme.

use crate::components::theme::ThemeMode;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors for one theme. Alpha is supplied per draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
	pub particle: Color,
	/// Second particle tint, blended in by pulse.
	pub particle_accent: Color,
	pub line: Color,
	pub shape: Color,
	pub flicker: Color,
	pub line_width: f64,
	pub shape_line_width: f64,
}

impl FieldStyle {
	/// Blue on the dark page
	pub fn dark() -> Self {
		Self {
			particle: Color::rgb(79, 140, 255),
			particle_accent: Color::rgb(139, 92, 246),
			line: Color::rgb(79, 140, 255),
			shape: Color::rgb(120, 160, 255),
			flicker: Color::rgb(34, 211, 238),
			line_width: 0.5,
			shape_line_width: 1.0,
		}
	}

	/// Deeper tones so particles read on a white page
	pub fn light() -> Self {
		Self {
			particle: Color::rgb(37, 99, 235),
			particle_accent: Color::rgb(109, 40, 217),
			line: Color::rgb(37, 99, 235),
			shape: Color::rgb(59, 130, 246),
			flicker: Color::rgb(8, 145, 178),
			line_width: 0.5,
			shape_line_width: 1.0,
		}
	}

	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self::dark(),
			ThemeMode::Light => Self::light(),
		}
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self::dark()
	}
}
