//! Configuration and error types for the particle field.

use serde::Deserialize;
use thiserror::Error;

/// Upper bound on the moving population; connection lines are O(n²) per frame.
pub const MAX_PARTICLES: usize = 400;
/// Upper bound on decorative outlines.
pub const MAX_SHAPES: usize = 100;

/// Direction of the pointer interaction force.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
	/// Particles are pushed away from the pointer.
	#[default]
	Repel,
	/// Particles are pulled toward the pointer.
	Attract,
}

/// Construction parameters for a particle field.
///
/// Every field has a default, so a partial JSON object is enough to override
/// individual values. Ranges are `(min, max)` pairs.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of moving particles.
	pub particle_count: usize,
	/// Number of static decorative outlines.
	pub shape_count: usize,
	/// Distance within which the pointer affects a particle.
	pub attraction_radius: f64,
	/// Velocity added per frame at zero distance from the pointer.
	pub pointer_force: f64,
	/// Whether the pointer repels or attracts.
	pub pointer_mode: PointerMode,
	/// Maximum distance at which two particles are connected by a line.
	pub connection_threshold: f64,
	/// Line opacity for two coincident particles.
	pub connection_opacity: f64,
	/// Per-frame velocity multiplier, strictly between 0 and 1.
	pub damping_factor: f64,
	/// Initial velocity components are drawn from `[-speed, speed]`.
	pub speed: f64,
	/// Particle radius range.
	pub size: (f64, f64),
	/// Particle base opacity range.
	pub opacity: (f64, f64),
	/// Pulse phase increment range (radians per frame).
	pub pulse_speed: (f64, f64),
	/// Rotation speed is drawn from `[-rotation_speed, rotation_speed]`.
	pub rotation_speed: f64,
	/// Probability that a particle is drawn as a square instead of a dot.
	pub square_ratio: f64,
	/// Decorative shape size range.
	pub shape_size: (f64, f64),
	/// Decorative shape opacity range.
	pub shape_opacity: (f64, f64),
	/// Per-frame probability of drawing a single-frame flicker line.
	pub flicker_probability: f64,
	/// Fixed seed. When absent the host picks one.
	pub seed: Option<u64>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 50,
			shape_count: 6,
			attraction_radius: 150.0,
			pointer_force: 0.05,
			pointer_mode: PointerMode::Repel,
			connection_threshold: 100.0,
			connection_opacity: 0.3,
			damping_factor: 0.99,
			speed: 0.25,
			size: (1.0, 3.0),
			opacity: (0.2, 0.7),
			pulse_speed: (0.01, 0.04),
			rotation_speed: 0.02,
			square_ratio: 0.3,
			shape_size: (20.0, 60.0),
			shape_opacity: (0.04, 0.12),
			flicker_probability: 0.02,
			seed: None,
		}
	}
}

impl FieldConfig {
	/// Check that every parameter is inside its usable domain.
	pub fn validate(&self) -> Result<(), FieldError> {
		if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
			return Err(FieldError::InvalidConfig(format!(
				"damping_factor must be in (0, 1), got {}",
				self.damping_factor
			)));
		}
		if self.particle_count > MAX_PARTICLES || self.shape_count > MAX_SHAPES {
			return Err(FieldError::InvalidConfig(format!(
				"at most {MAX_PARTICLES} particles and {MAX_SHAPES} shapes, got {} and {}",
				self.particle_count, self.shape_count
			)));
		}
		if !(self.attraction_radius > 0.0) {
			return Err(FieldError::InvalidConfig(format!(
				"attraction_radius must be positive, got {}",
				self.attraction_radius
			)));
		}
		if !(self.connection_threshold > 0.0) {
			return Err(FieldError::InvalidConfig(format!(
				"connection_threshold must be positive, got {}",
				self.connection_threshold
			)));
		}
		for (name, p) in [
			("square_ratio", self.square_ratio),
			("flicker_probability", self.flicker_probability),
			("connection_opacity", self.connection_opacity),
		] {
			if !(0.0..=1.0).contains(&p) {
				return Err(FieldError::InvalidConfig(format!(
					"{name} must be in [0, 1], got {p}"
				)));
			}
		}
		for (name, (lo, hi)) in [
			("size", self.size),
			("opacity", self.opacity),
			("pulse_speed", self.pulse_speed),
			("shape_size", self.shape_size),
			("shape_opacity", self.shape_opacity),
		] {
			if lo > hi || lo < 0.0 {
				return Err(FieldError::InvalidConfig(format!(
					"{name} range ({lo}, {hi}) is inverted or negative"
				)));
			}
		}
		if self.speed < 0.0 || self.rotation_speed < 0.0 || self.pointer_force < 0.0 {
			return Err(FieldError::InvalidConfig(
				"speed, rotation_speed and pointer_force must not be negative".into(),
			));
		}
		Ok(())
	}
}

/// Errors raised while starting a particle field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
	/// The host canvas offered no 2D drawing context.
	#[error("no 2d drawing surface available")]
	MissingSurface,
	/// A configuration value is outside its domain.
	#[error("invalid particle field config: {0}")]
	InvalidConfig(String),
	/// The starting viewport has a non-positive or non-finite side.
	#[error("unusable viewport {width}x{height}")]
	InvalidViewport {
		/// Reported width.
		width: f64,
		/// Reported height.
		height: f64,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert_eq!(FieldConfig::default().validate(), Ok(()));
	}

	#[test]
	fn rejects_damping_outside_unit_interval() {
		for damping in [0.0, 1.0, 1.5, -0.2] {
			let config = FieldConfig {
				damping_factor: damping,
				..FieldConfig::default()
			};
			assert!(matches!(
				config.validate(),
				Err(FieldError::InvalidConfig(_))
			));
		}
	}

	#[test]
	fn rejects_oversized_population() {
		let config = FieldConfig {
			particle_count: 10_000_000,
			..FieldConfig::default()
		};
		assert!(matches!(
			config.validate(),
			Err(FieldError::InvalidConfig(_))
		));

		let at_limit = FieldConfig {
			particle_count: MAX_PARTICLES,
			shape_count: MAX_SHAPES,
			..FieldConfig::default()
		};
		assert_eq!(at_limit.validate(), Ok(()));

		let too_many_shapes = FieldConfig {
			shape_count: MAX_SHAPES + 1,
			..FieldConfig::default()
		};
		assert!(too_many_shapes.validate().is_err());
	}

	#[test]
	fn rejects_inverted_range() {
		let config = FieldConfig {
			size: (3.0, 1.0),
			..FieldConfig::default()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn partial_json_overrides_defaults() {
		let config: FieldConfig = serde_json::from_str(
			r#"{ "particle_count": 12, "pointer_mode": "attract", "size": [2, 4] }"#,
		)
		.unwrap();
		assert_eq!(config.particle_count, 12);
		assert_eq!(config.pointer_mode, PointerMode::Attract);
		assert_eq!(config.size, (2.0, 4.0));
		assert_eq!(config.connection_threshold, 100.0);
		assert_eq!(config.seed, None);
	}
}
