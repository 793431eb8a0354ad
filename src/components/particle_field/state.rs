//! Particle field simulation state.
//!
//! Holds both populations together with the cached viewport, and advances
//! them one frame at a time. The pointer is passed in as a snapshot taken at
//! the top of each frame rather than read from shared state mid-update.

use std::f64::consts::TAU;

use super::particles::{
	DecorativeShape, Particle, SeededRandom, advance_shape, spawn_particles, spawn_shapes,
};
use super::types::{FieldConfig, FieldError, PointerMode};

/// Pointer position captured once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSnapshot {
	pub x: f64,
	pub y: f64,
}

/// Cached drawing surface dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// A viewport with a non-positive or non-finite side is a transient bad reading.
	pub fn is_usable(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}
}

/// A line to draw between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub opacity: f64,
}

/// Opacity of a connection line with linear falloff: `max_opacity` at zero
/// distance, exactly zero at `threshold` and beyond.
pub fn connection_opacity(distance: f64, threshold: f64, max_opacity: f64) -> f64 {
	if distance >= threshold {
		0.0
	} else {
		max_opacity * (1.0 - distance / threshold)
	}
}

/// Velocity change produced by the pointer on a particle at `(x, y)`.
///
/// Zero outside the interaction radius and at zero distance, where the
/// direction is undefined.
pub fn pointer_force(
	x: f64,
	y: f64,
	pointer: PointerSnapshot,
	radius: f64,
	strength: f64,
	mode: PointerMode,
) -> (f64, f64) {
	let (dx, dy) = (x - pointer.x, y - pointer.y);
	let distance = (dx * dx + dy * dy).sqrt();
	if distance <= f64::EPSILON || distance >= radius {
		return (0.0, 0.0);
	}

	let magnitude = strength * (radius - distance) / radius;
	let (ux, uy) = (dx / distance, dy / distance);
	match mode {
		PointerMode::Repel => (ux * magnitude, uy * magnitude),
		PointerMode::Attract => (-ux * magnitude, -uy * magnitude),
	}
}

/// Reflect a coordinate off `[0, max]`, returning the clamped position and the
/// velocity pointing back inside.
fn reflect(position: f64, velocity: f64, max: f64) -> (f64, f64) {
	if position < 0.0 {
		(0.0, velocity.abs())
	} else if position > max {
		(max, -velocity.abs())
	} else {
		(position, velocity)
	}
}

/// Advance one particle by one frame.
fn step_particle(
	p: &mut Particle,
	pointer: Option<PointerSnapshot>,
	config: &FieldConfig,
	viewport: Viewport,
) {
	if let Some(pointer) = pointer {
		let (fx, fy) = pointer_force(
			p.x,
			p.y,
			pointer,
			config.attraction_radius,
			config.pointer_force,
			config.pointer_mode,
		);
		p.vx += fx;
		p.vy += fy;
	}

	p.x += p.vx;
	p.y += p.vy;

	(p.x, p.vx) = reflect(p.x, p.vx, viewport.width);
	(p.y, p.vy) = reflect(p.y, p.vy, viewport.height);

	p.vx *= config.damping_factor;
	p.vy *= config.damping_factor;

	p.pulse_phase = (p.pulse_phase + p.pulse_speed) % TAU;
	p.rotation = (p.rotation + p.rotation_speed) % TAU;
}

/// Both populations plus everything needed to advance them.
pub struct ParticleFieldState {
	pub particles: Vec<Particle>,
	pub shapes: Vec<DecorativeShape>,
	pub viewport: Viewport,
	pub config: FieldConfig,
	pub frame: u64,
}

impl ParticleFieldState {
	/// Validate the config and spawn both populations from `rng`.
	pub fn new(
		config: FieldConfig,
		viewport: Viewport,
		rng: &mut SeededRandom,
	) -> Result<Self, FieldError> {
		config.validate()?;
		if !viewport.is_usable() {
			return Err(FieldError::InvalidViewport {
				width: viewport.width,
				height: viewport.height,
			});
		}
		let particles = spawn_particles(&config, viewport.width, viewport.height, rng);
		let shapes = spawn_shapes(&config, viewport.width, viewport.height, rng);
		Ok(Self {
			particles,
			shapes,
			viewport,
			config,
			frame: 0,
		})
	}

	/// Advance every shape and particle by one frame.
	pub fn update(&mut self, pointer: Option<PointerSnapshot>) {
		for shape in &mut self.shapes {
			advance_shape(shape);
		}
		for p in &mut self.particles {
			step_particle(p, pointer, &self.config, self.viewport);
		}
		self.frame += 1;
	}

	/// All unordered particle pairs closer than the connection threshold.
	pub fn connections(&self) -> Vec<Connection> {
		let threshold = self.config.connection_threshold;
		let mut lines = Vec::new();

		for (i, a) in self.particles.iter().enumerate() {
			for b in &self.particles[i + 1..] {
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if distance < threshold {
					lines.push(Connection {
						from: (a.x, a.y),
						to: (b.x, b.y),
						opacity: connection_opacity(
							distance,
							threshold,
							self.config.connection_opacity,
						),
					});
				}
			}
		}

		lines
	}

	/// Record new dimensions. Bad readings are ignored; positions are not
	/// rescaled and get clamped by the next update. Returns whether the
	/// viewport changed.
	pub fn resize(&mut self, viewport: Viewport) -> bool {
		if !viewport.is_usable() {
			return false;
		}
		self.viewport = viewport;
		true
	}

	/// Sum of squared speeds over the moving population.
	pub fn kinetic_energy(&self) -> f64 {
		self.particles
			.iter()
			.map(|p| p.vx * p.vx + p.vy * p.vy)
			.sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::particles::ParticleKind;

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			opacity: 0.5,
			pulse_phase: 0.0,
			pulse_speed: 0.02,
			kind: ParticleKind::Dot,
			rotation: 0.0,
			rotation_speed: 0.0,
		}
	}

	fn state(config: FieldConfig, width: f64, height: f64, seed: u64) -> ParticleFieldState {
		ParticleFieldState::new(
			config,
			Viewport::new(width, height),
			&mut SeededRandom::new(seed),
		)
		.unwrap()
	}

	fn assert_in_bounds(state: &ParticleFieldState) {
		for p in &state.particles {
			assert!(
				(0.0..=state.viewport.width).contains(&p.x)
					&& (0.0..=state.viewport.height).contains(&p.y),
				"particle escaped: ({}, {}) in {:?}",
				p.x,
				p.y,
				state.viewport
			);
		}
	}

	#[test]
	fn particles_stay_on_screen() {
		let config = FieldConfig {
			speed: 6.0,
			pointer_force: 3.0,
			..FieldConfig::default()
		};
		let mut s = state(config, 300.0, 200.0, 11);
		for frame in 0..2_000 {
			let pointer = PointerSnapshot {
				x: (frame % 300) as f64,
				y: (frame % 200) as f64,
			};
			s.update(Some(pointer));
			assert_in_bounds(&s);
		}
	}

	#[test]
	fn energy_never_grows_without_pointer() {
		let mut s = state(FieldConfig::default(), 640.0, 480.0, 5);
		let mut previous = s.kinetic_energy();
		for _ in 0..500 {
			s.update(None);
			let energy = s.kinetic_energy();
			assert!(energy <= previous + 1e-12, "{energy} > {previous}");
			previous = energy;
		}
	}

	#[test]
	fn falloff_is_linear_and_zero_at_threshold() {
		assert_eq!(connection_opacity(100.0, 100.0, 0.3), 0.0);
		assert_eq!(connection_opacity(150.0, 100.0, 0.3), 0.0);
		assert!((connection_opacity(0.0, 100.0, 0.3) - 0.3).abs() < 1e-12);

		let mut last = 0.0;
		for d in (0..100).rev() {
			let opacity = connection_opacity(d as f64, 100.0, 0.3);
			assert!(opacity > last);
			last = opacity;
		}
	}

	#[test]
	fn two_particles_fifty_apart_connect_at_fifteen_percent() {
		let config = FieldConfig {
			particle_count: 2,
			shape_count: 0,
			connection_threshold: 100.0,
			..FieldConfig::default()
		};
		let mut s = state(config, 400.0, 400.0, 1);
		s.particles = vec![particle_at(100.0, 100.0), particle_at(150.0, 100.0)];

		let lines = s.connections();
		assert_eq!(lines.len(), 1);
		assert!((lines[0].opacity - 0.15).abs() < 1e-12);
		assert_eq!(lines[0].from, (100.0, 100.0));
		assert_eq!(lines[0].to, (150.0, 100.0));
	}

	#[test]
	fn distant_particles_do_not_connect() {
		let config = FieldConfig {
			particle_count: 2,
			..FieldConfig::default()
		};
		let mut s = state(config, 400.0, 400.0, 1);
		s.particles = vec![particle_at(0.0, 0.0), particle_at(300.0, 300.0)];
		assert!(s.connections().is_empty());
	}

	#[test]
	fn pointer_on_particle_applies_no_force() {
		let pointer = PointerSnapshot { x: 50.0, y: 50.0 };
		let force = pointer_force(50.0, 50.0, pointer, 150.0, 0.05, PointerMode::Repel);
		assert_eq!(force, (0.0, 0.0));

		let config = FieldConfig {
			particle_count: 1,
			..FieldConfig::default()
		};
		let mut s = state(config, 100.0, 100.0, 3);
		s.particles = vec![particle_at(50.0, 50.0)];
		s.update(Some(pointer));
		let p = &s.particles[0];
		assert!(p.x.is_finite() && p.y.is_finite());
		assert_eq!((p.x, p.y), (50.0, 50.0));
	}

	#[test]
	fn repel_pushes_away_and_attract_pulls_in() {
		let pointer = PointerSnapshot { x: 0.0, y: 0.0 };
		let (fx, _) = pointer_force(75.0, 0.0, pointer, 150.0, 0.1, PointerMode::Repel);
		assert!((fx - 0.05).abs() < 1e-12);
		let (fx, _) = pointer_force(75.0, 0.0, pointer, 150.0, 0.1, PointerMode::Attract);
		assert!((fx + 0.05).abs() < 1e-12);
		assert_eq!(
			pointer_force(200.0, 0.0, pointer, 150.0, 0.1, PointerMode::Repel),
			(0.0, 0.0)
		);
	}

	#[test]
	fn shrink_clamps_on_next_update() {
		let config = FieldConfig {
			particle_count: 1,
			..FieldConfig::default()
		};
		let mut s = state(config, 800.0, 600.0, 9);
		s.particles = vec![Particle {
			vx: 0.1,
			..particle_at(750.0, 10.0)
		}];

		assert!(s.resize(Viewport::new(400.0, 300.0)));
		assert_eq!(s.particles[0].x, 750.0);

		s.update(None);
		assert_in_bounds(&s);
		assert_eq!(s.particles[0].x, 400.0);
		assert!(s.particles[0].vx < 0.0);
	}

	#[test]
	fn bad_resize_is_ignored() {
		let mut s = state(FieldConfig::default(), 800.0, 600.0, 9);
		assert!(!s.resize(Viewport::new(0.0, 300.0)));
		assert!(!s.resize(Viewport::new(400.0, -1.0)));
		assert_eq!(s.viewport, Viewport::new(800.0, 600.0));
	}

	#[test]
	fn unusable_starting_viewport_is_rejected() {
		for (width, height) in [
			(-50.0, 600.0),
			(800.0, 0.0),
			(f64::NAN, 600.0),
			(800.0, f64::INFINITY),
		] {
			let result = ParticleFieldState::new(
				FieldConfig::default(),
				Viewport::new(width, height),
				&mut SeededRandom::new(0),
			);
			assert!(
				matches!(result, Err(FieldError::InvalidViewport { .. })),
				"{width}x{height} accepted"
			);
		}
	}

	#[test]
	fn seeded_states_match() {
		let a = state(FieldConfig::default(), 800.0, 600.0, 77);
		let b = state(FieldConfig::default(), 800.0, 600.0, 77);
		assert_eq!(a.particles, b.particles);
		assert_eq!(a.shapes, b.shapes);
	}

	#[test]
	fn invalid_config_fails_construction() {
		let config = FieldConfig {
			damping_factor: 1.0,
			..FieldConfig::default()
		};
		let result =
			ParticleFieldState::new(config, Viewport::new(1.0, 1.0), &mut SeededRandom::new(0));
		assert!(matches!(result, Err(FieldError::InvalidConfig(_))));
	}
}
