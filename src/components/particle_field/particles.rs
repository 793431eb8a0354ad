//! Particle and decorative shape records, plus the seeded generator used to
//! spawn them.

use std::f64::consts::TAU;

use super::types::FieldConfig;

/// How a particle is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
	Dot,
	Square,
}

/// Outline drawn by a decorative shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
	Triangle,
	Square,
	Hexagon,
}

impl ShapeKind {
	/// Number of polygon corners.
	pub fn sides(self) -> usize {
		match self {
			ShapeKind::Triangle => 3,
			ShapeKind::Square => 4,
			ShapeKind::Hexagon => 6,
		}
	}
}

/// A single moving particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
	pub pulse_phase: f64,
	pub pulse_speed: f64,
	pub kind: ParticleKind,
	pub rotation: f64,
	pub rotation_speed: f64,
}

impl Particle {
	/// Current pulse factor in `[-1, 1]`.
	pub fn pulse(&self) -> f64 {
		self.pulse_phase.sin()
	}
}

/// A static outline that only rotates and pulses.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorativeShape {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub opacity: f64,
	pub kind: ShapeKind,
	pub rotation: f64,
	pub rotation_speed: f64,
	pub pulse_phase: f64,
	pub pulse_speed: f64,
}

/// Deterministic xorshift64* generator.
///
/// Two generators built from the same seed yield the same sequence, which is
/// what makes a whole frame reproducible in tests.
#[derive(Clone, Debug)]
pub struct SeededRandom {
	state: u64,
}

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		// xorshift gets stuck on zero
		let state = seed ^ 0x9E37_79B9_7F4A_7C15;
		Self {
			state: if state == 0 { 0x2545_F491_4F6C_DD1D } else { state },
		}
	}

	/// Uniform value in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		self.state ^= self.state >> 12;
		self.state ^= self.state << 25;
		self.state ^= self.state >> 27;
		let bits = self.state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
		bits as f64 / (1u64 << 53) as f64
	}

	/// Uniform value in `[min, max)`.
	pub fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_f64() * (max - min)
	}

	/// Uniform value in `[-magnitude, magnitude)`.
	pub fn symmetric(&mut self, magnitude: f64) -> f64 {
		self.range(-magnitude, magnitude)
	}

	/// `true` with the given probability.
	pub fn chance(&mut self, probability: f64) -> bool {
		self.next_f64() < probability
	}
}

/// Spawn the moving population uniformly over the viewport.
pub fn spawn_particles(
	config: &FieldConfig,
	width: f64,
	height: f64,
	rng: &mut SeededRandom,
) -> Vec<Particle> {
	let mut particles = Vec::with_capacity(config.particle_count);

	for _ in 0..config.particle_count {
		let kind = if rng.chance(config.square_ratio) {
			ParticleKind::Square
		} else {
			ParticleKind::Dot
		};
		particles.push(Particle {
			x: rng.range(0.0, width),
			y: rng.range(0.0, height),
			vx: rng.symmetric(config.speed),
			vy: rng.symmetric(config.speed),
			size: rng.range(config.size.0, config.size.1),
			opacity: rng.range(config.opacity.0, config.opacity.1),
			pulse_phase: rng.range(0.0, TAU),
			pulse_speed: rng.range(config.pulse_speed.0, config.pulse_speed.1),
			kind,
			rotation: rng.range(0.0, TAU),
			rotation_speed: rng.symmetric(config.rotation_speed),
		});
	}

	particles
}

/// Spawn the decorative outlines.
pub fn spawn_shapes(
	config: &FieldConfig,
	width: f64,
	height: f64,
	rng: &mut SeededRandom,
) -> Vec<DecorativeShape> {
	const KINDS: [ShapeKind; 3] = [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Hexagon];

	(0..config.shape_count)
		.map(|i| DecorativeShape {
			x: rng.range(0.0, width),
			y: rng.range(0.0, height),
			size: rng.range(config.shape_size.0, config.shape_size.1),
			opacity: rng.range(config.shape_opacity.0, config.shape_opacity.1),
			kind: KINDS[i % KINDS.len()],
			rotation: rng.range(0.0, TAU),
			rotation_speed: rng.symmetric(config.rotation_speed * 0.5),
			pulse_phase: rng.range(0.0, TAU),
			pulse_speed: rng.range(config.pulse_speed.0, config.pulse_speed.1) * 0.5,
		})
		.collect()
}

/// Advance a shape's rotation and pulse by one frame.
pub fn advance_shape(shape: &mut DecorativeShape) {
	shape.rotation = (shape.rotation + shape.rotation_speed) % TAU;
	shape.pulse_phase = (shape.pulse_phase + shape.pulse_speed) % TAU;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generator_stays_in_unit_interval() {
		let mut rng = SeededRandom::new(0);
		for _ in 0..10_000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn same_seed_same_population() {
		let config = FieldConfig::default();
		let a = spawn_particles(&config, 800.0, 600.0, &mut SeededRandom::new(42));
		let b = spawn_particles(&config, 800.0, 600.0, &mut SeededRandom::new(42));
		assert_eq!(a, b);
	}

	#[test]
	fn different_seeds_differ() {
		let config = FieldConfig::default();
		let a = spawn_particles(&config, 800.0, 600.0, &mut SeededRandom::new(1));
		let b = spawn_particles(&config, 800.0, 600.0, &mut SeededRandom::new(2));
		assert_ne!(a, b);
	}

	#[test]
	fn spawned_attributes_respect_ranges() {
		let config = FieldConfig::default();
		let particles = spawn_particles(&config, 320.0, 200.0, &mut SeededRandom::new(7));
		assert_eq!(particles.len(), config.particle_count);
		for p in &particles {
			assert!((0.0..=320.0).contains(&p.x));
			assert!((0.0..=200.0).contains(&p.y));
			assert!(p.vx.abs() <= config.speed && p.vy.abs() <= config.speed);
			assert!(p.size >= config.size.0 && p.size <= config.size.1);
			assert!(p.opacity >= config.opacity.0 && p.opacity <= config.opacity.1);
		}
	}

	#[test]
	fn shapes_cycle_through_kinds() {
		let config = FieldConfig {
			shape_count: 4,
			..FieldConfig::default()
		};
		let shapes = spawn_shapes(&config, 100.0, 100.0, &mut SeededRandom::new(3));
		let kinds: Vec<_> = shapes.iter().map(|s| s.kind).collect();
		assert_eq!(
			kinds,
			[
				ShapeKind::Triangle,
				ShapeKind::Square,
				ShapeKind::Hexagon,
				ShapeKind::Triangle
			]
		);
	}
}
