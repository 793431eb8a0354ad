//! A running particle field: simulation state bound to a drawing surface.

use log::info;

use super::particles::SeededRandom;
use super::render::{self, Surface};
use super::state::{ParticleFieldState, PointerSnapshot, Viewport};
use super::theme::FieldStyle;
use super::types::{FieldConfig, FieldError};

/// Whether the field still draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
	Running,
	Cancelled,
}

/// Owns the simulation and the surface it draws on.
///
/// The host calls [`ParticleField::frame`] once per display refresh and only
/// schedules another tick while it returns `true`.
pub struct ParticleField<S: Surface> {
	pub state: ParticleFieldState,
	pub style: FieldStyle,
	surface: S,
	rng: SeededRandom,
	run: RunState,
}

impl<S: Surface> ParticleField<S> {
	/// Start a field. Fails fast when there is nothing to draw on.
	pub fn new(
		surface: Option<S>,
		config: FieldConfig,
		viewport: Viewport,
		seed: u64,
	) -> Result<Self, FieldError> {
		let surface = surface.ok_or(FieldError::MissingSurface)?;
		let mut rng = SeededRandom::new(seed);
		let state = ParticleFieldState::new(config, viewport, &mut rng)?;
		info!(
			"portfolio-fx: particle field started with {} particles, {} shapes (seed {seed})",
			state.particles.len(),
			state.shapes.len()
		);
		Ok(Self {
			state,
			style: FieldStyle::default(),
			surface,
			rng,
			run: RunState::Running,
		})
	}

	pub fn run_state(&self) -> RunState {
		self.run
	}

	pub fn is_running(&self) -> bool {
		self.run == RunState::Running
	}

	/// Advance and draw one frame. Returns whether another frame should be
	/// scheduled; a cancelled field neither updates nor draws.
	pub fn frame(&mut self, pointer: Option<PointerSnapshot>) -> bool {
		if !self.is_running() {
			return false;
		}
		self.state.update(pointer);
		render::render(&self.state, &mut self.surface, &self.style, &mut self.rng);
		true
	}

	pub fn resize(&mut self, viewport: Viewport) -> bool {
		self.state.resize(viewport)
	}

	/// Stop drawing for good.
	pub fn cancel(&mut self) {
		if self.run == RunState::Running {
			info!(
				"portfolio-fx: particle field cancelled after {} frames",
				self.state.frame
			);
		}
		self.run = RunState::Cancelled;
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::render::tests::RecordingSurface;

	fn field() -> ParticleField<RecordingSurface> {
		ParticleField::new(
			Some(RecordingSurface::default()),
			FieldConfig::default(),
			Viewport::new(800.0, 600.0),
			3,
		)
		.unwrap()
	}

	#[test]
	fn missing_surface_refuses_to_start() {
		let result = ParticleField::<RecordingSurface>::new(
			None,
			FieldConfig::default(),
			Viewport::new(800.0, 600.0),
			3,
		);
		assert!(matches!(result, Err(FieldError::MissingSurface)));
	}

	#[test]
	fn negative_viewport_refuses_to_start() {
		let result = ParticleField::new(
			Some(RecordingSurface::default()),
			FieldConfig::default(),
			Viewport::new(-50.0, 600.0),
			3,
		);
		assert!(matches!(result, Err(FieldError::InvalidViewport { .. })));
	}

	#[test]
	fn frames_draw_while_running() {
		let mut f = field();
		assert!(f.frame(None));
		assert!(f.frame(Some(PointerSnapshot { x: 10.0, y: 10.0 })));
		assert!(!f.surface().calls.is_empty());
		assert_eq!(f.state.frame, 2);
	}

	#[test]
	fn no_draws_after_cancel() {
		let mut f = field();
		f.frame(None);
		f.cancel();
		let drawn = f.surface().calls.len();

		for _ in 0..10 {
			assert!(!f.frame(None));
		}
		assert_eq!(f.surface().calls.len(), drawn);
		assert_eq!(f.run_state(), RunState::Cancelled);
		assert_eq!(f.state.frame, 1);
	}
}
