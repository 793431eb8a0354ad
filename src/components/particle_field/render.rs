//! Drawing for the particle field.
//!
//! Rendering goes through the small [`Surface`] trait so the same frame can be
//! drawn onto a browser canvas or recorded in tests. Each frame is drawn in
//! passes for z-ordering:
//! 1. Clear
//! 2. Decorative outlines
//! 3. Particles
//! 4. Connection lines
//! 5. Optional single-frame flicker line

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::particles::{DecorativeShape, Particle, ParticleKind, SeededRandom};
use super::state::ParticleFieldState;
use super::theme::{Color, FieldStyle};

/// The drawing operations the particle field needs from its host.
pub trait Surface {
	/// Wipe the whole surface.
	fn clear(&mut self, width: f64, height: f64);
	/// Filled circle centered on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Filled square of side `size` centered on `(x, y)`, rotated by `rotation` radians.
	fn fill_rect(&mut self, x: f64, y: f64, size: f64, rotation: f64, color: Color);
	/// Stroked polyline, closed back to the first point when `closed`.
	fn stroke_path(&mut self, points: &[(f64, f64)], closed: bool, color: Color, width: f64);
	/// Straight line whose color fades from `start` to `end`.
	fn stroke_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.fill();
	}

	fn fill_rect(&mut self, x: f64, y: f64, size: f64, rotation: f64, color: Color) {
		self.save();
		let _ = self.translate(x, y);
		let _ = self.rotate(rotation);
		self.set_fill_style_str(&color.to_css());
		CanvasRenderingContext2d::fill_rect(self, -size / 2.0, -size / 2.0, size, size);
		self.restore();
	}

	fn stroke_path(&mut self, points: &[(f64, f64)], closed: bool, color: Color, width: f64) {
		let Some((&(x0, y0), rest)) = points.split_first() else {
			return;
		};
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(x0, y0);
		for &(x, y) in rest {
			self.line_to(x, y);
		}
		if closed {
			self.close_path();
		}
		self.stroke();
	}

	fn stroke_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	) {
		let gradient = self.create_linear_gradient(from.0, from.1, to.0, to.1);
		let _ = gradient.add_color_stop(0.0, &start.to_css());
		let _ = gradient.add_color_stop(1.0, &end.to_css());

		#[allow(deprecated)]
		self.set_stroke_style(&gradient);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Corners of a regular polygon with `sides` corners around `(x, y)`.
pub fn polygon_points(x: f64, y: f64, radius: f64, sides: usize, rotation: f64) -> Vec<(f64, f64)> {
	(0..sides)
		.map(|i| {
			let angle = rotation + TAU * i as f64 / sides as f64;
			(x + radius * angle.cos(), y + radius * angle.sin())
		})
		.collect()
}

/// Renders one complete frame.
pub fn render<S: Surface + ?Sized>(
	state: &ParticleFieldState,
	surface: &mut S,
	style: &FieldStyle,
	rng: &mut SeededRandom,
) {
	surface.clear(state.viewport.width, state.viewport.height);

	for shape in &state.shapes {
		draw_shape(surface, shape, style);
	}

	for p in &state.particles {
		draw_particle(surface, p, style);
	}

	for line in state.connections() {
		surface.stroke_path(
			&[line.from, line.to],
			false,
			style.line.with_alpha(line.opacity),
			style.line_width,
		);
	}

	if rng.chance(state.config.flicker_probability) {
		draw_flicker(state, surface, style, rng);
	}
}

fn draw_shape<S: Surface + ?Sized>(surface: &mut S, shape: &DecorativeShape, style: &FieldStyle) {
	let pulse = shape.pulse_phase.sin();
	let radius = shape.size * (1.0 + 0.1 * pulse) / 2.0;
	let alpha = shape.opacity * (0.8 + 0.2 * pulse);
	let points = polygon_points(shape.x, shape.y, radius, shape.kind.sides(), shape.rotation);

	surface.stroke_path(
		&points,
		true,
		style.shape.with_alpha(alpha),
		style.shape_line_width,
	);
}

fn draw_particle<S: Surface + ?Sized>(surface: &mut S, p: &Particle, style: &FieldStyle) {
	let pulse = p.pulse();
	let size = p.size * (1.0 + 0.3 * pulse);
	let alpha = p.opacity * (0.75 + 0.25 * pulse);
	let color = style
		.particle
		.lerp(style.particle_accent, (pulse + 1.0) * 0.25)
		.with_alpha(alpha);

	match p.kind {
		ParticleKind::Dot => surface.fill_circle(p.x, p.y, size, color),
		ParticleKind::Square => surface.fill_rect(p.x, p.y, size * 2.0, p.rotation, color),
	}
}

/// A short gradient streak somewhere on screen, drawn for a single frame.
fn draw_flicker<S: Surface + ?Sized>(
	state: &ParticleFieldState,
	surface: &mut S,
	style: &FieldStyle,
	rng: &mut SeededRandom,
) {
	let x = rng.range(0.0, state.viewport.width);
	let y = rng.range(0.0, state.viewport.height);
	let length = rng.range(20.0, 60.0);
	let angle = rng.range(0.0, TAU);
	let end = (x + length * angle.cos(), y + length * angle.sin());

	surface.stroke_gradient_line(
		(x, y),
		end,
		style.flicker.with_alpha(0.0),
		style.flicker.with_alpha(0.6),
		1.0,
	);
}
