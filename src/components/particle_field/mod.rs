//! Animated particle background.
//!
//! Draws a fixed population of drifting particles on a full-viewport canvas:
//! - Pointer-reactive motion with damping and edge bouncing
//! - Proximity lines between nearby particles
//! - Slowly rotating decorative outlines and an occasional flicker streak
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::{FieldConfig, ParticleFieldCanvas, ThemeMode};
//!
//! let theme = RwSignal::new(ThemeMode::Dark);
//! view! { <ParticleFieldCanvas config=FieldConfig::default() theme=theme /> }
//! ```

mod component;
mod field;
mod particles;
mod render;
mod state;
pub mod theme;
mod types;

pub use component::{FrameLoop, ParticleFieldCanvas};
pub use field::{ParticleField, RunState};
pub use particles::{DecorativeShape, Particle, ParticleKind, SeededRandom, ShapeKind};
pub use render::{Surface, render};
pub use state::{Connection, ParticleFieldState, PointerSnapshot, Viewport, connection_opacity};
pub use theme::{Color, FieldStyle};
pub use types::{FieldConfig, FieldError, MAX_PARTICLES, MAX_SHAPES, PointerMode};
