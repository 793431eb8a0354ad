pub mod cursor_trail;
pub mod listener;
pub mod page_effects;
pub mod page_styles;
pub mod particle_field;
pub mod theme;
