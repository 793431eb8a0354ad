//! Stylesheet for the classes and keyframes the effects rely on.
//!
//! Mounted into `<head>` by [`crate::App`] through `leptos_meta`.

pub const PAGE_STYLES: &str = r#"
@keyframes ripple {
	to {
		transform: scale(4);
		opacity: 0;
	}
}

@keyframes fadeInUp {
	from {
		opacity: 0;
		transform: translateY(30px);
	}
	to {
		opacity: 1;
		transform: translateY(0);
	}
}

@keyframes shimmer {
	0% { left: -100%; }
	100% { left: 100%; }
}

.animate-in {
	animation: fadeInUp 0.6s ease forwards;
}

.theme-toggle:hover {
	transform: scale(1.1);
	box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
}

.site-nav a.active {
	color: var(--primary) !important;
	background: rgba(79, 140, 255, 0.1) !important;
}

.card {
	transition: all 0.3s ease;
}

.card:hover {
	transform: translateY(-8px) !important;
	box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2) !important;
}

.notification {
	box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
}

.btn:focus-visible,
.theme-toggle:focus-visible {
	outline: 2px solid var(--primary);
	outline-offset: 2px;
}

.card-media {
	position: relative;
	overflow: hidden;
}

.card-media::before {
	content: '';
	position: absolute;
	top: 0;
	left: -100%;
	width: 100%;
	height: 100%;
	background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
	animation: shimmer 2s infinite;
}

body:not(.loaded) * {
	animation-play-state: paused !important;
}

.loaded .hero {
	animation: fadeInUp 1s ease forwards;
}
"#;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::page_effects::{LOADED_CLASS, reveal};

	#[test]
	fn defines_keyframes_used_inline() {
		for name in ["@keyframes ripple", "@keyframes fadeInUp", "@keyframes shimmer"] {
			assert!(PAGE_STYLES.contains(name), "missing {name}");
		}
	}

	#[test]
	fn styles_classes_the_effects_set() {
		assert!(PAGE_STYLES.contains(&format!(".{}", reveal::REVEAL_CLASS)));
		assert!(PAGE_STYLES.contains(&format!("a.{}", reveal::ACTIVE_CLASS)));
		assert!(PAGE_STYLES.contains(&format!("body:not(.{LOADED_CLASS})")));
		assert!(PAGE_STYLES.contains(&format!(".{LOADED_CLASS} .hero")));
	}

	#[test]
	fn braces_balance() {
		let open = PAGE_STYLES.matches('{').count();
		assert_eq!(open, PAGE_STYLES.matches('}').count());
	}
}
