//! Plasma widget configuration: construction-time knobs and curated presets.

use serde::Deserialize;

use super::theme::{BlendMode, Color};

/// Construction-time configuration for the plasma widget.
///
/// Every field has a default, so the JSON form may specify any subset:
///
/// ```json
/// { "particles": 12, "color": "#6491a0", "blend_mode": "screen" }
/// ```
///
/// The configuration is immutable for the lifetime of a mounted widget.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlasmaConfig {
	/// Number of circles drawn per frame.
	pub particles: u32,
	/// Foreground color shared by every particle.
	pub color: Color,
	/// Color filled over the full surface before particles are drawn.
	pub background: Color,
	/// Compositing rule for particles over the background.
	pub blend_mode: BlendMode,
	/// Particle size multiplier. 1.0 = default, 0.0 collapses particles.
	pub size: f64,
	/// Animation speed multiplier. 0.0 freezes the animation entirely.
	pub speed: f64,
	/// Phase offset shifting every particle trajectory, in radians.
	pub offset: f64,
	/// Optional cap on rendered frames per second. `None` = uncapped.
	pub fps: Option<u32>,
}

impl Default for PlasmaConfig {
	fn default() -> Self {
		Self {
			particles: 10,
			color: Color::rgb(255, 255, 255),
			background: Color::rgb(0, 0, 0),
			blend_mode: BlendMode::SourceOver,
			size: 1.0,
			speed: 1.0,
			offset: 0.0,
			fps: None,
		}
	}
}

impl PlasmaConfig {
	/// Clamps out-of-range values to the nearest valid ones.
	///
	/// Invalid configuration is a caller contract violation, but this is a
	/// purely visual component: a degraded render beats failing the host
	/// page, so nothing here returns an error.
	pub fn sanitize(mut self) -> Self {
		self.size = self.size.max(0.0);
		self.speed = self.speed.max(0.0);
		if self.fps == Some(0) {
			self.fps = None;
		}
		self
	}

	/// Cool teals drifting over near-black blue.
	pub fn aurora() -> Self {
		Self {
			particles: 12,
			color: Color::rgba(100, 145, 135, 0.8),
			background: Color::rgb(18, 20, 28),
			blend_mode: BlendMode::Screen,
			size: 1.1,
			speed: 1.4,
			..Self::default()
		}
	}

	/// Warm additive glow on deep brown.
	pub fn ember() -> Self {
		Self {
			particles: 8,
			color: Color::rgba(180, 120, 100, 0.7),
			background: Color::rgb(28, 24, 22),
			blend_mode: BlendMode::Lighter,
			size: 1.3,
			speed: 0.8,
			..Self::default()
		}
	}

	/// Slow blue masses in dark water.
	pub fn deep_sea() -> Self {
		Self {
			particles: 10,
			color: Color::rgba(85, 135, 155, 0.85),
			background: Color::rgb(15, 25, 35),
			blend_mode: BlendMode::Lighten,
			size: 1.5,
			speed: 0.6,
			..Self::default()
		}
	}

	/// A few soft white circles on black.
	pub fn minimal() -> Self {
		Self {
			particles: 6,
			size: 0.9,
			..Self::default()
		}
	}

	/// Looks up a preset by name.
	pub fn preset(name: &str) -> Option<Self> {
		match name {
			"aurora" => Some(Self::aurora()),
			"ember" => Some(Self::ember()),
			"deep_sea" => Some(Self::deep_sea()),
			"minimal" => Some(Self::minimal()),
			_ => None,
		}
	}
}
