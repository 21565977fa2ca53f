//! CSS-facing visual types for the plasma widget.
//!
//! Colors are stored as 8-bit RGB with a floating-point alpha and rendered
//! into the CSS strings the canvas fill style accepts. Blend modes mirror
//! the `globalCompositeOperation` values of the 2d context.

use serde::Deserialize;
use serde::de::Deserializer;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel (0-255).
	pub r: u8,
	/// Green channel (0-255).
	pub g: u8,
	/// Blue channel (0-255).
	pub b: u8,
	/// Alpha channel (0.0-1.0).
	pub a: f64,
}

impl Color {
	/// Opaque color from 8-bit channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with an explicit alpha channel.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// The same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS string form: `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation;
	/// anything else falls back to neutral gray.
	pub fn parse(color_str: &str) -> Color {
		if color_str.starts_with('#') && color_str.len() == 7 {
			let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
			let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
			let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
			Color::rgb(r, g, b)
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let r = nums
				.first()
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let g = nums
				.get(1)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let b = nums
				.get(2)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			Color::rgba(r, g, b, a)
		} else {
			Color::rgb(128, 128, 128)
		}
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let css = String::deserialize(deserializer)?;
		Ok(Color::parse(&css))
	}
}

/// Pixel-compositing rule used when drawing particles over the background.
///
/// Maps one-to-one onto the canvas `globalCompositeOperation` blend values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
	/// Standard alpha compositing (default).
	#[default]
	SourceOver,
	/// Additive blending.
	Lighter,
	/// Multiplies source and destination channels.
	Multiply,
	/// Inverse multiply.
	Screen,
	/// Multiply or screen, depending on the destination.
	Overlay,
	/// Keeps the darker channel values.
	Darken,
	/// Keeps the lighter channel values.
	Lighten,
	/// Brightens the destination towards the source.
	ColorDodge,
	/// Darkens the destination towards the source.
	ColorBurn,
	/// Multiply or screen, depending on the source.
	HardLight,
	/// Softer variant of hard-light.
	SoftLight,
	/// Absolute channel difference.
	Difference,
	/// Lower-contrast difference.
	Exclusion,
	/// Source hue with destination saturation and luminosity.
	Hue,
	/// Source saturation with destination hue and luminosity.
	Saturation,
	/// Source hue and saturation with destination luminosity.
	Color,
	/// Source luminosity with destination hue and saturation.
	Luminosity,
}

impl BlendMode {
	/// The `globalCompositeOperation` string for this mode.
	pub fn as_composite_op(self) -> &'static str {
		match self {
			BlendMode::SourceOver => "source-over",
			BlendMode::Lighter => "lighter",
			BlendMode::Multiply => "multiply",
			BlendMode::Screen => "screen",
			BlendMode::Overlay => "overlay",
			BlendMode::Darken => "darken",
			BlendMode::Lighten => "lighten",
			BlendMode::ColorDodge => "color-dodge",
			BlendMode::ColorBurn => "color-burn",
			BlendMode::HardLight => "hard-light",
			BlendMode::SoftLight => "soft-light",
			BlendMode::Difference => "difference",
			BlendMode::Exclusion => "exclusion",
			BlendMode::Hue => "hue",
			BlendMode::Saturation => "saturation",
			BlendMode::Color => "color",
			BlendMode::Luminosity => "luminosity",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_colors() {
		assert_eq!(Color::parse("#ff8040"), Color::rgb(255, 128, 64));
	}

	#[test]
	fn parses_rgb_and_rgba_notation() {
		assert_eq!(Color::parse("rgb(10, 20, 30)"), Color::rgb(10, 20, 30));
		assert_eq!(
			Color::parse("rgba(10, 20, 30, 0.5)"),
			Color::rgba(10, 20, 30, 0.5)
		);
	}

	#[test]
	fn falls_back_to_gray_on_unrecognized_input() {
		assert_eq!(Color::parse("papayawhip"), Color::rgb(128, 128, 128));
		assert_eq!(Color::parse("#fff"), Color::rgb(128, 128, 128));
	}

	#[test]
	fn css_output_omits_alpha_when_opaque() {
		assert_eq!(Color::rgb(255, 255, 255).to_css(), "#ffffff");
		assert_eq!(
			Color::rgba(255, 0, 0, 0.25).to_css(),
			"rgba(255, 0, 0, 0.25)"
		);
	}

	#[test]
	fn with_alpha_keeps_channels() {
		let c = Color::rgb(1, 2, 3).with_alpha(0.5);
		assert_eq!(c, Color::rgba(1, 2, 3, 0.5));
	}

	#[test]
	fn blend_modes_map_to_composite_ops() {
		assert_eq!(BlendMode::SourceOver.as_composite_op(), "source-over");
		assert_eq!(BlendMode::ColorDodge.as_composite_op(), "color-dodge");
		assert_eq!(BlendMode::Luminosity.as_composite_op(), "luminosity");
	}

	#[test]
	fn default_blend_mode_is_source_over() {
		assert_eq!(BlendMode::default(), BlendMode::SourceOver);
	}

	#[test]
	fn deserializes_kebab_case_blend_modes() {
		let mode: BlendMode = serde_json::from_str("\"hard-light\"").unwrap();
		assert_eq!(mode, BlendMode::HardLight);
	}

	#[test]
	fn deserializes_colors_from_css_strings() {
		let color: Color = serde_json::from_str("\"#102030\"").unwrap();
		assert_eq!(color, Color::rgb(16, 32, 48));
	}
}
