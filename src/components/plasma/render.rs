//! Canvas draw pass for the plasma widget.
//!
//! One call per frame: fill the background, then draw every particle as a
//! blurred, blend-composited circle. Draw order is index order; where
//! circles overlap, later indices composite over earlier ones.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::compute::{CanvasSize, PlasmaCompute};
use super::config::PlasmaConfig;

/// Renders one full frame onto `ctx`.
pub fn render(
	ctx: &CanvasRenderingContext2d,
	config: &PlasmaConfig,
	width: f64,
	height: f64,
	phase: f64,
) {
	ctx.set_filter("none");
	let _ = ctx.set_global_composite_operation("source-over");
	ctx.set_fill_style_str(&config.background.to_css());
	ctx.fill_rect(0.0, 0.0, width, height);

	if config.particles == 0 {
		return;
	}

	let compute = PlasmaCompute::new(
		config.size,
		config.offset,
		CanvasSize::new(width, height),
		phase,
	);
	let radius = compute.radius();

	let _ = ctx.set_global_composite_operation(config.blend_mode.as_composite_op());
	ctx.set_filter(&format!("blur({}px)", compute.blur_radius()));
	ctx.set_fill_style_str(&config.color.to_css());

	for index in 0..config.particles {
		let center = compute.position(index);
		ctx.begin_path();
		let _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
		ctx.fill();
	}

	ctx.set_filter("none");
	let _ = ctx.set_global_composite_operation("source-over");
}
