//! Per-frame plasma geometry.
//!
//! [`PlasmaCompute`] maps (phase, particle index, size scale, phase offset,
//! canvas size) to the center, radius, and blur radius of one particle. It
//! is pure and total: no hidden state, no error paths, and every phase term
//! inside a trigonometric argument carries an integer frequency, so one full
//! phase cycle loops seamlessly.

use std::f64::consts::TAU;

/// A point in canvas device-independent coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

/// Canvas dimensions in device-independent units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
}

impl CanvasSize {
	/// Canvas size from width and height.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Length of the shorter canvas edge.
	pub fn shortest_side(self) -> f64 {
		self.width.min(self.height)
	}
}

/// Fraction of the shortest canvas side one particle covers at size 1.0.
const RADIUS_FACTOR: f64 = 0.2;

/// Blur radius as a fraction of the particle radius.
const BLUR_FACTOR: f64 = 0.4;

/// Geometry engine for one frame of the plasma animation.
///
/// Constructed per frame from the current phase and configuration, then
/// queried once per particle. Performs no input validation: out-of-range
/// values produce degenerate but finite geometry, never a panic.
pub struct PlasmaCompute {
	size_scale: f64,
	offset: f64,
	canvas: CanvasSize,
	phase: f64,
}

impl PlasmaCompute {
	/// Engine for one frame at the given phase.
	pub fn new(size_scale: f64, offset: f64, canvas: CanvasSize, phase: f64) -> Self {
		Self {
			size_scale,
			offset,
			canvas,
			phase,
		}
	}

	/// Center of particle `index` at the current phase.
	///
	/// Each particle follows a closed Lissajous-style loop spanning the full
	/// canvas: x in [0, width], y in [0, height]. Index-hashed angles
	/// decouple the particles from one another; the integer frequencies keep
	/// the loop exact over one phase cycle.
	pub fn position(&self, index: u32) -> Point {
		let n = index as f64 + 1.0;
		let angle_x = pseudo_random(n * 1.1) * TAU;
		let angle_y = pseudo_random(n * 2.3) * TAU;
		let freq_x = 1.0 + (pseudo_random(n * 3.7) * 2.0).floor();
		let freq_y = 1.0 + (pseudo_random(n * 4.1) * 2.0).floor();

		let t = self.phase + self.offset;
		Point {
			x: self.canvas.width / 2.0 * (1.0 + (freq_x * t + angle_x).sin()),
			y: self.canvas.height / 2.0 * (1.0 + (freq_y * t + angle_y).cos()),
		}
	}

	/// Shared particle radius; independent of index and phase.
	pub fn radius(&self) -> f64 {
		self.canvas.shortest_side() * RADIUS_FACTOR * self.size_scale
	}

	/// Edge softness handed to the canvas blur filter.
	pub fn blur_radius(&self) -> f64 {
		self.radius() * BLUR_FACTOR
	}
}

/// Deterministic index hash in [0, 1) (sine-fract).
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	const CANVAS: CanvasSize = CanvasSize::new(100.0, 100.0);

	fn engine(phase: f64) -> PlasmaCompute {
		PlasmaCompute::new(1.0, 0.0, CANVAS, phase)
	}

	#[test]
	fn positions_stay_within_canvas_bounds() {
		for step in 0..64 {
			let compute = engine(TAU * step as f64 / 64.0);
			for index in 0..10 {
				let p = compute.position(index);
				assert!(p.x >= 0.0 && p.x <= CANVAS.width, "x out of bounds: {}", p.x);
				assert!(p.y >= 0.0 && p.y <= CANVAS.height, "y out of bounds: {}", p.y);
			}
		}
	}

	#[test]
	fn full_cycle_returns_to_start() {
		for index in 0..10 {
			let start = engine(0.25).position(index);
			let looped = engine(0.25 + TAU).position(index);
			assert!((start.x - looped.x).abs() < 1e-6);
			assert!((start.y - looped.y).abs() < 1e-6);
		}
	}

	#[test]
	fn identical_inputs_give_bit_identical_output() {
		let (a, b) = (engine(1.5), engine(1.5));
		for index in 0..10 {
			assert_eq!(a.position(index), b.position(index));
		}
		assert_eq!(a.radius(), b.radius());
		assert_eq!(a.blur_radius(), b.blur_radius());
	}

	#[test]
	fn radius_and_blur_scale_strictly_with_size() {
		let small = PlasmaCompute::new(1.0, 0.0, CANVAS, 0.0);
		let large = PlasmaCompute::new(2.0, 0.0, CANVAS, 0.0);
		assert!(large.radius() > small.radius());
		assert!(large.blur_radius() > small.blur_radius());
	}

	#[test]
	fn radius_is_independent_of_phase() {
		assert_eq!(engine(0.0).radius(), engine(3.0).radius());
	}

	#[test]
	fn zero_canvas_produces_finite_geometry() {
		let compute = PlasmaCompute::new(1.0, 0.0, CanvasSize::new(0.0, 0.0), 1.0);
		let p = compute.position(0);
		assert!(p.x.is_finite() && p.y.is_finite());
		assert_eq!(compute.radius(), 0.0);
		assert_eq!(compute.blur_radius(), 0.0);
	}

	#[test]
	fn offset_shifts_trajectories() {
		let plain = PlasmaCompute::new(1.0, 0.0, CANVAS, 1.0).position(0);
		let shifted = PlasmaCompute::new(1.0, 1.0, CANVAS, 1.0).position(0);
		assert_ne!(plain, shifted);
	}

	#[test]
	fn three_particles_are_distinct_and_reproducible() {
		let compute = engine(0.0);
		let frames: Vec<(Point, f64, f64)> = (0..3)
			.map(|i| (compute.position(i), compute.radius(), compute.blur_radius()))
			.collect();

		assert_ne!(frames[0].0, frames[1].0);
		assert_ne!(frames[1].0, frames[2].0);
		assert_ne!(frames[0].0, frames[2].0);

		let looped = engine(TAU);
		for (i, (p, r, blur)) in frames.iter().enumerate() {
			let q = looped.position(i as u32);
			assert!((p.x - q.x).abs() < 1e-6);
			assert!((p.y - q.y).abs() < 1e-6);
			assert_eq!(*r, looped.radius());
			assert_eq!(*blur, looped.blur_radius());
		}
	}

	proptest! {
		#[test]
		fn any_phase_keeps_particles_in_bounds(phase in 0.0..TAU, index in 0u32..64) {
			let p = engine(phase).position(index);
			prop_assert!(p.x >= 0.0 && p.x <= CANVAS.width);
			prop_assert!(p.y >= 0.0 && p.y <= CANVAS.height);
		}

		#[test]
		fn one_cycle_is_seamless(phase in 0.0..TAU, index in 0u32..64) {
			let start = engine(phase).position(index);
			let looped = engine(phase + TAU).position(index);
			prop_assert!((start.x - looped.x).abs() < 1e-6);
			prop_assert!((start.y - looped.y).abs() < 1e-6);
		}

		#[test]
		fn geometry_is_finite_for_any_canvas(w in 0.0..4096.0, h in 0.0..4096.0, phase in 0.0..TAU) {
			let compute = PlasmaCompute::new(1.0, 0.0, CanvasSize::new(w, h), phase);
			let p = compute.position(7);
			prop_assert!(p.x.is_finite() && p.y.is_finite());
			prop_assert!(compute.radius().is_finite());
			prop_assert!(compute.blur_radius() >= 0.0);
		}
	}
}
