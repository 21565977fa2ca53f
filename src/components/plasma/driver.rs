//! Phase generation for the plasma animation.
//!
//! The component accumulates animation time and asks the driver for the
//! cyclic phase each frame. The driver owns the speed-to-period mapping and
//! the optional frame-rate cap; it holds no clock of its own, which keeps it
//! a plain value type.

use std::f64::consts::TAU;

/// Seconds per full phase cycle at speed 1.0.
pub const BASE_PERIOD_SECONDS: f64 = 120.0;

/// Maps accumulated animation time to a phase in [0, TAU).
///
/// A speed of zero (or below) disables animation entirely: the phase is held
/// at 0.0 and [`is_animating`](Self::is_animating) tells the component to
/// stop scheduling frames, so a frozen widget costs nothing while idle.
#[derive(Clone, Copy, Debug)]
pub struct PhaseDriver {
	/// Seconds per cycle; `None` when animation is disabled.
	period: Option<f64>,
	/// Minimum seconds between rendered frames. 0 = uncapped.
	min_frame_interval: f64,
}

impl PhaseDriver {
	/// Driver for the given speed scale and optional fps cap.
	pub fn new(speed: f64, fps: Option<u32>) -> Self {
		// Guard the division: non-positive speed means "hold one frame".
		let period = (speed > 0.0).then(|| BASE_PERIOD_SECONDS / speed);
		let min_frame_interval = match fps {
			Some(fps) if fps > 0 => 1.0 / f64::from(fps),
			_ => 0.0,
		};
		Self {
			period,
			min_frame_interval,
		}
	}

	/// Whether new animation frames should be scheduled at all.
	pub fn is_animating(&self) -> bool {
		self.period.is_some()
	}

	/// Phase for the given accumulated time, in [0, TAU).
	pub fn phase_at(&self, elapsed: f64) -> f64 {
		match self.period {
			Some(period) => (elapsed / period * TAU).rem_euclid(TAU),
			None => 0.0,
		}
	}

	/// Frame-rate gate: whether enough time has passed since the last
	/// rendered frame to draw another one.
	pub fn frame_due(&self, elapsed: f64, last_rendered: f64) -> bool {
		elapsed - last_rendered >= self.min_frame_interval
	}
}
