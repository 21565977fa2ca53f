//! Animated plasma background widget.
//!
//! Renders a small number of moving, blurred, blend-composited circles over
//! a background color on an HTML canvas:
//! - Deterministic per-frame geometry, seamlessly periodic in phase
//! - Speed, size, phase offset, blend mode, and fps-cap knobs
//! - Optional child content composited above the effect
//!
//! # Example
//!
//! ```ignore
//! use plasma_canvas::{PlasmaCanvas, PlasmaConfig};
//!
//! let config = Signal::derive(|| PlasmaConfig::aurora());
//!
//! view! {
//!     <PlasmaCanvas config=config fullscreen=true>
//!         <h1>"Hello"</h1>
//!     </PlasmaCanvas>
//! }
//! ```

mod component;
mod compute;
mod config;
mod driver;
mod render;
pub mod theme;

pub use component::PlasmaCanvas;
pub use compute::{CanvasSize, PlasmaCompute, Point};
pub use config::PlasmaConfig;
pub use driver::{BASE_PERIOD_SECONDS, PhaseDriver};
