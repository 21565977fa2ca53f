//! plasma-canvas: animated plasma background widget for Leptos.
//!
//! This crate provides a WASM-based decorative widget that renders a small
//! number of moving, blurred, blend-composited circles over a background
//! color, optionally behind page content. Per-frame geometry is a pure
//! function of the animation phase; blur and compositing are supplied by the
//! browser's 2d canvas.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::plasma::{PhaseDriver, PlasmaCanvas, PlasmaCompute, PlasmaConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("plasma-canvas: logging initialized");
}

/// Reference to a named preset in page-embedded configuration.
#[derive(Deserialize)]
struct PresetRef {
	preset: String,
}

/// Load widget configuration from a script element with id="plasma-config".
/// Expected format: JSON matching [`PlasmaConfig`], or `{"preset": "aurora"}`
/// to select a named preset. A `preset` key wins over inline fields.
fn load_plasma_config() -> Option<PlasmaConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("plasma-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	if let Ok(PresetRef { preset }) = serde_json::from_str::<PresetRef>(&json_text) {
		match PlasmaConfig::preset(&preset) {
			Some(config) => {
				info!("plasma-canvas: using preset {:?}", preset);
				return Some(config);
			}
			None => warn!("plasma-canvas: unknown preset {:?}", preset),
		}
	}

	match serde_json::from_str::<PlasmaConfig>(&json_text) {
		Ok(config) => {
			info!(
				"plasma-canvas: loaded page config ({} particles)",
				config.particles
			);
			Some(config)
		}
		Err(e) => {
			warn!("plasma-canvas: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads configuration from the DOM and renders a fullscreen plasma with
/// overlay content on top.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Fall back to defaults when the page carries no (valid) config.
	let config = load_plasma_config().unwrap_or_default().sanitize();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Plasma" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-plasma">
			<PlasmaCanvas config=config_signal fullscreen=true>
				<div class="plasma-overlay">
					<h1>"Plasma"</h1>
					<p class="subtitle">"Liquid color, computed one phase at a time."</p>
				</div>
			</PlasmaCanvas>
		</div>
	}
}
