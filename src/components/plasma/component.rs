//! Leptos component wrapping the plasma canvas.
//!
//! The component creates an HTML canvas element, sizes it, and runs the
//! animation loop via `requestAnimationFrame`. When animation is disabled
//! (speed 0) no loop is scheduled at all: the widget paints once on mount
//! and once per resize, and otherwise costs nothing while idle.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::PlasmaConfig;
use super::driver::PhaseDriver;
use super::render;

/// Fixed per-frame timestep fed to the driver, matching rAF cadence.
const FRAME_DT: f64 = 0.016;

/// Bundles the sanitized configuration with the running animation state.
struct PlasmaContext {
	config: PlasmaConfig,
	driver: PhaseDriver,
	width: f64,
	height: f64,
	elapsed: f64,
	last_rendered: f64,
}

/// Renders the animated plasma effect on a canvas element.
///
/// Pass configuration via the reactive `config` signal. The component sizes
/// itself to its parent container by default; set `fullscreen = true` to
/// fill the viewport and resize automatically with the window. Explicit
/// `width`/`height` override automatic sizing. Children are composited
/// above the particles, clipped to the widget bounds.
#[component]
pub fn PlasmaCanvas(
	#[prop(into)] config: Signal<PlasmaConfig>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] children: Option<Children>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<PlasmaContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let cfg = config.get().sanitize();
		let driver = PhaseDriver::new(cfg.speed, cfg.fps);

		// First frame is always painted, even when the loop never starts.
		render::render(&ctx, &cfg, w, h, driver.phase_at(0.0));

		*context.borrow_mut() = Some(PlasmaContext {
			config: cfg,
			driver,
			width: w,
			height: h,
			elapsed: 0.0,
			last_rendered: 0.0,
		});

		if fullscreen && resize_cb.borrow().is_none() {
			let (context_resize, canvas_resize, ctx_resize) =
				(context.clone(), canvas.clone(), ctx.clone());
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.width = nw;
					c.height = nh;
					// Repaint immediately so a frozen widget stays filled.
					let phase = c.driver.phase_at(c.elapsed);
					render::render(&ctx_resize, &c.config, nw, nh, phase);
				}
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		if driver.is_animating() {
			let loop_alive = animate.borrow().is_some();
			let (context_anim, animate_inner) = (context.clone(), animate.clone());
			*animate.borrow_mut() = Some(Closure::new(move || {
				if let Some(ref mut c) = *context_anim.borrow_mut() {
					c.elapsed += FRAME_DT;
					if c.driver.frame_due(c.elapsed, c.last_rendered) {
						c.last_rendered = c.elapsed;
						let phase = c.driver.phase_at(c.elapsed);
						render::render(&ctx, &c.config, c.width, c.height, phase);
					}
				}
				if let Some(ref cb) = *animate_inner.borrow() {
					let _ = web_sys::window()
						.unwrap()
						.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}));
			if !loop_alive {
				if let Some(ref cb) = *animate.borrow() {
					let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		} else {
			// Stop any loop left over from a previous configuration.
			*animate.borrow_mut() = None;
		}
	});

	view! {
		<div
			class="plasma-widget"
			style="position: relative; overflow: hidden; width: 100%; height: 100%;"
		>
			<canvas node_ref=canvas_ref class="plasma-canvas" style="display: block;" />
			{children.map(|content| {
				view! {
					<div class="plasma-content" style="position: absolute; inset: 0;">
						{content()}
					</div>
				}
			})}
		</div>
	}
}
