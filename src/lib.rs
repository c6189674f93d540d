//! starfield: Animated starfield background for a personal portfolio page.
//!
//! This crate provides a WASM canvas component that renders drifting,
//! twinkling stars behind the page content, plus a plain `startStarfield`
//! export for pages that ship their own canvas element.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::starfield::{
	AttachError, Color, FrameLoop, Particle, ParticleField, Span, StarfieldCanvas,
	StarfieldConfig, Surface, attach,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield: logging initialized");
}

/// Load configuration overrides from a script element with id="starfield-config".
/// Expected format: a JSON object with any subset of [`StarfieldConfig`] fields.
pub fn load_config() -> Option<StarfieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("starfield-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match StarfieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!("starfield: loaded config for {} stars", config.count);
			Some(config)
		}
		Err(e) => {
			warn!("starfield: failed to parse config: {}", e);
			None
		}
	}
}

/// Running starfield handed back to JavaScript.
#[wasm_bindgen]
pub struct StarfieldHandle {
	inner: FrameLoop,
}

#[wasm_bindgen]
impl StarfieldHandle {
	/// Stop animating and detach from the window.
	pub fn stop(&self) {
		self.inner.stop();
	}

	/// Whether the loop is still attached.
	#[wasm_bindgen(getter)]
	pub fn running(&self) -> bool {
		self.inner.is_running()
	}

	/// Number of stars being drawn.
	#[wasm_bindgen(getter, js_name = starCount)]
	pub fn star_count(&self) -> usize {
		self.inner.star_count()
	}
}

/// Start a starfield on an existing canvas element.
///
/// Returns `undefined` and does nothing if the element is missing or cannot
/// be drawn on.
#[wasm_bindgen(js_name = startStarfield)]
pub fn start_starfield(canvas_id: &str) -> Option<StarfieldHandle> {
	let config = load_config().unwrap_or_default();
	attach(canvas_id, config)
		.ok()
		.map(|inner| StarfieldHandle { inner })
}

/// Main application component.
/// Loads starfield settings from the DOM and renders the background canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<StarfieldCanvas config=config />
	}
}
