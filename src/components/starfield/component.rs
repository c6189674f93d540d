//! Leptos component wrapping the starfield canvas.
//!
//! Renders a fixed, full-viewport canvas behind the page content and starts a
//! [`FrameLoop`] on it once the element is mounted. The loop is stopped when
//! the component is unmounted.

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::config::StarfieldConfig;
use super::frame_loop::FrameLoop;

/// Animated starfield background.
///
/// The canvas takes its element id from `config.canvas_id` so host styles and
/// scripts that target the stock id keep working. If the canvas cannot provide
/// a 2D context the component renders an empty canvas and nothing animates.
#[component]
pub fn StarfieldCanvas(#[prop(optional)] config: Option<StarfieldConfig>) -> impl IntoView {
	let config = config.unwrap_or_default();
	let canvas_id = config.canvas_id.clone();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if frame_loop.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		if let Ok(running) = FrameLoop::start(canvas, config.clone()) {
			frame_loop.set_value(Some(running));
		}
	});

	on_cleanup(move || {
		frame_loop.try_with_value(|running| {
			if let Some(running) = running {
				running.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=canvas_id
			class="starfield-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: -1;"
		/>
	}
}
