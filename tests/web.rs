//! Browser tests for binding the starfield to real DOM elements and driving
//! it through animation frames and window resizes.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use starfield::{AttachError, FrameLoop, StarfieldCanvas, StarfieldConfig, attach, start_starfield};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn mount(tag: &str, id: &str) -> web_sys::Element {
	let doc = document();
	let element = doc.create_element(tag).unwrap();
	element.set_id(id);
	doc.body().unwrap().append_child(&element).unwrap();
	element
}

fn animated_config() -> StarfieldConfig {
	StarfieldConfig {
		honor_reduced_motion: false,
		..StarfieldConfig::default()
	}
}

fn canvas(element: &web_sys::Element) -> HtmlCanvasElement {
	element.clone().dyn_into().unwrap()
}

fn viewport() -> (u32, u32) {
	let window = web_sys::window().unwrap();
	let w = window.inner_width().unwrap().as_f64().unwrap();
	let h = window.inner_height().unwrap().as_f64().unwrap();
	(w as u32, h as u32)
}

fn fire_resize() {
	let event = Event::new("resize").unwrap();
	web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

/// Resolves on the next `requestAnimationFrame` callback.
async fn next_frame() {
	let promise = js_sys::Promise::new(&mut |resolve, _reject| {
		web_sys::window()
			.unwrap()
			.request_animation_frame(&resolve)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

async fn frames(n: usize) {
	for _ in 0..n {
		next_frame().await;
	}
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported() {
	let err = attach("no-such-canvas", animated_config()).err();
	assert_eq!(err, Some(AttachError::MissingElement("no-such-canvas".into())));
}

#[wasm_bindgen_test]
fn missing_canvas_is_silent_for_hosts() {
	assert!(start_starfield("still-no-such-canvas").is_none());
}

#[wasm_bindgen_test]
fn non_canvas_element_is_rejected() {
	let element = mount("div", "not-a-canvas");
	let err = attach("not-a-canvas", animated_config()).err();
	assert_eq!(err, Some(AttachError::NotACanvas("not-a-canvas".into())));
	element.remove();
}

#[wasm_bindgen_test]
fn canvas_is_sized_to_viewport_and_seeded() {
	let element = mount("canvas", "stars-sized");
	let frame_loop = attach("stars-sized", animated_config()).unwrap();

	let canvas = canvas(&element);
	assert_eq!((canvas.width(), canvas.height()), viewport());
	assert_eq!(frame_loop.star_count(), 300);
	assert!(frame_loop.is_animated());

	frame_loop.stop();
	element.remove();
}

#[wasm_bindgen_test]
fn stop_is_idempotent() {
	let element = mount("canvas", "stars-stop");
	let frame_loop = attach("stars-stop", animated_config()).unwrap();

	frame_loop.stop();
	frame_loop.stop();

	assert!(!frame_loop.is_running());
	assert!(!frame_loop.is_animated());
	element.remove();
}

#[wasm_bindgen_test]
fn default_config_animates() {
	let element = mount("canvas", "stars-default");
	let frame_loop = attach("stars-default", StarfieldConfig::default()).unwrap();

	assert!(frame_loop.is_animated());

	frame_loop.stop();
	element.remove();
}

#[wasm_bindgen_test]
fn field_wraps_against_whole_pixel_canvas() {
	let element = mount("canvas", "stars-whole");
	let frame_loop = attach("stars-whole", animated_config()).unwrap();
	let canvas = canvas(&element);

	assert_eq!(
		frame_loop.surface_size(),
		(canvas.width() as f64, canvas.height() as f64)
	);

	frame_loop.stop();
	element.remove();
}

#[wasm_bindgen_test]
async fn each_frame_schedules_the_next() {
	let element = mount("canvas", "stars-frames");
	let frame_loop = attach("stars-frames", animated_config()).unwrap();
	let before = frame_loop.stars();

	frames(5).await;

	assert!(frame_loop.ticks() >= 3, "only {} ticks ran", frame_loop.ticks());
	assert_eq!(frame_loop.star_count(), 300);
	assert_ne!(frame_loop.stars(), before);

	frame_loop.stop();
	element.remove();
}

#[wasm_bindgen_test]
async fn window_resize_refits_canvas_and_field() {
	let element = mount("canvas", "stars-resize");
	let frame_loop = attach("stars-resize", animated_config()).unwrap();
	let canvas = canvas(&element);
	next_frame().await;

	canvas.set_width(1);
	canvas.set_height(1);
	fire_resize();

	let (w, h) = viewport();
	assert_eq!((canvas.width(), canvas.height()), (w, h));
	assert_eq!(frame_loop.surface_size(), (w as f64, h as f64));
	assert_eq!(frame_loop.star_count(), 300);

	frame_loop.stop();
	element.remove();
}

#[wasm_bindgen_test]
async fn stop_halts_frames_and_resize_handling() {
	let element = mount("canvas", "stars-halt");
	let frame_loop = attach("stars-halt", animated_config()).unwrap();
	let canvas = canvas(&element);
	frames(2).await;

	frame_loop.stop();
	let ticks = frame_loop.ticks();
	let stars = frame_loop.stars();
	frames(3).await;

	assert_eq!(frame_loop.ticks(), ticks);
	assert_eq!(frame_loop.stars(), stars);

	canvas.set_width(1);
	fire_resize();
	assert_eq!(canvas.width(), 1);

	element.remove();
}

#[wasm_bindgen_test]
async fn still_frame_never_ticks_but_follows_resize() {
	let element = mount("canvas", "stars-still");
	let canvas = canvas(&element);
	let frame_loop = FrameLoop::start_with_motion(canvas.clone(), animated_config(), false).unwrap();

	assert!(frame_loop.is_running());
	assert!(!frame_loop.is_animated());
	let stars = frame_loop.stars();
	frames(3).await;
	assert_eq!(frame_loop.ticks(), 0);
	assert_eq!(frame_loop.stars(), stars);

	canvas.set_width(1);
	fire_resize();
	let (w, _) = viewport();
	assert_eq!(canvas.width(), w);

	frame_loop.stop();
	element.remove();
}

#[wasm_bindgen_test]
async fn unmounting_the_component_stops_its_loop() {
	let host: HtmlElement = mount("div", "stars-host").dyn_into().unwrap();
	let config = StarfieldConfig {
		canvas_id: "stars-mounted".to_string(),
		..animated_config()
	};
	let handle = leptos::mount::mount_to(host.clone(), move || {
		view! { <StarfieldCanvas config=config /> }
	});
	frames(2).await;

	let element = document().get_element_by_id("stars-mounted").unwrap();
	let canvas = canvas(&element);
	let (w, _) = viewport();
	assert_eq!(canvas.width(), w);

	drop(handle);
	canvas.set_width(1);
	fire_resize();
	assert_eq!(canvas.width(), 1);

	host.remove();
}
