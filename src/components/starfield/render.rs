//! Drawing primitives for the starfield.
//!
//! The field only needs two operations from its target: wipe everything, and
//! fill a disc. [`Surface`] captures that so the update rule can be exercised
//! without a browser; the canvas implementation is a thin wrapper over the
//! 2D context calls.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::theme::Color;

/// A drawable target the starfield paints onto.
pub trait Surface {
	/// Clear the rectangle `(0, 0)..(width, height)`.
	fn clear(&self, width: f64, height: f64);

	/// Fill a disc centred at `(x, y)`.
	fn fill_disc(&self, x: f64, y: f64, radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_disc(&self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Draw one star with its current opacity as alpha.
pub fn draw_particle<S: Surface + ?Sized>(surface: &S, particle: &Particle, color: Color) {
	surface.fill_disc(
		particle.x,
		particle.y,
		particle.radius,
		color.with_alpha(particle.opacity),
	);
}
