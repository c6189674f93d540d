//! Starfield configuration.
//!
//! Defaults reproduce the stock portfolio background: 300 white stars with
//! sub-pixel drift and a slow twinkle. A host page can override any subset of
//! the fields by embedding JSON in a `<script id="starfield-config">` element
//! (see [`crate::load_config`]).

use serde::Deserialize;

use super::theme::Color;

/// Half-open numeric range `[min, max)` used for sampling and bounds checks.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Map a unit sample `u` in `[0, 1)` onto this range.
	pub fn lerp(&self, u: f64) -> f64 {
		self.min + u * (self.max - self.min)
	}

	/// Whether `value` lies outside the closed interval `[min, max]`.
	pub fn excludes(&self, value: f64) -> bool {
		value > self.max || value < self.min
	}
}

/// Visual and sampling parameters for a [`super::ParticleField`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
	/// Number of stars, fixed for the lifetime of a field.
	pub count: usize,
	/// Draw radius range.
	pub radius: Span,
	/// Initial opacity range; also the twinkle reflection bounds.
	pub opacity: Span,
	/// Largest per-tick opacity change.
	pub max_twinkle: f64,
	/// Largest per-tick movement on each axis.
	pub max_drift: f64,
	/// Star color. Its alpha is replaced by each star's opacity.
	pub color: Color,
	/// Element id of the canvas the host page provides.
	pub canvas_id: String,
	/// Opt in to drawing a still frame instead of animating when the user
	/// prefers reduced motion. Off by default, so the field always animates.
	pub honor_reduced_motion: bool,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			count: 300,
			radius: Span::new(0.1, 1.3),
			opacity: Span::new(0.2, 1.0),
			max_twinkle: 0.01,
			max_drift: 0.075,
			color: Color::WHITE,
			canvas_id: "auroraCanvas".to_string(),
			honor_reduced_motion: false,
		}
	}
}

impl StarfieldConfig {
	/// Parse a (possibly partial) JSON override on top of the defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}
