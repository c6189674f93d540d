//! Drifting, twinkling stars.
//!
//! A [`ParticleField`] owns a fixed-size collection of stars spread across a
//! drawable surface. Every tick it clears the surface and, star by star, draws
//! then advances: position moves by velocity and wraps toroidally, opacity
//! moves by the twinkle rate and reflects off the configured opacity bounds.

use log::debug;
use rand::Rng;
use rand::distributions::Standard;

use super::config::{Span, StarfieldConfig};
use super::render::{Surface, draw_particle};

/// A single star.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	/// Per-tick opacity delta. Never zero; sign flips at the opacity bounds.
	pub twinkle: f64,
}

/// Uniform sample in `[0, 1)`.
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	rng.sample(Standard)
}

/// Uniform sample in `[-max, max)`.
fn symmetric<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
	(unit(rng) - 0.5) * 2.0 * max
}

impl Particle {
	/// Sample a star uniformly over a `width` × `height` surface.
	pub fn random<R: Rng + ?Sized>(
		rng: &mut R,
		config: &StarfieldConfig,
		width: f64,
		height: f64,
	) -> Self {
		let x = unit(rng) * width;
		let y = unit(rng) * height;
		let radius = config.radius.lerp(unit(rng));
		let opacity = config.opacity.lerp(unit(rng));
		let twinkle = loop {
			let rate = symmetric(rng, config.max_twinkle);
			if rate != 0.0 || config.max_twinkle == 0.0 {
				break rate;
			}
		};

		Self {
			x,
			y,
			vx: symmetric(rng, config.max_drift),
			vy: symmetric(rng, config.max_drift),
			radius,
			opacity,
			twinkle,
		}
	}

	/// Move, wrap and twinkle by one tick.
	///
	/// Wrapping is one-sided per axis: below zero lands exactly on the far
	/// edge, past the far edge lands on zero. Opacity is not clamped; an
	/// out-of-bounds value only reverses the twinkle direction for the next
	/// tick.
	pub fn advance(&mut self, width: f64, height: f64, bounds: Span) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 {
			self.x = width;
		}
		if self.x > width {
			self.x = 0.0;
		}
		if self.y < 0.0 {
			self.y = height;
		}
		if self.y > height {
			self.y = 0.0;
		}

		self.opacity += self.twinkle;
		if bounds.excludes(self.opacity) {
			self.twinkle = -self.twinkle;
		}
	}
}

/// Fixed-size star collection bound to a surface size.
///
/// Created once per page load and mutated in place by [`ParticleField::tick`].
/// Stars are never destroyed individually; the collection is only rebuilt by
/// [`ParticleField::resize`] when it is found empty.
pub struct ParticleField<R> {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	config: StarfieldConfig,
	rng: R,
}

impl<R: Rng> ParticleField<R> {
	pub fn new(config: StarfieldConfig, width: f64, height: f64, rng: R) -> Self {
		let mut field = Self {
			particles: Vec::with_capacity(config.count),
			width,
			height,
			config,
			rng,
		};
		field.seed();
		field
	}

	fn seed(&mut self) {
		let (width, height) = (self.width, self.height);
		let rng = &mut self.rng;
		let config = &self.config;
		self.particles.clear();
		self.particles
			.extend((0..config.count).map(|_| Particle::random(&mut *rng, config, width, height)));
	}

	/// Adopt new surface dimensions.
	///
	/// Existing stars keep their coordinates, even if now out of bounds; the
	/// next tick's wrap brings them back. The collection is only reseeded when
	/// it is empty.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;

		if self.particles.is_empty() {
			debug!("starfield: reseeding {} stars", self.config.count);
			self.seed();
		}
	}

	/// Clear the surface, then draw and advance every star in order.
	pub fn tick<S: Surface + ?Sized>(&mut self, surface: &S) {
		surface.clear(self.width, self.height);

		let (width, height) = (self.width, self.height);
		let (color, bounds) = (self.config.color, self.config.opacity);
		for p in &mut self.particles {
			draw_particle(surface, p, color);
			p.advance(width, height, bounds);
		}
	}

	/// Clear the surface and draw every star without advancing anything.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &S) {
		surface.clear(self.width, self.height);
		for p in &self.particles {
			draw_particle(surface, p, self.config.color);
		}
	}
}

impl<R> ParticleField<R> {
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn config(&self) -> &StarfieldConfig {
		&self.config
	}
}
