//! Animated starfield background.
//!
//! Draws a field of small white stars on an HTML canvas with:
//! - Sub-pixel drift with toroidal wrap at the canvas edges
//! - Per-star twinkle that reflects off fixed opacity bounds
//! - Viewport-sized canvas that follows window resizes
//! - An opt-in still frame for users who prefer reduced motion
//!
//! # Example
//!
//! ```ignore
//! use starfield::{StarfieldCanvas, StarfieldConfig};
//!
//! let config = StarfieldConfig { count: 150, ..Default::default() };
//! view! { <StarfieldCanvas config=config /> }
//! ```

mod component;
pub mod config;
mod error;
mod frame_loop;
mod particles;
mod render;
pub mod theme;

pub use component::StarfieldCanvas;
pub use config::{Span, StarfieldConfig};
pub use error::AttachError;
pub use frame_loop::{FrameLoop, attach};
pub use particles::{Particle, ParticleField};
pub use render::Surface;
pub use theme::Color;
