//! Reasons a starfield could not be bound to a canvas.

use thiserror::Error;

/// Failure to acquire the drawable surface.
///
/// Host-facing entry points swallow this and leave the page without a
/// starfield; Rust callers of [`super::attach`] get it back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachError {
	#[error("no browser window available")]
	NoWindow,
	#[error("window has no document")]
	NoDocument,
	#[error("no element with id `{0}`")]
	MissingElement(String),
	#[error("element `{0}` is not a canvas")]
	NotACanvas(String),
	#[error("canvas has no 2d rendering context")]
	NoContext,
}
