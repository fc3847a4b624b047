//! Error types surfaced by the drawing and loading entry points.

use thiserror::Error;

/// A drawing call that was refused before any pixel was written.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    #[error("need at least {required} points to draw, found {found}")]
    InsufficientGeometry { required: usize, found: usize },
}

/// Errors that can occur while loading a mesh file into a triangle list.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read mesh file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse OBJ file: {0}")]
    Parse(String),

    #[error("no faces found in mesh file")]
    NoGeometry,
}
