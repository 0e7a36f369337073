//! The base `strippack` module: everything needed to model and place rectangular items in a strip of fixed width.

/// Entities to model the rectangular Strip Packing Problem
pub mod entities;

/// Geometric primitives
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// The bottom-left placement heuristic
pub mod placement;

/// Helper functions which do not belong to any specific module
pub mod util;
