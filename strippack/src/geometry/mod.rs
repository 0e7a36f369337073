/// Set of traits shared by geometric types
pub mod geo_traits;

/// Primitive geometric shapes
pub mod primitives;
