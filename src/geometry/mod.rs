//! Procedural geometry for the scene: sphere surfaces and closed circular paths.
//!
//! Everything here is pure. Generators take plain scalars and return owned,
//! immutable point sets that the render plugins turn into meshes and gizmos.

pub mod path;
pub mod sphere;

#[cfg(test)]
mod proptest_geometry;

pub use self::path::{orbit_path, orbit_trace, PathKind, PathPoints, PathStyle, PathTrace};
pub use self::sphere::{sphere_surface, sphere_trace, SurfaceGrid, SurfaceTrace};
