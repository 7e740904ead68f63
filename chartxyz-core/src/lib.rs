//! Core geometry for chartxyz
//!
//! This crate provides the math behind an interactive 3D scatter chart:
//! affine transforms, the clip planes of the chart box, per-frame visibility
//! filtering of points, and the table/color inputs points are built from.

pub mod point;
pub mod point_cloud;
pub mod transform;
pub mod plane;
pub mod clip;
pub mod visibility;
pub mod table;
pub mod color;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use transform::*;
pub use plane::*;
pub use clip::*;
pub use visibility::*;
pub use table::*;
pub use color::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector2, Vector3};
