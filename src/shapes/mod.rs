//! Shape generators.
//!
//! Generators sample a surface or curve and append the result to a
//! [`PointStore`](crate::point_store::PointStore): surfaces as triangle
//! lists, curves as edge lists. They never draw.

mod curves;
mod grid;
mod obj;
mod solids;

pub use curves::{add_circle, add_curve};
pub use grid::SurfaceGrid;
pub use obj::add_obj_mesh;
pub use solids::{
    add_box, add_sphere, add_torus, generate_sphere, generate_torus, sphere_faces, torus_faces,
};
