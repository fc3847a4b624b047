//! Closed surfaces emitted as triangle lists.

use std::f64::consts::PI;

use log::debug;

use super::grid::SurfaceGrid;
use crate::point_store::PointStore;

/// Appends a rectangular prism as 12 triangles, two per face.
///
/// `(x, y, z)` is the upper-left-front corner: width extends toward +x,
/// height toward -y and depth toward -z. Faces are wound counter-clockwise
/// when seen from outside.
pub fn add_box(
    polygons: &mut PointStore,
    x: f64,
    y: f64,
    z: f64,
    width: f64,
    height: f64,
    depth: f64,
) {
    let x1 = x + width;
    let y1 = y - height;
    let z1 = z - depth;

    let faces = [
        // front
        [(x, y, z), (x1, y1, z), (x1, y, z)],
        [(x, y, z), (x, y1, z), (x1, y1, z)],
        // back
        [(x1, y, z1), (x, y1, z1), (x, y, z1)],
        [(x1, y, z1), (x1, y1, z1), (x, y1, z1)],
        // right
        [(x1, y, z), (x1, y1, z1), (x1, y, z1)],
        [(x1, y, z), (x1, y1, z), (x1, y1, z1)],
        // left
        [(x, y, z1), (x, y1, z), (x, y, z)],
        [(x, y, z1), (x, y1, z1), (x, y1, z)],
        // top
        [(x, y, z1), (x1, y, z), (x1, y, z1)],
        [(x, y, z1), (x, y, z), (x1, y, z)],
        // bottom
        [(x, y1, z), (x1, y1, z1), (x1, y1, z)],
        [(x, y1, z), (x, y1, z1), (x1, y1, z1)],
    ];
    for [p0, p1, p2] in faces {
        polygons.append_triangle(p0, p1, p2);
    }
}

/// Sample lattice of a sphere: `step` rotations of a `step + 1` point
/// semicircle (both poles included).
fn sphere_grid(step: usize) -> SurfaceGrid {
    SurfaceGrid::new(step, step + 1)
}

fn torus_grid(step: usize) -> SurfaceGrid {
    SurfaceGrid::new(step, step)
}

/// Points on the surface of a sphere, `step * (step + 1)` of them.
///
/// A semicircle in the xy-plane is rotated about the x axis: ring
/// `rotation` holds the semicircle rotated by `2π·rotation/step`.
pub fn generate_sphere(cx: f64, cy: f64, cz: f64, r: f64, step: usize) -> PointStore {
    let grid = sphere_grid(step);
    let mut points = PointStore::with_capacity(grid.len());

    for rotation in 0..step {
        let rot = rotation as f64 / step as f64;
        for circle in 0..=step {
            let circ = circle as f64 / step as f64;

            let x = r * (PI * circ).cos() + cx;
            let y = r * (PI * circ).sin() * (2.0 * PI * rot).cos() + cy;
            let z = r * (PI * circ).sin() * (2.0 * PI * rot).sin() + cz;
            points.append_point(x, y, z);
        }
    }
    points
}

/// Triangle indices into [`generate_sphere`]'s points.
///
/// Each quad between ring `lat` and the next ring is split into
/// `(p0, p1, p2)` and `(p0, p2, p3)`. Column 0 is not used as a quad start,
/// which keeps zero-area slivers at the pole out of the list.
pub fn sphere_faces(step: usize) -> Vec<[usize; 3]> {
    let grid = sphere_grid(step);
    let mut faces = Vec::with_capacity(2 * step * step.saturating_sub(1));

    for lat in 0..step {
        for longt in 1..step {
            let p0 = grid.index(lat, longt);
            let p1 = grid.index(lat, longt + 1);
            let p2 = grid.index(lat + 1, longt);
            let p3 = grid.index(lat + 1, longt - 1);

            faces.push([p0, p1, p2]);
            faces.push([p0, p2, p3]);
        }
    }
    faces
}

/// Appends a sphere centred at `(cx, cy, cz)` as a triangle list.
pub fn add_sphere(polygons: &mut PointStore, cx: f64, cy: f64, cz: f64, r: f64, step: usize) {
    let points = generate_sphere(cx, cy, cz, r, step);
    let faces = sphere_faces(step);
    append_faces(polygons, &points, &faces);
    debug!("sphere r={r} step={step}: {} triangles", faces.len());
}

/// Points on the surface of a torus, `step * step` of them.
///
/// A circle of radius `r1`, offset `r2` from the y axis, is swept around the
/// y axis: ring `rotation` holds the circle rotated by `2π·rotation/step`.
pub fn generate_torus(cx: f64, cy: f64, cz: f64, r1: f64, r2: f64, step: usize) -> PointStore {
    let grid = torus_grid(step);
    let mut points = PointStore::with_capacity(grid.len());

    for rotation in 0..step {
        let rot = rotation as f64 / step as f64;
        for circle in 0..step {
            let circ = circle as f64 / step as f64;

            let x = (2.0 * PI * rot).cos() * (r1 * (2.0 * PI * circ).cos() + r2) + cx;
            let y = r1 * (2.0 * PI * circ).sin() + cy;
            let z = -(2.0 * PI * rot).sin() * (r1 * (2.0 * PI * circ).cos() + r2) + cz;
            points.append_point(x, y, z);
        }
    }
    points
}

/// Triangle indices into [`generate_torus`]'s points.
///
/// Quads are split into `(p0, p3, p2)` and `(p0, p2, p1)`: the opposite
/// vertex order from [`sphere_faces`], so torus normals point the other way
/// relative to the lattice direction.
pub fn torus_faces(step: usize) -> Vec<[usize; 3]> {
    let grid = torus_grid(step);
    let mut faces = Vec::with_capacity(2 * step * step);

    for lat in 0..step {
        for longt in 0..step {
            let p0 = grid.index(lat, longt);
            let p1 = grid.index(lat, longt + 1);
            let p2 = grid.index(lat + 1, longt + 1);
            let p3 = grid.index(lat + 1, longt);

            faces.push([p0, p3, p2]);
            faces.push([p0, p2, p1]);
        }
    }
    faces
}

/// Appends a torus centred at `(cx, cy, cz)` as a triangle list.
///
/// `r1` is the tube radius and `r2` the distance from the centre to the
/// middle of the tube.
pub fn add_torus(
    polygons: &mut PointStore,
    cx: f64,
    cy: f64,
    cz: f64,
    r1: f64,
    r2: f64,
    step: usize,
) {
    let points = generate_torus(cx, cy, cz, r1, r2, step);
    let faces = torus_faces(step);
    append_faces(polygons, &points, &faces);
    debug!("torus r1={r1} r2={r2} step={step}: {} triangles", faces.len());
}

fn append_faces(polygons: &mut PointStore, points: &PointStore, faces: &[[usize; 3]]) {
    for &[a, b, c] in faces {
        polygons.append_triangle(
            points.point(a).to_vec3(),
            points.point(b).to_vec3(),
            points.point(c).to_vec3(),
        );
    }
}
