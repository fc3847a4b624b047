//! Wavefront OBJ input.

use std::path::Path;

use log::info;

use crate::error::LoadError;
use crate::point_store::PointStore;

/// Appends every face of an OBJ file to `polygons` as triangles.
///
/// Faces with more than three vertices are fan-triangulated by the loader.
/// Vertex order is kept, so the file's winding carries through to culling.
/// Returns the number of triangles appended.
///
/// # Errors
/// - [`LoadError::Io`] if the file cannot be opened
/// - [`LoadError::Parse`] if the loader rejects it
/// - [`LoadError::NoGeometry`] if it contains no faces
pub fn add_obj_mesh<P: AsRef<Path>>(polygons: &mut PointStore, path: P) -> Result<usize, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a file", path.display()),
        )));
    }

    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|e| LoadError::Parse(e.to_string()))?;

    let mut triangles = 0;
    for model in &models {
        let mesh = &model.mesh;
        let vertex = |i: u32| {
            let i = i as usize * 3;
            (
                mesh.positions[i] as f64,
                mesh.positions[i + 1] as f64,
                mesh.positions[i + 2] as f64,
            )
        };

        for face in mesh.indices.chunks_exact(3) {
            polygons.append_triangle(vertex(face[0]), vertex(face[1]), vertex(face[2]));
            triangles += 1;
        }
    }

    if triangles == 0 {
        return Err(LoadError::NoGeometry);
    }

    info!("loaded {} triangles from {}", triangles, path.display());
    Ok(triangles)
}
