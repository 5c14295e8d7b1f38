use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::fmt::{Debug, Write as _};
use std::io::Cursor;
use std::path::Path;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Convert this Mesh to an **ASCII STL** string with the given `name`.
    ///
    /// ```rust
    /// # use csg_enclosure::mesh::Mesh;
    /// let mesh = Mesh::<()>::cube(1.0, None);
    /// let text = mesh.to_stl_ascii("my_solid");
    /// assert!(text.starts_with("solid my_solid"));
    /// ```
    pub fn to_stl_ascii(&self, name: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "solid {name}");

        for poly in &self.polygons {
            let n = poly.plane.normal();
            for tri in poly.triangulate() {
                let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
                out.push_str("    outer loop\n");
                for v in &tri {
                    let p = v.pos;
                    let _ = writeln!(out, "      vertex {:.6} {:.6} {:.6}", p.x, p.y, p.z);
                }
                out.push_str("    endloop\n");
                out.push_str("  endfacet\n");
            }
        }

        let _ = writeln!(out, "endsolid {name}");
        out
    }

    /// Convert this Mesh to a **binary STL** byte vector.
    ///
    /// The 80-byte header is left zeroed by `stl_io`, so binary files carry no
    /// solid name. The output is a pure function of the geometry.
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        use stl_io::{Normal, Triangle, Vertex as StlVertex, write_stl};

        let triangles: Vec<Triangle> = self
            .polygons
            .iter()
            .flat_map(|poly| {
                let n = poly.plane.normal();
                poly.triangulate().into_iter().map(move |tri| Triangle {
                    normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                    vertices: tri.map(|v| {
                        let p = v.pos;
                        StlVertex::new([p.x as f32, p.y as f32, p.z as f32])
                    }),
                })
            })
            .collect();

        let mut cursor = Cursor::new(Vec::new());
        write_stl(&mut cursor, triangles.iter())?;
        Ok(cursor.into_inner())
    }

    /// Write this Mesh as binary STL to `path`, replacing any existing file.
    ///
    /// Facets are written as the fan triangles of each polygon, as they are.
    /// T-junctions left by boolean operations are not stitched, so the file
    /// encloses the right volume but may not pass a strict watertight check.
    pub fn write_stl_file(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let bytes = self.to_stl_binary()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Create a Mesh from STL data (binary or ASCII) held in memory.
    ///
    /// Every facet becomes one triangular polygon tagged with `metadata`.
    pub fn from_stl(stl_data: &[u8], metadata: Option<S>) -> Result<Mesh<S>, IoError> {
        let mut cursor = Cursor::new(stl_data);
        let stl = stl_io::read_stl(&mut cursor)?;

        let point = |index: usize| -> Result<Point3<Real>, IoError> {
            let v = stl.vertices.get(index).ok_or_else(|| {
                IoError::MalformedInput(format!("facet references missing vertex {index}"))
            })?;
            Ok(Point3::new(v[0] as Real, v[1] as Real, v[2] as Real))
        };

        let mut polygons = Vec::with_capacity(stl.faces.len());
        for face in &stl.faces {
            let normal = Vector3::new(
                face.normal[0] as Real,
                face.normal[1] as Real,
                face.normal[2] as Real,
            );
            let vertices = face
                .vertices
                .iter()
                .map(|&index| point(index).map(|pos| Vertex::new(pos, normal)))
                .collect::<Result<Vec<_>, _>>()?;
            polygons.push(Polygon::new(vertices, metadata.clone()));
        }

        Ok(Mesh::from_polygons(&polygons, metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_has_two_facets_per_quad() {
        let cube: Mesh<()> = Mesh::cube(2.0, None);
        let text = cube.to_stl_ascii("test_cube");
        assert!(text.starts_with("solid test_cube\n"));
        assert!(text.trim_end().ends_with("endsolid test_cube"));
        assert_eq!(text.matches("facet normal").count(), 12);
        assert_eq!(text.matches("vertex").count(), 36);
    }

    #[test]
    fn binary_size_matches_triangle_count() {
        let cube: Mesh<()> = Mesh::cube(2.0, None);
        let bytes = cube.to_stl_binary().expect("in-memory write");
        // 80 byte header + u32 count + 50 bytes per triangle
        assert_eq!(bytes.len(), 84 + 12 * 50);
        assert!(bytes[..80].iter().all(|&b| b == 0));
    }

    #[test]
    fn binary_read_back_keeps_volume() {
        let cube: Mesh<()> = Mesh::cuboid(3.0, 2.0, 1.0, None);
        let bytes = cube.to_stl_binary().expect("in-memory write");
        let back: Mesh<()> = Mesh::from_stl(&bytes, None).expect("valid stl");
        assert_eq!(back.polygons.len(), 12);
        assert!((back.volume() - 6.0).abs() < 1e-5);
    }

    #[test]
    fn garbage_is_rejected() {
        let result = Mesh::<()>::from_stl(b"definitely not an stl", None);
        assert!(result.is_err());
    }
}
