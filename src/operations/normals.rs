use crate::error::SurfaceError;
use crate::math::{normalize_or_zero, Vector3};
use crate::surface::{Surface, Triangle, Vertex};

/// What to do with the normal of a vertex that no triangle references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsolatedVertexPolicy {
    /// Leave the existing normal as it is.
    #[default]
    KeepExisting,
    /// Overwrite the normal with the zero vector.
    Zero,
}

/// Recomputes vertex normals from the triangles around each vertex.
///
/// Each triangle `(i0, i1, i2)` contributes the unit face normal
/// `normalize(cross(p[i2] - p[i0], p[i1] - p[i0]))` to each of its corners.
/// A vertex's new normal is the normalized sum of those contributions, so
/// every face counts equally regardless of area or corner angle. A triangle
/// with zero area contributes nothing. If the contributions cancel out the
/// normal becomes zero.
pub struct AutoCalculateNormals {
    isolated: IsolatedVertexPolicy,
}

impl Default for AutoCalculateNormals {
    fn default() -> Self {
        Self::new(IsolatedVertexPolicy::default())
    }
}

impl AutoCalculateNormals {
    /// Creates a new `AutoCalculateNormals` operation.
    #[must_use]
    pub fn new(isolated: IsolatedVertexPolicy) -> Self {
        Self { isolated }
    }

    /// Executes the operation, rewriting `surface.vertices[*].normal`.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the surface, if any triangle
    /// index is out of range.
    pub fn execute(&self, surface: &mut Surface) -> Result<(), SurfaceError> {
        surface.validate()?;

        let mut sums = vec![Vector3::zeros(); surface.vertices.len()];
        let mut referenced = vec![false; surface.vertices.len()];
        for tri in &surface.triangles {
            let n = face_normal(&surface.vertices, *tri);
            for index in tri.indices() {
                sums[index as usize] += n;
                referenced[index as usize] = true;
            }
        }

        for ((vertex, sum), used) in surface.vertices.iter_mut().zip(sums).zip(referenced) {
            if used {
                vertex.normal = normalize_or_zero(sum);
            } else if self.isolated == IsolatedVertexPolicy::Zero {
                vertex.normal = Vector3::zeros();
            }
        }
        Ok(())
    }
}

/// Unit normal of `tri`. Edge order fixes the facing convention.
fn face_normal(vertices: &[Vertex], tri: Triangle) -> Vector3 {
    let p0 = vertices[tri.i0 as usize].position;
    let p1 = vertices[tri.i1 as usize].position;
    let p2 = vertices[tri.i2 as usize].position;
    normalize_or_zero((p2 - p0).cross(&(p1 - p0)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    fn p(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn surface(positions: &[Vector3], triangles: &[[u32; 3]]) -> Surface {
        let mut s = Surface::new("test");
        s.vertices = positions.iter().copied().map(Vertex::from_position).collect();
        s.triangles = triangles.iter().copied().map(Triangle::from).collect();
        s
    }

    #[test]
    fn single_triangle_gets_face_normal() {
        let positions = [p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 3.0, 0.0)];
        let mut s = surface(&positions, &[[0, 1, 2]]);
        s.auto_calculate_normals().unwrap();

        let expected = (positions[2] - positions[0])
            .cross(&(positions[1] - positions[0]))
            .normalize();
        for v in &s.vertices {
            assert_relative_eq!(v.normal, expected, epsilon = TOLERANCE);
        }
        // (0,3,0) x (2,0,0) points down -z
        assert_relative_eq!(expected, p(0.0, 0.0, -1.0), epsilon = TOLERANCE);
    }

    #[test]
    fn reversed_winding_flips_normal() {
        let positions = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let mut s = surface(&positions, &[[0, 2, 1]]);
        s.auto_calculate_normals().unwrap();
        assert_relative_eq!(s.vertices[0].normal, Vector3::z(), epsilon = TOLERANCE);
    }

    #[test]
    fn shared_vertex_averages_unweighted() {
        // A tiny triangle in the xy plane and a large one in the xz plane
        // share vertex 0; each face counts once regardless of area.
        let positions = [
            p(0.0, 0.0, 0.0),
            p(0.1, 0.0, 0.0),
            p(0.0, 0.1, 0.0),
            p(0.0, 0.0, 100.0),
            p(100.0, 0.0, 0.0),
        ];
        let mut s = surface(&positions, &[[0, 1, 2], [0, 3, 4]]);
        s.auto_calculate_normals().unwrap();

        let n_small = (positions[2] - positions[0]).cross(&(positions[1] - positions[0])).normalize();
        let n_big = (positions[4] - positions[0]).cross(&(positions[3] - positions[0])).normalize();
        let expected = (n_small + n_big).normalize();
        assert_relative_eq!(s.vertices[0].normal, expected, epsilon = TOLERANCE);
        assert_relative_eq!(s.vertices[1].normal, n_small, epsilon = TOLERANCE);
        assert_relative_eq!(s.vertices[3].normal, n_big, epsilon = TOLERANCE);
    }

    #[test]
    fn isolated_vertex_keeps_normal_by_default() {
        let positions = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(5.0, 5.0, 5.0)];
        let mut s = surface(&positions, &[[0, 1, 2]]);
        s.vertices[3].normal = Vector3::x();
        s.auto_calculate_normals().unwrap();
        assert_eq!(s.vertices[3].normal, Vector3::x());
    }

    #[test]
    fn isolated_vertex_zeroed_on_request() {
        let positions = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(5.0, 5.0, 5.0)];
        let mut s = surface(&positions, &[[0, 1, 2]]);
        s.vertices[3].normal = Vector3::x();
        AutoCalculateNormals::new(IsolatedVertexPolicy::Zero)
            .execute(&mut s)
            .unwrap();
        assert_eq!(s.vertices[3].normal, Vector3::zeros());
    }

    #[test]
    fn degenerate_triangle_contributes_nothing() {
        let positions = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        let mut s = surface(&positions, &[[0, 1, 2]]);
        s.auto_calculate_normals().unwrap();
        assert!(s.vertices.iter().all(|v| v.normal == Vector3::zeros()));
    }

    #[test]
    fn malformed_surface_is_rejected_untouched() {
        let positions = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let mut s = surface(&positions, &[[0, 1, 2], [0, 1, 3]]);
        s.vertices[0].normal = Vector3::x();
        let before = s.clone();
        assert!(s.auto_calculate_normals().is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn triangles_are_unchanged() {
        let positions = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let mut s = surface(&positions, &[[0, 1, 2]]);
        s.auto_calculate_normals().unwrap();
        assert_eq!(s.triangles, vec![Triangle::new(0, 1, 2)]);
    }
}
