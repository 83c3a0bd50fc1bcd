use std::borrow::Cow;

use crate::error::DecodeError;
use crate::math::Color;
use crate::surface::{Surface, Triangle, Vertex};

use super::{ArraySlot, CompositeArray, PrimitiveTopology, SlotElement, SlotView};

impl Surface {
    /// Decodes a composite array into a surface, or `None` if the array does
    /// not describe a valid surface.
    ///
    /// See [`try_from_composite_array`](Self::try_from_composite_array) for
    /// the rules.
    #[must_use]
    pub fn from_composite_array(
        arrays: &CompositeArray,
        topology: PrimitiveTopology,
    ) -> Option<Self> {
        Self::try_from_composite_array(arrays, topology).ok()
    }

    /// Decodes a composite array into a surface.
    ///
    /// Positions, normals and UVs are required. Missing colors default to
    /// opaque white. Missing indices are synthesized as `0, 1, 2, ...` for
    /// triangle-list topology only. Decoding is all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns the first reason the array cannot become a well-formed surface.
    pub fn try_from_composite_array(
        arrays: &CompositeArray,
        topology: PrimitiveTopology,
    ) -> Result<Self, DecodeError> {
        let positions = required(arrays.positions(), ArraySlot::Positions)?;
        let normals = required(arrays.normals(), ArraySlot::Normals)?;
        let colors: Cow<'_, [Color]> = match arrays.colors() {
            SlotView::Present(colors) => Cow::Borrowed(colors),
            SlotView::Absent | SlotView::WrongType(_) => {
                Cow::Owned(vec![Color::WHITE; positions.len()])
            }
        };
        let uvs = required(arrays.uvs(), ArraySlot::Uvs)?;
        let indices: Cow<'_, [u32]> = match arrays.indices() {
            SlotView::Present(indices) => Cow::Borrowed(indices),
            SlotView::Absent | SlotView::WrongType(_) => match topology {
                PrimitiveTopology::Triangles => Cow::Owned(implicit_indices(positions.len())?),
                other => return Err(DecodeError::MissingIndices(other)),
            },
        };

        if indices.len() % 3 != 0 {
            return Err(DecodeError::IndexCountNotMultipleOfThree(indices.len()));
        }
        check_len(ArraySlot::Normals, normals.len(), positions.len())?;
        check_len(ArraySlot::Colors, colors.len(), positions.len())?;
        check_len(ArraySlot::Uvs, uvs.len(), positions.len())?;
        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= positions.len())
        {
            return Err(DecodeError::IndexOutOfRange {
                position,
                index,
                vertex_count: positions.len(),
            });
        }

        let vertices = positions
            .iter()
            .zip(normals)
            .zip(colors.iter())
            .zip(uvs)
            .map(|(((&position, &normal), &color), &uv)| Vertex::new(position, normal, color, uv))
            .collect();
        let triangles = indices
            .chunks_exact(3)
            .map(|c| Triangle::new(c[0], c[1], c[2]))
            .collect();

        Ok(Self {
            vertices,
            triangles,
            ..Self::default()
        })
    }
}

fn required<T: SlotElement>(view: SlotView<'_, T>, slot: ArraySlot) -> Result<&[T], DecodeError> {
    match view {
        SlotView::Present(values) => Ok(values),
        SlotView::Absent => Err(DecodeError::MissingSlot(slot)),
        SlotView::WrongType(found) => Err(DecodeError::WrongElementType {
            slot,
            expected: T::ELEMENT_TYPE,
            found,
        }),
    }
}

fn check_len(slot: ArraySlot, len: usize, expected: usize) -> Result<(), DecodeError> {
    if len == expected {
        Ok(())
    } else {
        Err(DecodeError::LengthMismatch {
            slot,
            expected,
            len,
        })
    }
}

/// Sequential indices grouping every three positions into a triangle.
///
/// Trailing positions that do not fill a triangle are left unindexed.
fn implicit_indices(position_count: usize) -> Result<Vec<u32>, DecodeError> {
    let count = position_count - position_count % 3;
    let last = u32::try_from(count).map_err(|_| DecodeError::IndexOutOfRange {
        position: count,
        index: u32::MAX,
        vertex_count: position_count,
    })?;
    Ok((0..last).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::composite::{ArrayData, ElementType};
    use crate::math::{Vector2, Vector3};

    fn p(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3::new(x, y, z)
    }

    /// Four positions, one quad split into two triangles, no colors.
    fn quad_arrays() -> CompositeArray {
        CompositeArray::new()
            .with(
                ArraySlot::Positions,
                ArrayData::Vector3(vec![
                    p(0.0, 0.0, 0.0),
                    p(1.0, 0.0, 0.0),
                    p(1.0, 1.0, 0.0),
                    p(0.0, 1.0, 0.0),
                ]),
            )
            .with(ArraySlot::Normals, ArrayData::Vector3(vec![Vector3::z(); 4]))
            .with(
                ArraySlot::Uvs,
                ArrayData::Vector2(vec![
                    Vector2::new(0.0, 0.0),
                    Vector2::new(1.0, 0.0),
                    Vector2::new(1.0, 1.0),
                    Vector2::new(0.0, 1.0),
                ]),
            )
            .with(ArraySlot::Indices, ArrayData::Index(vec![0, 1, 2, 0, 2, 3]))
    }

    #[test]
    fn decodes_vertices_and_triangles() {
        let s = Surface::from_composite_array(&quad_arrays(), PrimitiveTopology::Triangles)
            .unwrap();
        assert_eq!(s.vertex_count(), 4);
        assert_eq!(s.triangles, vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)]);
        assert_eq!(s.vertices[2].position, p(1.0, 1.0, 0.0));
        assert_eq!(s.vertices[2].uv, Vector2::new(1.0, 1.0));
        assert_eq!(s.vertices[2].normal, Vector3::z());
        assert!(s.name.is_empty());
        assert!(s.material.is_none());
    }

    #[test]
    fn missing_colors_default_to_white() {
        let s = Surface::from_composite_array(&quad_arrays(), PrimitiveTopology::Triangles)
            .unwrap();
        assert!(s.vertices.iter().all(|v| v.color == Color::WHITE));
    }

    #[test]
    fn mistyped_colors_default_to_white() {
        let arrays = quad_arrays().with(ArraySlot::Colors, ArrayData::Float(vec![0.0; 4]));
        let s = Surface::from_composite_array(&arrays, PrimitiveTopology::Triangles).unwrap();
        assert!(s.vertices.iter().all(|v| v.color == Color::WHITE));
    }

    #[test]
    fn present_colors_are_used() {
        let colors = vec![Color::BLACK, Color::WHITE, Color::TRANSPARENT, Color::BLACK];
        let arrays = quad_arrays().with(ArraySlot::Colors, ArrayData::Color(colors.clone()));
        let s = Surface::from_composite_array(&arrays, PrimitiveTopology::Triangles).unwrap();
        let decoded: Vec<Color> = s.vertices.iter().map(|v| v.color).collect();
        assert_eq!(decoded, colors);
    }

    #[test]
    fn missing_positions_fails() {
        let mut arrays = quad_arrays();
        arrays.clear(ArraySlot::Positions);
        assert_eq!(
            Surface::try_from_composite_array(&arrays, PrimitiveTopology::Triangles),
            Err(DecodeError::MissingSlot(ArraySlot::Positions))
        );
    }

    #[test]
    fn mistyped_normals_fail() {
        let arrays = quad_arrays().with(ArraySlot::Normals, ArrayData::Vector2(vec![]));
        assert_eq!(
            Surface::try_from_composite_array(&arrays, PrimitiveTopology::Triangles),
            Err(DecodeError::WrongElementType {
                slot: ArraySlot::Normals,
                expected: ElementType::Vector3,
                found: ElementType::Vector2,
            })
        );
    }

    #[test]
    fn missing_uvs_fails() {
        let mut arrays = quad_arrays();
        arrays.clear(ArraySlot::Uvs);
        assert!(Surface::from_composite_array(&arrays, PrimitiveTopology::Triangles).is_none());
    }

    #[test]
    fn implicit_indices_for_triangle_list() {
        let positions: Vec<Vector3> = (0..6).map(|i| p(i as f32, 0.0, 0.0)).collect();
        let arrays = CompositeArray::new()
            .with(ArraySlot::Positions, ArrayData::Vector3(positions))
            .with(ArraySlot::Normals, ArrayData::Vector3(vec![Vector3::z(); 6]))
            .with(ArraySlot::Uvs, ArrayData::Vector2(vec![Vector2::zeros(); 6]));
        let s = Surface::from_composite_array(&arrays, PrimitiveTopology::Triangles).unwrap();
        assert_eq!(s.triangles, vec![Triangle::new(0, 1, 2), Triangle::new(3, 4, 5)]);
    }

    #[test]
    fn implicit_indices_skip_trailing_positions() {
        assert_eq!(implicit_indices(7).unwrap(), vec![0, 1, 2, 3, 4, 5]);
        assert!(implicit_indices(2).unwrap().is_empty());
    }

    #[test]
    fn missing_indices_fail_for_other_topologies() {
        let mut arrays = quad_arrays();
        arrays.clear(ArraySlot::Indices);
        assert_eq!(
            Surface::try_from_composite_array(&arrays, PrimitiveTopology::TriangleStrip),
            Err(DecodeError::MissingIndices(PrimitiveTopology::TriangleStrip))
        );
    }

    #[test]
    fn explicit_indices_accepted_for_any_topology() {
        let s = Surface::from_composite_array(&quad_arrays(), PrimitiveTopology::Lines);
        assert_eq!(s.map(|s| s.triangle_count()), Some(2));
    }

    #[test]
    fn index_count_must_be_multiple_of_three() {
        let arrays = quad_arrays().with(ArraySlot::Indices, ArrayData::Index(vec![0, 1, 2, 3]));
        assert_eq!(
            Surface::try_from_composite_array(&arrays, PrimitiveTopology::Triangles),
            Err(DecodeError::IndexCountNotMultipleOfThree(4))
        );
    }

    #[test]
    fn per_vertex_lengths_must_match() {
        let arrays =
            quad_arrays().with(ArraySlot::Normals, ArrayData::Vector3(vec![Vector3::z(); 3]));
        assert_eq!(
            Surface::try_from_composite_array(&arrays, PrimitiveTopology::Triangles),
            Err(DecodeError::LengthMismatch {
                slot: ArraySlot::Normals,
                expected: 4,
                len: 3,
            })
        );

        let arrays = quad_arrays().with(ArraySlot::Colors, ArrayData::Color(vec![Color::BLACK]));
        assert!(Surface::from_composite_array(&arrays, PrimitiveTopology::Triangles).is_none());
    }

    #[test]
    fn out_of_range_index_fails() {
        let arrays =
            quad_arrays().with(ArraySlot::Indices, ArrayData::Index(vec![0, 1, 2, 0, 2, 4]));
        assert_eq!(
            Surface::try_from_composite_array(&arrays, PrimitiveTopology::Triangles),
            Err(DecodeError::IndexOutOfRange {
                position: 5,
                index: 4,
                vertex_count: 4,
            })
        );
    }
}
