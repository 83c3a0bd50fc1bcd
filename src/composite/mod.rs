//! The composite array: a fixed five-slot columnar interchange format.
//!
//! Each slot holds one typed buffer, or nothing. The slot order
//! (positions, normals, colors, UVs, indices) is the layout the host
//! engine expects and must not change.

mod decode;
mod encode;

use crate::math::{Color, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of slots in a composite array.
pub const SLOT_COUNT: usize = 5;

/// Slot positions within a composite array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArraySlot {
    Positions = 0,
    Normals = 1,
    Colors = 2,
    Uvs = 3,
    Indices = 4,
}

impl ArraySlot {
    /// All slots in wire order.
    pub const ALL: [Self; SLOT_COUNT] = [
        Self::Positions,
        Self::Normals,
        Self::Colors,
        Self::Uvs,
        Self::Indices,
    ];

    /// Index of this slot in the composite array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The element type a surface expects in this slot.
    #[must_use]
    pub const fn expected_type(self) -> ElementType {
        match self {
            Self::Positions | Self::Normals => ElementType::Vector3,
            Self::Colors => ElementType::Color,
            Self::Uvs => ElementType::Vector2,
            Self::Indices => ElementType::Index,
        }
    }
}

/// How the host interprets the index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveTopology {
    Points,
    Lines,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
}

/// Declared element type of a slot buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementType {
    Vector2,
    Vector3,
    Color,
    Index,
    Float,
}

/// A typed buffer stored in one slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArrayData {
    Vector2(Vec<Vector2>),
    Vector3(Vec<Vector3>),
    Color(Vec<Color>),
    Index(Vec<u32>),
    Float(Vec<f32>),
}

impl ArrayData {
    /// The declared element type of this buffer.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Vector2(_) => ElementType::Vector2,
            Self::Vector3(_) => ElementType::Vector3,
            Self::Color(_) => ElementType::Color,
            Self::Index(_) => ElementType::Index,
            Self::Float(_) => ElementType::Float,
        }
    }

    /// Number of elements in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Vector2(v) => v.len(),
            Self::Vector3(v) => v.len(),
            Self::Color(v) => v.len(),
            Self::Index(v) => v.len(),
            Self::Float(v) => v.len(),
        }
    }

    /// Returns `true` if the buffer has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Element types that can be stored in an [`ArrayData`] buffer.
pub trait SlotElement: Sized + Copy {
    /// The element type tag matching `Self`.
    const ELEMENT_TYPE: ElementType;

    /// Borrows the buffer if it holds `Self` elements.
    fn buffer(data: &ArrayData) -> Option<&[Self]>;

    /// Mutably borrows the buffer if it holds `Self` elements.
    fn buffer_mut(data: &mut ArrayData) -> Option<&mut Vec<Self>>;

    /// Wraps a buffer of `Self` elements.
    fn wrap(values: Vec<Self>) -> ArrayData;
}

macro_rules! slot_element {
    ($ty:ty, $variant:ident) => {
        impl SlotElement for $ty {
            const ELEMENT_TYPE: ElementType = ElementType::$variant;

            fn buffer(data: &ArrayData) -> Option<&[Self]> {
                match data {
                    ArrayData::$variant(v) => Some(v.as_slice()),
                    _ => None,
                }
            }

            fn buffer_mut(data: &mut ArrayData) -> Option<&mut Vec<Self>> {
                match data {
                    ArrayData::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn wrap(values: Vec<Self>) -> ArrayData {
                ArrayData::$variant(values)
            }
        }
    };
}

slot_element!(Vector2, Vector2);
slot_element!(Vector3, Vector3);
slot_element!(Color, Color);
slot_element!(u32, Index);
slot_element!(f32, Float);

/// Typed view of one slot: absent, holding the wrong type, or usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotView<'a, T> {
    Absent,
    WrongType(ElementType),
    Present(&'a [T]),
}

impl<'a, T> SlotView<'a, T> {
    /// Returns the buffer if present with the right type.
    #[must_use]
    pub fn present(self) -> Option<&'a [T]> {
        match self {
            Self::Present(values) => Some(values),
            Self::Absent | Self::WrongType(_) => None,
        }
    }
}

/// A five-slot columnar surface description exchanged with the host.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompositeArray {
    slots: [Option<ArrayData>; SLOT_COUNT],
}

impl CompositeArray {
    /// Creates a composite array with every slot absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw buffer in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: ArraySlot) -> Option<&ArrayData> {
        self.slots[slot.index()].as_ref()
    }

    /// Stores `data` in `slot`, replacing what was there.
    pub fn set(&mut self, slot: ArraySlot, data: ArrayData) {
        self.slots[slot.index()] = Some(data);
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, slot: ArraySlot, data: ArrayData) -> Self {
        self.set(slot, data);
        self
    }

    /// Removes and returns the buffer in `slot`.
    pub fn take(&mut self, slot: ArraySlot) -> Option<ArrayData> {
        self.slots[slot.index()].take()
    }

    /// Marks `slot` absent.
    pub fn clear(&mut self, slot: ArraySlot) {
        self.slots[slot.index()] = None;
    }

    /// Views `slot` as a buffer of `T`.
    #[must_use]
    pub fn view<T: SlotElement>(&self, slot: ArraySlot) -> SlotView<'_, T> {
        match self.get(slot) {
            None => SlotView::Absent,
            Some(data) => match T::buffer(data) {
                Some(values) => SlotView::Present(values),
                None => SlotView::WrongType(data.element_type()),
            },
        }
    }

    /// Position slot view.
    #[must_use]
    pub fn positions(&self) -> SlotView<'_, Vector3> {
        self.view(ArraySlot::Positions)
    }

    /// Normal slot view.
    #[must_use]
    pub fn normals(&self) -> SlotView<'_, Vector3> {
        self.view(ArraySlot::Normals)
    }

    /// Color slot view.
    #[must_use]
    pub fn colors(&self) -> SlotView<'_, Color> {
        self.view(ArraySlot::Colors)
    }

    /// UV slot view.
    #[must_use]
    pub fn uvs(&self) -> SlotView<'_, Vector2> {
        self.view(ArraySlot::Uvs)
    }

    /// Index slot view.
    #[must_use]
    pub fn indices(&self) -> SlotView<'_, u32> {
        self.view(ArraySlot::Indices)
    }

    /// Overwrites `slot` with `values`, reusing the existing buffer when it
    /// already holds `T`.
    fn fill<T: SlotElement>(&mut self, slot: ArraySlot, values: impl Iterator<Item = T>) {
        let entry = &mut self.slots[slot.index()];
        match entry.as_mut().and_then(T::buffer_mut) {
            Some(buffer) => {
                buffer.clear();
                buffer.extend(values);
            }
            None => *entry = Some(T::wrap(values.collect())),
        }
    }
}
