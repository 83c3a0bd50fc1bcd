use thiserror::Error;

use crate::composite::{ArraySlot, ElementType, PrimitiveTopology};

/// Top-level error type for the arraymesh crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Reasons a composite array cannot become a [`Surface`](crate::surface::Surface).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("required slot {0:?} is absent")]
    MissingSlot(ArraySlot),

    #[error("slot {slot:?} holds {found:?} data, expected {expected:?}")]
    WrongElementType {
        slot: ArraySlot,
        expected: ElementType,
        found: ElementType,
    },

    #[error("no index slot and {0:?} topology cannot synthesize implicit indices")]
    MissingIndices(PrimitiveTopology),

    #[error("index count {0} is not a multiple of three")]
    IndexCountNotMultipleOfThree(usize),

    #[error("slot {slot:?} has {len} elements, positions has {expected}")]
    LengthMismatch {
        slot: ArraySlot,
        expected: usize,
        len: usize,
    },

    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// Errors raised by operations that require a well-formed surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("triangle {triangle} references vertex {index}, surface has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// Errors reported by a host mesh collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("invalid surface arrays: {0}")]
    InvalidArrays(String),

    #[error("surface slot {slot} does not exist (mesh has {count})")]
    SlotOutOfRange { slot: usize, count: usize },

    #[error("material not found")]
    MaterialNotFound,
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
