//! Handles used for identifying vertices and edges in a graph.
//!
//! A handle is a generational index: the position of the slot in the backing
//! storage together with the generation of that slot at the time the vertex or
//! edge was inserted. Removing an element bumps the generation of its slot, so
//! a handle that outlived its element is recognized as stale and never aliases
//! an element inserted into the same slot later.
//!
//! Handles are `Copy` and cheap to pass around by value. They are only
//! meaningful for the graph that issued them.

use std::{fmt, hash::Hash};

/// A unique identification of a vertex or edge in a graph.
pub trait IdType: Copy + Ord + Hash + fmt::Debug {
    /// Creates the handle for the given slot index and generation.
    fn new(index: u32, generation: u32) -> Self;

    /// The position of the slot in the backing storage.
    fn index(&self) -> u32;

    /// The generation of the slot at the time the handle was issued.
    fn generation(&self) -> u32;

    /// A handle that is never issued by any graph. Useful as a placeholder.
    fn sentinel() -> Self {
        Self::new(u32::MAX, u32::MAX)
    }

    /// Returns `true` if the value represents the sentinel value.
    fn is_sentinel(&self) -> bool {
        self == &Self::sentinel()
    }

    /// Converts the slot index into `usize`.
    fn as_usize(&self) -> usize {
        self.index() as usize
    }
}

/// Handle of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    index: u32,
    generation: u32,
}

/// Handle of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    index: u32,
    generation: u32,
}

macro_rules! impl_id {
    ($id_ty:ident, $prefix:literal) => {
        impl IdType for $id_ty {
            fn new(index: u32, generation: u32) -> Self {
                Self { index, generation }
            }

            fn index(&self) -> u32 {
                self.index
            }

            fn generation(&self) -> u32 {
                self.generation
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_sentinel() {
                    write!(f, concat!($prefix, "#sentinel"))
                } else {
                    write!(f, concat!($prefix, "{}#{}"), self.index, self.generation)
                }
            }
        }
    };
}

impl_id!(VertexId, "v");
impl_id!(EdgeId, "e");
