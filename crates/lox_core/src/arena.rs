//! Arena allocation for syntax trees.
//!
//! Every node of a tree is allocated from a bump arena. A tree lives exactly
//! as long as the arena that holds it, and the whole tree is released at once.

use bumpalo::Bump;

/// The arena that owns the nodes of one or more syntax trees.
///
/// Values allocated here never have their destructors run, so node types
/// must not own heap memory of their own (child lists are arena slices,
/// lexemes are interned).
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Move every element of `items` into a contiguous arena slice,
    /// preserving order.
    #[inline]
    pub fn alloc_slice<T>(&self, items: Vec<T>) -> &[T] {
        self.bump.alloc_slice_fill_iter(items)
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
