#![forbid(unsafe_code)]

//! The render surface contract.
//!
//! A surface is everything the dialog needs from its embedding page:
//! a shared style registry, a visible tree to mount into, and a page-level
//! key listener. Controllers receive the surface by value at construction
//! instead of reaching for ambient globals.
//!
//! # Invariants
//!
//! - Handles are unique per surface for the surface's lifetime; a handle is
//!   never reused after release.
//! - Releasing an unknown or already released handle is a no-op.
//! - Surface operations never fail from the caller's point of view. A surface
//!   that cannot perform an operation (for example a detached document) logs
//!   the failure and carries on.

use std::fmt;

use crate::node::Node;

macro_rules! surface_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw surface-assigned id.
            #[inline]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the raw id value.
            #[inline]
            pub const fn id(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

surface_handle!(
    /// A mounted root in the visible tree.
    NodeHandle,
    "node"
);
surface_handle!(
    /// An injected style block.
    StyleHandle,
    "style"
);
surface_handle!(
    /// A registered page-level key listener.
    ListenerId,
    "keys"
);

/// Host integration points for the dialog.
pub trait RenderSurface {
    /// Append a style definition to the shared style registry.
    fn inject_style(&mut self, css: &str) -> StyleHandle;

    /// Remove a previously injected style block.
    fn remove_style(&mut self, handle: StyleHandle);

    /// Attach `root` to the visible tree.
    fn mount(&mut self, root: Node) -> NodeHandle;

    /// Detach a mounted root.
    fn unmount(&mut self, handle: NodeHandle);

    /// Register a page-level key listener. Key events are delivered to the
    /// surface's owner while at least one listener is registered.
    fn listen_keys(&mut self) -> ListenerId;

    /// Deregister a key listener.
    fn unlisten_keys(&mut self, id: ListenerId);
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn inject_style(&mut self, css: &str) -> StyleHandle {
        (**self).inject_style(css)
    }

    fn remove_style(&mut self, handle: StyleHandle) {
        (**self).remove_style(handle);
    }

    fn mount(&mut self, root: Node) -> NodeHandle {
        (**self).mount(root)
    }

    fn unmount(&mut self, handle: NodeHandle) {
        (**self).unmount(handle);
    }

    fn listen_keys(&mut self) -> ListenerId {
        (**self).listen_keys()
    }

    fn unlisten_keys(&mut self, id: ListenerId) {
        (**self).unlisten_keys(id);
    }
}

/// Monotonic id allocator for surface implementations.
#[derive(Debug, Clone, Default)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next raw id. Ids start at 1.
    pub fn next_raw(&mut self) -> u64 {
        if self.next == 0 {
            self.next = 1;
        }
        let id = self.next;
        self.next += 1;
        id
    }
}
