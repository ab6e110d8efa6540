#![forbid(unsafe_code)]

//! Core types for the ridepay payment confirmation dialog: input events, the
//! element tree widgets render into, and the [`RenderSurface`] contract that
//! embedding pages implement.

pub mod error;
pub mod event;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod node;
pub mod surface;

pub use error::SurfaceError;
pub use event::{ClickEvent, Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use node::{HitRegion, Node};
pub use surface::{HandleAllocator, ListenerId, NodeHandle, RenderSurface, StyleHandle};
