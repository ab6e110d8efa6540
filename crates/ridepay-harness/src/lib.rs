#![forbid(unsafe_code)]

//! Test harness for the ridepay dialog: an in-memory render surface, a page
//! fixture that records callbacks, tree outlines, and proptest strategies.

pub mod dump;
pub mod mock;
pub mod page;
pub mod strategy;

pub use dump::dump;
pub use mock::{MockSurface, SurfaceOp};
pub use page::{Call, CallLog, Page};
