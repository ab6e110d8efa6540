#![forbid(unsafe_code)]

//! Payment confirmation dialog for the ridepay booking widget.
//!
//! The dialog simulates a payment step: it shows the amount, and reports
//! whether the user confirmed or dismissed it. It renders through any
//! [`RenderSurface`](ridepay_core::RenderSurface).

pub mod modal;
pub mod stylesheet;
pub mod text;

pub use modal::{
    CancelReason, Decision, DialogConfig, PaymentConfirmationDialog, PaymentRequest, Resolution,
};
pub use text::DialogText;
