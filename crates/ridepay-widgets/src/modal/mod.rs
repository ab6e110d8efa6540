#![forbid(unsafe_code)]

//! Overlay container and the payment confirmation dialog built on it.

mod container;
mod dialog;

pub use container::{
    BackdropConfig, DEFAULT_Z_INDEX, Overlay, OverlayAction, OverlayConfig, Rgb,
};
pub use dialog::{
    CLOSE_GLYPH, Callback, CancelReason, DEFAULT_AMOUNT, Decision, DialogConfig,
    PaymentConfirmationDialog, PaymentRequest, Resolution,
};
