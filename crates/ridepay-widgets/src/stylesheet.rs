#![forbid(unsafe_code)]

//! Class names and the shared stylesheet of the payment dialog.
//!
//! Geometry that depends on configuration (z-index, backdrop tint) is set as
//! inline style on the overlay root; everything else lives here.

pub const OVERLAY_CLASS: &str = "ridepay-overlay";
pub const DIALOG_CLASS: &str = "ridepay-dialog";
pub const CLOSE_CLASS: &str = "ridepay-close";
pub const TITLE_CLASS: &str = "ridepay-title";
pub const AMOUNT_CLASS: &str = "ridepay-amount";
pub const NOTICE_CLASS: &str = "ridepay-notice";
pub const CONFIRM_CLASS: &str = "ridepay-confirm";

/// Element id of the dialog heading, referenced by `aria-labelledby`.
pub const TITLE_ID: &str = "ridepay-dialog-title";

/// Stylesheet injected once per controller.
pub const STYLESHEET: &str = r#".ridepay-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}
.ridepay-dialog {
  position: relative;
  box-sizing: border-box;
  width: min(92vw, 380px);
  padding: 28px 24px 24px;
  border-radius: 12px;
  background: #ffffff;
  color: #1f2933;
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.25);
  text-align: center;
}
.ridepay-close {
  position: absolute;
  top: 8px;
  right: 10px;
  border: none;
  background: transparent;
  font-size: 24px;
  line-height: 1;
  color: #7b8794;
  cursor: pointer;
}
.ridepay-close:hover {
  color: #1f2933;
}
.ridepay-title {
  margin: 0 0 12px;
  font-size: 20px;
  font-weight: 600;
}
.ridepay-amount {
  margin: 8px 0 16px;
  font-size: 32px;
  font-weight: 700;
}
.ridepay-notice {
  margin: 0 0 20px;
  padding: 10px 12px;
  border-radius: 8px;
  background: #fff8e1;
  color: #8d6e00;
  font-size: 13px;
}
.ridepay-notice p {
  margin: 0;
}
.ridepay-confirm {
  width: 100%;
  padding: 12px 16px;
  border: none;
  border-radius: 8px;
  background: #0b7a75;
  color: #ffffff;
  font-size: 16px;
  font-weight: 600;
  cursor: pointer;
}
.ridepay-confirm:hover {
  background: #096560;
}
"#;
