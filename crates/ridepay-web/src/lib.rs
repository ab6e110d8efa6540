//! Browser bindings for the ridepay payment confirmation dialog.
//!
//! Exposes the `PaymentDialog` class to JavaScript:
//!
//! ```js
//! import init, { PaymentDialog, initLogging } from "./ridepay_web.js";
//!
//! await init();
//! initLogging("debug");
//! const dialog = new PaymentDialog('{"text": {"title": "Confirmer le paiement"}}');
//! dialog.show("2,50 €", () => bookSeat(), () => releaseSeat());
//! ```
//!
//! The controller lives behind `Rc<RefCell<_>>`. DOM listeners reach it
//! through a weak reference, and decision callbacks run only after the borrow
//! is released, so a callback may call back into the dialog.

pub mod config;
pub mod console;
pub mod dom;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Function;
use ridepay_core::event::Event;
use ridepay_widgets::{PaymentConfirmationDialog, PaymentRequest, Resolution};
use wasm_bindgen::prelude::*;

pub use config::{ConfigError, parse_config};
pub use console::{MakeConsoleWriter, init_logging};
pub use dom::{DomSurface, EventSink, Page, ROOT_ATTRIBUTE};

type Controller = PaymentConfirmationDialog<DomSurface>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Install console logging. See [`console::init_logging`].
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging_js(level: Option<String>) -> bool {
    init_logging(level.as_deref())
}

/// A payment confirmation dialog rendered into the current page.
#[wasm_bindgen]
pub struct PaymentDialog {
    inner: Rc<RefCell<Controller>>,
}

#[wasm_bindgen]
impl PaymentDialog {
    /// Create a dialog. `config` is an optional JSON configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<PaymentDialog, JsError> {
        let config = parse_config(config.as_deref())?;
        let page = Page::current()?;
        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<Controller>>| {
            let weak = weak.clone();
            let sink: EventSink = Rc::new(move |event| deliver(&weak, &event));
            RefCell::new(PaymentConfirmationDialog::with_config(
                DomSurface::new(page, sink),
                config,
            ))
        });
        Ok(Self { inner })
    }

    /// Open the dialog, replacing any dialog already open.
    ///
    /// Missing callbacks are no-ops; a missing amount shows the default.
    pub fn show(
        &self,
        amount: Option<String>,
        on_confirm: Option<Function>,
        on_cancel: Option<Function>,
    ) -> Result<(), JsError> {
        let mut request = PaymentRequest::new()
            .on_confirm(js_callback(on_confirm, "confirm"))
            .on_cancel(js_callback(on_cancel, "cancel"));
        if let Some(amount) = amount {
            request = request.amount(amount);
        }
        self.controller()?.show(request);
        Ok(())
    }

    /// Tear down the open dialog without running any callback.
    pub fn close(&self) -> Result<(), JsError> {
        self.controller()?.close();
        Ok(())
    }

    /// Dismiss the open dialog and run its cancel callback. Returns whether a
    /// dialog was open.
    pub fn cancel(&self) -> Result<bool, JsError> {
        let resolution = self.controller()?.dismiss();
        Ok(resolution.map(Resolution::run).is_some())
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.try_borrow().is_ok_and(|dialog| dialog.is_open())
    }

    /// Amount of the open dialog, if any.
    #[wasm_bindgen(getter)]
    pub fn amount(&self) -> Option<String> {
        let dialog = self.inner.try_borrow().ok()?;
        dialog.amount().map(str::to_string)
    }
}

impl PaymentDialog {
    fn controller(&self) -> Result<std::cell::RefMut<'_, Controller>, JsError> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| JsError::new("payment dialog is busy"))
    }
}

/// Route a DOM event to the controller, running any resulting callback after
/// the controller borrow is released.
fn deliver(dialog: &Weak<RefCell<Controller>>, event: &Event) {
    let Some(dialog) = dialog.upgrade() else {
        return;
    };
    let resolution = match dialog.try_borrow_mut() {
        Ok(mut controller) => controller.handle_event(event),
        Err(_) => {
            tracing::trace!(?event, "event during dialog update dropped");
            return;
        }
    };
    if let Some(resolution) = resolution {
        resolution.run();
    }
}

fn js_callback(f: Option<Function>, name: &'static str) -> impl FnOnce() + 'static {
    move || {
        let Some(f) = f else {
            return;
        };
        if let Err(err) = f.call0(&JsValue::NULL) {
            tracing::warn!(callback = name, ?err, "payment dialog callback threw");
        }
    }
}
