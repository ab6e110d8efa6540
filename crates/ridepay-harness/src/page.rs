#![forbid(unsafe_code)]

//! A page fixture: one dialog controller over a [`MockSurface`], plus a log
//! of the callbacks it ran.

use std::cell::RefCell;
use std::rc::Rc;

use ridepay_core::event::KeyCode;
use ridepay_core::node::HitRegion;
use ridepay_widgets::modal::{Decision, DialogConfig, PaymentConfirmationDialog, PaymentRequest};

use crate::mock::MockSurface;

/// Which callback ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `on_confirm` of the request with this tag.
    Confirm(String),
    /// `on_cancel` of the request with this tag.
    Cancel(String),
}

/// Shared record of callback invocations.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request whose callbacks record `tag` into this log.
    pub fn request(&self, tag: &str, amount: &str) -> PaymentRequest {
        let confirm = (self.calls.clone(), tag.to_string());
        let cancel = (self.calls.clone(), tag.to_string());
        PaymentRequest::new()
            .amount(amount)
            .on_confirm(move || confirm.0.borrow_mut().push(Call::Confirm(confirm.1)))
            .on_cancel(move || cancel.0.borrow_mut().push(Call::Cancel(cancel.1)))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    pub fn confirms(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Confirm(_)))
            .count()
    }

    pub fn cancels(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Cancel(_)))
            .count()
    }
}

/// A dialog mounted on an in-memory page.
#[derive(Debug)]
pub struct Page {
    pub dialog: PaymentConfirmationDialog<MockSurface>,
    pub surface: MockSurface,
    pub log: CallLog,
}

impl Default for Page {
    fn default() -> Self {
        Self::with_config(DialogConfig::default())
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DialogConfig) -> Self {
        let surface = MockSurface::new();
        Self {
            dialog: PaymentConfirmationDialog::with_config(surface.clone(), config),
            surface,
            log: CallLog::new(),
        }
    }

    /// Show a request whose callbacks record `tag`.
    pub fn show(&mut self, tag: &str, amount: &str) {
        let request = self.log.request(tag, amount);
        self.dialog.show(request);
    }

    /// Click `region` the way a user would: only if it is on screen.
    pub fn click(&mut self, region: HitRegion) -> Option<Decision> {
        let event = self.surface.click(region)?;
        self.dialog.dispatch(&event)
    }

    /// Press a key the way a user would: only delivered while listened for.
    pub fn press(&mut self, code: KeyCode) -> Option<Decision> {
        let event = self.surface.key(code)?;
        self.dialog.dispatch(&event)
    }
}
