#![forbid(unsafe_code)]

//! Payment confirmation dialog controller.
//!
//! Renders a modal asking the user to confirm a simulated charge, and reports
//! the decision through one of two callbacks. The dialog never talks to a
//! payment processor; confirming always succeeds.
//!
//! # Invariants
//!
//! - At most one overlay per controller is mounted at any time. `show` while
//!   open silently replaces the open dialog; its callbacks are dropped
//!   without being invoked.
//! - `close` is idempotent and never invokes a callback.
//! - Every exit path (dismissal, confirmation, `close`, drop) unmounts the
//!   overlay and deregisters the key listener.
//! - Exactly one callback runs per resolved dialog, and only after teardown
//!   has completed, so a callback that reopens the dialog starts from a
//!   closed controller.
//!
//! # Failure modes
//!
//! None are modelled. A panicking callback unwinds to the caller after the
//! controller is already closed.
//!
//! # Example
//!
//! ```ignore
//! let mut dialog = PaymentConfirmationDialog::new(surface);
//! dialog.show(
//!     PaymentRequest::new()
//!         .amount("2,50 €")
//!         .on_confirm(|| book_seat())
//!         .on_cancel(|| release_seat()),
//! );
//!
//! // Later, from the surface's event delivery:
//! dialog.dispatch(&event);
//! ```

use std::fmt;

use ridepay_core::event::Event;
use ridepay_core::node::{HitRegion, Node};
use ridepay_core::surface::{ListenerId, NodeHandle, RenderSurface, StyleHandle};
use web_time::Instant;

use crate::modal::container::{Overlay, OverlayAction, OverlayConfig};
use crate::stylesheet::{
    AMOUNT_CLASS, CLOSE_CLASS, CONFIRM_CLASS, DIALOG_CLASS, NOTICE_CLASS, STYLESHEET,
    TITLE_CLASS, TITLE_ID,
};
use crate::text::DialogText;

/// Amount shown when the request does not provide one.
pub const DEFAULT_AMOUNT: &str = "1,00 €";

/// Glyph rendered in the close button.
pub const CLOSE_GLYPH: &str = "×";

/// A decision callback. Runs at most once.
pub type Callback = Box<dyn FnOnce() + 'static>;

fn noop() -> Callback {
    Box::new(|| {})
}

/// Parameters of one `show` call.
pub struct PaymentRequest {
    amount: String,
    on_confirm: Callback,
    on_cancel: Callback,
}

impl Default for PaymentRequest {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT.to_string(),
            on_confirm: noop(),
            on_cancel: noop(),
        }
    }
}

impl fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("amount", &self.amount)
            .finish_non_exhaustive()
    }
}

impl PaymentRequest {
    /// A request with the default amount and no-op callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display amount. Rendered verbatim.
    #[must_use]
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Set the callback run when the user confirms.
    #[must_use]
    pub fn on_confirm(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_confirm = Box::new(f);
        self
    }

    /// Set the callback run when the user dismisses the dialog.
    #[must_use]
    pub fn on_cancel(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Box::new(f);
        self
    }

    /// The amount as it will be rendered.
    pub fn display_amount(&self) -> &str {
        &self.amount
    }
}

/// How a dialog was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// The `×` glyph.
    CloseButton,
    /// A click on the backdrop outside the dialog.
    Backdrop,
    /// The escape key.
    Escape,
    /// [`PaymentConfirmationDialog::cancel`].
    Programmatic,
}

impl From<OverlayAction> for CancelReason {
    fn from(action: OverlayAction) -> Self {
        match action {
            OverlayAction::BackdropClicked => Self::Backdrop,
            OverlayAction::EscapePressed => Self::Escape,
        }
    }
}

/// Outcome of a resolved dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Confirmed,
    Cancelled(CancelReason),
}

impl Decision {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled(CancelReason::CloseButton) => "cancelled:close",
            Self::Cancelled(CancelReason::Backdrop) => "cancelled:backdrop",
            Self::Cancelled(CancelReason::Escape) => "cancelled:escape",
            Self::Cancelled(CancelReason::Programmatic) => "cancelled:programmatic",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decided dialog whose callback has not run yet.
///
/// Returned by [`PaymentConfirmationDialog::handle_event`] so that an owner
/// holding the controller behind a `RefCell` can release its borrow before
/// running user code.
#[must_use = "the decision callback only runs when the resolution is run"]
pub struct Resolution {
    decision: Decision,
    callback: Callback,
}

impl Resolution {
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// Run the callback and return the decision.
    pub fn run(self) -> Decision {
        (self.callback)();
        self.decision
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("decision", &self.decision)
            .finish_non_exhaustive()
    }
}

/// Controller configuration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DialogConfig {
    pub overlay: OverlayConfig,
    pub text: DialogText,
}

impl DialogConfig {
    #[must_use]
    pub fn overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }

    #[must_use]
    pub fn text(mut self, text: DialogText) -> Self {
        self.text = text;
        self
    }
}

/// State of the open dialog.
struct ActiveDialog {
    root: NodeHandle,
    keys: Option<ListenerId>,
    amount: String,
    on_confirm: Callback,
    on_cancel: Callback,
    opened_at: Instant,
}

/// Modal payment confirmation controller over an injected render surface.
pub struct PaymentConfirmationDialog<S: RenderSurface> {
    surface: S,
    config: DialogConfig,
    style: Option<StyleHandle>,
    active: Option<ActiveDialog>,
}

impl<S: RenderSurface> PaymentConfirmationDialog<S> {
    /// Create a closed controller with the default configuration.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, DialogConfig::default())
    }

    /// Create a closed controller.
    pub fn with_config(surface: S, config: DialogConfig) -> Self {
        Self {
            surface,
            config,
            style: None,
            active: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Amount of the open dialog.
    pub fn amount(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.amount.as_str())
    }

    /// Handle of the mounted overlay root.
    pub fn root(&self) -> Option<NodeHandle> {
        self.active.as_ref().map(|a| a.root)
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next `show`.
    pub fn set_config(&mut self, config: DialogConfig) {
        self.config = config;
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Open the dialog for `request`, replacing any open dialog.
    pub fn show(&mut self, request: PaymentRequest) {
        if self.active.is_some() {
            tracing::debug!("replacing open payment dialog");
            self.close();
        }

        if self.style.is_none() {
            self.style = Some(self.surface.inject_style(STYLESHEET));
        }

        let PaymentRequest {
            amount,
            on_confirm,
            on_cancel,
        } = request;

        let tree = self.build_tree(&amount);
        let root = self.surface.mount(tree);
        let keys = if self.config.overlay.close_on_escape {
            Some(self.surface.listen_keys())
        } else {
            None
        };

        tracing::debug!(amount = %amount, root = %root, "payment dialog opened");

        self.active = Some(ActiveDialog {
            root,
            keys,
            amount,
            on_confirm,
            on_cancel,
            opened_at: Instant::now(),
        });
    }

    /// Tear down the open dialog without invoking its callbacks.
    pub fn close(&mut self) {
        if let Some(active) = self.active.take() {
            let (_on_confirm, _on_cancel) = self.teardown(active);
            tracing::debug!("payment dialog closed");
        }
    }

    /// Dismiss the open dialog as cancelled and run its cancel callback.
    pub fn cancel(&mut self) -> Option<Decision> {
        self.dismiss().map(Resolution::run)
    }

    /// Tear down the open dialog as cancelled, deferring its cancel callback
    /// to the returned [`Resolution`].
    pub fn dismiss(&mut self) -> Option<Resolution> {
        let active = self.active.take()?;
        Some(self.resolve(active, Decision::Cancelled(CancelReason::Programmatic)))
    }

    /// Route an input event.
    ///
    /// When the event resolves the dialog, the overlay is already torn down on
    /// return and the returned [`Resolution`] holds the callback to run.
    pub fn handle_event(&mut self, event: &Event) -> Option<Resolution> {
        let active = self.active.as_ref()?;
        let decision = self.decision_for(event, active.root)?;
        let active = self.active.take()?;
        Some(self.resolve(active, decision))
    }

    /// Route an input event and run the resulting callback, if any.
    pub fn dispatch(&mut self, event: &Event) -> Option<Decision> {
        self.handle_event(event).map(Resolution::run)
    }

    fn decision_for(&self, event: &Event, root: NodeHandle) -> Option<Decision> {
        if let Some(action) = self.config.overlay.action_for(event, root) {
            return Some(Decision::Cancelled(action.into()));
        }
        match event {
            Event::Click(click) if click.root == root => match click.target {
                HitRegion::CloseButton => Some(Decision::Cancelled(CancelReason::CloseButton)),
                HitRegion::ConfirmButton => Some(Decision::Confirmed),
                HitRegion::Backdrop | HitRegion::Content => None,
            },
            _ => None,
        }
    }

    fn resolve(&mut self, active: ActiveDialog, decision: Decision) -> Resolution {
        let opened_at = active.opened_at;
        let (on_confirm, on_cancel) = self.teardown(active);
        tracing::info!(
            decision = decision.as_str(),
            open_ms = u64::try_from(opened_at.elapsed().as_millis()).unwrap_or(u64::MAX),
            "payment dialog resolved"
        );
        let callback = if decision.is_confirmed() {
            on_confirm
        } else {
            on_cancel
        };
        Resolution { decision, callback }
    }

    /// Release the surface resources of `active` and hand back its callbacks.
    fn teardown(&mut self, active: ActiveDialog) -> (Callback, Callback) {
        let ActiveDialog {
            root,
            keys,
            on_confirm,
            on_cancel,
            ..
        } = active;
        if let Some(id) = keys {
            self.surface.unlisten_keys(id);
        }
        self.surface.unmount(root);
        (on_confirm, on_cancel)
    }

    fn build_tree(&self, amount: &str) -> Node {
        let text = &self.config.text;
        let dialog = Node::new("div")
            .class(DIALOG_CLASS)
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .attr("aria-labelledby", TITLE_ID)
            .child(
                Node::new("button")
                    .class(CLOSE_CLASS)
                    .attr("type", "button")
                    .attr("aria-label", text.close_label.as_str())
                    .hit(HitRegion::CloseButton)
                    .text(CLOSE_GLYPH),
            )
            .child(
                Node::new("h2")
                    .class(TITLE_CLASS)
                    .attr("id", TITLE_ID)
                    .text(text.title.as_str()),
            )
            .child(Node::new("div").class(AMOUNT_CLASS).text(amount))
            .child(
                Node::new("div")
                    .class(NOTICE_CLASS)
                    .attr("role", "note")
                    .child(Node::new("p").text(text.notice.as_str())),
            )
            .child(
                Node::new("button")
                    .class(CONFIRM_CLASS)
                    .attr("type", "button")
                    .hit(HitRegion::ConfirmButton)
                    .text(text.confirm_label_for(amount)),
            );

        Overlay::new(dialog)
            .config(self.config.overlay.clone())
            .into_node()
    }
}

impl<S: RenderSurface> Drop for PaymentConfirmationDialog<S> {
    fn drop(&mut self) {
        self.close();
        if let Some(style) = self.style.take() {
            self.surface.remove_style(style);
        }
    }
}

impl<S: RenderSurface> fmt::Debug for PaymentConfirmationDialog<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentConfirmationDialog")
            .field("open", &self.is_open())
            .field("amount", &self.amount())
            .field("root", &self.root())
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridepay_core::event::{KeyCode, KeyEvent, KeyEventKind};
    use ridepay_core::surface::HandleAllocator;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// Minimal recording surface; the harness crate has the full mock.
    #[derive(Default)]
    struct Recorder {
        ids: HandleAllocator,
        styles: BTreeMap<StyleHandle, String>,
        mounted: BTreeMap<NodeHandle, Node>,
        listeners: Vec<ListenerId>,
    }

    impl RenderSurface for Recorder {
        fn inject_style(&mut self, css: &str) -> StyleHandle {
            let h = StyleHandle::new(self.ids.next_raw());
            self.styles.insert(h, css.to_string());
            h
        }

        fn remove_style(&mut self, handle: StyleHandle) {
            self.styles.remove(&handle);
        }

        fn mount(&mut self, root: Node) -> NodeHandle {
            let h = NodeHandle::new(self.ids.next_raw());
            self.mounted.insert(h, root);
            h
        }

        fn unmount(&mut self, handle: NodeHandle) {
            self.mounted.remove(&handle);
        }

        fn listen_keys(&mut self) -> ListenerId {
            let id = ListenerId::new(self.ids.next_raw());
            self.listeners.push(id);
            id
        }

        fn unlisten_keys(&mut self, id: ListenerId) {
            self.listeners.retain(|l| *l != id);
        }
    }

    #[derive(Default, Clone)]
    struct Calls(Rc<RefCell<Vec<&'static str>>>);

    impl Calls {
        fn request(&self, amount: &str) -> PaymentRequest {
            let confirm = self.0.clone();
            let cancel = self.0.clone();
            PaymentRequest::new()
                .amount(amount)
                .on_confirm(move || confirm.borrow_mut().push("confirm"))
                .on_cancel(move || cancel.borrow_mut().push("cancel"))
        }

        fn take(&self) -> Vec<&'static str> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    fn open(calls: &Calls, amount: &str) -> PaymentConfirmationDialog<Recorder> {
        let mut dialog = PaymentConfirmationDialog::new(Recorder::default());
        dialog.show(calls.request(amount));
        dialog
    }

    #[test]
    fn show_mounts_one_overlay_and_listener() {
        let calls = Calls::default();
        let dialog = open(&calls, "2,50 €");
        assert!(dialog.is_open());
        assert_eq!(dialog.amount(), Some("2,50 €"));
        assert_eq!(dialog.surface().mounted.len(), 1);
        assert_eq!(dialog.surface().listeners.len(), 1);
        assert_eq!(dialog.surface().styles.len(), 1);
        assert!(calls.take().is_empty());
    }

    #[test]
    fn default_request_uses_default_amount() {
        let request = PaymentRequest::default();
        assert_eq!(request.display_amount(), DEFAULT_AMOUNT);
        let mut dialog = PaymentConfirmationDialog::new(Recorder::default());
        dialog.show(request);
        let tree = dialog.surface().mounted.values().next().unwrap();
        assert_eq!(tree.count_text(DEFAULT_AMOUNT), 2);
    }

    #[test]
    fn confirm_click_runs_confirm() {
        let calls = Calls::default();
        let mut dialog = open(&calls, "1,00 €");
        let root = dialog.root().unwrap();
        let decision = dialog.dispatch(&Event::click(root, HitRegion::ConfirmButton));
        assert_eq!(decision, Some(Decision::Confirmed));
        assert_eq!(calls.take(), vec!["confirm"]);
        assert!(!dialog.is_open());
        assert!(dialog.surface().mounted.is_empty());
        assert!(dialog.surface().listeners.is_empty());
    }

    #[test]
    fn each_dismissal_path_runs_cancel() {
        let cases = [
            (HitRegion::CloseButton, CancelReason::CloseButton),
            (HitRegion::Backdrop, CancelReason::Backdrop),
        ];
        for (region, reason) in cases {
            let calls = Calls::default();
            let mut dialog = open(&calls, "3 €");
            let root = dialog.root().unwrap();
            let decision = dialog.dispatch(&Event::click(root, region));
            assert_eq!(decision, Some(Decision::Cancelled(reason)));
            assert_eq!(calls.take(), vec!["cancel"]);
            assert!(dialog.surface().mounted.is_empty());
            assert!(dialog.surface().listeners.is_empty());
        }

        let calls = Calls::default();
        let mut dialog = open(&calls, "3 €");
        let decision = dialog.dispatch(&Event::escape());
        assert_eq!(decision, Some(Decision::Cancelled(CancelReason::Escape)));
        assert_eq!(calls.take(), vec!["cancel"]);
        assert!(dialog.surface().listeners.is_empty());
    }

    #[test]
    fn content_click_is_ignored() {
        let calls = Calls::default();
        let mut dialog = open(&calls, "3 €");
        let root = dialog.root().unwrap();
        assert_eq!(dialog.dispatch(&Event::click(root, HitRegion::Content)), None);
        assert!(dialog.is_open());
        assert!(calls.take().is_empty());
    }

    #[test]
    fn stale_root_click_is_ignored() {
        let calls = Calls::default();
        let mut dialog = open(&calls, "3 €");
        let stale = dialog.root().unwrap();
        dialog.show(calls.request("4 €"));
        assert_eq!(
            dialog.dispatch(&Event::click(stale, HitRegion::ConfirmButton)),
            None
        );
        assert_eq!(dialog.amount(), Some("4 €"));
        assert!(calls.take().is_empty());
    }

    #[test]
    fn close_is_idempotent_and_silent() {
        let calls = Calls::default();
        let mut dialog = open(&calls, "3 €");
        dialog.close();
        dialog.close();
        assert!(!dialog.is_open());
        assert!(dialog.surface().mounted.is_empty());
        assert!(dialog.surface().listeners.is_empty());
        assert!(calls.take().is_empty());
    }

    #[test]
    fn events_when_closed_are_ignored() {
        let mut dialog = PaymentConfirmationDialog::new(Recorder::default());
        assert!(dialog.handle_event(&Event::escape()).is_none());
        assert!(dialog.cancel().is_none());
    }

    #[test]
    fn cancel_runs_cancel_callback() {
        let calls = Calls::default();
        let mut dialog = open(&calls, "3 €");
        assert_eq!(
            dialog.cancel(),
            Some(Decision::Cancelled(CancelReason::Programmatic))
        );
        assert_eq!(calls.take(), vec!["cancel"]);
        assert!(dialog.surface().mounted.is_empty());
    }

    #[test]
    fn dismiss_defers_cancel_callback() {
        let calls = Calls::default();
        let mut dialog = open(&calls, "3 €");
        let resolution = dialog.dismiss().unwrap();
        assert!(!dialog.is_open());
        assert!(dialog.surface().listeners.is_empty());
        assert!(calls.take().is_empty());
        assert_eq!(
            resolution.run(),
            Decision::Cancelled(CancelReason::Programmatic)
        );
        assert_eq!(calls.take(), vec!["cancel"]);
        assert!(dialog.dismiss().is_none());
    }

    #[test]
    fn resolution_defers_callback() {
        let calls = Calls::default();
        let mut dialog = open(&calls, "3 €");
        let resolution = dialog.handle_event(&Event::escape()).unwrap();
        assert!(!dialog.is_open());
        assert!(calls.take().is_empty());
        assert_eq!(
            resolution.decision(),
            Decision::Cancelled(CancelReason::Escape)
        );
        resolution.run();
        assert_eq!(calls.take(), vec!["cancel"]);
    }

    #[test]
    fn escape_release_does_not_dismiss() {
        let calls = Calls::default();
        let mut dialog = open(&calls, "3 €");
        let release = Event::Key(KeyEvent::new(KeyCode::Escape).with_kind(KeyEventKind::Release));
        assert_eq!(dialog.dispatch(&release), None);
        assert!(dialog.is_open());
    }

    #[test]
    fn escape_disabled_registers_no_listener() {
        let config =
            DialogConfig::default().overlay(OverlayConfig::default().close_on_escape(false));
        let mut dialog = PaymentConfirmationDialog::with_config(Recorder::default(), config);
        dialog.show(PaymentRequest::new());
        assert!(dialog.surface().listeners.is_empty());
        assert_eq!(dialog.dispatch(&Event::escape()), None);
        assert!(dialog.is_open());
    }

    #[test]
    fn style_injected_once() {
        let calls = Calls::default();
        let mut dialog = open(&calls, "1 €");
        dialog.close();
        dialog.show(calls.request("2 €"));
        dialog.show(calls.request("3 €"));
        assert_eq!(dialog.surface().styles.len(), 1);
        assert_eq!(dialog.surface().mounted.len(), 1);
        assert_eq!(dialog.surface().listeners.len(), 1);
    }

    #[test]
    fn custom_text_is_rendered() {
        let config = DialogConfig::default().text(
            DialogText::default()
                .title("Paiement")
                .confirm_label("Payer {amount}"),
        );
        let mut dialog = PaymentConfirmationDialog::with_config(Recorder::default(), config);
        dialog.show(PaymentRequest::new().amount("5 €"));
        let tree = dialog.surface().mounted.values().next().unwrap();
        let title = tree.find_class(TITLE_CLASS).unwrap();
        assert_eq!(title.text_value(), Some("Paiement"));
        let confirm = tree.find_hit(HitRegion::ConfirmButton).unwrap();
        assert_eq!(confirm.text_value(), Some("Payer 5 €"));
    }

    mod log_capture {
        use std::fmt::Write as _;
        use std::sync::{Arc, Mutex};
        use tracing::field::{Field, Visit};
        use tracing_subscriber::layer::{Context, Layer};

        #[derive(Clone, Default)]
        pub struct Captured(pub Arc<Mutex<Vec<String>>>);

        struct Line(String);

        impl Visit for Line {
            fn record_str(&mut self, field: &Field, value: &str) {
                let _ = write!(self.0, "{}={} ", field.name(), value);
            }

            fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
                let _ = write!(self.0, "{}={:?} ", field.name(), value);
            }
        }

        impl<S: tracing::Subscriber> Layer<S> for Captured {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                let mut line = Line(String::new());
                event.record(&mut line);
                if let Ok(mut lines) = self.0.lock() {
                    lines.push(line.0);
                }
            }
        }
    }

    #[test]
    fn resolution_is_logged() {
        use tracing_subscriber::layer::SubscriberExt;

        let captured = log_capture::Captured::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        tracing::subscriber::with_default(subscriber, || {
            let calls = Calls::default();
            let mut dialog = open(&calls, "1,00 €");
            let root = dialog.root().unwrap();
            dialog.dispatch(&Event::click(root, HitRegion::ConfirmButton));
        });

        let lines = captured.0.lock().unwrap();
        assert!(
            lines
                .iter()
                .any(|l| l.contains("payment dialog resolved") && l.contains("decision=confirmed")),
            "{lines:?}"
        );
        assert!(lines.iter().any(|l| l.contains("payment dialog opened")));
    }

    #[test]
    fn decision_labels() {
        assert_eq!(Decision::Confirmed.to_string(), "confirmed");
        assert_eq!(
            Decision::Cancelled(CancelReason::Backdrop).as_str(),
            "cancelled:backdrop"
        );
        assert!(!Decision::Cancelled(CancelReason::Escape).is_confirmed());
    }
}
