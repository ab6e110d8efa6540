#![forbid(unsafe_code)]

//! DOM implementation of [`RenderSurface`].
//!
//! Mounted trees are appended to `<body>`, style blocks to `<head>`. Each
//! mounted root carries [`ROOT_ATTRIBUTE`] with its handle id and a click
//! listener that resolves the clicked element to the innermost ancestor
//! tagged with [`HitRegion::ATTRIBUTE`]. Resolved events go to the
//! [`EventSink`] given at construction.
//!
//! Listener closures are created once per surface and only attached or
//! detached afterwards: a surface call made from inside a listener (a
//! dismissal tearing down the overlay that was clicked) must not free the
//! closure that is running. They are `Fn` so that an event dispatched
//! synchronously from a callback may re-enter them.

use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use ridepay_core::error::SurfaceError;
use ridepay_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
use ridepay_core::node::{HitRegion, Node};
use ridepay_core::surface::{
    HandleAllocator, ListenerId, NodeHandle, RenderSurface, StyleHandle,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

/// Attribute carrying the handle id on each mounted root.
pub const ROOT_ATTRIBUTE: &str = "data-ridepay-root";

/// Receiver of resolved input events.
pub type EventSink = Rc<dyn Fn(Event)>;

/// The page elements a surface renders into.
#[derive(Debug, Clone)]
pub struct Page {
    document: Document,
    head: Element,
    body: Element,
}

impl Page {
    /// Look up the current window's document, head, and body.
    pub fn current() -> Result<Self, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let document = window.document().ok_or(SurfaceError::NoDocument)?;
        let head = document
            .head()
            .ok_or(SurfaceError::MissingElement("head"))?;
        let body = document
            .body()
            .ok_or(SurfaceError::MissingElement("body"))?;
        Ok(Self {
            document,
            head: head.into(),
            body: body.into(),
        })
    }
}

/// Render surface backed by the browser DOM.
pub struct DomSurface {
    page: Page,
    ids: HandleAllocator,
    styles: HashMap<StyleHandle, Element>,
    mounted: HashMap<NodeHandle, Element>,
    key_listeners: BTreeSet<ListenerId>,
    on_click: Closure<dyn Fn(MouseEvent)>,
    on_keydown: Closure<dyn Fn(KeyboardEvent)>,
}

impl DomSurface {
    pub fn new(page: Page, sink: EventSink) -> Self {
        let click_sink = Rc::clone(&sink);
        let on_click = Closure::<dyn Fn(MouseEvent)>::new(move |ev: MouseEvent| {
            if let Some(event) = click_event(&ev) {
                click_sink(event);
            }
        });
        let on_keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            sink(Event::Key(key_event(&ev)));
        });

        Self {
            page,
            ids: HandleAllocator::new(),
            styles: HashMap::new(),
            mounted: HashMap::new(),
            key_listeners: BTreeSet::new(),
            on_click,
            on_keydown,
        }
    }

    fn build(&self, node: &Node) -> Result<Element, JsValue> {
        let element = self.page.document.create_element(node.tag())?;
        if !node.classes().is_empty() {
            element.set_class_name(&node.classes().join(" "));
        }
        for (name, value) in node.attrs() {
            element.set_attribute(name, value)?;
        }
        if let Some(region) = node.hit_region() {
            element.set_attribute(HitRegion::ATTRIBUTE, region.as_str())?;
        }
        if let Some(text) = node.text_value() {
            element.set_text_content(Some(text));
        }
        for child in node.children() {
            let child = self.build(child)?;
            element.append_child(&child)?;
        }
        Ok(element)
    }

    fn attach(&self, handle: NodeHandle, root: &Node) -> Result<Element, JsValue> {
        let element = self.build(root)?;
        element.set_attribute(ROOT_ATTRIBUTE, &handle.id().to_string())?;
        element
            .add_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())?;
        self.page.body.append_child(&element)?;
        Ok(element)
    }
}

impl RenderSurface for DomSurface {
    fn inject_style(&mut self, css: &str) -> StyleHandle {
        let handle = StyleHandle::new(self.ids.next_raw());
        let result = self.page.document.create_element("style").and_then(|style| {
            style.set_text_content(Some(css));
            self.page.head.append_child(&style)?;
            Ok(style)
        });
        match result {
            Ok(style) => {
                self.styles.insert(handle, style);
            }
            Err(err) => tracing::warn!(?err, %handle, "failed to inject style"),
        }
        handle
    }

    fn remove_style(&mut self, handle: StyleHandle) {
        if let Some(style) = self.styles.remove(&handle) {
            style.remove();
        }
    }

    fn mount(&mut self, root: Node) -> NodeHandle {
        let handle = NodeHandle::new(self.ids.next_raw());
        match self.attach(handle, &root) {
            Ok(element) => {
                self.mounted.insert(handle, element);
            }
            Err(err) => tracing::warn!(?err, %handle, "failed to mount tree"),
        }
        handle
    }

    fn unmount(&mut self, handle: NodeHandle) {
        let Some(element) = self.mounted.remove(&handle) else {
            return;
        };
        if let Err(err) = element
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, %handle, "failed to detach click listener");
        }
        element.remove();
    }

    fn listen_keys(&mut self) -> ListenerId {
        let id = ListenerId::new(self.ids.next_raw());
        if self.key_listeners.is_empty() {
            let result = self.page.document.add_event_listener_with_callback(
                "keydown",
                self.on_keydown.as_ref().unchecked_ref(),
            );
            if let Err(err) = result {
                tracing::warn!(?err, %id, "failed to attach key listener");
            }
        }
        self.key_listeners.insert(id);
        id
    }

    fn unlisten_keys(&mut self, id: ListenerId) {
        if !self.key_listeners.remove(&id) || !self.key_listeners.is_empty() {
            return;
        }
        let result = self.page.document.remove_event_listener_with_callback(
            "keydown",
            self.on_keydown.as_ref().unchecked_ref(),
        );
        if let Err(err) = result {
            tracing::warn!(?err, %id, "failed to detach key listener");
        }
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        let handles: Vec<NodeHandle> = self.mounted.keys().copied().collect();
        for handle in handles {
            self.unmount(handle);
        }
        for (_, style) in self.styles.drain() {
            style.remove();
        }
        if !self.key_listeners.is_empty() {
            let result = self.page.document.remove_event_listener_with_callback(
                "keydown",
                self.on_keydown.as_ref().unchecked_ref(),
            );
            if let Err(err) = result {
                tracing::warn!(?err, "failed to detach key listener on drop");
            }
        }
    }
}

/// Resolve a DOM click on a mounted root to a click event.
fn click_event(ev: &MouseEvent) -> Option<Event> {
    // Primary button only.
    if ev.button() != 0 {
        return None;
    }
    let root = ev.current_target()?.dyn_into::<Element>().ok()?;
    let id = root.get_attribute(ROOT_ATTRIBUTE)?.parse::<u64>().ok()?;
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let tagged = target
        .closest(&format!("[{}]", HitRegion::ATTRIBUTE))
        .ok()
        .flatten()?;
    let region = HitRegion::from_attr(&tagged.get_attribute(HitRegion::ATTRIBUTE)?)?;
    Some(Event::click(NodeHandle::new(id), region))
}

fn key_event(ev: &KeyboardEvent) -> KeyEvent {
    let mut modifiers = Modifiers::empty();
    modifiers.set(Modifiers::SHIFT, ev.shift_key());
    modifiers.set(Modifiers::CTRL, ev.ctrl_key());
    modifiers.set(Modifiers::ALT, ev.alt_key());
    modifiers.set(Modifiers::META, ev.meta_key());
    let kind = if ev.repeat() {
        KeyEventKind::Repeat
    } else {
        KeyEventKind::Press
    };
    KeyEvent::new(KeyCode::from_dom_key(&ev.key()))
        .with_modifiers(modifiers)
        .with_kind(kind)
}
