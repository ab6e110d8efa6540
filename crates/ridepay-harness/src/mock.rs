#![forbid(unsafe_code)]

//! In-memory render surface.
//!
//! [`MockSurface`] is a cheap handle to shared state: clone it before handing
//! it to a controller and keep the clone to inspect what was rendered. Every
//! surface call is appended to an operation log.
//!
//! Event synthesis follows what a page would deliver: [`MockSurface::click`]
//! only yields an event when a mounted tree contains the target region, and
//! [`MockSurface::key`] only when a key listener is registered.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use ridepay_core::event::{Event, KeyCode, KeyEvent};
use ridepay_core::node::{HitRegion, Node};
use ridepay_core::surface::{
    HandleAllocator, ListenerId, NodeHandle, RenderSurface, StyleHandle,
};

/// A recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    InjectStyle(StyleHandle),
    RemoveStyle(StyleHandle),
    Mount(NodeHandle),
    Unmount(NodeHandle),
    Listen(ListenerId),
    Unlisten(ListenerId),
}

#[derive(Debug, Default)]
struct MockState {
    ids: HandleAllocator,
    styles: BTreeMap<StyleHandle, String>,
    mounted: BTreeMap<NodeHandle, Node>,
    listeners: BTreeSet<ListenerId>,
    ops: Vec<SurfaceOp>,
}

/// Shared in-memory render surface.
#[derive(Debug, Clone, Default)]
pub struct MockSurface {
    state: Rc<RefCell<MockState>>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently mounted roots, oldest first.
    pub fn mounted_roots(&self) -> Vec<NodeHandle> {
        self.state.borrow().mounted.keys().copied().collect()
    }

    pub fn mounted_count(&self) -> usize {
        self.state.borrow().mounted.len()
    }

    /// Clone of the tree mounted at `handle`.
    pub fn tree(&self, handle: NodeHandle) -> Option<Node> {
        self.state.borrow().mounted.get(&handle).cloned()
    }

    /// The most recently mounted root and its tree.
    pub fn top(&self) -> Option<(NodeHandle, Node)> {
        self.state
            .borrow()
            .mounted
            .iter()
            .next_back()
            .map(|(h, n)| (*h, n.clone()))
    }

    pub fn style_count(&self) -> usize {
        self.state.borrow().styles.len()
    }

    /// Contents of all injected style blocks, in injection order.
    pub fn styles(&self) -> Vec<String> {
        self.state.borrow().styles.values().cloned().collect()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// All surface calls so far.
    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.state.borrow().ops.clone()
    }

    pub fn clear_ops(&self) {
        self.state.borrow_mut().ops.clear();
    }

    /// A click on `region` of the topmost mounted tree containing it.
    pub fn click(&self, region: HitRegion) -> Option<Event> {
        let state = self.state.borrow();
        state
            .mounted
            .iter()
            .rev()
            .find(|(_, node)| node.find_hit(region).is_some())
            .map(|(handle, _)| Event::click(*handle, region))
    }

    /// A key press, delivered only while a key listener is registered.
    pub fn key(&self, code: KeyCode) -> Option<Event> {
        self.key_event(KeyEvent::new(code))
    }

    pub fn key_event(&self, key: KeyEvent) -> Option<Event> {
        if self.state.borrow().listeners.is_empty() {
            None
        } else {
            Some(Event::Key(key))
        }
    }
}

impl RenderSurface for MockSurface {
    fn inject_style(&mut self, css: &str) -> StyleHandle {
        let mut state = self.state.borrow_mut();
        let handle = StyleHandle::new(state.ids.next_raw());
        state.styles.insert(handle, css.to_string());
        state.ops.push(SurfaceOp::InjectStyle(handle));
        handle
    }

    fn remove_style(&mut self, handle: StyleHandle) {
        let mut state = self.state.borrow_mut();
        if state.styles.remove(&handle).is_none() {
            tracing::trace!(%handle, "remove_style: unknown handle");
        }
        state.ops.push(SurfaceOp::RemoveStyle(handle));
    }

    fn mount(&mut self, root: Node) -> NodeHandle {
        let mut state = self.state.borrow_mut();
        let handle = NodeHandle::new(state.ids.next_raw());
        state.mounted.insert(handle, root);
        state.ops.push(SurfaceOp::Mount(handle));
        handle
    }

    fn unmount(&mut self, handle: NodeHandle) {
        let mut state = self.state.borrow_mut();
        if state.mounted.remove(&handle).is_none() {
            tracing::trace!(%handle, "unmount: unknown handle");
        }
        state.ops.push(SurfaceOp::Unmount(handle));
    }

    fn listen_keys(&mut self) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId::new(state.ids.next_raw());
        state.listeners.insert(id);
        state.ops.push(SurfaceOp::Listen(id));
        id
    }

    fn unlisten_keys(&mut self, id: ListenerId) {
        let mut state = self.state.borrow_mut();
        if !state.listeners.remove(&id) {
            tracing::trace!(%id, "unlisten_keys: unknown listener");
        }
        state.ops.push(SurfaceOp::Unlisten(id));
    }
}
