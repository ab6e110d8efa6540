#![forbid(unsafe_code)]

//! Overlay container: a full-viewport backdrop holding centered content.
//!
//! The overlay root is tagged [`HitRegion::Backdrop`] and the content root
//! [`HitRegion::Content`], so a surface that resolves clicks to the innermost
//! tagged element lets callers tell backdrop clicks from clicks inside the
//! dialog.

use ridepay_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ridepay_core::node::{HitRegion, Node};
use ridepay_core::surface::NodeHandle;

use crate::stylesheet::OVERLAY_CLASS;

/// Overlay action emitted by [`OverlayConfig::action_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    /// The backdrop (outside the content) was clicked.
    BackdropClicked,
    /// Escape was pressed.
    EscapePressed,
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Backdrop configuration (color + opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BackdropConfig {
    /// Backdrop color.
    pub color: Rgb,
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f32,
}

impl BackdropConfig {
    /// Create a new backdrop config.
    pub fn new(color: Rgb, opacity: f32) -> Self {
        Self { color, opacity }
    }

    /// Set backdrop color.
    #[must_use]
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Set backdrop opacity.
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Opacity clamped to `[0.0, 1.0]`; NaN is treated as fully transparent.
    pub fn effective_opacity(&self) -> f32 {
        if self.opacity.is_nan() {
            0.0
        } else {
            self.opacity.clamp(0.0, 1.0)
        }
    }

    /// CSS `rgba()` value of the tinted backdrop.
    pub fn to_css(&self) -> String {
        let Rgb { r, g, b } = self.color;
        format!("rgba({r}, {g}, {b}, {})", self.effective_opacity())
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            color: Rgb::new(0, 0, 0),
            opacity: 0.5,
        }
    }
}

/// Default stacking order of the overlay.
pub const DEFAULT_Z_INDEX: i32 = 10_000;

/// Overlay configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OverlayConfig {
    pub backdrop: BackdropConfig,
    pub close_on_backdrop: bool,
    pub close_on_escape: bool,
    pub z_index: i32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            backdrop: BackdropConfig::default(),
            close_on_backdrop: true,
            close_on_escape: true,
            z_index: DEFAULT_Z_INDEX,
        }
    }
}

impl OverlayConfig {
    #[must_use]
    pub fn backdrop(mut self, backdrop: BackdropConfig) -> Self {
        self.backdrop = backdrop;
        self
    }

    #[must_use]
    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }

    #[must_use]
    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Classify an event against the overlay mounted at `root`.
    ///
    /// Clicks delivered to another root are ignored, as are clicks inside the
    /// content. Only key presses count; releases and auto-repeat do not.
    pub fn action_for(&self, event: &Event, root: NodeHandle) -> Option<OverlayAction> {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Escape,
                kind: KeyEventKind::Press,
                ..
            }) if self.close_on_escape => Some(OverlayAction::EscapePressed),
            Event::Click(click)
                if self.close_on_backdrop
                    && click.root == root
                    && click.target == HitRegion::Backdrop =>
            {
                Some(OverlayAction::BackdropClicked)
            }
            _ => None,
        }
    }
}

/// Overlay builder wrapping a content node.
#[derive(Debug, Clone)]
pub struct Overlay {
    content: Node,
    config: OverlayConfig,
}

impl Overlay {
    /// Create a new overlay with content.
    pub fn new(content: Node) -> Self {
        Self {
            content,
            config: OverlayConfig::default(),
        }
    }

    /// Set overlay configuration.
    #[must_use]
    pub fn config(mut self, config: OverlayConfig) -> Self {
        self.config = config;
        self
    }

    /// Inline style of the overlay root.
    pub fn root_style(&self) -> String {
        format!(
            "z-index: {}; background-color: {};",
            self.config.z_index,
            self.config.backdrop.to_css()
        )
    }

    /// Build the overlay tree: backdrop root with the content as only child.
    pub fn into_node(self) -> Node {
        let style = self.root_style();
        Node::new("div")
            .class(OVERLAY_CLASS)
            .style(style)
            .hit(HitRegion::Backdrop)
            .child(self.content.hit(HitRegion::Content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridepay_core::event::Modifiers;

    const ROOT: NodeHandle = NodeHandle::new(4);

    #[test]
    fn tree_shape() {
        let node = Overlay::new(Node::new("section").text("hi")).into_node();
        assert_eq!(node.hit_region(), Some(HitRegion::Backdrop));
        assert!(node.has_class(OVERLAY_CLASS));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].hit_region(), Some(HitRegion::Content));
        assert_eq!(node.children()[0].text_value(), Some("hi"));
    }

    #[test]
    fn root_style_uses_config() {
        let overlay = Overlay::new(Node::new("div")).config(
            OverlayConfig::default()
                .z_index(42)
                .backdrop(BackdropConfig::new(Rgb::new(10, 20, 30), 0.25)),
        );
        assert_eq!(
            overlay.root_style(),
            "z-index: 42; background-color: rgba(10, 20, 30, 0.25);"
        );
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(BackdropConfig::default().opacity(3.0).effective_opacity(), 1.0);
        assert_eq!(BackdropConfig::default().opacity(-1.0).effective_opacity(), 0.0);
        assert_eq!(
            BackdropConfig::default().opacity(f32::NAN).effective_opacity(),
            0.0
        );
        assert_eq!(BackdropConfig::default().to_css(), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn escape_press_is_an_action() {
        let config = OverlayConfig::default();
        assert_eq!(
            config.action_for(&Event::escape(), ROOT),
            Some(OverlayAction::EscapePressed)
        );
        let shifted = Event::Key(KeyEvent::new(KeyCode::Escape).with_modifiers(Modifiers::SHIFT));
        assert_eq!(
            config.action_for(&shifted, ROOT),
            Some(OverlayAction::EscapePressed)
        );
    }

    #[test]
    fn escape_release_and_repeat_ignored() {
        let config = OverlayConfig::default();
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let event = Event::Key(KeyEvent::new(KeyCode::Escape).with_kind(kind));
            assert_eq!(config.action_for(&event, ROOT), None);
        }
        assert_eq!(config.action_for(&Event::key(KeyCode::Enter), ROOT), None);
    }

    #[test]
    fn backdrop_click_requires_matching_root() {
        let config = OverlayConfig::default();
        let hit = Event::click(ROOT, HitRegion::Backdrop);
        assert_eq!(
            config.action_for(&hit, ROOT),
            Some(OverlayAction::BackdropClicked)
        );
        let stale = Event::click(NodeHandle::new(1), HitRegion::Backdrop);
        assert_eq!(config.action_for(&stale, ROOT), None);
        let inside = Event::click(ROOT, HitRegion::Content);
        assert_eq!(config.action_for(&inside, ROOT), None);
    }

    #[test]
    fn disabled_paths() {
        let config = OverlayConfig::default()
            .close_on_backdrop(false)
            .close_on_escape(false);
        assert_eq!(config.action_for(&Event::escape(), ROOT), None);
        assert_eq!(
            config.action_for(&Event::click(ROOT, HitRegion::Backdrop), ROOT),
            None
        );
    }
}
