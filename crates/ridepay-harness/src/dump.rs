#![forbid(unsafe_code)]

//! Plain-text outline of an element tree, for readable assertions.
//!
//! One line per node, indented two spaces per level:
//! `tag.class1.class2 [hit=region] name="value" "text"`.

use std::fmt::Write as _;

use ridepay_core::node::Node;

/// Render `node` and its descendants as an outline.
pub fn dump(node: &Node) -> String {
    let mut out = String::new();
    dump_into(&mut out, node, 0);
    out
}

fn dump_into(out: &mut String, node: &Node, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(node.tag());
    for class in node.classes() {
        out.push('.');
        out.push_str(class);
    }
    if let Some(region) = node.hit_region() {
        let _ = write!(out, " [hit={region}]");
    }
    for (name, value) in node.attrs() {
        let _ = write!(out, " {name}={value:?}");
    }
    if let Some(text) = node.text_value() {
        let _ = write!(out, " {text:?}");
    }
    out.push('\n');
    for child in node.children() {
        dump_into(out, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridepay_core::node::HitRegion;

    #[test]
    fn outline_format() {
        let node = Node::new("div")
            .class("a")
            .class("b")
            .hit(HitRegion::Backdrop)
            .attr("role", "dialog")
            .child(Node::new("p").text("hi"));
        assert_eq!(
            dump(&node),
            "div.a.b [hit=backdrop] role=\"dialog\"\n  p \"hi\"\n"
        );
    }
}
