#![no_main]

use libfuzzer_sys::fuzz_target;
use ridepay_core::node::Node;
use ridepay_widgets::modal::Overlay;
use ridepay_web::parse_config;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = parse_config(Some(json)) {
        let opacity = config.overlay.backdrop.effective_opacity();
        assert!((0.0..=1.0).contains(&opacity));
        let root = Overlay::new(Node::new("div"))
            .config(config.overlay)
            .into_node();
        assert!(root.get_attr("style").is_some());
    }
});
