#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ridepay_core::event::KeyCode;
use ridepay_core::node::HitRegion;
use ridepay_harness::Page;

#[derive(Debug, Arbitrary)]
enum Step {
    Show(String),
    Close,
    Cancel,
    Confirm,
    CloseButton,
    Backdrop,
    Body,
    Escape,
    Key(char),
}

fuzz_target!(|steps: Vec<Step>| {
    let mut page = Page::new();
    let mut shows = 0usize;
    for step in &steps {
        match step {
            Step::Show(amount) => {
                shows += 1;
                page.show(&format!("req{shows}"), amount);
            }
            Step::Close => page.dialog.close(),
            Step::Cancel => {
                page.dialog.cancel();
            }
            Step::Confirm => {
                page.click(HitRegion::ConfirmButton);
            }
            Step::CloseButton => {
                page.click(HitRegion::CloseButton);
            }
            Step::Backdrop => {
                page.click(HitRegion::Backdrop);
            }
            Step::Body => {
                page.click(HitRegion::Content);
            }
            Step::Escape => {
                page.press(KeyCode::Escape);
            }
            Step::Key(c) => {
                page.press(KeyCode::Char(*c));
            }
        }

        let open = usize::from(page.dialog.is_open());
        assert_eq!(page.surface.mounted_count(), open);
        assert_eq!(page.surface.listener_count(), open);
        assert!(page.surface.style_count() <= 1);
    }
    assert!(page.log.len() <= shows);
});
