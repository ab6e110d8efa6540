#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ridepay_widgets::DialogText;
use ridepay_widgets::text::interpolate;

#[derive(Debug, Arbitrary)]
struct Input {
    template: String,
    amount: String,
}

fuzz_target!(|input: Input| {
    let label = DialogText::default()
        .confirm_label(input.template.as_str())
        .confirm_label_for(&input.amount);

    if !input.template.contains('{') {
        assert_eq!(label, input.template);
    }
    // Substituted values are never re-scanned.
    assert_eq!(interpolate("{amount}", &[("amount", &input.amount)]), input.amount);
});
