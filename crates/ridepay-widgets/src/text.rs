#![forbid(unsafe_code)]

//! User-visible strings of the payment dialog.
//!
//! Labels may contain `{name}` tokens. Substitution is a single pass: a token
//! with no matching argument is left as-is, and substituted values are never
//! re-scanned.

/// Token replaced by the display amount in [`DialogText::confirm_label`].
pub const AMOUNT_TOKEN: &str = "amount";

/// Dialog strings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DialogText {
    /// Heading of the dialog.
    pub title: String,
    /// Informational notice shown under the amount.
    pub notice: String,
    /// Confirm action label template.
    pub confirm_label: String,
    /// Accessible label of the close glyph.
    pub close_label: String,
}

impl Default for DialogText {
    fn default() -> Self {
        Self {
            title: "Confirm your payment".to_string(),
            notice: "Test mode: this is a simulated payment. No money will be charged."
                .to_string(),
            confirm_label: "Pay {amount}".to_string(),
            close_label: "Close".to_string(),
        }
    }
}

impl DialogText {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = notice.into();
        self
    }

    #[must_use]
    pub fn confirm_label(mut self, template: impl Into<String>) -> Self {
        self.confirm_label = template.into();
        self
    }

    #[must_use]
    pub fn close_label(mut self, label: impl Into<String>) -> Self {
        self.close_label = label.into();
        self
    }

    /// Confirm label with `{amount}` substituted.
    pub fn confirm_label_for(&self, amount: &str) -> String {
        interpolate(&self.confirm_label, &[(AMOUNT_TOKEN, amount)])
    }
}

/// Replace `{name}` tokens in `template` with the matching value from `args`.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // Unterminated token: copy the remainder verbatim.
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_confirm_label() {
        let text = DialogText::default();
        assert_eq!(text.confirm_label_for("1,00 €"), "Pay 1,00 €");
    }

    #[test]
    fn unknown_token_is_kept() {
        assert_eq!(
            interpolate("Pay {amount} to {driver}", &[("amount", "3 €")]),
            "Pay 3 € to {driver}"
        );
    }

    #[test]
    fn unterminated_token_is_kept() {
        assert_eq!(interpolate("Pay {amount", &[("amount", "3 €")]), "Pay {amount");
    }

    #[test]
    fn substitution_is_single_pass() {
        assert_eq!(
            interpolate("{amount}", &[("amount", "{amount}")]),
            "{amount}"
        );
        assert_eq!(
            interpolate("{a}{b}", &[("a", "{b}"), ("b", "x")]),
            "{b}x"
        );
    }

    #[test]
    fn builder_overrides() {
        let text = DialogText::default()
            .title("Paiement")
            .confirm_label("Payer {amount}")
            .close_label("Fermer");
        assert_eq!(text.title, "Paiement");
        assert_eq!(text.confirm_label_for("2,50 €"), "Payer 2,50 €");
        assert_eq!(text.close_label, "Fermer");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let text: DialogText = serde_json::from_str(r#"{"title":"Paiement"}"#).unwrap();
        assert_eq!(text.title, "Paiement");
        assert_eq!(text.confirm_label, DialogText::default().confirm_label);
    }

    proptest! {
        #[test]
        fn templates_without_braces_are_unchanged(s in "[^{}]*") {
            prop_assert_eq!(interpolate(&s, &[("amount", "x")]), s);
        }
    }
}
