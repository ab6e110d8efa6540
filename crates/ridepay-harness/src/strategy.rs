#![forbid(unsafe_code)]

//! Proptest strategies over user and caller actions.

use proptest::prelude::*;
use ridepay_core::event::KeyCode;
use ridepay_core::node::HitRegion;

/// One step applied to a [`Page`](crate::page::Page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Show(String),
    Close,
    Cancel,
    Click(HitRegion),
    Press(KeyCode),
}

pub fn arb_region() -> impl Strategy<Value = HitRegion> {
    prop_oneof![
        Just(HitRegion::Backdrop),
        Just(HitRegion::Content),
        Just(HitRegion::CloseButton),
        Just(HitRegion::ConfirmButton),
    ]
}

pub fn arb_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        4 => Just(KeyCode::Escape),
        1 => Just(KeyCode::Enter),
        1 => Just(KeyCode::Tab),
        1 => any::<char>().prop_map(KeyCode::Char),
    ]
}

pub fn arb_amount() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("1,00 €".to_string()),
        Just("2,50 €".to_string()),
        "[0-9]{1,3},[0-9]{2} €",
        ".{0,12}",
    ]
}

pub fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => arb_amount().prop_map(Action::Show),
        1 => Just(Action::Close),
        1 => Just(Action::Cancel),
        4 => arb_region().prop_map(Action::Click),
        2 => arb_key().prop_map(Action::Press),
    ]
}

pub fn arb_actions(max: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(arb_action(), 0..max)
}
