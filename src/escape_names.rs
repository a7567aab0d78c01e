//! Lookup of the fixed escape-sequence fragments by name.

use phf::{Map, phf_map};

use crate::fragment::{
    Fragment, alert_character, any_digit, any_letter, anything, carriage_return,
    escape_character, form_feed, newline, tab,
};

/// Names accepted by [`named_fragment`]. Please keep names sorted alphabetically.
const NAME_TO_FRAGMENT_MAP: Map<&'static str, fn() -> Fragment> = phf_map! {
    "alert" => alert_character,
    "anything" => anything,
    "carriage-return" => carriage_return,
    "digit" => any_digit,
    "escape" => escape_character,
    "form-feed" => form_feed,
    "letter" => any_letter,
    "newline" => newline,
    "tab" => tab,
};

/// The fragment registered under `name`, ignoring case.
pub fn named_fragment(name: &str) -> Option<Fragment> {
    NAME_TO_FRAGMENT_MAP
        .get(name.to_ascii_lowercase().as_str())
        .map(|make| make())
}

/// All registered names, sorted.
pub fn fragment_names() -> Vec<&'static str> {
    let mut names: Vec<_> = NAME_TO_FRAGMENT_MAP.keys().copied().collect();
    names.sort_unstable();
    names
}
