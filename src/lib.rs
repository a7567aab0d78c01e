//! Compose regular expression text from readable fragments.
//!
//! Fragments are built bottom-up; escaping of metacharacters and the
//! parentheses a quantifier needs are handled automatically.
//!
//! # Example
//!
//! ```rust
//! use readable_regex::{ClassPart, Quantifier, any_one_of, build, text};
//!
//! let word = any_one_of(&[
//!     ClassPart::characters(['_', '-']),
//!     ClassPart::range('a', 'z'),
//! ]);
//!
//! let pattern = build(&[
//!     Quantifier::one_or_more().apply(&[word.clone()]),
//!     Quantifier::zero_or_more().apply(&[text("."), Quantifier::one_or_more().apply(&[word])]),
//! ]);
//!
//! assert_eq!(pattern, r"[_\-a-z]+(\.[_\-a-z]+)*");
//! ```

mod builder;
mod class_part;
mod error;
mod escape;
pub mod escape_names;
mod fragment;
mod quantifier;

pub use builder::{RegexBuilder, build};
pub use class_part::{ClassPart, ClassPartKind};
pub use error::InvalidArgument;
pub use escape::{ESCAPE_MARKER, escape_char, escape_special};
pub use fragment::{
    Fragment, GroupKind, alert_character, any_character_except, any_digit, any_letter,
    any_one_of, anything, back_reference, carriage_return, control_character, escape_character,
    form_feed, group, group_of, hex_character, independent_non_capturing_group,
    negative_look_ahead, negative_look_behind, newline, non_capturing_group, octal_character,
    one_of, or, positive_look_ahead, positive_look_behind, tab, text, unicode_character,
};
pub use quantifier::{Mode, Quantifier, Repeat};
