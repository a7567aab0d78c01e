//! The composable unit of pattern text and every factory that produces one.
//!
//! Each factory fixes whether its output must be wrapped in a group before a
//! quantifier can be appended:
//!
//! | Factory                                   | Needs grouping            |
//! |-------------------------------------------|---------------------------|
//! | [`text`] of one character                 | no                        |
//! | [`text`] of several characters            | yes                       |
//! | [`any_one_of`], [`any_character_except`]  | no                        |
//! | groups and look-arounds                   | no                        |
//! | [`back_reference`]                        | no                        |
//! | escape sequences and [`anything`]         | no                        |
//! | [`or`] with several operands              | yes                       |
//! | [`or`] with one operand                   | same as the operand       |

use std::fmt;

use itertools::Itertools;

use crate::builder::build;
use crate::class_part::ClassPart;
use crate::error::InvalidArgument;
use crate::escape::{ESCAPE_MARKER, escape_special};
use crate::quantifier::Quantifier;

/// Characters escaped in literal text, regardless of position.
const TEXT_SPECIAL: [char; 13] = [
    ESCAPE_MARKER,
    '[',
    '^',
    '$',
    '.',
    '|',
    '?',
    '*',
    '+',
    '(',
    ')',
    '{',
    '}',
];

/// An immutable piece of pattern text.
///
/// Rendering (via [`Display`](fmt::Display)) appends the bound quantifier, if
/// any, wrapping the body in `(...)` first when the body is not a single atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    body: String,
    needs_grouping: bool,
    quantifier: Option<Quantifier>,
}

impl Fragment {
    pub(crate) fn new(body: String, needs_grouping: bool) -> Self {
        Self {
            body,
            needs_grouping,
            quantifier: None,
        }
    }

    fn atom(body: impl Into<String>) -> Self {
        Self::new(body.into(), false)
    }

    /// The rendered body without the quantifier or the group it may add.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the body must be wrapped in `(...)` before a quantifier suffix.
    pub fn needs_grouping_for_quantifier(&self) -> bool {
        self.needs_grouping
    }

    pub fn quantifier(&self) -> Option<Quantifier> {
        self.quantifier
    }

    /// A copy of this fragment with `quantifier` bound to it.
    ///
    /// An already quantified fragment becomes the grouped body of the new one,
    /// so `x+` bound to `{2}` renders `(x+){2}`. This departs from plain
    /// inheritance of the grouping need, which would give the malformed `x+{2}`.
    pub(crate) fn quantified(&self, quantifier: Quantifier) -> Self {
        match self.quantifier {
            None => Self {
                quantifier: Some(quantifier),
                ..self.clone()
            },
            Some(_) => Self {
                body: self.to_string(),
                needs_grouping: true,
                quantifier: Some(quantifier),
            },
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantifier {
            None => f.write_str(&self.body),
            Some(q) if self.needs_grouping => write!(f, "({}){q}", self.body),
            Some(q) => write!(f, "{}{q}", self.body),
        }
    }
}

/// Literal text; every metacharacter is escaped.
pub fn text(literal: &str) -> Fragment {
    Fragment::new(
        escape_special(literal, &TEXT_SPECIAL),
        literal.chars().count() > 1,
    )
}

fn class(negated: bool, parts: &[ClassPart]) -> Fragment {
    // Empty lists render nothing, so the first character comes from the first non-empty part.
    let first = parts.iter().position(|part| !part.is_empty()).unwrap_or(0);
    let last = parts.len().saturating_sub(1);
    let body = parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let part = if i == first {
                part.with_first_flag()
            } else {
                part.clone()
            };
            if i == last { part.with_last_flag() } else { part }
        })
        .join("");
    Fragment::atom(if negated {
        format!("[^{body}]")
    } else {
        format!("[{body}]")
    })
}

/// A character class matching any one character described by `parts`.
pub fn any_one_of(parts: &[ClassPart]) -> Fragment {
    class(false, parts)
}

/// A negated character class matching any character not described by `parts`.
pub fn any_character_except(parts: &[ClassPart]) -> Fragment {
    class(true, parts)
}

/// `[0-9]`
pub fn any_digit() -> Fragment {
    any_one_of(&[ClassPart::range('0', '9')])
}

/// `[a-zA-Z]`
pub fn any_letter() -> Fragment {
    any_one_of(&[ClassPart::range('a', 'z'), ClassPart::range('A', 'Z')])
}

/// The self-delimited constructs that enclose a sequence of fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Capturing,
    NonCapturing,
    Independent,
    PositiveLookAhead,
    NegativeLookAhead,
    PositiveLookBehind,
    NegativeLookBehind,
}

impl GroupKind {
    fn opener(self) -> &'static str {
        match self {
            Self::Capturing => "(",
            Self::NonCapturing => "(?:",
            Self::Independent => "(?>",
            Self::PositiveLookAhead => "(?=",
            Self::NegativeLookAhead => "(?!",
            Self::PositiveLookBehind => "(?<=",
            Self::NegativeLookBehind => "(?<!",
        }
    }
}

/// Enclose the concatenation of `fragments` in the delimiters for `kind`.
pub fn group(kind: GroupKind, fragments: &[Fragment]) -> Fragment {
    Fragment::atom(format!("{}{})", kind.opener(), build(fragments)))
}

pub fn group_of(fragments: &[Fragment]) -> Fragment {
    group(GroupKind::Capturing, fragments)
}

pub fn non_capturing_group(fragments: &[Fragment]) -> Fragment {
    group(GroupKind::NonCapturing, fragments)
}

pub fn independent_non_capturing_group(fragments: &[Fragment]) -> Fragment {
    group(GroupKind::Independent, fragments)
}

pub fn positive_look_ahead(fragments: &[Fragment]) -> Fragment {
    group(GroupKind::PositiveLookAhead, fragments)
}

pub fn negative_look_ahead(fragments: &[Fragment]) -> Fragment {
    group(GroupKind::NegativeLookAhead, fragments)
}

pub fn positive_look_behind(fragments: &[Fragment]) -> Fragment {
    group(GroupKind::PositiveLookBehind, fragments)
}

pub fn negative_look_behind(fragments: &[Fragment]) -> Fragment {
    group(GroupKind::NegativeLookBehind, fragments)
}

/// Refer back to the capturing group with the given one-based number.
pub fn back_reference(group_number: u32) -> Fragment {
    Fragment::atom(format!("{ESCAPE_MARKER}{group_number}"))
}

/// Match exactly one of `fragments`.
///
/// A single operand is returned as is; no `|` and no extra grouping.
pub fn or(fragments: &[Fragment]) -> Fragment {
    match fragments {
        [] => Fragment::atom(""),
        [single] => single.clone(),
        _ => Fragment::new(fragments.iter().join("|"), true),
    }
}

/// Alias for [`or`].
pub fn one_of(fragments: &[Fragment]) -> Fragment {
    or(fragments)
}

/// `.*`
pub fn anything() -> Fragment {
    Fragment::atom(".*")
}

pub fn tab() -> Fragment {
    Fragment::atom(r"\t")
}

pub fn newline() -> Fragment {
    Fragment::atom(r"\n")
}

pub fn carriage_return() -> Fragment {
    Fragment::atom(r"\r")
}

pub fn form_feed() -> Fragment {
    Fragment::atom(r"\f")
}

pub fn alert_character() -> Fragment {
    Fragment::atom(r"\a")
}

pub fn escape_character() -> Fragment {
    Fragment::atom(r"\e")
}

fn is_octal_literal(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let all_octal = bytes.iter().all(|b| (b'0'..=b'7').contains(b));
    match bytes.len() {
        1 | 2 => all_octal,
        // Three digits may not exceed 0o277.
        3 => all_octal && bytes[0] <= b'2',
        _ => false,
    }
}

/// A character given by one to three octal digits, at most `277`.
pub fn octal_character(digits: &str) -> Result<Fragment, InvalidArgument> {
    if !is_octal_literal(digits) {
        log::debug!("rejected octal literal {digits:?}");
        return Err(InvalidArgument::BadOctal);
    }
    Ok(Fragment::atom(format!(r"\0{digits}")))
}

fn is_hex_of_len(digits: &str, lens: &[usize]) -> bool {
    lens.contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A character given by exactly two or four hex digits.
pub fn hex_character(digits: &str) -> Result<Fragment, InvalidArgument> {
    if !is_hex_of_len(digits, &[2, 4]) {
        log::debug!("rejected hex literal {digits:?}");
        return Err(InvalidArgument::BadHex);
    }
    Ok(Fragment::atom(format!(r"\x{}", digits.to_ascii_uppercase())))
}

/// A character given by exactly four hex digits.
pub fn unicode_character(digits: &str) -> Result<Fragment, InvalidArgument> {
    if !is_hex_of_len(digits, &[4]) {
        log::debug!("rejected unicode literal {digits:?}");
        return Err(InvalidArgument::BadUnicode);
    }
    Ok(Fragment::atom(format!(r"\u{}", digits.to_ascii_uppercase())))
}

/// The control character corresponding to `letter`.
pub fn control_character(letter: char) -> Result<Fragment, InvalidArgument> {
    if !letter.is_alphabetic() {
        log::debug!("rejected control character {letter:?}");
        return Err(InvalidArgument::NonLetterControl);
    }
    let mut upper = letter.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => letter,
    };
    Ok(Fragment::atom(format!(r"\c{upper}")))
}
