//! Parts of a bracketed character class.
//!
//! A class such as `[_\-A-Za-z]` is assembled from an ordered list of
//! [`ClassPart`]s, each either a list of characters or a range. Which
//! characters need escaping depends on where the part ends up inside its
//! class, so the position flags are applied by the enclosing class factory
//! and never by the caller.

use std::fmt;

use crate::escape::{ESCAPE_MARKER, escape_char};

/// Escape set for the very first character of a class, where `-` is literal
/// but `^` would negate the class.
const CLASS_FIRST_SPECIAL: [char; 3] = [ESCAPE_MARKER, ']', '^'];

/// Escape set everywhere else in a class.
const CLASS_DEFAULT_SPECIAL: [char; 3] = [ESCAPE_MARKER, ']', '-'];

/// The two shapes a [`ClassPart`] can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassPartKind {
    /// Literal characters, rendered in order.
    List(Vec<char>),
    /// Every character from `from` to `to` inclusive. `from <= to` is up to the caller.
    Range { from: char, to: char },
}

/// One contributor to a character class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPart {
    kind: ClassPartKind,
    first_in_class: bool,
    last_in_class: bool,
}

impl ClassPart {
    /// A part matching any of the given characters.
    pub fn characters(chars: impl IntoIterator<Item = char>) -> Self {
        Self::new(ClassPartKind::List(chars.into_iter().collect()))
    }

    /// A part matching any character between `from` and `to` inclusive.
    pub fn range(from: char, to: char) -> Self {
        Self::new(ClassPartKind::Range { from, to })
    }

    fn new(kind: ClassPartKind) -> Self {
        Self {
            kind,
            first_in_class: false,
            last_in_class: false,
        }
    }

    /// True for a list part with no characters; such a part renders nothing.
    pub fn is_empty(&self) -> bool {
        matches!(&self.kind, ClassPartKind::List(chars) if chars.is_empty())
    }

    /// Whether this part is a list or a range, and of what.
    pub fn kind(&self) -> &ClassPartKind {
        &self.kind
    }

    /// Set only by the enclosing class factory.
    pub fn is_first_in_class(&self) -> bool {
        self.first_in_class
    }

    /// Set only by the enclosing class factory. Does not change escaping.
    pub fn is_last_in_class(&self) -> bool {
        self.last_in_class
    }

    /// Copy of this part marked as the first part of its class.
    pub fn with_first_flag(&self) -> Self {
        Self {
            first_in_class: true,
            ..self.clone()
        }
    }

    /// Copy of this part marked as the last part of its class.
    pub fn with_last_flag(&self) -> Self {
        Self {
            last_in_class: true,
            ..self.clone()
        }
    }
}

fn escape_class_char(ch: char, first_in_class: bool) -> String {
    if first_in_class {
        escape_char(ch, &CLASS_FIRST_SPECIAL)
    } else {
        escape_char(ch, &CLASS_DEFAULT_SPECIAL)
    }
}

impl fmt::Display for ClassPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ClassPartKind::List(chars) => {
                for (i, &ch) in chars.iter().enumerate() {
                    f.write_str(&escape_class_char(ch, i == 0 && self.first_in_class))?;
                }
                Ok(())
            }
            // The upper bound never consults `last_in_class`.
            ClassPartKind::Range { from, to } => write!(
                f,
                "{}-{}",
                escape_class_char(*from, self.first_in_class),
                escape_class_char(*to, false)
            ),
        }
    }
}
