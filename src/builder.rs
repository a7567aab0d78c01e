//! Final assembly of fragments into pattern text.

use std::fmt;

use itertools::Itertools;

use crate::fragment::Fragment;

/// An ordered sequence of fragments that renders as their concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegexBuilder {
    fragments: Vec<Fragment>,
}

impl RegexBuilder {
    /// A builder over `fragments`, kept in order.
    pub fn new(fragments: impl IntoIterator<Item = Fragment>) -> Self {
        Self {
            fragments: fragments.into_iter().collect(),
        }
    }

    /// Append one fragment; returns `self` for chaining.
    pub fn push(&mut self, fragment: Fragment) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    /// The fragments in the order they will be rendered.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

impl fmt::Display for RegexBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&build(&self.fragments))
    }
}

/// Concatenate the rendered text of `fragments`, in order, with no separator.
pub fn build(fragments: &[Fragment]) -> String {
    let pattern = fragments.iter().join("");
    log::trace!("built {pattern:?} from {} fragments", fragments.len());
    pattern
}
