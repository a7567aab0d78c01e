//! Repetition specifiers that can be bound to fragments.

use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use crate::builder::build;
use crate::error::InvalidArgument;
use crate::fragment::{Fragment, text};

/// How many times the quantified fragment may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    OneOrMore,
    ZeroOrOne,
    ZeroOrMore,
    Exactly(u64),
    AtLeast(u64),
    Between(u64, u64),
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneOrMore => f.write_str("+"),
            Self::ZeroOrOne => f.write_str("?"),
            Self::ZeroOrMore => f.write_str("*"),
            Self::Exactly(n) => write!(f, "{{{n}}}"),
            Self::AtLeast(n) => write!(f, "{{{n},}}"),
            Self::Between(from, to) => write!(f, "{{{from},{to}}}"),
        }
    }
}

/// How the engine should trade off between matching more or fewer repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Greedy,
    Lazy,
    Possessive,
}

impl Mode {
    /// The text appended after the repeat count.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Greedy => "",
            Self::Lazy => "?",
            Self::Possessive => "+",
        }
    }
}

/// A repetition count plus a [`Mode`].
///
/// ```rust
/// use readable_regex::{Quantifier, build};
///
/// let pairs = Quantifier::between(2, 4)?.lazy().apply_text("ab");
/// assert_eq!(build(&[pairs]), "(ab){2,4}?");
/// # Ok::<(), readable_regex::InvalidArgument>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    repeat: Repeat,
    mode: Mode,
}

fn non_negative(count: i64, method: &'static str) -> Result<u64, InvalidArgument> {
    u64::try_from(count).map_err(|_| {
        log::debug!("{method}() rejected negative count {count}");
        InvalidArgument::NegativeCount { method }
    })
}

impl Quantifier {
    fn new(repeat: Repeat) -> Self {
        Self {
            repeat,
            mode: Mode::Greedy,
        }
    }

    pub fn one_or_more() -> Self {
        Self::new(Repeat::OneOrMore)
    }

    pub fn zero_or_one() -> Self {
        Self::new(Repeat::ZeroOrOne)
    }

    pub fn zero_or_more() -> Self {
        Self::new(Repeat::ZeroOrMore)
    }

    /// Between `from` and `to` occurrences inclusive.
    pub fn between(from: i64, to: i64) -> Result<Self, InvalidArgument> {
        if from < 0 || to < 0 {
            log::debug!("between({from}, {to}) rejected negative bound");
            return Err(InvalidArgument::NegativeBound);
        }
        if from > to {
            log::debug!("between({from}, {to}) rejected inverted range");
            return Err(InvalidArgument::InvertedRange { from, to });
        }
        Ok(Self::new(Repeat::Between(from as u64, to as u64)))
    }

    pub fn exactly(count: i64) -> Result<Self, InvalidArgument> {
        Ok(Self::new(Repeat::Exactly(non_negative(count, "exactly")?)))
    }

    pub fn at_least(count: i64) -> Result<Self, InvalidArgument> {
        Ok(Self::new(Repeat::AtLeast(non_negative(count, "atLeast")?)))
    }

    pub fn greedy(self) -> Self {
        self.with_mode(Mode::Greedy)
    }

    pub fn lazy(self) -> Self {
        self.with_mode(Mode::Lazy)
    }

    pub fn possessive(self) -> Self {
        self.with_mode(Mode::Possessive)
    }

    fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// The repetition count, without the mode.
    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Greedy unless a mode selector was called.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Bind this quantifier to a sequence of fragments.
    ///
    /// A single fragment keeps its own grouping need. Several fragments are
    /// concatenated first, and the concatenation is always grouped.
    pub fn apply(self, fragments: &[Fragment]) -> Fragment {
        match fragments {
            [single] => single.quantified(self),
            _ => Fragment::new(build(fragments), true).quantified(self),
        }
    }

    /// Shorthand for applying to [`text`] built from `literal`.
    pub fn apply_text(self, literal: &str) -> Fragment {
        self.apply(&[text(literal)])
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.repeat, self.mode.suffix())
    }
}

/// Parses the textual quantifier forms `+ * ? {n} {n,} {n,m}`, each optionally
/// followed by `?` (lazy) or `+` (possessive).
impl FromStr for Quantifier {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InvalidArgument::BadQuantifier(s.to_string());
        let mut chars = s.chars().peekable();
        let quantifier = match chars.next().ok_or_else(bad)? {
            '+' => Self::one_or_more(),
            '?' => Self::zero_or_one(),
            '*' => Self::zero_or_more(),
            '{' => parse_braced(&mut chars).ok_or_else(bad)??,
            _ => return Err(bad()),
        };
        let quantifier = match chars.next() {
            None => quantifier,
            Some('?') => quantifier.lazy(),
            Some('+') => quantifier.possessive(),
            Some(_) => return Err(bad()),
        };
        if chars.next().is_some() {
            return Err(bad());
        }
        Ok(quantifier)
    }
}

/// Parse the remainder of a `{...}` quantifier (the `{` has been consumed).
///
/// Returns `None` on a syntax error; bound validation is left to the factories.
fn parse_braced(chars: &mut Peekable<Chars<'_>>) -> Option<Result<Quantifier, InvalidArgument>> {
    let from = parse_number(chars)?;
    match chars.next()? {
        '}' => Some(Quantifier::exactly(from)),
        ',' if chars.peek() == Some(&'}') => {
            chars.next();
            Some(Quantifier::at_least(from))
        }
        ',' => {
            let to = parse_number(chars)?;
            (chars.next()? == '}').then(|| Quantifier::between(from, to))
        }
        _ => None,
    }
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<i64> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}
