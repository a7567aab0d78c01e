use readable_regex::*;

fn chars(cs: &[char]) -> ClassPart {
    ClassPart::characters(cs.iter().copied())
}

/// The three shapes every quantifier is checked against: one character,
/// multi-character text, and a concatenation of several fragments.
fn check_quantifier(q: Quantifier, suffix: &str) {
    assert_eq!(build(&[q.apply_text("x")]), format!("x{suffix}"));
    assert_eq!(build(&[q.apply(&[text("xyz")])]), format!("(xyz){suffix}"));
    assert_eq!(
        build(&[q.apply(&[any_digit(), text("xyz"), anything()])]),
        format!("([0-9]xyz.*){suffix}")
    );
}

fn check_modes(q: Quantifier, base: &str) {
    check_quantifier(q, base);
    check_quantifier(q.greedy(), base);
    check_quantifier(q.lazy(), &format!("{base}?"));
    check_quantifier(q.possessive(), &format!("{base}+"));
}

#[test]
fn one_or_more() {
    check_modes(Quantifier::one_or_more(), "+");
}

#[test]
fn zero_or_more() {
    check_modes(Quantifier::zero_or_more(), "*");
}

#[test]
fn zero_or_one() {
    check_modes(Quantifier::zero_or_one(), "?");
}

#[test]
fn between() {
    check_modes(Quantifier::between(2, 4).unwrap(), "{2,4}");
}

#[test]
fn exactly() {
    check_modes(Quantifier::exactly(4).unwrap(), "{4}");
}

#[test]
fn at_least() {
    check_modes(Quantifier::at_least(4).unwrap(), "{4,}");
}

#[test]
fn alternation_with_quantifier() {
    let q = Quantifier::exactly(4).unwrap();
    assert_eq!(
        build(&[q.apply(&[or(&[text("ABC"), text("D"), text("E")])])]),
        "(ABC|D|E){4}"
    );
    assert_eq!(build(&[q.apply(&[or(&[text("A")])])]), "A{4}");
    assert_eq!(build(&[q.apply(&[or(&[text("ABC")])])]), "(ABC){4}");
}

#[test]
fn groups_are_not_regrouped() {
    let q = Quantifier::one_or_more();
    assert_eq!(build(&[q.apply(&[group_of(&[text("ab")])])]), "(ab)+");
    assert_eq!(build(&[q.apply(&[non_capturing_group(&[text("ab")])])]), "(?:ab)+");
    assert_eq!(build(&[q.apply(&[any_letter()])]), "[a-zA-Z]+");
}

#[test]
fn zero_fragments_quantified_is_an_empty_group() {
    assert_eq!(Quantifier::one_or_more().apply(&[]).to_string(), "()+");
}

#[test]
fn escape_sequences_between_text() {
    assert_eq!(build(&[text("A"), tab(), tab(), text("B")]), r"A\t\tB");
    assert_eq!(build(&[text("A"), newline(), newline(), text("B")]), r"A\n\nB");
    assert_eq!(build(&[text("A"), back_reference(1), back_reference(2), text("B")]), r"A\1\2B");
}

#[test]
fn caret_in_multi_part_classes() {
    let parts = [
        chars(&['^', 'a', 'b']),
        chars(&['x', 'y']),
        ClassPart::range('0', '9'),
    ];
    assert_eq!(build(&[any_one_of(&parts)]), r"[\^abxy0-9]");
    assert_eq!(build(&[any_one_of(&[chars(&['^', 'a']), chars(&['b'])])]), r"[\^ab]");
    assert_eq!(build(&[any_one_of(&[chars(&['a', '^']), chars(&['b'])])]), "[a^b]");
    assert_eq!(build(&[any_one_of(&[chars(&['a', 'b']), chars(&['^'])])]), "[ab^]");
}

#[test]
fn closing_bracket_in_negated_classes() {
    let parts = [
        chars(&[']', 'a', 'b']),
        chars(&['x', 'y']),
        ClassPart::range('0', '9'),
    ];
    assert_eq!(build(&[any_character_except(&parts)]), r"[^\]abxy0-9]");
    assert_eq!(build(&[any_character_except(&[chars(&['a']), chars(&[']', 'b'])])]), r"[^a\]b]");
    assert_eq!(build(&[any_character_except(&[chars(&['a', 'b']), chars(&[']'])])]), r"[^ab\]]");
}

#[test]
fn email_address() {
    let word = || {
        any_one_of(&[
            chars(&['_', '-']),
            ClassPart::range('A', 'Z'),
            ClassPart::range('a', 'z'),
            ClassPart::range('0', '9'),
        ])
    };
    let alnum = || {
        any_one_of(&[
            ClassPart::range('A', 'Z'),
            ClassPart::range('a', 'z'),
            ClassPart::range('0', '9'),
        ])
    };
    let one_or_more = Quantifier::one_or_more;
    let zero_or_more = Quantifier::zero_or_more;

    let pattern = build(&[
        one_or_more().apply(&[word()]),
        zero_or_more().apply(&[text("."), one_or_more().apply(&[word()])]),
        text("@"),
        one_or_more().apply(&[alnum()]),
        zero_or_more().apply(&[text("."), one_or_more().apply(&[alnum()])]),
        text("."),
        Quantifier::at_least(2).unwrap().apply(&[any_letter()]),
    ]);

    assert_eq!(
        pattern,
        r"[_\-A-Za-z0-9]+(\.[_\-A-Za-z0-9]+)*@[A-Za-z0-9]+(\.[A-Za-z0-9]+)*\.[a-zA-Z]{2,}"
    );
}

#[test]
fn builder_value() {
    let mut builder = RegexBuilder::new([text("ABC")]);
    builder.push(text("123"));
    assert_eq!(builder.to_string(), "ABC123");
}

#[test]
fn failing_factories_produce_nothing() {
    assert!(matches!(Quantifier::between(-1, 4), Err(InvalidArgument::NegativeBound)));
    assert!(octal_character("300").is_err());
    assert!(hex_character("000").is_err());
    assert!(unicode_character("000").is_err());
    assert!(control_character('1').is_err());
}

quickcheck::quickcheck! {
    fn metacharacter_text_round_trips(picks: Vec<u8>) -> bool {
        const META: &[char] = &['\\', '[', '^', '$', '.', '|', '?', '*', '+', '(', ')', '{', '}'];
        let original: String = picks.iter().map(|&i| META[i as usize % META.len()]).collect();
        let rendered = text(&original).to_string();

        let mut stripped = String::new();
        let mut escaped = false;
        for ch in rendered.chars() {
            if ch == ESCAPE_MARKER && !escaped {
                escaped = true;
                continue;
            }
            escaped = false;
            stripped.push(ch);
        }
        rendered.chars().count() == 2 * original.chars().count() && stripped == original
    }

    fn between_renders_bounds(a: u16, b: u16) -> bool {
        let (n, m) = (i64::from(a.min(b)), i64::from(a.max(b)));
        let q = Quantifier::between(n, m).unwrap();
        q.apply_text("x").to_string() == format!("x{{{n},{m}}}")
            && q.lazy().apply_text("x").to_string() == format!("x{{{n},{m}}}?")
            && q.possessive().apply_text("x").to_string() == format!("x{{{n},{m}}}+")
    }

    fn between_rejects_invalid_bounds(from: i32, to: i32) -> bool {
        let (from, to) = (i64::from(from), i64::from(to));
        let valid = from >= 0 && to >= 0 && from <= to;
        Quantifier::between(from, to).is_ok() == valid
    }

    fn counts_reject_negatives(n: i32) -> bool {
        let n = i64::from(n);
        Quantifier::exactly(n).is_ok() == (n >= 0) && Quantifier::at_least(n).is_ok() == (n >= 0)
    }

    fn concatenation_is_always_grouped(a: String, b: String) -> bool {
        let (a, b) = (text(&a), text(&b));
        let expected = format!("({a}{b})*");
        Quantifier::zero_or_more().apply(&[a, b]).to_string() == expected
    }
}
