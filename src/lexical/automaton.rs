//! States and the transition function of the tokenizing automaton.

use enum_as_inner::EnumAsInner;

use super::token::TokenKind;

/// A state of the tokenizing automaton.
///
/// Only [`State::Final`] states correspond to complete tokens. The remaining states are
/// intermediate and can never be the kind of an emitted token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum State {
    /// Nothing has been read yet.
    #[default]
    Start,
    /// A `.` that still needs a digit, e.g. `.` or `+.`.
    Dot,
    /// An exponent marker `e`/`E` that still needs digits.
    ExponentMarker,
    /// A sign after the exponent marker that still needs digits.
    ExponentSign,
    /// A complete token of the given kind.
    Final(TokenKind),
}

impl From<TokenKind> for State {
    fn from(kind: TokenKind) -> Self {
        Self::Final(kind)
    }
}

fn is_letter(character: char) -> bool {
    character.is_alphabetic()
}

/// Code point of the digit zero of every run of decimal digits (general category `Nd`,
/// Unicode 15.0). Each run holds the ten digits zero through nine.
const DECIMAL_DIGIT_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50,
    0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2,
    0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Whether `character` is a decimal digit of any script.
fn is_digit(character: char) -> bool {
    if character.is_ascii() {
        return character.is_ascii_digit();
    }

    let code = u32::from(character);
    let run = DECIMAL_DIGIT_ZEROS.partition_point(|&zero| zero <= code);
    run > 0 && code - DECIMAL_DIGIT_ZEROS[run - 1] < 10
}

/// Returns the next state of the automaton given the current state and input character.
///
/// `None` means that no transition exists: the automaton halts and the current token (if
/// the state is final) ends before `character`.
#[must_use]
pub fn transition(state: State, character: char) -> Option<State> {
    use TokenKind as K;

    let next = match state {
        State::Start => match character {
            c if is_letter(c) => K::Identifier.into(),
            c if is_digit(c) => K::Integer.into(),
            '.' => State::Dot,
            '+' => K::Plus.into(),
            '-' => K::Minus.into(),
            '*' => K::Star.into(),
            '/' => K::Slash.into(),
            '=' => K::Equal.into(),
            '(' => K::LeftParen.into(),
            ')' => K::RightParen.into(),
            '{' => K::LeftBrace.into(),
            '}' => K::RightBrace.into(),
            '<' => K::LessThan.into(),
            '>' => K::GreaterThan.into(),
            _ => return None,
        },
        State::Dot => match character {
            c if is_digit(c) => K::Float.into(),
            _ => return None,
        },
        State::ExponentMarker => match character {
            c if is_digit(c) => K::FloatWithExponent.into(),
            '+' | '-' => State::ExponentSign,
            _ => return None,
        },
        State::ExponentSign => match character {
            c if is_digit(c) => K::FloatWithExponent.into(),
            _ => return None,
        },
        State::Final(kind) => return final_transition(kind, character),
    };

    Some(next)
}

/// Transitions out of final states.
fn final_transition(kind: TokenKind, character: char) -> Option<State> {
    use TokenKind as K;

    let next = match (kind, character) {
        (K::Identifier, c) if is_letter(c) || is_digit(c) => K::Identifier.into(),

        (K::Integer, c) if is_digit(c) => K::Integer.into(),
        (K::Integer, '.') => K::Float.into(),

        (K::Float, c) if is_digit(c) => K::Float.into(),

        (K::Integer | K::Float, 'e' | 'E') => State::ExponentMarker,
        (K::Integer | K::Float | K::FloatWithExponent | K::FloatWithSuffix, 'f' | 'F') => {
            K::FloatWithSuffix.into()
        }

        (K::FloatWithExponent, c) if is_digit(c) => K::FloatWithExponent.into(),

        (K::LessThan, '=') => K::LessEqual.into(),
        (K::GreaterThan, '=') => K::GreaterEqual.into(),

        // signs and `*` keep accepting what follows them, `++` even goes back to `Dot`
        (K::Plus | K::Minus | K::Star, c) if is_digit(c) => K::Integer.into(),
        (K::Plus | K::Minus, '.') | (K::Plus, '+') => State::Dot,
        (K::Minus, '-') => K::Minus.into(),
        (K::Star, '*') => K::Star.into(),

        _ => return None,
    };

    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    use TokenKind as K;

    fn run(input: &str) -> Option<State> {
        input
            .chars()
            .try_fold(State::Start, |state, character| transition(state, character))
    }

    #[test]
    fn finality_is_the_final_tag() {
        assert!(!State::Start.is_final());
        assert!(!State::Dot.is_final());
        assert!(!State::ExponentMarker.is_final());
        assert!(!State::ExponentSign.is_final());
        assert!(State::Final(K::Identifier).is_final());
        assert_eq!(State::Final(K::Equal).into_final(), Ok(K::Equal));
    }

    #[test]
    fn start_transitions() {
        let expected = [
            ('a', K::Identifier),
            ('Z', K::Identifier),
            ('é', K::Identifier),
            ('e', K::Identifier),
            ('7', K::Integer),
            ('+', K::Plus),
            ('-', K::Minus),
            ('*', K::Star),
            ('/', K::Slash),
            ('=', K::Equal),
            ('(', K::LeftParen),
            (')', K::RightParen),
            ('{', K::LeftBrace),
            ('}', K::RightBrace),
            ('<', K::LessThan),
            ('>', K::GreaterThan),
        ];

        for (character, kind) in expected {
            assert_eq!(
                transition(State::Start, character),
                Some(State::Final(kind)),
                "from Start on {character:?}"
            );
        }

        assert_eq!(transition(State::Start, '.'), Some(State::Dot));
        for character in [' ', '\n', ';', '[', '!', '"', '_'] {
            assert_eq!(transition(State::Start, character), None);
        }
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(run("42"), Some(K::Integer.into()));
        assert_eq!(run("3.14"), Some(K::Float.into()));
        assert_eq!(run("3."), Some(K::Float.into()));
        assert_eq!(run(".5"), Some(K::Float.into()));
        assert_eq!(run("."), Some(State::Dot));
        assert_eq!(run("3.14e10"), Some(K::FloatWithExponent.into()));
        assert_eq!(run("3E+7"), Some(K::FloatWithExponent.into()));
        assert_eq!(run("3e-"), Some(State::ExponentSign));
        assert_eq!(run("3e"), Some(State::ExponentMarker));
        assert_eq!(run("3.14e10f"), Some(K::FloatWithSuffix.into()));
        assert_eq!(run("1fFf"), Some(K::FloatWithSuffix.into()));
        assert_eq!(run("+12"), Some(K::Integer.into()));
        assert_eq!(run("-.5"), Some(K::Float.into()));
    }

    #[test]
    fn numeric_dead_ends() {
        assert_eq!(run("3.14.1"), None);
        assert_eq!(run("3e10e"), None);
        assert_eq!(run("3e+f"), None);
        assert_eq!(run("1f2"), None);
        assert_eq!(run(".e"), None);
        assert_eq!(run("1x"), None);
    }

    #[test]
    fn relational_operators() {
        assert_eq!(run("<="), Some(K::LessEqual.into()));
        assert_eq!(run(">="), Some(K::GreaterEqual.into()));
        assert_eq!(run("<<"), None);
        assert_eq!(run("=="), None);
        assert_eq!(run("<=="), None);
    }

    #[test]
    fn repeated_operators_are_asymmetric() {
        assert_eq!(run("++"), Some(State::Dot));
        assert_eq!(run("++5"), Some(K::Float.into()));
        assert_eq!(run("--"), Some(K::Minus.into()));
        assert_eq!(run("---7"), Some(K::Integer.into()));
        assert_eq!(run("**"), Some(K::Star.into()));
        assert_eq!(run("*3"), Some(K::Integer.into()));
        assert_eq!(run("*."), None);
        assert_eq!(run("+-"), None);
        assert_eq!(run("//"), None);
    }

    #[test]
    fn decimal_digits_of_every_script() {
        assert!(DECIMAL_DIGIT_ZEROS.windows(2).all(|pair| pair[0] + 10 <= pair[1]));

        for zero in DECIMAL_DIGIT_ZEROS {
            for code in zero..zero + 10 {
                let digit = char::from_u32(code).unwrap();
                assert!(is_digit(digit), "{digit:?} is a decimal digit");
            }
        }

        assert!(!is_digit('²'));
        assert!(!is_digit('½'));
        assert!(!is_digit('Ⅻ'));
        assert!(!is_digit('\u{066A}'));
        assert!(!is_digit('a'));
    }

    #[test]
    fn non_ascii_digits() {
        assert_eq!(run("٣"), Some(K::Integer.into()));
        assert_eq!(run("x٣"), Some(K::Identifier.into()));
        assert_eq!(run("-१२.٥e٣"), Some(K::FloatWithExponent.into()));
        assert_eq!(run("٣a"), None);
    }

    #[test]
    fn identifiers() {
        assert_eq!(run("x1y2"), Some(K::Identifier.into()));
        assert_eq!(run("if"), Some(K::Identifier.into()));
        assert_eq!(run("1a"), None);
        assert_eq!(run("a_b"), None);
    }
}
