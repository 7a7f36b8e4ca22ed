//! The transition function.
//!
//! [`transition`] is pure: it takes the current state, one input symbol and
//! the pending token by value, and returns the next state, the updated
//! pending token and whatever was emitted. The driver in
//! [`crate::lexer`] only threads these values through.
//!
//! Every `(state, input)` pair either extends the pending token or falls
//! through to *finalize-and-dispatch*: emit the pending token if it holds
//! text, then classify the input afresh as the first character of the next
//! token. End of input is a symbol like any other; it finalizes and
//! dispatches to nothing.

use sclex_util::Span;

use super::classify::{is_alpha, is_blank, is_digit, is_ident_continue};
use super::State;
use crate::cursor::Position;
use crate::token::{Token, TokenKind};

/// One input symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// A source character and the position it occupies.
    Char {
        /// The character
        ch: char,
        /// Where it sits in the source
        at: Position,
    },
    /// End of input.
    End,
}

/// The token currently being recognized.
///
/// Holds the text seen so far and its provisional kind. An empty pending
/// token has kind [`TokenKind::Initial`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pending {
    kind: TokenKind,
    text: String,
    start: Position,
}

impl Pending {
    fn begin(kind: TokenKind, ch: char, at: Position) -> Self {
        let mut text = String::new();
        text.push(ch);
        Self {
            kind,
            text,
            start: at,
        }
    }

    /// Provisional kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Text accumulated so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if no character has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn span(&self) -> Span {
        Span::new(
            self.start.offset,
            self.start.offset + self.text.len(),
            self.start.line,
            self.start.column,
        )
    }

    fn into_token(self) -> Option<Token> {
        if self.text.is_empty() {
            return None;
        }
        debug_assert_ne!(self.kind, TokenKind::Initial, "unclassified text {:?}", self.text);
        let span = self.span();
        Some(Token::new(self.kind, self.text, span))
    }
}

/// A side observation of a transition that is not a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A character outside the alphabet was dropped.
    Unrecognized {
        /// The dropped character
        ch: char,
        /// Its location
        span: Span,
    },
    /// Input ended inside a string literal; the partial literal was emitted.
    UnterminatedString {
        /// The partial literal
        span: Span,
    },
}

/// Result of one step of the automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Next state
    pub state: State,
    /// Pending token after the step
    pub pending: Pending,
    /// Token finalized by this step, if any
    pub emitted: Option<Token>,
    /// Dropped character or unterminated literal, if any
    pub notice: Option<Notice>,
}

/// Advances the automaton by one input symbol.
///
/// # Example
///
/// ```
/// use sclex_lex::automaton::{transition, Input, Pending, State};
/// use sclex_lex::cursor::Position;
/// use sclex_lex::TokenKind;
///
/// let step = transition(
///     State::Initial,
///     Input::Char { ch: '>', at: Position::START },
///     Pending::default(),
/// );
/// assert_eq!(step.state, State::Gt);
/// assert_eq!(step.pending.kind(), TokenKind::Gt);
/// assert!(step.emitted.is_none());
/// ```
pub fn transition(state: State, input: Input, pending: Pending) -> Transition {
    let next = match input {
        Input::Char { ch, .. } => Some(ch),
        Input::End => None,
    };

    match (state, next) {
        // Keyword chains
        (State::IdInt1, Some('n')) => extend(State::IdInt2, pending, 'n'),
        (State::IdInt1, Some('f')) => extend(State::IdIf2, pending, 'f'),
        (State::IdInt2, Some('t')) => extend(State::IdInt3, pending, 't'),
        (State::IdElse1, Some('l')) => extend(State::IdElse2, pending, 'l'),
        (State::IdElse2, Some('s')) => extend(State::IdElse3, pending, 's'),
        (State::IdElse3, Some('e')) => extend(State::IdElse4, pending, 'e'),
        (s, Some(c)) if (s == State::Id || s.is_keyword_prefix()) && is_ident_continue(c) => {
            extend(State::Id, pending, c)
        }

        (State::IntLiteral, Some(c)) if is_digit(c) => extend(State::IntLiteral, pending, c),

        // Two-character operators
        (State::Gt, Some('=')) => promote(State::Ge, TokenKind::Ge, pending, '='),
        (State::Lt, Some('=')) => promote(State::Le, TokenKind::Le, pending, '='),
        (State::Assignment, Some('=')) => promote(State::Eq, TokenKind::Eq, pending, '='),

        (State::StringBody, Some('"')) => extend(State::StringEnd, pending, '"'),
        (State::StringBody, Some(c)) => extend(State::StringBody, pending, c),
        (State::StringBody, None) => unterminated(pending),

        // Nothing extends a complete operator, punctuator or string
        (s, _) if s.is_complete() => finalize(pending, input),
        (s, _) => finalize(close(s, pending), input),
    }
}

fn extend(state: State, mut pending: Pending, ch: char) -> Transition {
    pending.text.push(ch);
    Transition {
        state,
        pending,
        emitted: None,
        notice: None,
    }
}

fn promote(state: State, kind: TokenKind, mut pending: Pending, ch: char) -> Transition {
    pending.kind = kind;
    extend(state, pending, ch)
}

/// Settles the provisional kind of a token about to be finalized in `state`.
fn close(state: State, mut pending: Pending) -> Pending {
    let keyword = match state {
        State::IdInt3 => Some(TokenKind::Int),
        State::IdIf2 => Some(TokenKind::If),
        State::IdElse4 => Some(TokenKind::Else),
        _ => None,
    };
    if let Some(kind) = keyword {
        pending.kind = kind;
    }
    pending
}

fn finalize(pending: Pending, input: Input) -> Transition {
    let emitted = pending.into_token();
    let (state, pending, notice) = match input {
        Input::Char { ch, at } => dispatch(ch, at),
        Input::End => (State::Initial, Pending::default(), None),
    };
    Transition {
        state,
        pending,
        emitted,
        notice,
    }
}

fn unterminated(pending: Pending) -> Transition {
    let span = pending.span();
    Transition {
        notice: Some(Notice::UnterminatedString { span }),
        ..finalize(pending, Input::End)
    }
}

/// Start-of-token classification.
fn dispatch(ch: char, at: Position) -> (State, Pending, Option<Notice>) {
    let start = |state: State, kind: TokenKind| -> (State, Pending, Option<Notice>) {
        (state, Pending::begin(kind, ch, at), None)
    };

    match ch {
        'i' => start(State::IdInt1, TokenKind::Identifier),
        'e' => start(State::IdElse1, TokenKind::Identifier),
        c if is_alpha(c) => start(State::Id, TokenKind::Identifier),
        c if is_digit(c) => start(State::IntLiteral, TokenKind::IntLiteral),
        '"' => start(State::StringBody, TokenKind::StringLiteral),
        '>' => start(State::Gt, TokenKind::Gt),
        '<' => start(State::Lt, TokenKind::Lt),
        '=' => start(State::Assignment, TokenKind::Assignment),
        '+' => start(State::Plus, TokenKind::Plus),
        '-' => start(State::Minus, TokenKind::Minus),
        '*' => start(State::Star, TokenKind::Star),
        '/' => start(State::Slash, TokenKind::Slash),
        ';' => start(State::SemiColon, TokenKind::SemiColon),
        '(' => start(State::LeftParen, TokenKind::LeftParen),
        ')' => start(State::RightParen, TokenKind::RightParen),
        c if is_blank(c) => (State::Initial, Pending::default(), None),
        c => {
            let span = Span::new(at.offset, at.offset + c.len_utf8(), at.line, at.column);
            (
                State::Initial,
                Pending::default(),
                Some(Notice::Unrecognized { ch: c, span }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: usize) -> Position {
        Position {
            offset,
            line: 1,
            column: offset as u32 + 1,
        }
    }

    fn feed(state: State, pending: Pending, ch: char, offset: usize) -> Transition {
        transition(state, Input::Char { ch, at: at(offset) }, pending)
    }

    /// Runs an ASCII single-line `text` from `Initial` and returns the state
    /// reached, the pending token and everything emitted on the way.
    fn run(text: &str) -> (State, Pending, Vec<Token>) {
        let mut state = State::Initial;
        let mut pending = Pending::default();
        let mut emitted = Vec::new();
        for (offset, ch) in text.char_indices() {
            let step = feed(state, pending, ch, offset);
            state = step.state;
            pending = step.pending;
            emitted.extend(step.emitted);
        }
        (state, pending, emitted)
    }

    #[test]
    fn test_dispatch_letters() {
        let step = feed(State::Initial, Pending::default(), 'i', 0);
        assert_eq!(step.state, State::IdInt1);
        assert_eq!(step.pending.kind(), TokenKind::Identifier);
        assert_eq!(step.pending.text(), "i");

        assert_eq!(feed(State::Initial, Pending::default(), 'e', 0).state, State::IdElse1);
        assert_eq!(feed(State::Initial, Pending::default(), 'a', 0).state, State::Id);
        assert_eq!(feed(State::Initial, Pending::default(), 'I', 0).state, State::Id);
    }

    #[test]
    fn test_dispatch_operators() {
        let cases = [
            ('+', State::Plus, TokenKind::Plus),
            ('-', State::Minus, TokenKind::Minus),
            ('*', State::Star, TokenKind::Star),
            ('/', State::Slash, TokenKind::Slash),
            (';', State::SemiColon, TokenKind::SemiColon),
            ('(', State::LeftParen, TokenKind::LeftParen),
            (')', State::RightParen, TokenKind::RightParen),
            ('=', State::Assignment, TokenKind::Assignment),
            ('>', State::Gt, TokenKind::Gt),
            ('<', State::Lt, TokenKind::Lt),
            ('"', State::StringBody, TokenKind::StringLiteral),
            ('7', State::IntLiteral, TokenKind::IntLiteral),
        ];
        for (ch, state, kind) in cases {
            let step = feed(State::Initial, Pending::default(), ch, 0);
            assert_eq!(step.state, state, "dispatch of {:?}", ch);
            assert_eq!(step.pending.kind(), kind, "kind of {:?}", ch);
        }
    }

    #[test]
    fn test_blank_is_dropped_silently() {
        let step = feed(State::Initial, Pending::default(), ' ', 0);
        assert_eq!(step.state, State::Initial);
        assert!(step.pending.is_empty());
        assert!(step.emitted.is_none());
        assert!(step.notice.is_none());
    }

    #[test]
    fn test_unrecognized_is_noticed() {
        let step = feed(State::Initial, Pending::default(), '#', 3);
        assert_eq!(step.state, State::Initial);
        assert!(step.emitted.is_none());
        assert_eq!(
            step.notice,
            Some(Notice::Unrecognized {
                ch: '#',
                span: Span::new(3, 4, 1, 4)
            })
        );
    }

    #[test]
    fn test_int_chain() {
        assert_eq!(run("i").0, State::IdInt1);
        assert_eq!(run("in").0, State::IdInt2);
        assert_eq!(run("int").0, State::IdInt3);
        assert_eq!(run("inta").0, State::Id);
        assert_eq!(run("i2").0, State::Id);
        assert_eq!(run("ix").0, State::Id);
    }

    #[test]
    fn test_keyword_finalized_on_blank() {
        let (state, pending, _) = run("int");
        let step = feed(state, pending, ' ', 3);
        assert_eq!(step.state, State::Initial);
        assert_eq!(
            step.emitted,
            Some(Token::new(TokenKind::Int, "int", Span::new(0, 3, 1, 1)))
        );
    }

    #[test]
    fn test_keyword_finalized_on_punctuation() {
        let (state, pending, _) = run("int");
        let step = feed(state, pending, '(', 3);
        assert_eq!(step.emitted.map(|t| t.kind), Some(TokenKind::Int));
        assert_eq!(step.state, State::LeftParen);
    }

    #[test]
    fn test_keyword_finalized_at_end() {
        let (state, pending, _) = run("else");
        assert_eq!(state, State::IdElse4);
        let step = transition(state, Input::End, pending);
        assert_eq!(step.emitted.map(|t| t.kind), Some(TokenKind::Else));
        assert_eq!(step.state, State::Initial);
    }

    #[test]
    fn test_partial_keyword_stays_identifier() {
        for text in ["i", "in", "e", "el", "els"] {
            let (state, pending, _) = run(text);
            let step = transition(state, Input::End, pending);
            let token = step.emitted.unwrap();
            assert_eq!(token.kind, TokenKind::Identifier, "{:?}", text);
            assert_eq!(token.text, text);
        }
    }

    #[test]
    fn test_if_branch_of_shared_prefix() {
        let (state, pending, _) = run("if");
        assert_eq!(state, State::IdIf2);
        let step = feed(state, pending, ' ', 2);
        assert_eq!(step.emitted.map(|t| t.kind), Some(TokenKind::If));
    }

    #[test]
    fn test_gt_promotes_to_ge() {
        let (state, pending, _) = run(">");
        let step = feed(state, pending, '=', 1);
        assert_eq!(step.state, State::Ge);
        assert_eq!(step.pending.kind(), TokenKind::Ge);
        assert_eq!(step.pending.text(), ">=");
        assert!(step.emitted.is_none());
    }

    #[test]
    fn test_ge_redispatches_next_char() {
        let (state, pending, _) = run(">=");
        let step = feed(state, pending, 'x', 2);
        assert_eq!(step.emitted.map(|t| t.kind), Some(TokenKind::Ge));
        assert_eq!(step.state, State::Id);
        assert_eq!(step.pending.text(), "x");
    }

    #[test]
    fn test_gt_without_equals() {
        let (state, pending, _) = run(">");
        let step = feed(state, pending, '4', 1);
        assert_eq!(step.emitted.map(|t| t.kind), Some(TokenKind::Gt));
        assert_eq!(step.state, State::IntLiteral);
    }

    #[test]
    fn test_assignment_and_eq() {
        let (state, pending, _) = run("=");
        let step = feed(state, pending.clone(), '=', 1);
        assert_eq!(step.state, State::Eq);
        assert_eq!(step.pending.kind(), TokenKind::Eq);

        let step = feed(state, pending, ' ', 1);
        assert_eq!(step.emitted.map(|t| t.kind), Some(TokenKind::Assignment));
    }

    #[test]
    fn test_single_char_terminal_always_finalizes() {
        let (state, pending, _) = run("+");
        let step = feed(state, pending, '+', 1);
        assert_eq!(step.emitted.map(|t| t.text), Some("+".to_string()));
        assert_eq!(step.state, State::Plus);
        assert_eq!(step.pending.text(), "+");
    }

    #[test]
    fn test_int_literal_stops_at_letter() {
        let (state, pending, emitted) = run("45a");
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].kind, TokenKind::IntLiteral);
        assert_eq!(emitted[0].text, "45");
        assert_eq!(state, State::Id);
        assert_eq!(pending.text(), "a");
    }

    #[test]
    fn test_string_literal_includes_quotes_and_blanks() {
        let (state, pending, emitted) = run("\"a b\";");
        assert_eq!(state, State::SemiColon);
        assert_eq!(pending.text(), ";");
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].kind, TokenKind::StringLiteral);
        assert_eq!(emitted[0].text, "\"a b\"");
        assert_eq!(emitted[0].span, Span::new(0, 5, 1, 1));
    }

    #[test]
    fn test_unterminated_string_at_end() {
        let (state, pending, _) = run("\"abc");
        let step = transition(state, Input::End, pending);
        let token = step.emitted.unwrap();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.text, "\"abc");
        assert_eq!(
            step.notice,
            Some(Notice::UnterminatedString {
                span: Span::new(0, 4, 1, 1)
            })
        );
    }

    #[test]
    fn test_end_from_initial_emits_nothing() {
        let step = transition(State::Initial, Input::End, Pending::default());
        assert_eq!(step.state, State::Initial);
        assert!(step.emitted.is_none());
        assert!(step.notice.is_none());
    }

    #[test]
    fn test_pending_resets_after_finalize() {
        let (state, pending, _) = run("age");
        let step = feed(state, pending, ' ', 3);
        assert!(step.pending.is_empty());
        assert_eq!(step.pending.kind(), TokenKind::Initial);
    }
}
