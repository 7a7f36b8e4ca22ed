//! The lexer driver and tokenization entry points.
//!
//! [`Lexer`] is push-driven: the caller owns the character stream and feeds
//! it one character at a time. Each character moves the automaton one step
//! through [`transition`]; [`Lexer::finish`] feeds the end-of-input symbol
//! and hands back the tokens.

use std::io::BufRead;

use sclex_util::{DiagnosticBuilder, DiagnosticCode, Handler};
use tracing::{debug, trace};

use crate::automaton::{transition, Input, Notice, Pending, State, Transition};
use crate::config::{LexConfig, UnrecognizedPolicy};
use crate::cursor::{Cursor, Position};
use crate::error::{LexError, LexResult};
use crate::token::Token;

/// Tokenizer state for one input.
///
/// A lexer is single-use: create one per input, feed every character, then
/// call [`finish`](Lexer::finish).
///
/// # Example
///
/// ```
/// use sclex_lex::{LexConfig, Lexer, TokenKind};
/// use sclex_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new(&LexConfig::default(), &handler);
/// for ch in "x >= 1".chars() {
///     lexer.feed(ch).unwrap();
/// }
/// let kinds: Vec<_> = lexer.finish().into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Ge, TokenKind::IntLiteral]);
/// ```
pub struct Lexer<'a> {
    /// Current automaton state.
    state: State,

    /// Token being recognized.
    pending: Pending,

    /// Position of the next character.
    cursor: Cursor,

    /// Tokens emitted so far, in source order.
    tokens: Vec<Token>,

    /// Reporting and limits.
    config: LexConfig,

    /// Sink for lexical diagnostics.
    handler: &'a Handler,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of an input.
    pub fn new(config: &LexConfig, handler: &'a Handler) -> Self {
        Self {
            state: State::Initial,
            pending: Pending::default(),
            cursor: Cursor::new(),
            tokens: Vec::new(),
            config: config.clone(),
            handler,
        }
    }

    /// Feeds the next character of the input.
    ///
    /// # Errors
    /// [`LexError::InputTooLong`] if the character would exceed
    /// [`LexConfig::max_input_chars`]. The character is not consumed and the
    /// lexer is left as it was.
    pub fn feed(&mut self, ch: char) -> LexResult<()> {
        if let Some(limit) = self.config.max_input_chars {
            if self.cursor.consumed() >= limit {
                return Err(LexError::InputTooLong { limit });
            }
        }
        self.push(ch);
        Ok(())
    }

    /// Feeds every character of `text`.
    ///
    /// # Errors
    /// See [`feed`](Lexer::feed).
    pub fn feed_str(&mut self, text: &str) -> LexResult<()> {
        text.chars().try_for_each(|ch| self.feed(ch))
    }

    /// Feeds the end of input and returns all tokens in source order.
    pub fn finish(mut self) -> Vec<Token> {
        self.step(Input::End);
        debug!(
            tokens = self.tokens.len(),
            chars = self.cursor.consumed(),
            "tokenization finished"
        );
        self.tokens
    }

    /// Current automaton state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Tokens emitted so far. The pending token is not included.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Position of the next character.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    fn push(&mut self, ch: char) {
        let at = self.cursor.position();
        self.cursor.bump(ch);
        self.step(Input::Char { ch, at });
    }

    fn step(&mut self, input: Input) {
        let pending = std::mem::take(&mut self.pending);
        let Transition {
            state,
            pending,
            emitted,
            notice,
        } = transition(self.state, input, pending);

        self.state = state;
        self.pending = pending;

        if let Some(token) = emitted {
            trace!(kind = %token.kind, text = %token.text, next = %self.state, "token");
            self.tokens.push(token);
        }
        if let Some(notice) = notice {
            self.report(notice);
        }
    }

    fn report(&self, notice: Notice) {
        match notice {
            Notice::Unrecognized { ch, span } => {
                trace!(?ch, line = span.line, column = span.column, "dropped character");
                if self.config.unrecognized == UnrecognizedPolicy::Report {
                    DiagnosticBuilder::warning(format!("unexpected character {:?}", ch))
                        .code(DiagnosticCode::W_LEXER_UNEXPECTED_CHAR)
                        .span(span)
                        .note("the character was dropped")
                        .emit(self.handler);
                }
            },
            Notice::UnterminatedString { span } => {
                DiagnosticBuilder::error("unterminated string literal")
                    .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
                    .span(span)
                    .help("add a closing '\"'")
                    .emit(self.handler);
            },
        }
    }
}

/// Tokenizes `source` with the default configuration.
///
/// Never fails: unrecognized characters are dropped, and an unterminated
/// string literal is returned as far as it goes.
///
/// # Example
///
/// ```
/// use sclex_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("int age = 45;");
/// assert_eq!(tokens[0].kind, TokenKind::Int);
/// assert_eq!(tokens[1].text, "age");
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    let mut lexer = Lexer::new(&LexConfig::default(), &handler);
    debug!(bytes = source.len(), "tokenizing");
    source.chars().for_each(|ch| lexer.push(ch));
    lexer.finish()
}

/// Tokenizes `source`, reporting diagnostics into `handler`.
///
/// # Errors
/// [`LexError::InputTooLong`] if `source` exceeds the configured limit.
pub fn tokenize_with(source: &str, config: &LexConfig, handler: &Handler) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(config, handler);
    debug!(bytes = source.len(), "tokenizing");
    lexer.feed_str(source)?;
    Ok(lexer.finish())
}

/// Tokenizes everything `reader` yields, one line at a time.
///
/// Offsets and line numbers in the returned spans count from the start of
/// the reader.
///
/// # Errors
/// [`LexError::Io`] if the reader fails or yields invalid UTF-8, and
/// [`LexError::InputTooLong`] if the input exceeds the configured limit.
pub fn tokenize_reader<R: BufRead>(
    mut reader: R,
    config: &LexConfig,
    handler: &Handler,
) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(config, handler);
    let mut line = String::new();
    debug!("tokenizing reader");
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        lexer.feed_str(&line)?;
    }
    Ok(lexer.finish())
}
