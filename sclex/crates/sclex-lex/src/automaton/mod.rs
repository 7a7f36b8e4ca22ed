//! The tokenizing automaton.
//!
//! ```text
//!                 letter (not i/e)      letter|digit
//!   Initial ───────────────────────► Id ◄──────────┐
//!      │  'i'                         ▲ ───────────┘
//!      ├────► IdInt1 ─'n'─► IdInt2 ─'t'─► IdInt3
//!      │         └──'f'─► IdIf2          (any other letter/digit degrades to Id)
//!      │  'e'
//!      ├────► IdElse1 ─'l'─► IdElse2 ─'s'─► IdElse3 ─'e'─► IdElse4
//!      │  digit
//!      ├────► IntLiteral ◄─ digit
//!      │  '>'
//!      ├────► Gt ─'='─► Ge
//!      │  '<'
//!      ├────► Lt ─'='─► Le
//!      │  '='
//!      ├────► Assignment ─'='─► Eq
//!      │  '"'
//!      ├────► StringBody ─'"'─► StringEnd
//!      │  + - * / ; ( )
//!      └────► Plus | Minus | Star | Slash | SemiColon | LeftParen | RightParen
//! ```
//!
//! Any input with no edge out of the current state finalizes the pending
//! token and is dispatched from `Initial`. Keyword chain states finalize as
//! the keyword only from `IdInt3`, `IdIf2` and `IdElse4`; everywhere else in
//! a chain the token is an identifier.

pub mod classify;
mod state;
mod transition;

pub use state::State;
pub use transition::{transition, Input, Notice, Pending, Transition};
