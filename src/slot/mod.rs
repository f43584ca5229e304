//! # Slot Machine Core
//!
//! - [`catalog`] - symbols, pool counts and payout multipliers
//! - [`machine`] - validated grid geometry and line bounds
//! - [`grid`] - per-column sampling without replacement, transpose, rendering
//! - [`paylines`] - winnings over the bet lines
//! - [`input`] - line-input providers (stdin, scripted)
//! - [`session`] - the interactive deposit/bet/spin loop
//!
//! ```text
//! Session ──▶ Machine::spin ──▶ Grid ──lines()──▶ paylines::winnings ──▶ balance
//!                 │                                      │
//!                 └──────────── SymbolCatalog ◀──────────┘
//! ```

pub mod catalog;
pub mod errors;
pub mod grid;
pub mod input;
pub mod machine;
pub mod paylines;
pub mod session;

pub use catalog::{Symbol, SymbolCatalog};
pub use errors::ConfigError;
pub use grid::{Grid, Line};
pub use input::{LineInput, ScriptedInput, StdinInput};
pub use machine::Machine;
pub use session::{Ending, Session, SessionSummary};
