//! # Reelbet - Terminal Slot Machine
//!
//! A single-player slot machine for the terminal. The player deposits virtual
//! money, picks how many pay-lines to bet on, bets per line and spins a grid of
//! symbols; every bet line whose symbols all match pays `bet × multiplier`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reelbet::config::Config;
//! use reelbet::slot::{Session, StdinInput};
//!
//! fn main() -> anyhow::Result<()> {
//!     let machine = Config::default().build_machine()?;
//!     let mut session = Session::new(&machine, StdinInput::new(), std::io::stdout(), rand::thread_rng());
//!     session.run()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`slot`] - catalog, grid generation, pay-line evaluation and the session loop
//! - [`config`] - optional TOML configuration and machine validation
//! - [`validation`] - prompt answer parsing and range checks

pub mod config;
pub mod slot;
pub mod validation;
