//! # Game Session
//!
//! One interactive session from the first deposit to a terminal state. The
//! session owns the balance; everything else (machine, input, output, RNG) is
//! handed in, so tests can drive it with scripted answers and a seeded RNG.
//!
//! ## Lifecycle
//!
//! ```text
//! AwaitingDeposit -> RoundStart -> AwaitingLineCount -> AwaitingBet
//!        -> Spinning -> Evaluating -> RoundEnd -> AwaitingLineCount | Terminated
//! ```
//!
//! Prompts retry until a valid answer arrives. The out-of-money check runs
//! only after the round's winnings are credited, so a round that debits the
//! balance to zero and then wins keeps the session alive.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reelbet::slot::{Machine, Session, StdinInput};
//!
//! fn main() -> anyhow::Result<()> {
//!     let machine = Machine::reference();
//!     let summary = Session::new(&machine, StdinInput::new(), std::io::stdout(), rand::thread_rng()).run()?;
//!     println!("ended after {} rounds", summary.rounds);
//!     Ok(())
//! }
//! ```

use std::io::Write;

use anyhow::Result;
use log::{debug, info};
use rand::Rng;

use super::grid::{render_lines, Line};
use super::input::LineInput;
use super::machine::Machine;
use super::paylines;
use crate::validation::{self, InputError};

pub const GREETING: &str = "Welcome to the game! May the odds be in your favor.";
pub const DEPOSIT_PROMPT: &str = "Enter a deposit amount: ";
pub const DEPOSIT_RETRY: &str = "Invalid deposit amount, try again.";
pub const LINES_RETRY: &str = "Invalid number of lines, try again.";
pub const BET_PROMPT: &str = "Enter the bet per line: ";
pub const BET_RETRY: &str = "Invalid bet, try again.";
pub const CONTINUE_PROMPT: &str = "Do you want to play again? (y/n)";
pub const OUT_OF_MONEY: &str = "You ran out of money!";
pub const FAREWELL: &str = "Thanks for playing!";

/// How a session reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Balance was exactly zero at the end of a round.
    OutOfMoney,
    /// Player answered anything but yes to "play again".
    Declined,
    /// The input stream closed while a prompt was waiting.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub ending: Ending,
    pub rounds: u32,
    pub final_balance: f64,
}

#[derive(Debug)]
enum Phase {
    AwaitingDeposit,
    RoundStart,
    AwaitingLineCount,
    AwaitingBet { lines: usize },
    Spinning { lines: usize, bet: f64 },
    Evaluating { lines: usize, bet: f64, rows: Vec<Line> },
    RoundEnd,
    Terminated(Ending),
}

pub struct Session<'m, I, W, R> {
    machine: &'m Machine,
    input: I,
    out: W,
    rng: R,
    balance: f64,
    rounds: u32,
}

impl<'m, I, W, R> Session<'m, I, W, R>
where
    I: LineInput,
    W: Write,
    R: Rng,
{
    pub fn new(machine: &'m Machine, input: I, out: W, rng: R) -> Self {
        Session {
            machine,
            input,
            out,
            rng,
            balance: 0.0,
            rounds: 0,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Give back the input and output handles, e.g. to inspect a transcript.
    pub fn into_parts(self) -> (I, W) {
        (self.input, self.out)
    }

    /// Play until a terminal state. Only I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<SessionSummary> {
        writeln!(self.out, "{}", GREETING)?;
        let mut phase = Phase::AwaitingDeposit;
        loop {
            phase = match phase {
                Phase::AwaitingDeposit => {
                    match self.ask(DEPOSIT_PROMPT, DEPOSIT_RETRY, validation::validate_deposit)? {
                        Some(deposit) => {
                            info!("deposit accepted: {}", deposit);
                            self.balance = deposit;
                            Phase::RoundStart
                        }
                        None => Phase::Terminated(Ending::InputClosed),
                    }
                }
                Phase::RoundStart => {
                    writeln!(self.out, "You have a balance of ${}", self.balance)?;
                    Phase::AwaitingLineCount
                }
                Phase::AwaitingLineCount => {
                    let (min, max) = (self.machine.min_lines(), self.machine.max_lines());
                    let prompt = format!("Enter the number of lines to bet on ({}-{}): ", min, max);
                    match self.ask(&prompt, LINES_RETRY, |raw| {
                        validation::validate_line_count(raw, min, max)
                    })? {
                        Some(lines) => Phase::AwaitingBet { lines },
                        None => Phase::Terminated(Ending::InputClosed),
                    }
                }
                Phase::AwaitingBet { lines } => {
                    let balance = self.balance;
                    match self.ask(BET_PROMPT, BET_RETRY, |raw| {
                        validation::validate_bet(raw, balance, lines)
                    })? {
                        Some(bet) => Phase::Spinning { lines, bet },
                        None => Phase::Terminated(Ending::InputClosed),
                    }
                }
                Phase::Spinning { lines, bet } => {
                    let stake = bet * lines as f64;
                    // bet <= balance / lines, but the product can round a hair past balance
                    self.balance = (self.balance - stake).max(0.0);
                    self.rounds += 1;
                    info!(
                        "round {}: {} line(s) at {} per line, stake {}, balance now {}",
                        self.rounds, lines, bet, stake, self.balance
                    );
                    let machine = self.machine;
                    let grid = machine.spin(&mut self.rng);
                    Phase::Evaluating {
                        lines,
                        bet,
                        rows: grid.lines(),
                    }
                }
                Phase::Evaluating { lines, bet, rows } => {
                    let machine = self.machine;
                    let catalog = machine.catalog();
                    for rendered in render_lines(&rows, catalog) {
                        writeln!(self.out, "{}", rendered)?;
                    }
                    let wins = paylines::line_wins(&rows, bet, lines, catalog);
                    for win in &wins {
                        debug!(
                            "line {} pays {} on {}",
                            win.line,
                            win.payout,
                            catalog.name(win.symbol)
                        );
                    }
                    let winnings = paylines::total(&wins);
                    self.balance = (self.balance + winnings).min(f64::MAX);
                    writeln!(self.out, "You won, ${}", winnings)?;
                    info!(
                        "round {} paid {}, balance {}",
                        self.rounds, winnings, self.balance
                    );
                    Phase::RoundEnd
                }
                Phase::RoundEnd => {
                    if self.balance == 0.0 {
                        writeln!(self.out, "{}", OUT_OF_MONEY)?;
                        Phase::Terminated(Ending::OutOfMoney)
                    } else {
                        match self.input.read_line(CONTINUE_PROMPT)? {
                            Some(answer) if validation::is_affirmative(&answer) => {
                                Phase::RoundStart
                            }
                            Some(answer) => {
                                debug!("continue declined with {:?}", answer);
                                writeln!(self.out, "{}", FAREWELL)?;
                                Phase::Terminated(Ending::Declined)
                            }
                            None => Phase::Terminated(Ending::InputClosed),
                        }
                    }
                }
                Phase::Terminated(ending) => {
                    self.out.flush()?;
                    info!(
                        "session ended ({:?}) after {} round(s), balance {}",
                        ending, self.rounds, self.balance
                    );
                    return Ok(SessionSummary {
                        ending,
                        rounds: self.rounds,
                        final_balance: self.balance,
                    });
                }
            };
        }
    }

    /// Prompt until `check` accepts an answer. `Ok(None)` when input closes.
    fn ask<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        check: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(raw) = self.input.read_line(prompt)? else {
                debug!("input closed at prompt {:?}", prompt.trim_end());
                return Ok(None);
            };
            match check(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    debug!("rejected {:?}: {}", raw, e);
                    writeln!(self.out, "{}", retry)?;
                }
            }
        }
    }
}
