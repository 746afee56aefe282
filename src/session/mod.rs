//! Session Module
//!
//! The interactive boundary: menu loops that drive inventory operations
//! over any line-oriented input/output pair.
//!
//! ## Responsibilities
//! - Mode selection (buyer / seller / quit)
//! - Validated prompting: invalid input re-prompts, it never errors
//! - Short-lived inventory locks, never held across a blocking read
//!
//! Generic over `BufRead`/`Write` so tests can script a whole session
//! with in-memory buffers.

mod buyer;
mod prompt;
mod seller;

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::shop::SharedInventory;

/// An interactive session over the shared inventory
pub struct Session<R, W> {
    /// The record store, locked per operation
    inventory: SharedInventory,

    /// Line-oriented user input
    input: R,

    /// Prompt and report output
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given streams
    pub fn new(inventory: SharedInventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    /// Run the session until the user quits or input ends
    ///
    /// The mode is picked once; each mode runs its own menu loop.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Select the program mode:")?;
        writeln!(self.output, "1 - run as a buyer")?;
        writeln!(self.output, "2 - run as a seller")?;
        writeln!(self.output, "3 - quit")?;

        match prompt::prompt_choice(&mut self.input, &mut self.output, 1, 3)? {
            1 => self.run_buyer(),
            2 => self.run_seller(),
            _ => {
                writeln!(self.output, "Goodbye!")?;
                Ok(())
            }
        }
    }
}
