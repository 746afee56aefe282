//! Buyer flow
//!
//! Browse the catalog and purchase one unit each of a distinct selection
//! of instruments.

use std::io::{BufRead, Write};

use crate::error::Result;

use super::{prompt, Session};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Buyer menu loop
    pub(super) fn run_buyer(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "Select an action:")?;
            writeln!(self.output, "1. Browse the catalog")?;
            writeln!(self.output, "2. Make a purchase")?;
            writeln!(self.output, "3. Quit")?;

            match prompt::prompt_choice(&mut self.input, &mut self.output, 1, 3)? {
                1 => self.browse()?,
                2 => self.purchase()?,
                _ => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    /// List every record for the buyer
    fn browse(&mut self) -> Result<()> {
        let listing: Vec<String> = {
            let inventory = self.inventory.lock();
            inventory
                .iter()
                .map(|r| {
                    format!(
                        "{} ({}), price: {}, quantity: {}",
                        r.brand, r.category, r.price, r.quantity
                    )
                })
                .collect()
        };

        writeln!(self.output, "Catalog:")?;
        writeln!(self.output)?;
        for line in listing {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Purchase flow: count, selection, total, payment, decrement
    ///
    /// One unit is sold per selected record. The total sums each selected
    /// record's price once; distinctness of the selection makes multi-unit
    /// purchases impossible.
    fn purchase(&mut self) -> Result<()> {
        let pool_size = self.inventory.lock().len();
        if pool_size < 2 {
            // The count prompt requires 1..pool_size; with fewer than two
            // records no answer could ever satisfy it
            writeln!(
                self.output,
                "Not enough instruments in stock to make a purchase."
            )?;
            return Ok(());
        }

        writeln!(self.output, "How many instruments would you like to buy?")?;
        let count =
            prompt::prompt_choice(&mut self.input, &mut self.output, 1, pool_size as u32 - 1)?
                as usize;

        let selection = self.select_records(count)?;

        let total: f64 = {
            let inventory = self.inventory.lock();
            selection
                .iter()
                .filter_map(|id| inventory.find(*id))
                .map(|r| r.price)
                .sum()
        };
        writeln!(self.output, "Order total: {total}")?;

        writeln!(self.output, "1 - pay in cash")?;
        writeln!(self.output, "2 - pay by card")?;
        prompt::prompt_choice(&mut self.input, &mut self.output, 1, 2)?;

        self.inventory.lock().decrement(&selection)?;
        tracing::debug!(records = selection.len(), total, "purchase recorded");

        writeln!(self.output, "Payment of {total} completed successfully")?;
        Ok(())
    }

    /// Prompt until `count` distinct records are chosen
    ///
    /// Re-selecting an already-chosen record or an out-of-range position
    /// is rejected with a message; the chosen set only grows, bounded by
    /// `count`.
    fn select_records(&mut self, count: usize) -> Result<Vec<u32>> {
        writeln!(self.output, "Select your instruments:")?;

        let mut chosen: Vec<u32> = Vec::with_capacity(count);
        while chosen.len() < count {
            writeln!(self.output, "Select instrument {}:", chosen.len() + 1)?;

            let (ids, listing): (Vec<u32>, Vec<String>) = {
                let inventory = self.inventory.lock();
                inventory.iter().map(|r| (r.id, r.to_string())).unzip()
            };
            for (position, line) in listing.iter().enumerate() {
                writeln!(self.output, "{}. {}", position + 1, line)?;
            }

            let choice =
                prompt::prompt_choice(&mut self.input, &mut self.output, 1, ids.len() as u32)?
                    as usize;

            let id = ids[choice - 1];
            if chosen.contains(&id) {
                writeln!(self.output, "Already selected. Please pick another one.")?;
            } else {
                chosen.push(id);
            }
        }

        Ok(chosen)
    }
}
