//! Seller flow
//!
//! View, add, edit, and remove inventory records.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::inventory::{FieldEdit, Record};

use super::{prompt, Session};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Seller menu loop
    pub(super) fn run_seller(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "Select an action:")?;
            writeln!(self.output, "1. View the inventory")?;
            writeln!(self.output, "2. Add a new instrument")?;
            writeln!(self.output, "3. Edit an instrument")?;
            writeln!(self.output, "4. Remove an instrument")?;
            writeln!(self.output, "5. Quit")?;

            match prompt::prompt_choice(&mut self.input, &mut self.output, 1, 5)? {
                1 => self.view()?,
                2 => self.add()?,
                3 => self.edit()?,
                4 => self.remove()?,
                _ => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    /// List every record with its id
    fn view(&mut self) -> Result<()> {
        let listing: Vec<String> = {
            let inventory = self.inventory.lock();
            inventory
                .iter()
                .map(|r| {
                    format!(
                        "{}. {} {} - {} ({} in stock)",
                        r.id, r.brand, r.category, r.price, r.quantity
                    )
                })
                .collect()
        };

        writeln!(self.output, "Inventory:")?;
        for line in listing {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Add flow: per-field validation loops, then a confirmation
    fn add(&mut self) -> Result<()> {
        let id = loop {
            let id: u32 = prompt::prompt_parse(
                &mut self.input,
                &mut self.output,
                "Enter the instrument id: ",
                "Error: the id must be an integer.",
            )?;
            if self.inventory.lock().contains(id) {
                writeln!(self.output, "Error: id {id} already exists.")?;
            } else {
                break id;
            }
        };

        let brand = prompt::prompt_nonempty(
            &mut self.input,
            &mut self.output,
            "Enter the brand: ",
            "Error: the brand cannot be empty.",
        )?;
        let category = prompt::prompt_nonempty(
            &mut self.input,
            &mut self.output,
            "Enter the instrument type: ",
            "Error: the instrument type cannot be empty.",
        )?;
        let price: f64 = prompt::prompt_parse(
            &mut self.input,
            &mut self.output,
            "Enter the price: ",
            "Error: the price must be a number.",
        )?;
        let quantity: i64 = prompt::prompt_parse(
            &mut self.input,
            &mut self.output,
            "Enter the quantity: ",
            "Error: the quantity must be an integer.",
        )?;

        writeln!(
            self.output,
            "You are adding: {id};{brand};{category};{price};{quantity}"
        )?;
        if !prompt::confirm(
            &mut self.input,
            &mut self.output,
            "Enter Y to confirm, anything else to cancel: ",
        )? {
            writeln!(self.output, "Add cancelled.")?;
            return Ok(());
        }

        let record = Record {
            id,
            brand,
            category,
            price,
            quantity,
        };
        match self.inventory.lock().add(record) {
            Ok(()) => {
                tracing::debug!(id, "record added");
                writeln!(self.output, "Instrument added.")?;
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    /// Edit flow: id re-prompts until found, one shot at the field selector
    fn edit(&mut self) -> Result<()> {
        let (id, found) = loop {
            let id: u32 = prompt::prompt_parse(
                &mut self.input,
                &mut self.output,
                "Enter the instrument id: ",
                "Error: the id must be an integer.",
            )?;
            let display = self.inventory.lock().find(id).map(|r| r.to_string());
            match display {
                Some(display) => break (id, display),
                None => writeln!(self.output, "Error: no instrument with that id.")?,
            }
        };
        writeln!(self.output, "Found: {found}")?;

        writeln!(
            self.output,
            "Enter the number of the field to change (1 - brand, 2 - type, 3 - price, 4 - quantity):"
        )?;
        let selector = prompt::read_line(&mut self.input)?;
        let edit = match selector.trim() {
            "1" => FieldEdit::Brand(prompt::prompt_nonempty(
                &mut self.input,
                &mut self.output,
                "Enter the new brand: ",
                "Error: the brand cannot be empty.",
            )?),
            "2" => FieldEdit::Category(prompt::prompt_nonempty(
                &mut self.input,
                &mut self.output,
                "Enter the new instrument type: ",
                "Error: the instrument type cannot be empty.",
            )?),
            "3" => FieldEdit::Price(prompt::prompt_parse(
                &mut self.input,
                &mut self.output,
                "Enter the new price: ",
                "Error: the price must be a number.",
            )?),
            "4" => FieldEdit::Quantity(prompt::prompt_parse(
                &mut self.input,
                &mut self.output,
                "Enter the new quantity: ",
                "Error: the quantity must be an integer.",
            )?),
            _ => {
                writeln!(self.output, "Error: invalid field number.")?;
                return Ok(());
            }
        };

        let updated = {
            let mut inventory = self.inventory.lock();
            inventory.edit(id, edit).map(|r| r.to_string())
        };
        match updated {
            Ok(updated) => {
                writeln!(self.output, "Instrument updated:")?;
                writeln!(self.output, "{updated}")?;
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    /// Remove flow: one shot at the id, then a confirmation
    fn remove(&mut self) -> Result<()> {
        let id: u32 = prompt::prompt_parse(
            &mut self.input,
            &mut self.output,
            "Enter the id of the instrument to remove: ",
            "Error: the id must be an integer.",
        )?;

        let display = self.inventory.lock().find(id).map(|r| r.to_string());
        let Some(display) = display else {
            writeln!(self.output, "No instrument with that id!")?;
            return Ok(());
        };

        writeln!(self.output, "Removing: {display}")?;
        if !prompt::confirm(
            &mut self.input,
            &mut self.output,
            "Enter Y to confirm, anything else to cancel: ",
        )? {
            writeln!(self.output, "Remove cancelled.")?;
            return Ok(());
        }

        match self.inventory.lock().remove(id) {
            Ok(removed) => {
                tracing::debug!(id = removed.id, "record removed");
                writeln!(self.output, "Instrument removed.")?;
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }
}
