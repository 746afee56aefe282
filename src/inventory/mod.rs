//! Inventory Module
//!
//! In-memory record store for the shop's instruments.
//!
//! ## Responsibilities
//! - Own every `Record` for the process lifetime
//! - Enforce id uniqueness on add
//! - Locate records by id for edit/remove/purchase
//! - Preserve insertion order for persistence
//!
//! ## Data Structure Choice
//! Using a plain Vec with linear id lookup:
//! - Datasets are small and fit in memory
//! - Insertion order falls out for free (the codec writes it back verbatim)
//! - Index-based mutation avoids handing out long-lived references

mod table;

pub use table::Inventory;

use std::fmt;

/// One inventory line item
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Externally supplied identifier, unique across the store
    pub id: u32,

    /// Manufacturer name
    pub brand: String,

    /// Instrument type (e.g. "Drill", "Guitar")
    pub category: String,

    /// Unit price, currency implicit
    pub price: f64,

    /// Units in stock; purchases may drive this below zero
    pub quantity: i64,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, price: {}, quantity: {}",
            self.brand, self.category, self.price, self.quantity
        )
    }
}

/// A single-field overwrite applied by [`Inventory::edit`]
///
/// One variant per editable field, so an invalid field selector is
/// unrepresentable here; mapping user input onto a variant is the
/// session's job.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// Replace the brand
    Brand(String),

    /// Replace the instrument type
    Category(String),

    /// Replace the unit price
    Price(f64),

    /// Replace the stock count
    Quantity(i64),
}
