//! Shop Module
//!
//! The facade that coordinates codec, inventory, and persistence.
//!
//! ## Responsibilities
//! - Load the inventory file at startup and report what the decode found
//! - Hand out shared access to the inventory
//! - Guarantee the shutdown write runs at most once, whichever
//!   termination path gets there first

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::codec;
use crate::config::Config;
use crate::error::Result;
use crate::inventory::Inventory;

/// Inventory handle shared between the session and the interrupt handler
pub type SharedInventory = Arc<Mutex<Inventory>>;

/// The shop facade
pub struct Shop {
    /// Shop configuration
    config: Config,

    /// The record store, shared with the interrupt handler thread
    inventory: SharedInventory,

    /// Shutdown persistence, at most once per process
    guard: PersistGuard,
}

impl Shop {
    /// Open a shop from the configured inventory file
    ///
    /// On startup:
    /// 1. Decode the inventory file (missing file → empty store)
    /// 2. Log everything the decode pass skipped
    /// 3. Populate the store, dropping duplicate ids (first wins)
    pub fn open(config: Config) -> Self {
        let (records, report) = codec::load(&config.inventory_path);

        if report.source_missing {
            tracing::warn!(
                path = %config.inventory_path.display(),
                "inventory file not found, starting empty"
            );
        }
        if let Some(failure) = &report.io_failure {
            tracing::warn!(%failure, "inventory read failed partway, keeping what was parsed");
        }
        for error in &report.errors {
            tracing::warn!(
                line = error.line_number,
                content = %error.content,
                "skipped malformed line: {}",
                error.kind
            );
        }

        let mut inventory = Inventory::new();
        for record in records {
            // The store invariant must hold even over a hand-edited file;
            // the first occurrence of an id wins
            if let Err(err) = inventory.add(record) {
                tracing::warn!("dropped record from file: {err}");
            }
        }

        tracing::info!(
            records = inventory.len(),
            path = %config.inventory_path.display(),
            "inventory loaded"
        );

        let inventory = Arc::new(Mutex::new(inventory));
        let guard = PersistGuard {
            path: config.inventory_path.clone(),
            inventory: Arc::clone(&inventory),
            completed: Arc::new(AtomicBool::new(false)),
        };

        Self {
            config,
            inventory,
            guard,
        }
    }

    /// Shared handle to the inventory
    pub fn inventory(&self) -> SharedInventory {
        Arc::clone(&self.inventory)
    }

    /// Cloneable persistence guard, for the interrupt handler
    pub fn persist_guard(&self) -> PersistGuard {
        self.guard.clone()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Close the shop gracefully, persisting unless something already has
    pub fn close(self) -> Result<()> {
        self.guard.persist()?;
        Ok(())
    }
}

/// Runs the shutdown write at most once per process
///
/// Both termination paths converge here: the normal path through
/// [`Shop::close`] and the interrupt path through the Ctrl-C handler.
/// Whichever calls first performs the write; the other is a no-op.
#[derive(Clone)]
pub struct PersistGuard {
    /// Destination file
    path: PathBuf,

    /// The state to write
    inventory: SharedInventory,

    /// Flips to true when the single write attempt is claimed
    completed: Arc<AtomicBool>,
}

impl PersistGuard {
    /// Persist the current inventory state, unless already done
    ///
    /// Returns whether this call performed the write. A failed write
    /// still consumes the single attempt; there is no retry.
    pub fn persist(&self) -> Result<bool> {
        if self
            .completed
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Ok(false);
        }

        let inventory = self.inventory.lock();
        codec::save(&self.path, inventory.records())?;

        tracing::info!(
            records = inventory.len(),
            path = %self.path.display(),
            "inventory persisted"
        );
        Ok(true)
    }
}
