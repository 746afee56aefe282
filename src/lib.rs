//! # Stockroom
//!
//! A console inventory manager for instrument shops with:
//! - Delimited-text persistence with partial-success decoding
//! - Id-keyed CRUD over an in-memory record store
//! - Buyer and seller interactive workflows
//! - Exactly-once shutdown persistence (menu exit or Ctrl-C)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CLI (stdin/stdout)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Session                                │
//! │                (buyer / seller menus)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Inventory  │◄─────────│ PersistGuard│
//!   │   (Mutex)   │          │ (run once)  │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          ▼                        ▼
//!   ┌─────────────────────────────────────┐
//!   │                Codec                 │
//!   │       (instruments.csv, ';')         │
//!   └─────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod inventory;
pub mod session;
pub mod shop;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{Result, StockError};
pub use inventory::{FieldEdit, Inventory, Record};
pub use session::Session;
pub use shop::{PersistGuard, Shop};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Stockroom
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
