//! shoplist-core: Shopping list state, entry validation, and progress summary.
//!
//! A list holds items in insertion order plus the raw text of the entry
//! form (name, quantity, unit) and the last validation message. Items are
//! created only by a successful add, flipped by toggle, and removed by
//! delete. Nothing is persisted; a [`ListState`] lives for one session.
//!
//! # Validation order
//!
//! Adding an entry checks, first failure wins:
//! 1. all three fields non-empty after trimming
//! 2. quantity parses as a positive number
//! 3. `"<quantity> <unit>"` has no run of two or more whitespace chars
//! 4. no existing item has the same name, ignoring case
//!
//! ```
//! use shoplist_core::{ListState, Summary, ValidationError};
//!
//! let mut list = ListState::new();
//! list.add_item("Milk", "2", "liter").unwrap();
//! assert_eq!(list.add_item("milk", "1", "liter"), Err(ValidationError::DuplicateItem));
//! assert_eq!(list.summary(), Summary::Remaining(1));
//! ```

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod command;
pub mod error;
pub mod item;
pub mod list;
pub mod quantity;
pub mod summary;
pub mod validation;

pub use command::*;
pub use error::*;
pub use item::*;
pub use list::*;
pub use quantity::*;
pub use summary::*;
pub use validation::*;
