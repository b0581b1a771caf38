//! # Storage Module
//!
//! Handles all data persistence for the donor registry.
//!
//! Everything lives in flat files under one data directory:
//!
//! ```text
//! data/
//! ├── donors.json   ← authoritative donor collection
//! ├── donors.csv    ← tabular mirror, regenerated on every save
//! └── users.csv     ← append-only user credentials
//! ```
//!
//! The domain layer talks to [`DonorStorage`] and [`UserStorage`]; the CSV/JSON
//! implementations live in [`csv`].

pub mod csv;
pub mod error;
pub mod traits;

pub use self::csv::{CsvConnection, DonorRepository, RecordStore, UserRepository};
pub use error::StoreError;
pub use traits::{DonorStorage, UserStorage};
