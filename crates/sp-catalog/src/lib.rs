//! `sp-catalog` — subjects, chapters, and the in-memory catalog.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`subject`]   | `Subject`, `Chapter`                                      |
//! | [`catalog`]   | `Catalog` (add/remove subjects and chapters, active subject) |
//! | [`loader`]    | `load_catalog_csv`, `load_catalog_reader`                 |
//! | [`error`]     | `CatalogError`, `CatalogResult<T>`                        |
//!
//! The catalog is plain owned state for a single planning run.  Pass
//! [`Catalog::subjects`] to the scheduler to get a plan; nothing is persisted.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod subject;


pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog_csv, load_catalog_reader};
pub use subject::{Chapter, Subject};
