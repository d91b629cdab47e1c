//! Pure domain logic for the preset catalog: error taxonomy, identifier
//! allocation, tag parsing, export validation, and the on-disk document
//! types. No filesystem access happens in this crate; the `catalog` crate
//! owns all I/O.

pub mod error;
pub mod export;
pub mod ident;
pub mod preset;
pub mod tags;

pub use error::CatalogError;
