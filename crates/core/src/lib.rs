//! Domain types for the shelf catalog.
//!
//! Everything here is free of I/O: catalog kinds, stored items and the
//! validated inputs that create or edit them, the typed per-kind records
//! exchanged over HTTP, and genre tag handling.

pub mod book;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod genre;
pub mod item;
pub mod movie;
pub mod music;
pub mod types;
pub mod validation;

pub use book::Book;
pub use catalog::CatalogKind;
pub use entity::CatalogEntity;
pub use movie::Movie;
pub use music::Music;
