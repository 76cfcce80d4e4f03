//! Data models for the Bookish API

pub mod book;

pub use book::{Book, BookStatus, Collection, Record, SortField, SortOrder};
