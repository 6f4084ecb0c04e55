//! Page-by-page preview of a table
//!
//! Pages are 1-based, fixed-size, contiguous row ranges. A [`Page`] borrows
//! the table it views and cannot outlive it.

pub mod pagination;

pub use pagination::{page, total_pages, Page, Paginator};
