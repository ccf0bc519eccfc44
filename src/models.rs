// src/models.rs
pub mod page_stats;
pub mod placeholder;

pub use page_stats::PageStats;
pub use placeholder::Placeholder;
