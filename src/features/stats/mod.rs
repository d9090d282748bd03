pub mod dto;
pub mod handler;
pub mod service;

pub use dto::{StateCount, StatsDto, TagCount, TagStatDto, TaxonomyCount};
pub use handler::handle_stats;
pub use service::{STATE_SUMMARY_LIMIT, StatsService};
