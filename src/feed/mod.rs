pub mod aggregator;
pub mod matcher;
pub mod types;

pub use aggregator::{parse_titles, FeedAggregator};
pub use matcher::HeadlineMatcher;
