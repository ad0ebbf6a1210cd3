pub mod chart;
pub mod comment_table;
pub mod filters;
pub mod sentiment_charts;
pub mod status;
pub mod summary;
pub mod word_charts;

pub use chart::{Chart, ChartSpec};
pub use comment_table::CommentTable;
pub use filters::FilterPanel;
pub use sentiment_charts::SentimentCharts;
pub use word_charts::WordCharts;
