pub mod comparator;
pub mod option_stripper;
pub mod report_formatter;
pub mod segmenter;
pub mod similarity;

pub use comparator::{compare, compare_pair, DUPLICATE_SCORE, SIMILAR_THRESHOLD};
pub use option_stripper::strip_options;
pub use report_formatter::format_report;
pub use segmenter::segment;
pub use similarity::score;
