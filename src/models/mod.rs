pub mod comparison;
pub mod question;

pub use comparison::{ComparisonResult, DuplicatePair, SimilarPair};
pub use question::{DocumentQuestionSet, QuestionRecord};
