pub mod inline;
pub mod limit;
pub mod outcome;
pub mod listing;
pub mod parse;
pub mod relations;
pub mod stream;
