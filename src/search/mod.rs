pub mod executor;
pub mod merge;
pub mod results;
