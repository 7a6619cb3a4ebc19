pub mod calculate;
pub mod collect;
pub mod prompt;
pub mod report;
pub mod validate;
