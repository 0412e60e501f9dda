pub mod engine;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parser;
