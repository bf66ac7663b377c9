pub mod api;
pub mod executor;
pub mod parser;
