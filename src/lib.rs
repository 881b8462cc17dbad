pub mod args;
pub mod constants;
pub mod error;
pub mod input;
pub mod model;
pub mod processor;
pub mod utils;
