mod error;
pub mod utils;
pub use error::{Error, Result};

pub mod clients;
pub mod completions;
pub mod config;
pub mod generator;
pub mod handler;
pub mod prompt;
pub mod storage;
pub mod writer;
