pub mod app;
pub mod config;
pub mod error;
pub mod git;
pub mod parser;
pub mod types;
pub mod ui;

pub use error::TallyError;
pub use parser::parse_porcelain;
pub use types::{Category, Summary};
