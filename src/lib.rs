pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;

pub use db::Database;
pub use error::{Error, Result};
pub use store::NoteStore;
