pub mod advisor;
pub mod api;
pub mod cipher;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod optimizer;
pub mod oracle;
pub mod scorer;

pub use self::error::{CrResult, CrackError};
