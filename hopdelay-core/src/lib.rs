pub mod align;
pub mod cli;
pub mod conf;
pub mod error;
pub mod event;
pub mod logging;
pub mod report;
pub mod run;
pub mod stats;

pub use error::DelayError;
