pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod record;
pub mod shorten;
pub mod util;
