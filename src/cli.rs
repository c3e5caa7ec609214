use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the `.tab` files
    pub table_dir: PathBuf,
    /// OTP release whose table layout to read
    #[arg(long, default_value_t = 21, value_parser = clap::value_parser!(u32).range(19..=21))]
    pub otp: u32,
    /// What to print once the tables are loaded
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    pub format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Summary,
    Json,
}
