use crate::config::ParserConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// List the logical records of a BAI2 statement file
#[derive(Parser, Debug)]
#[command(name = "bai2-records")]
#[command(about = "List the logical records of a BAI2 statement file", long_about = None)]
pub struct CliArgs {
    /// Input BAI2 file path
    #[arg(value_name = "INPUT", help = "Path to the input BAI2 file")]
    pub input_file: PathBuf,

    /// How strictly questionable input is treated
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "lenient",
        help = "Parse mode: 'lenient' warns about partial summary groups and leading continuation rows, 'strict' rejects them"
    )]
    pub mode: ParseMode,
}

/// Available parse modes
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ParseMode {
    Lenient,
    Strict,
}

impl CliArgs {
    /// Create a ParserConfig from CLI arguments
    pub fn to_parser_config(&self) -> ParserConfig {
        match self.mode {
            ParseMode::Lenient => ParserConfig::lenient(),
            ParseMode::Strict => ParserConfig::strict(),
        }
    }
}
