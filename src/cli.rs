use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Canonical tagged text
    #[default]
    Raw,
    /// Intercepting-proxy scope JSON
    Burp,
    /// Dynamic-scanner context XML
    Zap,
}

impl OutputFormat {
    /// Parse a configuration-file value. Unknown names are `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "raw" => Some(Self::Raw),
            "burp" => Some(Self::Burp),
            "zap" => Some(Self::Zap),
            _ => None,
        }
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "scopeconv",
    version,
    about = "Convert bug bounty scope definitions between tool formats",
    long_about = "scopeconv reads tagged scope files, classifies and deduplicates their targets, and converts the merged scope into Burp Suite JSON, ZAP context XML, or normalized tagged text."
)]
pub struct Cli {
    /// Scope files to convert (tagged text, merged in order)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Context name for zap output
    #[arg(short, long)]
    pub name: Option<String>,

    /// Marker line opening the include section
    #[arg(long)]
    pub include_tag: Option<String>,

    /// Marker line opening the exclude section
    #[arg(long)]
    pub exclude_tag: Option<String>,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not echo identified targets
    #[arg(short, long)]
    pub silent: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
