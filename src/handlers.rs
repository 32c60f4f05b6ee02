//! CLI command handlers.
//!
//! Separated from main.rs so the conversion flow can be unit tested. Exit
//! codes: 0 on success, 1 for unusable input or a missing context name, 2 for
//! I/O failures.

use colored::Colorize;
use std::env;
use std::fs;
use std::process::ExitCode;
use tracing::{debug, error, info};

use crate::cli::Cli;
use crate::config::{Config, Settings};
use crate::error::{Result, ScopeError};
use crate::render::DocumentRenderer;
use crate::scope::{ScopeDocument, merge, parse};
use crate::source::{FileSource, ScopeSource};

/// Run a conversion over the inputs named on the command line.
pub fn handle_convert(cli: &Cli) -> ExitCode {
    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return match e {
                ScopeError::Read { .. } => ExitCode::from(2),
                _ => ExitCode::from(1),
            };
        }
    };
    let settings = Settings::resolve(cli, &config);

    info!(inputs = ?cli.inputs, format = ?settings.format, "Starting conversion");

    // One unreadable input must not take the others down with it.
    let mut documents = Vec::new();
    let mut failures = 0usize;
    for path in &cli.inputs {
        let source = FileSource::new(path);
        match source.produce() {
            Ok(text) => {
                let doc = parse(&text, &settings.markers);
                debug!(origin = %source.origin(), entries = doc.len(), "Parsed scope input");
                documents.push(doc);
            }
            Err(e) => {
                error!(origin = %source.origin(), error = %e, "Skipping unreadable input");
                eprintln!("{e}");
                failures += 1;
            }
        }
    }

    if documents.is_empty() && failures > 0 {
        return ExitCode::from(2);
    }

    let mut document = merge(&documents).document;
    if settings.name.is_some() {
        document.name = settings.name.clone();
    }

    if document.is_empty() {
        eprintln!("{}", ScopeError::EmptyDocument);
        return ExitCode::from(1);
    }

    if !settings.silent {
        eprint!("{}", format_targets(&document));
    }

    let renderer = DocumentRenderer::new(settings.format).with_markers(settings.markers.clone());
    let output = match renderer.render(&document) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    match settings.output {
        Some(ref path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("{}", ScopeError::write_error(path.display(), e));
                return ExitCode::from(2);
            }
            if !settings.silent {
                eprintln!("Output written to {}", path.display());
            }
        }
        None => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
        }
    }

    debug!(
        entries = document.len(),
        excluded = document.excluded().count(),
        "Conversion completed"
    );
    ExitCode::SUCCESS
}

/// Load the config file named with `-c`, or fall back to discovery in the
/// working directory.
fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config.as_deref() {
        Some(path) => Config::from_file(path),
        None => {
            let cwd = env::current_dir().ok();
            Ok(Config::load(cwd.as_deref()))
        }
    }
}

/// Format the identified targets for the terminal. Goes to stderr so the
/// converted output on stdout stays pipeable.
fn format_targets(doc: &ScopeDocument) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Identified targets:".bold()));
    for entry in doc.included() {
        output.push_str(&format!(
            "  {} {} [{}]\n",
            "+".green().bold(),
            entry.pattern.green(),
            entry.kind
        ));
    }
    for entry in doc.excluded() {
        output.push_str(&format!(
            "  {} {} [{}]\n",
            "-".red().bold(),
            entry.pattern.red(),
            entry.kind
        ));
    }
    output.push_str(&format!(
        "{} included, {} excluded\n",
        doc.included().count(),
        doc.excluded().count()
    ));
    output
}
