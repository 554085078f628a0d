use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "elk")]
#[command(about = "Elk: compile compact markup to indented HTML")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile an .elk file to HTML
    Build {
        /// Input .elk file
        path: PathBuf,

        /// Output file [default: the input path with an .html extension]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check an .elk file for syntax errors without writing output
    Check {
        /// Input .elk file
        path: PathBuf,
    },

    /// Print the parsed document tree as JSON
    Tree {
        /// Input .elk file
        path: PathBuf,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Build { path, output } => {
            let output = output.unwrap_or_else(|| default_output_path(&path));
            cmd_build(&path, &output);
        }
        Command::Check { path } => cmd_check(&path),
        Command::Tree { path } => cmd_tree(&path),
    }
}

/// Logs go to stderr; stdout carries syntax errors and JSON only.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("ELK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_output_path(input: &Path) -> PathBuf {
    let output = input.with_extension("html");
    if output == input {
        input.with_extension("out.html")
    } else {
        output
    }
}

fn read_source(path: &Path) -> String {
    tracing::debug!("Reading {}", path.display());
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

/// Print a syntax error on stdout and exit with status 1.
fn report_syntax_error(path: &Path, error: &elk_codegen::ParseError) -> ! {
    tracing::debug!(
        "Syntax error in {} at offset {}",
        path.display(),
        error.offset
    );
    println!("{error}");
    std::process::exit(1);
}

fn cmd_build(path: &Path, output_path: &Path) {
    let source = read_source(path);

    let output = match elk_codegen::compile(&source) {
        Ok(output) => output,
        Err(e) => report_syntax_error(path, &e),
    };
    tracing::debug!(
        "Compiled {} statements from {}",
        output.document.statements.len(),
        path.display()
    );

    if let Err(e) = std::fs::write(output_path, &output.html) {
        eprintln!("Error writing {}: {e}", output_path.display());
        std::process::exit(1);
    }

    tracing::info!("Built: {}", output_path.display());
}

fn cmd_check(path: &Path) {
    let source = read_source(path);

    if let Err(e) = elk_parser::Parser::parse(&source) {
        report_syntax_error(path, &e);
    }

    eprintln!("OK: {}", path.display());
}

fn cmd_tree(path: &Path) {
    let source = read_source(path);

    let doc = match elk_parser::Parser::parse(&source) {
        Ok(doc) => doc,
        Err(e) => report_syntax_error(path, &e),
    };

    match serde_json::to_string_pretty(&doc) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing tree: {e}");
            std::process::exit(1);
        }
    }
}
