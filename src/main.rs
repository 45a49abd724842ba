//! CLI entry point for treemd

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use treemd::{
    ConsoleReporter, DEFAULT_IGNORE_FILE, DEFAULT_OUTPUT_FILE, GeneratorConfig, generate,
    write_document,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treemd")]
#[command(about = "Write a Markdown tree of a project directory")]
#[command(version)]
struct Args {
    /// Project directory
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file name, written inside the project directory
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_FILE)]
    output: String,

    /// Name of the ignore file read from the project directory
    #[arg(long = "ignore-file", default_value = DEFAULT_IGNORE_FILE)]
    ignore_file: String,

    /// Print the document to stdout instead of writing a file
    #[arg(long = "stdout")]
    stdout: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Suppress progress messages
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; ignore that case
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };
    // Canonical form gives "." and ".." a real project name
    let root = root.canonicalize().unwrap_or(root);

    if !root.is_dir() {
        eprintln!(
            "treemd: cannot access '{}': No such directory",
            args.path.display()
        );
        process::exit(1);
    }

    let config = GeneratorConfig {
        root,
        output_file: args.output.clone(),
        ignore_file: args.ignore_file.clone(),
    };

    if let Err(e) = run(&config, &args) {
        eprintln!("treemd: {}", e);
        process::exit(1);
    }
}

fn run(config: &GeneratorConfig, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let generated_at = Local::now().naive_local();

    if args.stdout {
        let generated = generate(config, generated_at)?;
        print!("{}", generated.markdown);
        return Ok(());
    }

    let output_path = config.output_path()?;
    let mut reporter = (!args.quiet).then(|| ConsoleReporter::stdout(should_use_color(args.color)));

    if let Some(r) = reporter.as_mut() {
        r.start(&treemd::generate::project_name(&config.root), &config.root)?;
        r.scanning()?;
    }

    let generated = generate(config, generated_at)?;

    if let Some(r) = reporter.as_mut() {
        r.found(generated.document.total())?;
    }

    write_document(&output_path, &generated.markdown)?;

    if let Some(r) = reporter.as_mut() {
        r.finished(&output_path, generated.line_count())?;
    }

    Ok(())
}
