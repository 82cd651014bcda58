//! # anchornav
//!
//! A heading outline that follows the scroll position.
//!
//! Launch the interactive viewer:
//! ```sh
//! anchornav README.md
//! ```
//!
//! Inspect the outline from scripts:
//! ```sh
//! anchornav -l -o json README.md
//! anchornav --at 450 README.md
//! anchornav --goto heading-3 README.md
//! ```

mod cli;

use anchornav::adapter::Anchor;
use anchornav::config::DOCUMENT_SELECTOR;
use anchornav::tui::{App, OutlineView};
use anchornav::{Config, parser, tui};
use clap::{CommandFactory, Parser as ClapParser};
use cli::{Cli, Command, OutputFormat};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use std::io;
use std::process;
use std::time::Duration;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    init_logging(&args);

    if let Some(Command::Completions { shell }) = &args.command {
        clap_complete::generate(*shell, &mut Cli::command(), "anchornav", &mut io::stdout());
        return Ok(());
    }

    let Some(path) = args.file.clone() else {
        eprintln!("Error: markdown file argument is required");
        eprintln!("\nUsage: anchornav [OPTIONS] <FILE>");
        eprintln!("       anchornav completions <SHELL>");
        process::exit(1);
    };

    let mut config = match args.config.as_deref() {
        Some(config_path) => Config::load_from(config_path),
        None => Config::load(),
    };
    args.apply(&mut config);
    if config.anchor.content_selector.trim().is_empty() {
        config.anchor.content_selector = DOCUMENT_SELECTOR.to_string();
    }

    let document = parser::parse_file(&path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    if args.is_batch() {
        return run_batch(&args, document, &config);
    }

    let app = App::new(document, path, &config)?;
    let mut terminal = ratatui::init();
    let result = tui::run(&mut terminal, app);
    ratatui::restore();
    result
}

/// Log to stderr per `RUST_LOG`. The viewer stays silent by default so
/// nothing is written over the screen it draws.
fn init_logging(args: &Cli) {
    let default_filter = if args.is_batch() || args.command.is_some() {
        "warn"
    } else {
        "off"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run_batch(args: &Cli, document: parser::Document, config: &Config) -> Result<()> {
    if args.count {
        print!("{}", cli::output::heading_counts(&document));
    }

    let mut view = OutlineView::new(document, config.scan.line_height, Duration::ZERO);
    let mut anchor = Anchor::mount(config.anchor.clone(), &mut view)?;

    if args.list {
        match args.output {
            OutputFormat::Plain => print!("{}", cli::output::outline_plain(&anchor)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&cli::output::outline_json(&anchor))?
            ),
        }
    }

    if let Some(position) = args.at {
        anchor.on_scroll(&mut view, position);
        println!("{}", anchor.active_id().unwrap_or("none"));
    }

    if let Some(ref id) = args.goto {
        match anchor.try_navigate(&mut view, id) {
            Ok(destination) => println!("{}", destination),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    Ok(())
}
