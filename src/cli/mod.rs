pub mod output;

use anchornav::Config;
use anchornav::nav::HeadingTag;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "anchornav")]
#[command(version)]
#[command(about = "Heading outline that follows the scroll position")]
#[command(
    long_about = "anchornav - builds a navigation outline from a markdown document, tracks the\n\
    heading under the activation line while you scroll, and jumps to headings.\n\n\
    Launch without flags for the interactive viewer. Use flags to inspect the\n\
    outline from scripts.\n\n\
    Examples:\n  \
    anchornav README.md                  # Interactive viewer\n  \
    anchornav -l README.md               # List outline entries\n  \
    anchornav -l -o json README.md       # Outline as JSON\n  \
    anchornav --at 450 README.md         # Active heading at 450px\n  \
    anchornav --goto heading-3 README.md # Scroll destination for a heading"
)]
pub struct Cli {
    /// Markdown file to navigate
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// List the outline entries (non-interactive)
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Output format for --list
    #[arg(short = 'o', long = "output", default_value = "plain")]
    pub output: OutputFormat,

    /// Count headings by level
    #[arg(long = "count")]
    pub count: bool,

    /// Print the id of the heading active at this scroll position, or `none`
    #[arg(long = "at", value_name = "PIXELS", allow_negative_numbers = true)]
    pub at: Option<f64>,

    /// Print the scroll destination for a heading id
    ///
    /// Exits with status 1 when the document has no heading with that id.
    #[arg(long = "goto", value_name = "ID")]
    pub goto: Option<String>,

    /// Distance between the top of the viewport and the activation line
    #[arg(long = "offset-top", value_name = "PIXELS", allow_negative_numbers = true)]
    pub offset_top: Option<f64>,

    /// Height of one markdown line in pixels
    #[arg(long = "line-height", value_name = "PIXELS")]
    pub line_height: Option<f64>,

    /// Heading levels to include, comma separated
    ///
    /// Example: --levels h2,h3
    #[arg(long = "levels", value_name = "TAGS", value_delimiter = ',')]
    pub levels: Option<Vec<HeadingTag>>,

    /// Prefix generated ids with this key (`KEY-heading-N`)
    #[arg(long = "namespace", value_name = "KEY")]
    pub namespace: Option<String>,

    /// Prefix for fragment links
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// JSON output
    Json,
}

impl Cli {
    /// Whether any non-interactive mode was requested.
    pub fn is_batch(&self) -> bool {
        self.list || self.count || self.at.is_some() || self.goto.is_some()
    }

    /// Apply command line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(offset) = self.offset_top {
            config.anchor.offset_top = offset;
        }
        if let Some(line_height) = self.line_height {
            config.scan.line_height = line_height;
        }
        if let Some(ref levels) = self.levels {
            config.anchor.list_head = levels.clone();
        }
        if let Some(ref namespace) = self.namespace {
            config.anchor.namespace = Some(namespace.clone());
        }
        if let Some(ref base_url) = self.base_url {
            config.anchor.base_url = base_url.clone();
        }
    }
}
