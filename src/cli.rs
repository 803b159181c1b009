//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can generate the man page from it.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

/// Extract chat messages from exports and turn text into word clouds.
#[derive(Debug, Parser)]
#[command(name = "msgcloud", version)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Combined verbosity: negative when quiet.
    pub fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            self.verbose.min(i8::MAX as u8) as i8
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract one person's messages from a chat log export
    #[command(long_about = "Extract one person's messages from a chat log export.\n\n\
        Only two-person conversations are read; group threads are skipped. \
        With --self, your own messages are included in every conversation \
        where the person has spoken.")]
    Parse(ParseArgs),

    /// Render a word cloud from a text file
    Render(RenderArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Full name of the person to get messages for, as shown in the export
    #[arg(short, long, value_name = "NAME")]
    pub person: String,

    /// Full name of the chat log owner
    #[arg(short = 's', long = "self", value_name = "NAME")]
    pub owner: Option<String>,

    /// Chat log HTML file [default: raw/messages.htm]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output directory for extracted messages [default: output]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Fail if the HTML parser had to repair the document
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Text file to build the cloud from
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory for the image [default: renders]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Max font size [default: 40]
    #[arg(short = 's', long = "font-size", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub font_size: Option<u32>,

    /// Show the cloud in the terminal instead of saving an image
    #[arg(long)]
    pub show: bool,

    /// JSON stopword list to use instead of the bundled English list
    #[arg(long, value_name = "PATH")]
    pub stopwords: Option<PathBuf>,

    /// Maximum number of words in the cloud
    #[arg(long, value_name = "N")]
    pub max_words: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}
