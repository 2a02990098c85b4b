//! Command-line definition

use clap::{ArgAction, Args, Parser, Subcommand};
use figsearch_region::FigureKind;
use std::path::PathBuf;

/// Usage banner printed for `--help`, a missing argument or an unknown
/// operation
pub const USAGE: &str = "\
Usage: ./figsearch <operation> [...].
Operations:
  --help    Show help message.
  test      Checking the input file for correct bitmap image content.
  hline     Find the longest horizontal line in the image.
  vline     Find the longest vertical line in the image.
  square    Find the biggest square in the image.
Example: ./figsearch --help
";

#[derive(Parser, Debug)]
#[command(
    name = "figsearch",
    version,
    about = "Find lines and squares in binary bitmaps",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[arg(short = 'h', long, help = "Show help message")]
    pub help: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check the input file for correct bitmap content
    Test { file: PathBuf },
    /// Find the longest horizontal line
    Hline(SearchArgs),
    /// Find the longest vertical line
    Vline(SearchArgs),
    /// Find the largest square
    Square(SearchArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    pub file: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        help = "Write a mask of the found figure (.png, .pbm, otherwise text)"
    )]
    pub mask: Option<PathBuf>,
}

impl Commands {
    /// Figure searched for, or `None` for `test`
    pub fn figure_kind(&self) -> Option<FigureKind> {
        match self {
            Commands::Test { .. } => None,
            Commands::Hline(_) => Some(FigureKind::HorizontalLine),
            Commands::Vline(_) => Some(FigureKind::VerticalLine),
            Commands::Square(_) => Some(FigureKind::Square),
        }
    }
}
