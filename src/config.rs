//! Command-line options and the runtime settings derived from them.

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{game::DEFAULT_SIZE, types::ControlScheme};

/// Maze sizes offered by the options menu, in cycling order.
///
/// Every preset fits in an 80x24 terminal.
pub(crate) const SIZE_PRESETS: [usize; 3] = [5, 10, 15];

/// Walk a randomly generated perfect maze from its top-left corner to its bottom-right corner.
#[derive(Debug, Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of cells on each side of the maze
    #[arg(short, long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(2..=40))]
    size: u16,

    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Arrow key mapping
    #[arg(value_enum, short, long, default_value_t = ControlScheme::Standard)]
    controls: ControlScheme,

    /// Code revealed when the maze is solved
    #[arg(long, default_value_t = '9')]
    code: char,

    /// Write log messages to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Print one maze to standard output and exit
    #[arg(short, long, default_value_t = false)]
    print: bool,
}

/// Runtime settings of the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Side length of the mazes to generate.
    pub size: usize,
    /// Seed of the maze sequence, random when absent.
    pub seed: Option<u64>,
    /// Arrow key mapping used in game.
    pub controls: ControlScheme,
    /// Code revealed when a maze is solved.
    pub code: char,
    /// Destination of log messages. No logger is installed when absent.
    pub log_file: Option<PathBuf>,
    /// Whether debug messages are logged.
    pub debug: bool,
    /// Whether to print a single maze instead of starting the interface.
    pub print: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            controls: ControlScheme::Standard,
            code: '9',
            log_file: None,
            debug: false,
            print: false,
        }
    }
}

impl Settings {
    /// Builds settings out of parsed arguments.
    fn from_parsed(args: Args) -> Self {
        Self {
            size: usize::from(args.size),
            seed: args.seed,
            controls: args.controls,
            code: args.code,
            log_file: args.log_file,
            debug: args.debug,
            print: args.print,
        }
    }

    /// Parses the process arguments.
    ///
    /// Invalid arguments make clap print its usage message and end the process.
    #[must_use]
    pub fn from_args() -> Self {
        Self::from_parsed(Args::parse())
    }

    /// Parses settings from an explicit argument list, whose first item is the program name.
    ///
    /// # Errors
    ///
    /// This function returns an error when an argument is unknown or a value is out of range.
    pub fn try_from_iter<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::from_parsed(Args::try_parse_from(args)?))
    }

    /// Builds the random number generator for the maze sequence.
    ///
    /// A seeded generator makes the whole sequence of mazes reproducible.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Moves the size to the next preset, wrapping around after the largest one.
    pub(crate) fn cycle_size(&mut self) {
        self.size = SIZE_PRESETS
            .into_iter()
            .find(|&preset| preset > self.size)
            .unwrap_or(SIZE_PRESETS[0]);
    }
}
