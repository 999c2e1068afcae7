use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Command line interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "lzwhuf",
    version,
    about = "An LZW + Huffman pipeline file compressor",
    long_about = "
    Compresses files through LZW dictionary substitution followed by static
    Huffman coding. The LZW stage is skipped automatically whenever its
    trial encoding does not shrink the input.

    It is done in the spirit of learning, both learning Rust and learning
    compression techniques."
)]
pub struct Args {
    /// Sets verbosity. -v shows progress, -vv adds stage detail, -vvv is chatty
    #[clap(short = 'v', long = "verbose", parse(from_occurrences), global = true)]
    pub verbose: usize,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress INPUT into the container format at OUTPUT
    Compress {
        /// File to compress
        input: PathBuf,
        /// Where to write the compressed container
        output: PathBuf,
    },
    /// Restore the original bytes from a compressed INPUT
    Decompress {
        /// Compressed container to read
        input: PathBuf,
        /// Where to write the restored bytes
        output: PathBuf,
    },
}

/// Map the repeated -v flag onto a log level. Errors always show.
pub fn level_filter(verbose: usize) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
