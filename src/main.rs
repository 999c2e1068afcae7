//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use simplelog::{Config, TermLogger, TerminalMode};

use lzwhuf::compression::compress::compress_file;
use lzwhuf::compression::decompress::decompress_file;
use lzwhuf::tools::cli::{level_filter, Args, Command};

fn main() -> ExitCode {
    let args = Args::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        level_filter(args.verbose),
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    //----- Figure out what we need to do and go do it
    let result = match &args.command {
        Command::Compress { input, output } => compress_file(input, output),
        Command::Decompress { input, output } => decompress_file(input, output),
    };

    match result {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
