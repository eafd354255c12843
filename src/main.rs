use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{error, info, LevelFilter};

use icon_finder::args::Args;

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'info' instead.",
            args.log_level
        );
        LevelFilter::Info
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!("Running icon finder");
    if let Err(err) = icon_finder::run(&args) {
        error!("{:#}", err);
        process::exit(1);
    }
    info!("Icon finder has completed");
}
