use clap::Parser;

use log::debug;

mod cli;
mod config;
mod launcher;
mod runner;

use crate::cli::Args;
use crate::config::LauncherConfig;
use crate::launcher::Launcher;
use crate::runner::SystemRunner;

fn run(args: &Args) -> proc_exit::ExitResult {
    if !args.args.is_empty() {
        debug!("Ignoring arguments: {}", args.args.join(" "));
    }

    Launcher::new(LauncherConfig::default(), SystemRunner)
        .launch()
        .report(std::io::stdout().lock())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let result = run(&args);

    proc_exit::exit(result);
}
