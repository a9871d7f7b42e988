//! CLI entry point for the hyperinterval finder

use clap::Parser;
use hint_finder::io::cli::{Cli, SearchRunner};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn main() -> hint_finder::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let interrupt = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupt);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
        log::warn!("could not install interrupt handler: {e}");
    }

    let mut runner = SearchRunner::new(cli).with_interrupt(interrupt);
    let stdout = std::io::stdout();
    runner.run(&mut stdout.lock()).map(|_| ())
}
