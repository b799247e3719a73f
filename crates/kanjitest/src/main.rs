mod cli;
mod generate;

use clap::Parser;
use cli::Cli;
use env_logger::Env;
use kanjitest_core::KanjiError;
use log::LevelFilter;

/// Crates whose logs `--verbose` raises to debug
const VERBOSE_TARGETS: [&str; 3] = ["kanjitest", "kanjitest_core", "kanjitest_latex"];

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        for target in VERBOSE_TARGETS {
            builder.filter_module(target, LevelFilter::Debug);
        }
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = generate::run(cli.generation_options(), cli.no_render, cli.verbose);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(err) = e.downcast_ref::<KanjiError>() {
            eprintln!("  (failed during {})", err.stage());
        }
        std::process::exit(1);
    }
}
