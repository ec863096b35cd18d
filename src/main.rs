use clap::Parser;
use log::{error, info};

use dirnote::{App, Cli, Config, NoteStore};

fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

fn run(cli: Cli) -> dirnote::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(notes_dir) = cli.notes_dir {
        config.notes_dir = notes_dir;
    }

    let store = NoteStore::new(config)?;
    let app = App::new(store, cli.verbose);
    app.run(cli.command)
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);
    info!("dirnote starting up");

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
