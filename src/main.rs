use anyhow::Result;
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::io;
use studyflow::cli::{run_session_command, Cli, Command};
use studyflow::{open_store, util, App, Config, SessionBootstrapper};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Log to file (~/.studyflow/logs/studyflow.log) so the TUI stays clean
    fs::create_dir_all(util::logs_dir())?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let config = Config::load();
    let store = open_store(config.storage, util::database_path());
    let bootstrapper = SessionBootstrapper::new(store);

    match cli.command {
        Some(Command::Session { command }) => {
            run_session_command(command, &bootstrapper, &mut io::stdout())
        }
        None => {
            let mut app = App::new(config, bootstrapper);
            app.run().await
        }
    }
}
