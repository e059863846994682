//! Command-line surface

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::session::{Group, SessionBootstrapper, SessionOrigin};

#[derive(Debug, Parser)]
#[command(name = "studyflow", version, about = "Two-group learning experiment wizard")]
pub struct Cli {
    /// Directory for the participant database, config and logs (default: ~/.studyflow)
    #[arg(long, global = true, env = "STUDYFLOW_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect or clear the stored participant session
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Print the participant session, creating it if none is stored
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Forget the stored session; the next run is a new participant
    Reset,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionReport<'a> {
    participant_id: &'a str,
    group: Group,
    origin: SessionOrigin,
}

pub fn run_session_command<W: Write>(
    command: SessionCommand,
    bootstrapper: &SessionBootstrapper,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        SessionCommand::Show { json } => {
            let resolved = bootstrapper.resolve();
            let report = SessionReport {
                participant_id: &resolved.session.participant_id,
                group: resolved.session.group,
                origin: resolved.origin,
            };
            if json {
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                writeln!(out, "participant id: {}", report.participant_id)?;
                writeln!(out, "group:          {}", report.group)?;
                writeln!(out, "origin:         {:?}", report.origin)?;
            }
        }
        SessionCommand::Reset => {
            bootstrapper.clear()?;
            writeln!(out, "Participant session cleared")?;
        }
    }
    Ok(())
}
