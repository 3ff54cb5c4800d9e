use anyhow::{anyhow, Context};
use clap::Parser;
use log::info;
use std::path::Path;
use studyplan_cli::cli::{Cli, Commands};
use studyplan_cli::commands;
use studyplan_core::db::{open_db, Connection};
use studyplan_core::{default_log_level, init_logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|err| anyhow!(err))?;
    }
    info!(
        "event=cli_command module=cli status=start command={}",
        cli.command.name()
    );

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Generate {
            file,
            chapter,
            save,
        } => {
            let text = commands::read_input(file.as_deref(), std::io::stdin().lock())?;
            let conn = if save { Some(open(&cli.db)?) } else { None };
            commands::generate(&text, chapter.as_deref(), conn.as_ref(), &mut out)?;
        }
        Commands::List => {
            commands::list(&open(&cli.db)?, &mut out)?;
        }
        Commands::Show { id } => commands::show(&open(&cli.db)?, id, &mut out)?,
        Commands::Toggle { id, day } => {
            commands::toggle(&open(&cli.db)?, id, day, &mut out)?;
        }
        Commands::Reset { id } => commands::reset(&open(&cli.db)?, id, &mut out)?,
    }
    Ok(())
}

fn open(db: &Path) -> anyhow::Result<Connection> {
    open_db(db).with_context(|| format!("failed to open {}", db.display()))
}
