//! rfs-files - command line front end for the file helpers.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use rfs_files::config::{ConfigResolver, DefaultsProvider, Question};
use rfs_files::{Generator, Settings};

#[derive(Parser)]
#[command(name = "rfs-files")]
#[command(about = "Read-or-create files, interactive config files and debounced watching")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the config stored at PATH, asking for it first when it does not exist
    Config {
        path: PathBuf,

        /// Question as `prop=question text`, asked in the given order
        #[arg(long = "ask", value_name = "PROP=QUESTION")]
        ask: Vec<Question>,

        /// JSON or YAML file with a list of questions, asked before `--ask` ones
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Defaults as JSON or YAML text
        #[arg(long)]
        defaults: Option<String>,
    },
    /// Print the content of PATH, creating the file first when it does not exist
    ReadOrCreate {
        path: PathBuf,

        /// Content of the new file
        #[arg(long, conflicts_with = "copy_from")]
        text: Option<String>,

        /// Copy the content of the new file from this file
        #[arg(long)]
        copy_from: Option<PathBuf>,
    },
    /// Print a line every time PATH changes, until interrupted
    Watch {
        path: PathBuf,

        /// Debounce window, overrides RFS_FILES_DEBOUNCE_MS
        #[arg(long)]
        window_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rfs_files::logging::init();

    let args = Args::parse();
    let settings = Settings::from_env()?;

    match args.command {
        Command::Config {
            path,
            ask,
            questions,
            defaults,
        } => {
            let mut all_questions = match questions {
                Some(file) => load_questions(&file).await?,
                None => Vec::new(),
            };
            all_questions.extend(ask);

            let defaults = defaults.map(DefaultsProvider::Text).unwrap_or_default();
            let resolver = ConfigResolver::new(settings);
            let config = resolver
                .resolve_interactive(&path, defaults, &all_questions)
                .await?;

            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::ReadOrCreate {
            path,
            text,
            copy_from,
        } => {
            let generator = match (text, copy_from) {
                (Some(text), _) => Generator::Fixed(text),
                (None, Some(source)) => Generator::CopyFrom(source),
                (None, None) => Generator::Empty,
            };
            let path = settings.resolve_path(&path)?;
            let content = rfs_files::read_or_create(&path, generator).await?;

            print!("{content}");
        }
        Command::Watch { path, window_ms } => {
            let settings = match window_ms {
                Some(millis) => settings.with_debounce(Duration::from_millis(millis)),
                None => settings,
            };
            let path = settings.resolve_path(&path)?;
            let handle = rfs_files::watch_with_settings(&path, &settings, |changed| {
                println!("changed: {}", changed.display());
            })?;
            info!(path = %handle.path().display(), "watching, press Ctrl-C to stop");

            tokio::signal::ctrl_c()
                .await
                .context("failed to listen for Ctrl-C")?;
            handle.unwatch();
        }
    }

    Ok(())
}

async fn load_questions(file: &Path) -> anyhow::Result<Vec<Question>> {
    let text = rfs_files::read(file).await?;
    let questions = if text.trim_start().starts_with('[') {
        serde_json::from_str(&text)?
    } else {
        serde_yaml::from_str(&text)?
    };

    Ok(questions)
}
