use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use intro_forge_config::Config;
use intro_forge_engine::{RenderMode, SnapshotFormat};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "intro-forge")]
#[command(about = "Turn an introduction form snapshot into a document, HTML source, or JSON")]
struct Cli {
    /// Config file to use instead of ~/.config/intro-forge/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a snapshot file (.toml or .json)
    Render {
        /// Snapshot file holding the form values
        form: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Document)]
        format: OutputFormat,
        /// Picture to inline in place of the picture reference
        #[arg(long)]
        picture: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a blank snapshot with the configured default courses
    Template {
        #[arg(long, value_enum, default_value_t = TemplateFormat::Toml)]
        format: TemplateFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Document,
    Markup,
    Json,
}

impl From<OutputFormat> for RenderMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Document => RenderMode::Document,
            OutputFormat::Markup => RenderMode::Markup,
            OutputFormat::Json => RenderMode::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateFormat {
    Toml,
    Json,
}

impl From<TemplateFormat> for SnapshotFormat {
    fn from(format: TemplateFormat) -> Self {
        match format {
            TemplateFormat::Toml => SnapshotFormat::Toml,
            TemplateFormat::Json => SnapshotFormat::Json,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            form,
            format,
            picture,
            output,
        } => {
            let body =
                commands::render_form(&config, &form, format.into(), picture.as_deref()).await?;
            match output {
                Some(path) => {
                    commands::write_output(&path, &body).await?;
                    log::info!("Wrote {}", path.display());
                }
                None => println!("{body}"),
            }
        }
        Commands::Template { format } => {
            print!("{}", commands::template(&config, format.into()));
        }
    }

    Ok(())
}
