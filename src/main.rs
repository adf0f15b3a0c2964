//! CLI entry point for create-post

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use create_post::commands::new::ScaffoldRequest;
use create_post::editor::{self, Editor};

#[derive(Parser)]
#[command(name = "create-post")]
#[command(version)]
#[command(about = "Scaffold a new blog post and open it in your editor", long_about = None)]
#[command(override_usage = "create-post [OPTIONS] [--draft|--til] <TITLE>...")]
struct Cli {
    /// Blog root directory (defaults to current directory)
    #[arg(short = 'C', long)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Date to stamp the post with, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Editor command (overrides _scaffold.yml, $VISUAL and $EDITOR)
    #[arg(long)]
    editor: Option<String>,

    /// Write the file without opening an editor
    #[arg(long)]
    no_edit: bool,

    /// Optional --draft or --til, followed by the post title
    #[arg(
        value_name = "TITLE",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    words: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "create_post=debug,info"
    } else {
        "create_post=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let blog = create_post::Blog::new(&base_dir)?;
    let request = ScaffoldRequest::from_args(&cli.words)?;
    tracing::debug!("Scaffolding {:?} dated {}", request, today);

    let file_path = blog.new_post(&request, today)?;
    println!("Created: {}", file_path.display());

    if cli.no_edit {
        return Ok(ExitCode::SUCCESS);
    }

    let preferred = cli.editor.as_deref().or(blog.config.editor.as_deref());
    let editor = Editor::from_env(preferred)?;
    let status = editor.open(&file_path)?;

    // The editor's exit status becomes ours
    Ok(ExitCode::from(editor::exit_code(status)))
}
