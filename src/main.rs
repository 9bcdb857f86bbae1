use anyhow::Result;
use clap::{Parser, Subcommand};
use git_unsaved::commands::open::open_repository;
use git_unsaved::commands::scan::scan;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "git-unsaved",
    version = "0.1.0",
    about = "Find all your dirty Git repositories",
    long_about = "Walks a directory tree, checks every Git repository it finds for \
    un-committed, un-stashed or un-pushed work, and lists the dirty ones as they \
    are discovered.",
    args_conflicts_with_subcommands = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        index = 1,
        help = "The root directory to scan (defaults to the current directory)"
    )]
    path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "scan",
        about = "Scan a directory tree for repositories with unsaved work"
    )]
    Scan {
        #[arg(index = 1, help = "The root directory to scan")]
        path: Option<String>,
    },
    #[command(name = "open", about = "Open a repository in the configured editor")]
    Open {
        #[arg(index = 1, help = "The repository path to open")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    match cli.command {
        Some(Commands::Open { path }) => open_repository(&path)?,
        Some(Commands::Scan { path }) => {
            scan(path.as_deref(), &mut stdout).await?;
        }
        None => {
            scan(cli.path.as_deref(), &mut stdout).await?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}
