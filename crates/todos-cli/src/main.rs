mod cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "todos",
    about = "Todo management for the admin UI — serve the HTTP API or run actions directly",
    version,
    propagate_version = true
)]
struct Cli {
    /// Database file (default: todos.yaml, then ~/.todos/todos.db)
    #[arg(long, global = true, env = "TODOS_DB")]
    db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (default: from todos.yaml)
        #[arg(long)]
        port: Option<u16>,
    },

    /// List all todos, newest first
    List,

    /// Create a new todo
    Add {
        /// Title, 1-100 characters
        title: String,

        /// Create it already completed
        #[arg(long)]
        completed: bool,
    },

    /// Rename a todo, keeping its completion state
    Edit { id: i64, title: String },

    /// Flip a todo's completion state
    Toggle { id: i64 },

    /// Delete a todo
    Rm { id: i64 },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve { port } => cmd::serve::run(cli.db.as_deref(), port),
        Commands::List => cmd::list::run(cli.db.as_deref(), cli.json),
        Commands::Add { title, completed } => cmd::add::run(cli.db.as_deref(), &title, completed),
        Commands::Edit { id, title } => cmd::edit::run(cli.db.as_deref(), id, &title),
        Commands::Toggle { id } => cmd::toggle::run(cli.db.as_deref(), id),
        Commands::Rm { id } => cmd::remove::run(cli.db.as_deref(), id),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
