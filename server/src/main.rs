//! Wedding Chronicle preview server
//!
//! Serves the compiled invitation bundle and validates invitation content.
//! Run without a subcommand (as cargo-leptos does) to serve.

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use server::{DEFAULT_INVITATION, Shell, check, create_router};
use wedding_core::Config;

/// Command-line interface for the preview server.
#[derive(Parser)]
#[command(
    name = "server",
    version,
    about = "Preview server for the wedding invitation"
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    serve: ServeArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where the built site lives. Defaults match cargo-leptos.
#[derive(clap::Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "LEPTOS_SITE_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Directory the bundle was built into
    #[arg(long, env = "LEPTOS_SITE_ROOT", default_value = "target/site")]
    site_root: PathBuf,

    /// Bundle directory under the site root
    #[arg(long, env = "LEPTOS_SITE_PKG_DIR", default_value = "pkg")]
    pkg_dir: String,

    /// Base name of the bundle files
    #[arg(long, env = "LEPTOS_OUTPUT_NAME", default_value = "wedding")]
    output_name: String,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate the invitation content
    Check {
        /// Path to the invitation document
        #[arg(short, long, default_value = DEFAULT_INVITATION)]
        invitation: PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Check { invitation, strict }) => check::run(&invitation, strict),
        None => serve(cli.serve).await,
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let config = Config::embedded()?;
    let shell = Shell::from_config(&config, &args.pkg_dir, &args.output_name).render();
    let app = create_router(&args.site_root, &args.pkg_dir, shell);

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    tracing::info!(addr = %args.addr, site_root = ?args.site_root, "Serving invitation");
    println!("Listening on http://{}", args.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
