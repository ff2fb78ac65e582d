//! Command-line front end for the Fable skin manager.
//!
//! Drives a [`SkinManager`] over a file-backed store, so the whole
//! lifecycle -- upload, toggle, delete, push, pull, early boot -- can be
//! exercised from a shell. The injected style element becomes a CSS
//! file in the data directory.

mod sink;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use fable_core::{ManagerConfig, SkinManager};
use fable_render::{RenderContext, Renderer};
use fable_skin::{SkinRegistry, encode_key, template};
use fable_store::{FileStore, LocalStore};
use fable_sync::{HttpRemote, SyncClient};
use fable_types::{SkinDocument, fingerprint_from_cookie_header};

use sink::FileSink;

#[derive(Parser)]
#[command(name = "fable-skins", version, about = "Manage user CSS skins for a Fable site")]
struct Cli {
    /// Directory holding the local skin document and applied CSS.
    #[arg(long, default_value = ".fable", env = "FABLE_DATA_DIR")]
    data_dir: PathBuf,

    /// Raw Cookie header carrying the login session.
    #[arg(long, env = "FABLE_COOKIE")]
    cookie: Option<String>,

    /// Remote store base URL (overrides the config file).
    #[arg(long, env = "FABLE_REMOTE")]
    remote: Option<String>,

    /// TOML configuration file.
    #[arg(long, env = "FABLE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List stored skins.
    List,
    /// Validate and store a skin from a CSS file.
    Add { file: PathBuf },
    /// Toggle a skin active/inactive, by key or name.
    Use { skin: String },
    /// Delete a skin, by key or name.
    Rm { skin: String },
    /// Print the starter skin template.
    Template,
    /// Push the local skin document to the remote store.
    Push,
    /// Pull the remote skin document, replacing the local copy.
    Pull,
    /// Print the CSS the early-boot path would inject, if any.
    Boot,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let fingerprint = cli
        .cookie
        .as_deref()
        .and_then(|header| fingerprint_from_cookie_header(header, &config.cookie_name));

    match &cli.command {
        Command::Template => {
            print!("{}", template());
            return Ok(());
        },
        Command::Boot => return boot(&cli, &config),
        _ => {},
    }

    let store = FileStore::open(&cli.data_dir)
        .with_context(|| format!("opening data dir {}", cli.data_dir.display()))?;
    let local = LocalStore::with_storage_key(store, config.storage_key.clone(), fingerprint.clone());
    let remote_url = config.remote_url.clone();
    let remote = HttpRemote::new(
        remote_url.clone().unwrap_or_default(),
        fingerprint.as_deref().unwrap_or(""),
    );
    let mut manager = SkinManager::new(
        SkinRegistry::new(local),
        Renderer::new(RenderContext {
            admin: config.admin_context,
        }),
        SyncClient::with_timeout(remote, config.timeout()),
    );
    let mut sink = FileSink::new(&cli.data_dir);

    match cli.command {
        Command::List => list(&manager),
        Command::Add { file } => {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let content = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let key = manager.upload(&name, content)?;
            println!("added skin {key}");
        },
        Command::Use { skin } => {
            let key = resolve_key(&manager.document(), &skin);
            manager.toggle(&key)?;
            manager.apply(&mut sink);
            match manager.document().active {
                Some(active) => println!("active skin: {active}"),
                None => println!("no active skin"),
            }
        },
        Command::Rm { skin } => {
            let key = resolve_key(&manager.document(), &skin);
            manager.delete(&key)?;
            manager.apply(&mut sink);
            println!("removed skin {key}");
        },
        Command::Push => {
            require_remote(&remote_url)?;
            let message = manager.push_remote().await?;
            println!("{message}");
        },
        Command::Pull => {
            require_remote(&remote_url)?;
            let view = manager.pull_remote(&mut sink).await?;
            println!("pulled {} skin(s)", view.entries.len());
        },
        Command::Template | Command::Boot => unreachable!("handled above"),
    }

    Ok(())
}

/// Load the config file when given, otherwise defaults; the --remote
/// flag wins over the file.
fn load_config(cli: &Cli) -> Result<ManagerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ManagerConfig::from_toml_str(&raw)?
        },
        None => ManagerConfig::default(),
    };
    if cli.remote.is_some() {
        config.remote_url = cli.remote.clone();
    }
    Ok(config)
}

fn require_remote(remote_url: &Option<String>) -> Result<()> {
    if remote_url.is_none() {
        bail!("no remote store configured (set --remote or remote_url in the config)");
    }
    Ok(())
}

/// Accept either a registry key or a plain skin name.
fn resolve_key(doc: &SkinDocument, input: &str) -> String {
    if doc.data.contains_key(input) {
        input.to_string()
    } else {
        encode_key(input)
    }
}

fn list<S, R>(manager: &SkinManager<S, R>)
where
    S: fable_store::KvStore,
    R: fable_sync::RemoteStore,
{
    let view = manager.view();
    if view.entries.is_empty() {
        println!("no skins stored");
    }
    for entry in &view.entries {
        let marker = if entry.active { "*" } else { " " };
        let author = entry.author.as_deref().unwrap_or("-");
        let version = entry.version.as_deref().unwrap_or("-");
        println!("{marker} {}  v{version}  by {author}  [{}]", entry.name, entry.key);
    }
    if !view.upload_enabled {
        println!("(uploads disabled: at capacity or logged out)");
    }
}

/// Run the early-boot path against the raw on-disk document.
fn boot(cli: &Cli, config: &ManagerConfig) -> Result<()> {
    let path = cli.data_dir.join(format!("{}.json", config.storage_key));
    let raw = fs::read_to_string(&path).ok();
    match fable_boot::early_skin_css(cli.cookie.as_deref(), raw.as_deref()) {
        Some(css) => print!("{css}"),
        None => log::info!("early boot: nothing to apply"),
    }
    Ok(())
}
