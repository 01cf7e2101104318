mod app;
mod config;
mod host;
mod options;
mod palette;
mod storage;
mod template;

use anyhow::Context;
use app::{ThemeManager, UpdateOutcome, events::Event};
use clap::{Parser, Subcommand};
use host::HassClient;
use options::{FileOptionsStore, OptionsStore, ThemeOptions};
use palette::{Rgb, generate_palette};
use template::Template;

#[derive(Debug, Parser)]
#[command(
    name = "frosted-glass",
    version,
    about = "Frosted glass theme generator for Home Assistant"
)]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Regenerate the theme file once (default).
    Generate,
    /// Regenerate now and again whenever the options change.
    Watch,
    /// Print the palette derived from a color ("r, g, b" or "#RRGGBB").
    Palette {
        color: String,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Change theme options, then regenerate.
    Set {
        #[arg(long)]
        light_primary: Option<String>,
        #[arg(long)]
        light_bg: Option<String>,
        #[arg(long)]
        dark_primary: Option<String>,
        #[arg(long)]
        dark_bg: Option<String>,
    },
    /// Restore the default options, then regenerate.
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let Cli { config, command } = Cli::parse();
    let config = config.as_deref();

    match command.unwrap_or(Command::Generate) {
        Command::Palette { color, json } => {
            print_palette(Rgb::parse_or(&color, Rgb::DEFAULT), json)?;
        }
        Command::Generate => {
            let (_, manager) = setup(config)?;
            generate(&manager).await?;
        }
        Command::Watch => {
            let (cfg, manager) = setup(config)?;
            let (tx, rx) = tokio::sync::mpsc::channel::<Event>(16);
            tx.send(Event::Setup).await.context("queue setup event")?;
            let interval = std::time::Duration::from_millis(cfg.watch.poll_interval_ms.max(50));
            let _watcher = app::watch::spawn_options_watcher(manager.store().clone(), interval, tx);
            tracing::info!(
                "Watching {} for changes",
                manager.store().path().display()
            );
            manager.run(rx).await;
        }
        Command::Set {
            light_primary,
            light_bg,
            dark_primary,
            dark_bg,
        } => {
            let (_, manager) = setup(config)?;
            let store = manager.store();
            let mut opts = ThemeOptions::from_raw(&store.load()?);
            if let Some(c) = light_primary {
                opts.light_primary = c.parse().with_context(|| format!("light primary {c:?}"))?;
            }
            if let Some(c) = dark_primary {
                opts.dark_primary = c.parse().with_context(|| format!("dark primary {c:?}"))?;
            }
            if let Some(bg) = light_bg {
                opts.light_bg = bg;
            }
            if let Some(bg) = dark_bg {
                opts.dark_bg = bg;
            }
            store.save(&opts).context("save options")?;
            generate(&manager).await?;
        }
        Command::Reset => {
            let (_, manager) = setup(config)?;
            let store = manager.store();
            let mut opts = ThemeOptions::from_raw(&store.load()?);
            opts.reset_defaults = true;
            store.save(&opts).context("save options")?;
            generate(&manager).await?;
        }
    }

    Ok(())
}

type Manager = ThemeManager<FileOptionsStore, HassClient>;

fn setup(config_path: Option<&std::path::Path>) -> anyhow::Result<(config::Config, Manager)> {
    let cfg = config::load(config_path).context("load config")?;
    let store = FileOptionsStore::new(&cfg.paths.options);
    let host = HassClient::new(
        &cfg.host.config_dir,
        &cfg.host.url,
        cfg.token(),
        cfg.host.reload,
    )?;
    let template = match &cfg.theme.template {
        Some(p) => Template::load(p)?,
        None => Template::builtin(),
    };
    let manager = ThemeManager::new(store, host, template, cfg.theme.filename.clone());
    Ok((cfg, manager))
}

async fn generate(manager: &Manager) -> anyhow::Result<()> {
    match manager.update_theme().await {
        UpdateOutcome::Written { path, reloaded } => {
            println!("Wrote {}", path.display());
            if !reloaded {
                println!("Themes were not reloaded; run frontend.reload_themes in Home Assistant.");
            }
            Ok(())
        }
        UpdateOutcome::Failed => anyhow::bail!("theme was not updated (see log)"),
    }
}

fn print_palette(color: Rgb, json: bool) -> anyhow::Result<()> {
    let palette = generate_palette(color);
    if json {
        println!("{}", serde_json::to_string_pretty(&palette)?);
        return Ok(());
    }
    for (level, shade) in palette.iter() {
        println!("{}  {}  ({})", level.key(), shade, shade.to_rgb_string());
    }
    Ok(())
}
