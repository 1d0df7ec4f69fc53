use anyhow::{Context, Result, bail};
use cerne::{Config, GestureEvent, InputMode, Stroke, StrokeEditor};
use clap::{ArgAction, Parser};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "cerne")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CERNE_GIT_DESCRIBE"), ")"),
    about = "Freehand stroke editor for Cerne drawing notes"
)]
struct Cli {
    /// Gesture script to replay (JSON array of events)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Strokes of the drawing being opened (JSON array of strokes)
    #[arg(long, short = 'i', value_name = "FILE")]
    initial: Option<PathBuf>,

    /// Write the resulting strokes to FILE instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file (default: ~/.config/cerne/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Mode to start in (draw or erase), overriding the config
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<InputMode>,

    /// Canvas width in pixels, used for clamping
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Canvas height in pixels, used for clamping
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Pretty-print the output JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script.as_deref() else {
        println!("cerne: Freehand stroke editor for Cerne drawing notes");
        println!();
        println!("Usage:");
        println!("  cerne --script events.json                 Replay gestures on an empty canvas");
        println!("  cerne --script events.json --initial s.json  Replay on top of saved strokes");
        println!("  cerne --script events.json --mode erase    Start in erase mode");
        println!("  cerne --help                               Show all options");
        println!();
        println!("Events are JSON objects tagged by \"type\":");
        println!("  start / move (x, y), end, cancel, set-mode (mode), resize (width, height),");
        println!("  load-initial (strokes). An optional \"pointer\" id selects the touch.");
        return Ok(());
    };

    let config = load_config(cli.config.as_deref())?;
    let mut editor = StrokeEditor::from_config(&config);
    if let Some(mode) = cli.mode {
        editor.set_mode(mode);
    }
    if let (Some(width), Some(height)) = (cli.width, cli.height) {
        editor.resize(width, height);
    }
    editor.set_observer(|strokes| log::debug!("Canvas now holds {} strokes", strokes.len()));

    if let Some(initial_path) = cli.initial.as_deref() {
        let strokes: Vec<Stroke> = read_json(initial_path, "initial strokes")?;
        log::info!(
            "Seeding {} strokes from {}",
            strokes.len(),
            initial_path.display()
        );
        editor.load_initial(&strokes);
    }

    let events: Vec<GestureEvent> = read_json(script_path, "gesture script")?;
    log::info!(
        "Replaying {} events from {}",
        events.len(),
        script_path.display()
    );
    for event in events {
        editor.apply(event);
    }

    let strokes = editor.into_strokes();
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&strokes)
    } else {
        serde_json::to_string(&strokes)
    }
    .context("failed to serialise strokes")?;

    match cli.output.as_deref() {
        Some(path) => {
            fs::write(path, rendered + "\n")
                .with_context(|| format!("failed to write strokes to {}", path.display()))?;
            log::info!("Wrote {} strokes to {}", strokes.len(), path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            Config::load_from(path)
        }
        None => Ok(Config::load().unwrap_or_else(|err| {
            log::warn!("Failed to load config, using defaults: {err:#}");
            Config::default()
        })),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} from {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {what} from {}", path.display()))
}
