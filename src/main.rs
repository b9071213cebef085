use clap::{Parser, ValueEnum};
use imagedeck::app::script::{parse_script, Step};
use imagedeck::app::Controller;
use imagedeck::infrastructure::{Clipboard, MemoryClipboard};
use imagedeck::observability::init_tracing;
use imagedeck::storage::{MemoryPreferenceStore, PreferenceStore};
use imagedeck::{initialize, render_document, Config, Page};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Rendered HTML document
    Html,
    /// The computed view model
    Json,
}

#[derive(Parser)]
#[command(name = "imagedeck")]
#[command(about = "Drive a container image docs page and print the resulting view")]
#[command(long_about = "\
Drive a container image docs page and print the resulting view

The page document is JSON: variant sections with their data attributes, the
dependency catalog, dashboard cards and the display anchors that exist.

Script lines (one interaction each, '#' starts a comment):

  click variant <section> <index>
  key variant <section> <index> <enter|space|...>
  click card-variant <container> <index>
  click theme
  click registry <ghcr|dockerhub>
  click filter <all|up-to-date|update-available|not-published>
  click copy <container>
  type search <text>
  advance <ms>

Remaining timers are flushed before the view is printed. Configuration keys
can be overridden one at a time with --set KEY=VALUE.")]
#[command(version)]
struct Cli {
    /// Page document (JSON)
    #[arg(long)]
    page: PathBuf,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Interaction script to replay after page load
    #[arg(long)]
    script: Option<PathBuf>,

    /// Override a configuration key, e.g. `--set swap_delay_ms=0` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, String)>,

    /// Keep preferences in memory instead of the preferences file
    #[arg(long)]
    no_persist: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides: BTreeMap<String, String> = cli.overrides.iter().cloned().collect();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?.with_overrides(&overrides),
        None => Config::from_map(&overrides),
    };
    init_tracing(&config);

    let page = Page::from_file(&cli.page)?;
    let steps = match &cli.script {
        Some(path) => parse_script(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    let output = if cli.no_persist {
        let store = MemoryPreferenceStore::default();
        let controller = initialize(&config, page, store, MemoryClipboard::new());
        run(controller, &steps, cli.format)?
    } else {
        let store = config.open_preferences()?;
        let controller = initialize(&config, page, store, MemoryClipboard::new());
        run(controller, &steps, cli.format)?
    };

    println!("{output}");
    Ok(())
}

fn parse_override(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))
}

fn run<S: PreferenceStore, C: Clipboard>(
    mut controller: Controller<S, C>,
    steps: &[Step],
    format: Format,
) -> Result<String, serde_json::Error> {
    for step in steps {
        match step {
            Step::Interact(target, input) => {
                controller.interact(target, input);
            }
            Step::Advance(ms) => {
                controller.advance(*ms);
            }
        }
    }

    controller.settle();

    let view = controller.view();
    tracing::debug!(announcement = ?view.announcement, "final view computed");

    match format {
        Format::Html => {
            let title = controller.page().title.as_deref().unwrap_or("imagedeck");
            Ok(render_document(&view, title))
        }
        Format::Json => serde_json::to_string_pretty(&view),
    }
}
