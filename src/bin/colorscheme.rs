//! Command-line front end: inspect, change and render the persisted scheme.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

use colorscheme::{
    set_scheme_detector, ColorMode, ColorScheme, FileStore, HtmlRenderer, Page, Preference,
    SiteConfig, ThemeController,
};

#[derive(Parser)]
#[command(name = "colorscheme", version, about = "Manage a static site's persisted color scheme")]
struct Cli {
    /// Site config (YAML)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Preference store file
    #[arg(long, global = true, default_value = ".colorscheme.json")]
    store: PathBuf,

    /// Force the system preference instead of asking the OS
    #[arg(long, global = true, value_enum)]
    system: Option<SystemArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the system preference, stored override and effective scheme
    Show,
    /// Select a scheme, as if picked in the selector
    Set {
        #[arg(value_enum)]
        scheme: SchemeArg,
    },
    /// Render a page with the navigation bar and selector
    Render {
        /// Path of the page being rendered, for the current nav link
        #[arg(long, default_value = "/")]
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SystemArg {
    Light,
    Dark,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Auto,
    Light,
    Dark,
}

impl From<SchemeArg> for ColorScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Auto => ColorScheme::Auto,
            SchemeArg::Light => ColorScheme::Light,
            SchemeArg::Dark => ColorScheme::Dark,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let output = run(Cli::parse())?;
    print!("{output}");
    Ok(())
}

/// Runs one command and returns what it prints.
fn run(cli: Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::default(),
    };

    // Must be installed before the controller reads the system preference
    match cli.system {
        Some(SystemArg::Light) => set_scheme_detector(|| Some(ColorMode::Light)),
        Some(SystemArg::Dark) => set_scheme_detector(|| Some(ColorMode::Dark)),
        None => {}
    }

    let store = FileStore::new(&cli.store, &config.origin);
    let mut page = Page::new(&config.title);
    // The nav goes in before initialize so the selector is mounted above it
    if let Command::Render { path } = &cli.command {
        page.push_element(config.nav_bar().to_element(path, &config.origin));
    }

    let mut controller = ThemeController::from_config(&config, store, page);
    controller.initialize();

    match cli.command {
        Command::Show => Ok(status(&controller)),
        Command::Set { scheme } => {
            let persisted = controller
                .on_control_input(ColorScheme::from(scheme).as_str())
                .context("applying selection")?;
            if !persisted {
                eprintln!(
                    "{} could not write {}; the choice will not survive this run",
                    style("warning:").yellow().bold(),
                    controller.store().path().display()
                );
            }
            Ok(status(&controller))
        }
        Command::Render { .. } => {
            let renderer = HtmlRenderer::new()?;
            let html = renderer
                .render_page(controller.document())
                .context("rendering page")?;
            Ok(format!("{html}\n"))
        }
    }
}

fn status(controller: &ThemeController<FileStore, Page>) -> String {
    let stored = match controller.preference() {
        Preference::NoOverride => style("none".to_string()).dim(),
        Preference::Overridden(scheme) => style(format!("\"{scheme}\"")).cyan(),
    };
    let effective = match controller.effective_scheme() {
        ColorMode::Light => style("Light").yellow().bold(),
        ColorMode::Dark => style("Dark").blue().bold(),
    };

    let mut out = String::new();
    out.push_str(&format!("{:<10} {}\n", style("origin").bold(), controller.store().origin()));
    out.push_str(&format!("{:<10} {}\n", style("system").bold(), controller.system_preference()));
    out.push_str(&format!("{:<10} {}\n", style("override").bold(), stored));
    out.push_str(&format!("{:<10} {}\n", style("effective").bold(), effective));
    out
}
