use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use clamp_studio::config::load_config;
use clamp_studio::fluid::{FluidSize, Viewport, MAX_SCREEN, MIN_SCREEN};
use clamp_studio::labels::{ColorLabel, SizeLabel};
use clamp_studio::panel::{Panel, PanelState};
use clamp_studio::server::{run_panel_server, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "clamp", version)]
#[command(about = "Clamp Studio — fluid clamp() typography and color palette generator")]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the clamp() expression for one min/max pair
    Clamp {
        /// Size at the narrowest viewport, in rem
        #[arg(allow_negative_numbers = true)]
        min: f64,

        /// Size at the widest viewport, in rem
        #[arg(allow_negative_numbers = true)]
        max: f64,

        /// Narrowest viewport width in px
        #[arg(long, default_value_t = MIN_SCREEN)]
        min_screen: f64,

        /// Widest viewport width in px
        #[arg(long, default_value_t = MAX_SCREEN)]
        max_screen: f64,

        /// Also print the interpolated size at this viewport width
        #[arg(long)]
        at: Option<f64>,
    },

    /// Generate the CSS block, optionally applying edits first
    Css {
        #[command(flatten)]
        source: ConfigArg,

        /// Set a minimum size, e.g. --min h1=1.5 (repeatable)
        #[arg(long = "min", value_name = "LABEL=VALUE")]
        mins: Vec<String>,

        /// Set a maximum size, e.g. --max body=1.25 (repeatable)
        #[arg(long = "max", value_name = "LABEL=VALUE")]
        maxes: Vec<String>,

        /// Set a color, e.g. --color primary=#0044ff (repeatable)
        #[arg(long = "color", value_name = "LABEL=VALUE")]
        colors: Vec<String>,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Validate a configuration file
    Check {
        /// TOML configuration file
        config: PathBuf,
    },

    /// Serve the live control panel in the browser
    Serve {
        #[command(flatten)]
        source: ConfigArg,

        /// Server port
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[derive(Args)]
struct ConfigArg {
    /// TOML file overriding the default sizes, colors and viewport
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArg {
    fn initial_state(&self) -> Result<PanelState> {
        match &self.config {
            Some(path) => Ok(load_config(path)?),
            None => Ok(PanelState::default()),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    clamp_studio::logging::init(cli.debug);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Clamp {
            min,
            max,
            min_screen,
            max_screen,
            at,
        } => {
            let viewport = Viewport::new(min_screen, max_screen)?;
            let size = FluidSize::new(min, max);
            println!("{}", size.to_clamp(&viewport));
            if let Some(width) = at {
                let raw = size.evaluate(&viewport, width);
                let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
                println!("at {width}px: {:.4}rem", raw.max(lo).min(hi));
            }
        }

        Commands::Css {
            source,
            mins,
            maxes,
            colors,
            o,
        } => {
            let mut panel = Panel::new(source.initial_state()?);
            for arg in &mins {
                let (label, value) = split_assignment(arg)?;
                panel.set_min_size(label.parse::<SizeLabel>()?, value);
            }
            for arg in &maxes {
                let (label, value) = split_assignment(arg)?;
                panel.set_max_size(label.parse::<SizeLabel>()?, value);
            }
            for arg in &colors {
                let (label, value) = split_assignment(arg)?;
                panel.set_color(label.parse::<ColorLabel>()?, value);
            }
            write_output(panel.css(), o.as_deref())?;
        }

        Commands::Check { config } => {
            let state = load_config(&config)?;
            eprintln!(
                "{}: ok (viewport {}px..{}px)",
                config.display(),
                state.viewport.min(),
                state.viewport.max()
            );
        }

        Commands::Serve { source, port } => {
            let initial = source.initial_state()?;
            let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
            rt.block_on(run_panel_server(initial, source.config, port))
                .map_err(|e| anyhow::anyhow!(e))
                .context("panel server failed")?;
        }
    }
    Ok(())
}

fn split_assignment(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .with_context(|| format!("expected LABEL=VALUE, got '{arg}'"))
}

fn write_output(css: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, css).with_context(|| format!("cannot write '{}'", path.display()))?;
            tracing::info!(path = %path.display(), bytes = css.len(), "wrote css");
        }
        None => print!("{css}"),
    }
    Ok(())
}
