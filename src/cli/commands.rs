//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::application::{read_phrases, IoResultExt, OverlaySession};
use crate::cli::args::{Cli, Commands, ConfigCommands, TreeArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::render::SvgSurface;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render {
            tree,
            output: out_path,
            width,
            height,
            dpr,
            redraws,
        }) => {
            let mut settings = load_settings(cli, tree)?;
            if let Some(w) = width {
                settings.canvas.width = *w;
            }
            if let Some(h) = height {
                settings.canvas.height = *h;
            }
            if let Some(r) = dpr {
                settings.canvas.device_pixel_ratio = *r;
            }
            if out_path.is_some() {
                settings.output = out_path.clone();
            }
            settings
                .validate()
                .map_err(|e| CliError::InvalidArgs(e.to_string()))?;
            cmd_render(&settings, tree.input.as_deref(), *redraws)
        }
        Some(Commands::Tree { tree }) => {
            let settings = load_settings(cli, tree)?;
            cmd_tree(&settings, tree.input.as_deref())
        }
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Layered settings with the tree flags applied on top.
fn load_settings(cli: &Cli, args: &TreeArgs) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(nodes) = args.nodes {
        settings.node_count = nodes;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings
        .validate()
        .map_err(|e| CliError::InvalidArgs(e.to_string()))?;
    debug!(?settings, "Effective settings");
    Ok(settings)
}

fn rng_for(settings: &Settings) -> StdRng {
    match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn build_session(settings: &Settings, input: Option<&Path>) -> CliResult<OverlaySession> {
    let phrases = read_phrases(input, settings.max_phrases)?;
    if phrases.is_empty() {
        output::warning("no usable phrases in input, using fallback vocabulary");
    }
    let mut rng = rng_for(settings);
    Ok(OverlaySession::new(
        &phrases,
        settings.node_count,
        settings.style.clone(),
        &mut rng,
    ))
}

#[instrument(level = "debug", skip(settings))]
fn cmd_render(settings: &Settings, input: Option<&Path>, redraws: usize) -> CliResult<()> {
    let mut session = build_session(settings, input)?;
    let canvas = &settings.canvas;
    let mut surface = SvgSurface::new(canvas.width, canvas.height, canvas.device_pixel_ratio);

    session.show(&mut surface);
    for _ in 0..redraws {
        session.viewport_settled(&mut surface);
    }

    let svg = surface.to_svg();
    match &settings.output {
        Some(path) => {
            std::fs::write(path, svg).with_path_context("write diagram", path)?;
            output::success(&format!(
                "Wrote {} nodes to {}",
                session.tree().len(),
                path.display()
            ));
        }
        None => print!("{svg}"),
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_tree(settings: &Settings, input: Option<&Path>) -> CliResult<()> {
    let session = build_session(settings, input)?;
    let tree = session.tree();
    output::header(&format!(
        "{} nodes, {} leaves, {} levels",
        tree.len(),
        tree.leaves().len(),
        tree.height()
    ));
    output::info(&tree.to_tree_string(Some(session.layout())));
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
