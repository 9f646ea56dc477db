use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use spdlog::{error, info, warn};

use sitegen::config::Config;
use sitegen::generator::blog::generate_blog;
use sitegen::generator::events::generate_events;
use sitegen::logger::configure_logger;

use crate::config::{generate_cfg, open_config};

mod config;
mod config_data;

const CFG_FILE_NAME: &str = "sitegen.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Generate the pages
    Build(BuildArgs),
    /// Write a sample configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct BuildArgs {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Site root, overrides paths.root from the config
    #[arg(short, long)]
    root: Option<String>,

    /// Pages to generate
    #[arg(value_enum, default_value_t = Target::All)]
    target: Target,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct InitArgs {
    /// Where to write the config. Defaults to the user config dir
    #[arg(short, long)]
    config_path: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Target {
    /// Blog articles and the blog listing
    Blog,
    /// Events listing
    Events,
    /// Everything
    All,
}

fn build(config: &Config, target: Target) -> Result<()> {
    if matches!(target, Target::Blog | Target::All) {
        let pages = generate_blog(config)?;
        info!("Blog done, {} pages written", pages.len());
    }

    if matches!(target, Target::Events | Target::All) {
        generate_events(config)?;
    }

    Ok(())
}

fn build_cmd(args: BuildArgs) -> ExitCode {
    let mut config = match open_config(args.config_path.map(PathBuf::from)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run sitegen --help");
            return ExitCode::FAILURE;
        }
    };

    if let Some(root) = args.root {
        config.paths.root = PathBuf::from(root);
    }

    if let Err(err) = configure_logger(&config.log) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Generating {:?} pages under {}", args.target, config.paths.root.display());

    match build(&config, args.target) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Generation failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_cmd(args: InitArgs) -> ExitCode {
    match generate_cfg(args.config_path.map(PathBuf::from)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args {
        Args::Build(args) => build_cmd(args),
        Args::Init(args) => init_cmd(args),
    }
}
