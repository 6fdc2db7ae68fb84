// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> StepContext --> Command Dispatch
//!   Run | Env | Base | Print | Options | ConfigFiles | Version
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use spa_bootstrap::cli::global::GlobalOptions;
use spa_bootstrap::cli::{self, Command};
use spa_bootstrap::cmd::config::{
    run_config_files_command, run_options_command, run_print_command,
};
use spa_bootstrap::cmd::context::StepContext;
use spa_bootstrap::cmd::run::{run_base_command, run_bootstrap_command, run_env_command};
use spa_bootstrap::config::loader::ConfigLoader;
use spa_bootstrap::config::{CONFIG_FILE, Config, ENV_PREFIX};
use spa_bootstrap::env::current_env;
use spa_bootstrap::error::Result;
use spa_bootstrap::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if cli.command() == Command::Version {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let base_root = match base_root(&cli.global) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let loader = match build_config_loader(&cli.global, &base_root) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if cli.command() == Command::ConfigFiles {
        run_config_files_command(&loader.format_loaded_files());
        return ExitCode::SUCCESS;
    }

    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&LogConfig::from_global(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(cli.command(), &config, &base_root).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch_command(command: Command, config: &Config, base_root: &Path) -> Result<()> {
    if command == Command::Options {
        run_options_command(config);
        return Ok(());
    }

    let root = project_root(config, base_root);
    let ctx = StepContext::resolve(config, current_env(), &root);

    match command {
        Command::Run => run_bootstrap_command(&ctx).await,
        Command::Env => run_env_command(&ctx),
        Command::Base => run_base_command(&ctx).await,
        Command::Print => {
            run_print_command(&ctx);
            Ok(())
        }
        Command::Options | Command::ConfigFiles | Command::Version => Ok(()),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Directory the default config file is looked up in: `--root`, else the
/// current directory.
fn base_root(global: &GlobalOptions) -> Result<PathBuf> {
    match &global.root {
        Some(root) => Ok(root.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// `global.root` from the merged configuration (`--root` lands there too),
/// else the base root.
fn project_root(config: &Config, base_root: &Path) -> PathBuf {
    config
        .global
        .root
        .clone()
        .unwrap_or_else(|| base_root.to_path_buf())
}

fn build_config_loader(global: &GlobalOptions, base_root: &Path) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(base_root.join(CONFIG_FILE));
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in global.to_config_overrides() {
        loader = loader.set_str(&option)?;
    }
    Ok(loader)
}
