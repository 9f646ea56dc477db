use std::env;
use std::path::PathBuf;

use sitegen::config::{read_config, Config};

use crate::config_data::write_sample_cfg;
use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];

    if let Some(exe_dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(PathBuf::from)) {
        candidates.push(exe_dir.join(CFG_FILE_NAME));
    }

    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir.join(CFG_FILE_NAME));
    }

    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir.join(CFG_FILE_NAME));
    }

    candidates.into_iter().find(|path| path.exists())
}

/// An explicit path must exist. Without one, the first config found is used, or the built-in defaults.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => {
            println!("No {} found, using defaults", CFG_FILE_NAME);
            return Ok(Config::default());
        }
        Some(path) => path,
    };

    println!("Reading config from {}", config_path.display());
    read_config(&config_path).map_err(|e| e.to_string())
}

pub(crate) fn generate_cfg(config_path: Option<PathBuf>) -> Result<PathBuf, String> {
    let path = match config_path {
        Some(path) => path,
        None => match dirs::config_dir() {
            Some(cfg_dir) => cfg_dir.join(CFG_FILE_NAME),
            None => return Err("Could not find user config dir".to_string()),
        },
    };

    if path.exists() {
        return Err(format!("{} already exists, not overwriting it", path.display()));
    }

    println!("Writing sample config to {}", path.display());
    write_sample_cfg(&path).map_err(|e| format!("Error writing {}: {}", path.display(), e))?;

    Ok(path)
}
