use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

pub const DEFAULT_SITE_URL: &str = "https://primeasure.com";

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Site {
    pub url: String,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl Site {
    /// Site origin without trailing slashes, ready to be joined with a path
    pub fn origin(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Paths {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    pub blog_dir: PathBuf,
    pub events_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            root: PathBuf::from("."),
            data_dir: PathBuf::from("data"),
            template_dir: PathBuf::from("templates"),
            blog_dir: PathBuf::from("blog"),
            events_dir: PathBuf::from("events"),
        }
    }
}

impl Paths {
    pub fn blog_data(&self) -> PathBuf {
        self.root.join(&self.data_dir).join("blog.json")
    }

    pub fn events_data(&self) -> PathBuf {
        self.root.join(&self.data_dir).join("events.json")
    }

    pub fn article_template(&self) -> PathBuf {
        self.root.join(&self.template_dir).join("blog").join("template.html")
    }

    pub fn blog_listing_template(&self) -> PathBuf {
        self.root.join(&self.template_dir).join("blog").join("index.template.html")
    }

    pub fn events_listing_template(&self) -> PathBuf {
        self.root.join(&self.template_dir).join("events").join("index.template.html")
    }

    pub fn blog_output_dir(&self) -> PathBuf {
        self.root.join(&self.blog_dir)
    }

    pub fn events_output_dir(&self) -> PathBuf {
        self.root.join(&self.events_dir)
    }

    /// Path shown in the log lines, relative to the root when possible
    pub fn display<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: LogLevel::Info,
            log_to_console: true,
            location: None,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub site: Site,
    pub paths: Paths,
    pub log: Log,
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    let Some(str_path) = path.to_str() else {
        return Ok(path);
    };

    if !str_path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent().unwrap_or(Path::new("."));
    Ok(PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths.root = parse_path(cfg.paths.root)?;
    if let Some(location) = cfg.log.location.take() {
        cfg.log.location = Some(parse_path(location)?);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
