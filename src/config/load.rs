//! The main config loading module for rmtk.
//!
//! Handles locating and deserializing `rmtk.toml` into [Config],
//! and writing a commented default file for `rmtk --init`.

use crate::config::{General, Viewer};
use crate::utils::get_home;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Main configuration struct for rmtk, deserialized directly from the toml file.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    general: General,
    viewer: Viewer,
}

const DEFAULT_TOML: &str = r##"# rmtk.toml - configuration for rmtk

[general]
# Directory to open when no path is given on the command line.
# "~/" is expanded to the home directory. Ignored if it is not a directory.
# default_path = "~/Documents"

[viewer]
# Document viewer used for pdf, djvu, ps, epub and comic book files.
cmd = "zathura"
# Wrapper that swallows the terminal while the viewer runs.
# Set to "" to always launch the viewer directly.
wrapper = "devour"
"##;

impl Config {
    /// Load configuration from `path`, or from [Config::default_path] when `None`.
    ///
    /// A missing file yields the internal defaults. A file that fails to parse is
    /// reported on stderr and also yields the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !path.exists() {
            log::debug!("no config file at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                eprintln!("[rmtk] Error parsing config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("could not read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Determine the default configuration file path.
    /// Checks XDG_CONFIG_HOME first, then defaults to ~/.config/rmtk/rmtk.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return PathBuf::from(xdg_config).join("rmtk/rmtk.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/rmtk/rmtk.toml");
        }
        PathBuf::from("rmtk.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}
