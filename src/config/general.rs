//! The `[general]` and `[viewer]` configuration tables.
//!
//! [General] holds the optional startup directory, [Viewer] the document viewer
//! command and its optional wrapper.

use crate::utils::expand_home_path;

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct General {
    default_path: Option<String>,
}

impl General {
    #[inline]
    pub fn raw_default_path(&self) -> Option<&str> {
        self.default_path.as_deref()
    }

    /// The configured startup directory, if it is set and names an existing directory.
    ///
    /// Surrounding whitespace is ignored and a leading `~` is expanded to the home directory.
    pub fn default_path(&self) -> Option<PathBuf> {
        let raw = self.default_path.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        let path = expand_home_path(raw)?;
        if path.is_dir() {
            Some(path)
        } else {
            log::warn!("configured default_path {:?} is not a directory", path);
            None
        }
    }
}

/// Document viewer configuration
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Viewer {
    cmd: String,
    wrapper: String,
}

impl Viewer {
    #[inline]
    pub fn cmd(&self) -> &str {
        let trimmed = self.cmd.trim();
        if trimmed.is_empty() {
            "zathura"
        } else {
            trimmed
        }
    }

    /// The wrapper that swallows the terminal while the viewer runs, `None` if disabled.
    #[inline]
    pub fn wrapper(&self) -> Option<&str> {
        let trimmed = self.wrapper.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Viewer {
            cmd: "zathura".into(),
            wrapper: "devour".into(),
        }
    }
}
