//! Helpers for rmtk.
//!
//! - Locating the home directory and expanding a leading `~`
//! - Clipping display strings to a terminal width

use std::path::PathBuf;
use unicode_width::UnicodeWidthChar;

#[inline]
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` or `~/` to the home directory.
///
/// Paths without a tilde are returned unchanged. Returns `None` only when a tilde
/// needs expanding and the home directory is unknown.
pub fn expand_home_path(path: &str) -> Option<PathBuf> {
    if path == "~" {
        return get_home();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return get_home().map(|home| home.join(rest));
    }
    Some(PathBuf::from(path))
}

/// Clips `line` so that its display width does not exceed `width` columns.
///
/// Control characters are dropped and tabs become a single space, so terminal
/// escape sequences in file names cannot corrupt the screen. Shorter lines are
/// returned without padding.
pub fn clip_to_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len().min(width));
    let mut current_w = 0;

    for ch in line.chars() {
        let ch = if ch == '\t' { ' ' } else { ch };
        if ch.is_control() {
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if current_w + w > width {
            break;
        }
        out.push(ch);
        current_w += w;
    }
    out
}
