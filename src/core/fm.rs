//! Directory listing for rmtk.
//!
//! Provides the [Entry] struct which the navigator filters and the renderer draws,
//! and [list_dir] which enumerates a directory into entries.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// Name of the synthetic entry pointing at the parent directory.
pub const PARENT_ENTRY: &str = "..";

/// A single name in a directory listing.
///
/// Keeps the raw name so non UTF-8 names still join into valid paths,
/// and caches the lowercase form used by the search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: Box<OsStr>,
    lowercase: Box<str>,
}

impl Entry {
    pub fn new(name: impl Into<OsString>) -> Self {
        let name = name.into();
        let lowercase = name.to_string_lossy().to_lowercase().into_boxed_str();
        Entry {
            name: name.into_boxed_os_str(),
            lowercase,
        }
    }

    pub fn parent() -> Self {
        Self::new(PARENT_ENTRY)
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase
    }

    #[inline]
    pub fn is_parent(&self) -> bool {
        self.name.as_ref() == OsStr::new(PARENT_ENTRY)
    }
}

impl From<&str> for Entry {
    fn from(name: &str) -> Self {
        Entry::new(name)
    }
}

/// Reads the contents of a directory in filesystem enumeration order.
///
/// A `".."` entry is prepended unless `path` is a filesystem root.
/// Entries that fail to read are skipped, a failing `read_dir` is returned as is.
pub fn list_dir(path: &Path) -> io::Result<Vec<Entry>> {
    let read = fs::read_dir(path)?;
    let mut entries = Vec::with_capacity(64);

    if path.parent().is_some() {
        entries.push(Entry::parent());
    }

    for entry in read {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        entries.push(Entry::new(entry.file_name()));
    }
    Ok(entries)
}

/// Returns true if `path` resolves to a directory.
/// Any lookup failure counts as "not a directory".
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|md| md.is_dir()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs::File;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn entry_caches_lowercase() {
        let entry = Entry::new("Report.PDF");
        assert_eq!(entry.name_str(), "Report.PDF");
        assert_eq!(entry.lowercase_name(), "report.pdf");
        assert!(!entry.is_parent());
        assert!(Entry::parent().is_parent());
    }

    #[test]
    fn list_dir_prepends_parent() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("a.pdf"))?;
        fs::create_dir(tmp.path().join("sub"))?;

        let entries = list_dir(tmp.path())?;
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_parent());

        let names: HashSet<String> = entries[1..]
            .iter()
            .map(|e| e.name_str().into_owned())
            .collect();
        assert!(names.contains("a.pdf"));
        assert!(names.contains("sub"));
        Ok(())
    }

    #[test]
    fn list_dir_root_has_no_parent() -> Result<(), Box<dyn std::error::Error>> {
        let root = PathBuf::from("/");
        if let Ok(entries) = list_dir(&root) {
            assert!(entries.iter().all(|e| !e.is_parent()));
        }
        Ok(())
    }

    #[test]
    fn list_dir_nonexistent() {
        let path = PathBuf::from("/path/does/not/exist");
        assert!(list_dir(&path).is_err());
    }

    #[test]
    fn list_dir_on_file_fails() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let file = tmp.path().join("plain.txt");
        File::create(&file)?;
        assert!(list_dir(&file).is_err());
        Ok(())
    }

    #[test]
    fn is_dir_degrades_to_false() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("f"))?;
        assert!(is_dir(tmp.path()));
        assert!(!is_dir(&tmp.path().join("f")));
        assert!(!is_dir(&tmp.path().join("missing")));
        Ok(())
    }
}
