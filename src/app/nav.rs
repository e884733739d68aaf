//! Navigation and search state for rmtk.
//!
//! [Navigator] owns the listing of one directory, the cursor, the scroll offset
//! and the incremental search. A directory change builds a new Navigator instead
//! of mutating the old one.

use crate::core::error::DirectoryAccessError;
use crate::core::fm::{Entry, list_dir};
use std::path::{Path, PathBuf};

/// Holds the navigation, scroll and search state of the current directory.
#[derive(Debug, Clone)]
pub struct Navigator {
    current_dir: PathBuf,
    unfiltered: Vec<Entry>,
    displayed: Vec<Entry>,
    cursor: usize,
    offset: usize,
    viewport_height: usize,
    search_active: bool,
    query: String,
}

impl Navigator {
    /// Lists `path` and builds a Navigator rooted at its canonical absolute path.
    pub fn open(path: &Path) -> Result<Self, DirectoryAccessError> {
        let dir = path
            .canonicalize()
            .map_err(|e| DirectoryAccessError::new(path, e))?;
        let entries = list_dir(&dir).map_err(|e| DirectoryAccessError::new(&dir, e))?;
        Ok(Self::from_listing(dir, entries))
    }

    /// Builds a Navigator over an already listed directory.
    pub fn from_listing(current_dir: PathBuf, entries: Vec<Entry>) -> Self {
        Self {
            current_dir,
            displayed: entries.clone(),
            unfiltered: entries,
            cursor: 0,
            offset: 0,
            viewport_height: 1,
            search_active: false,
            query: String::new(),
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.unfiltered
    }

    #[inline]
    pub fn displayed(&self) -> &[Entry] {
        &self.displayed
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    #[inline]
    pub fn is_searching(&self) -> bool {
        self.search_active
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Entries currently inside the visible window.
    pub fn visible(&self) -> &[Entry] {
        let start = self.offset.min(self.displayed.len());
        let end = (self.offset + self.viewport_height).min(self.displayed.len());
        &self.displayed[start..end]
    }

    /// The entry under the cursor, `None` if nothing is displayed.
    pub fn selected(&self) -> Option<&Entry> {
        self.displayed.get(self.cursor)
    }

    /// Path the selected entry points at. `".."` resolves to the parent directory.
    pub fn selection_path(&self) -> Option<PathBuf> {
        let entry = self.selected()?;
        if entry.is_parent() {
            Some(
                self.current_dir
                    .parent()
                    .unwrap_or(&self.current_dir)
                    .to_path_buf(),
            )
        } else {
            Some(self.current_dir.join(entry.name()))
        }
    }

    /// Updates the number of rows the renderer can show and scrolls so the
    /// cursor stays inside the window.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        self.scroll_to_cursor();
    }

    // Navigation functions

    /// Moves the cursor up by one entry. Stops at the first entry.
    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.scroll_to_cursor();
        }
    }

    /// Moves the cursor down by one entry. Stops at the last entry.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.displayed.len() {
            self.cursor += 1;
            self.scroll_to_cursor();
        }
    }

    /// Moves the cursor up by half a viewport.
    pub fn page_up(&mut self) {
        if self.displayed.is_empty() {
            return;
        }
        self.cursor = self.cursor.saturating_sub(self.half_page());
        self.scroll_to_cursor();
    }

    /// Moves the cursor down by half a viewport, clamped to the last entry.
    pub fn page_down(&mut self) {
        if self.displayed.is_empty() {
            return;
        }
        let last = self.displayed.len() - 1;
        self.cursor = (self.cursor + self.half_page()).min(last);
        self.scroll_to_cursor();
    }

    pub fn go_to_top(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.cursor = self.displayed.len().saturating_sub(1);
        self.offset = (self.cursor + 1).saturating_sub(self.viewport_height);
    }

    /// Descends into `path`, returning the Navigator for it.
    ///
    /// `self` is left untouched so the caller can keep it when listing fails.
    pub fn enter_directory(&self, path: &Path) -> Result<Navigator, DirectoryAccessError> {
        let mut next = Navigator::open(path)?;
        next.set_viewport_height(self.viewport_height);
        Ok(next)
    }

    // Search functions

    /// Starts a new search over the full listing, keeping the selected entry selected.
    pub fn enter_search(&mut self) {
        let target = self.selected().cloned();

        self.search_active = true;
        self.query.clear();
        self.displayed = self.unfiltered.clone();

        self.cursor = target
            .and_then(|t| self.displayed.iter().position(|e| *e == t))
            .unwrap_or(0);
        self.scroll_to_cursor();
    }

    /// Appends a character to the query and refilters from the top.
    pub fn push_search_char(&mut self, c: char) {
        self.query.push(c);
        self.apply_filter();
    }

    /// Removes the last query character, or cancels the search if the query is empty.
    pub fn pop_search_char(&mut self) {
        if self.query.pop().is_some() {
            self.apply_filter();
        } else {
            self.cancel_search();
        }
    }

    /// Leaves search mode and keeps the filtered results as the displayed list.
    pub fn confirm_search(&mut self) {
        self.search_active = false;
    }

    /// Leaves search mode and restores the unfiltered listing.
    pub fn cancel_search(&mut self) {
        self.search_active = false;
        self.query.clear();
        self.displayed = self.unfiltered.clone();
        self.go_to_top();
    }

    fn apply_filter(&mut self) {
        self.displayed = filter_entries(&self.unfiltered, &self.query);
        self.go_to_top();
    }

    #[inline]
    fn half_page(&self) -> usize {
        self.viewport_height / 2
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.viewport_height {
            self.offset = self.cursor + 1 - self.viewport_height;
        }
    }
}

/// Entries whose name contains `query`, ignoring case, in their original order.
/// An empty query keeps every entry.
pub fn filter_entries(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.is_empty() {
        return entries.to_vec();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.lowercase_name().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::seq::SliceRandom;
    use rand::{Rng, rng};
    use std::error;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn nav_with(names: &[&str], height: usize) -> Navigator {
        let entries = names.iter().map(|n| Entry::from(*n)).collect();
        let mut nav = Navigator::from_listing(PathBuf::from("/"), entries);
        nav.set_viewport_height(height);
        nav
    }

    fn names(entries: &[Entry]) -> Vec<String> {
        entries.iter().map(|e| e.name_str().into_owned()).collect()
    }

    fn assert_window(nav: &Navigator) {
        let len = nav.displayed().len();
        if len == 0 {
            assert_eq!(nav.cursor(), 0);
            return;
        }
        assert!(nav.cursor() < len, "cursor {} out of {}", nav.cursor(), len);
        assert!(nav.offset() <= nav.cursor());
        assert!(nav.cursor() < nav.offset() + nav.viewport_height());
    }

    #[test]
    fn test_scroll_scenario() {
        let mut nav = nav_with(&["b.txt", "a.pdf", "dir1"], 2);

        nav.move_down();
        assert_eq!((nav.cursor(), nav.offset()), (1, 0));

        nav.move_down();
        assert_eq!((nav.cursor(), nav.offset()), (2, 1));

        nav.move_down();
        assert_eq!((nav.cursor(), nav.offset()), (2, 1), "no wraparound");

        nav.move_up();
        nav.move_up();
        assert_eq!((nav.cursor(), nav.offset()), (0, 0));

        nav.move_up();
        assert_eq!((nav.cursor(), nav.offset()), (0, 0), "no wraparound");
    }

    #[test]
    fn test_random_moves_keep_invariants() {
        let files: Vec<String> = (0..37).map(|i| format!("file_{i}.txt")).collect();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let mut rng = rng();

        for height in [1, 2, 5, 10, 50] {
            let mut nav = nav_with(&refs, height);
            for _ in 0..2000 {
                match rng.random_range(0..6) {
                    0 => nav.move_up(),
                    1 => nav.move_down(),
                    2 => nav.page_up(),
                    3 => nav.page_down(),
                    4 => nav.go_to_bottom(),
                    _ => nav.go_to_top(),
                }
                assert_window(&nav);
            }
        }
    }

    #[test]
    fn test_paging_moves_half_a_viewport() {
        let files: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let mut nav = nav_with(&refs, 6);

        nav.page_down();
        assert_eq!((nav.cursor(), nav.offset()), (3, 0));
        nav.page_down();
        assert_eq!((nav.cursor(), nav.offset()), (6, 1));
        for _ in 0..10 {
            nav.page_down();
        }
        assert_eq!((nav.cursor(), nav.offset()), (19, 14));

        nav.page_up();
        assert_eq!((nav.cursor(), nav.offset()), (16, 14));
        for _ in 0..10 {
            nav.page_up();
        }
        assert_eq!((nav.cursor(), nav.offset()), (0, 0));
    }

    #[test]
    fn test_top_and_bottom() {
        let mut nav = nav_with(&["a", "b", "c", "d", "e"], 3);

        nav.go_to_bottom();
        assert_eq!((nav.cursor(), nav.offset()), (4, 2));

        nav.go_to_top();
        let once = (nav.cursor(), nav.offset());
        nav.go_to_top();
        assert_eq!((nav.cursor(), nav.offset()), once);
        assert_eq!(once, (0, 0));

        let mut short = nav_with(&["a", "b"], 10);
        short.go_to_bottom();
        assert_eq!((short.cursor(), short.offset()), (1, 0));
    }

    #[test]
    fn test_empty_listing_is_inert() {
        for names_in_dir in [&[][..], &[".."][..]] {
            let mut nav = nav_with(names_in_dir, 4);
            if names_in_dir.is_empty() {
                assert!(nav.selected().is_none());
                assert!(nav.selection_path().is_none());
            }
            let before = (nav.cursor(), nav.offset());
            nav.move_down();
            nav.move_up();
            nav.page_down();
            nav.page_up();
            assert_eq!((nav.cursor(), nav.offset()), before);
        }

        let mut nav = nav_with(&[], 4);
        nav.go_to_bottom();
        assert_eq!((nav.cursor(), nav.offset()), (0, 0));
    }

    #[test]
    fn test_filter_scenario() {
        let mut nav = nav_with(&["b.txt", "a.pdf", "dir1", "cat.epub"], 10);
        nav.enter_search();
        nav.push_search_char('a');
        assert_eq!(names(nav.displayed()), vec!["a.pdf", "cat.epub"]);
        assert_eq!(nav.query(), "a");
    }

    #[test]
    fn test_filter_matches_subsequence() {
        let mut all = vec![
            "Main.rs", "lib.rs", "Cargo.toml", "README.md", "app.RS", "ui.rs", "notes.txt",
        ];
        all.shuffle(&mut rng());
        let entries: Vec<Entry> = all.iter().map(|n| Entry::from(*n)).collect();

        for query in ["rs", "RS", "a", "md", "zzz", ".", "Ca"] {
            let expected: Vec<&str> = all
                .iter()
                .copied()
                .filter(|n| n.to_lowercase().contains(&query.to_lowercase()))
                .collect();
            assert_eq!(names(&filter_entries(&entries, query)), expected, "query {query}");
        }
    }

    #[test]
    fn test_search_round_trip() {
        let mut nav = nav_with(&["..", "alpha", "beta", "gamma", "delta"], 2);
        nav.move_down();
        nav.move_down();
        nav.move_down();
        let before = nav.entries().to_vec();

        nav.enter_search();
        assert!(nav.is_searching());
        for c in "ta".chars() {
            nav.push_search_char(c);
        }
        assert_eq!(names(nav.displayed()), vec!["beta", "delta"]);

        nav.cancel_search();
        assert!(!nav.is_searching());
        assert_eq!(nav.query(), "");
        assert_eq!(nav.displayed(), &before[..]);
        assert_eq!((nav.cursor(), nav.offset()), (0, 0));
    }

    #[test]
    fn test_typing_resets_cursor() {
        let mut nav = nav_with(&["apple", "apricot", "avocado", "banana"], 2);
        nav.enter_search();
        nav.push_search_char('a');
        nav.go_to_bottom();
        assert_eq!(nav.cursor(), 3);

        nav.push_search_char('p');
        assert_eq!(names(nav.displayed()), vec!["apple", "apricot"]);
        assert_eq!((nav.cursor(), nav.offset()), (0, 0));
    }

    #[test]
    fn test_backspace_refilters_then_cancels() {
        let mut nav = nav_with(&["apple", "apricot", "banana"], 5);
        nav.enter_search();
        nav.push_search_char('a');
        nav.push_search_char('p');
        nav.move_down();

        nav.pop_search_char();
        assert_eq!(nav.query(), "a");
        assert_eq!(nav.displayed().len(), 3);
        assert_eq!(nav.cursor(), 0);
        assert!(nav.is_searching());

        nav.pop_search_char();
        assert_eq!(nav.query(), "");
        assert!(nav.is_searching());

        nav.pop_search_char();
        assert!(!nav.is_searching());
        assert_eq!(nav.displayed(), nav.entries());
    }

    #[test]
    fn test_confirm_keeps_results() {
        let mut nav = nav_with(&["b.txt", "a.pdf", "dir1", "cat.epub"], 10);
        nav.enter_search();
        nav.push_search_char('a');
        nav.move_down();
        nav.confirm_search();

        assert!(!nav.is_searching());
        assert_eq!(names(nav.displayed()), vec!["a.pdf", "cat.epub"]);
        assert_eq!(nav.cursor(), 1);
        assert_eq!(nav.selected().map(|e| e.name_str().into_owned()).as_deref(), Some("cat.epub"));

        nav.move_down();
        assert_eq!(nav.cursor(), 1, "movement is bounded by the filtered list");
    }

    #[test]
    fn test_new_search_starts_from_full_listing() {
        let mut nav = nav_with(&["b.txt", "a.pdf", "dir1", "cat.epub"], 2);
        nav.enter_search();
        nav.push_search_char('e');
        nav.push_search_char('p');
        nav.confirm_search();
        assert_eq!(names(nav.displayed()), vec!["cat.epub"]);

        nav.enter_search();
        assert_eq!(nav.displayed().len(), 4);
        assert_eq!(nav.cursor(), 3, "selection follows the entry");
        assert_window(&nav);
    }

    #[test]
    fn test_selection_paths() {
        let entries = vec![Entry::parent(), Entry::from("report.pdf")];
        let mut nav = Navigator::from_listing(PathBuf::from("/home/user/docs"), entries);

        assert_eq!(nav.selection_path(), Some(PathBuf::from("/home/user")));
        nav.move_down();
        assert_eq!(
            nav.selection_path(),
            Some(PathBuf::from("/home/user/docs/report.pdf"))
        );
    }

    #[test]
    fn test_resize_keeps_cursor_visible() {
        let files: Vec<String> = (0..30).map(|i| format!("f{i}")).collect();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let mut nav = nav_with(&refs, 20);
        for _ in 0..15 {
            nav.move_down();
        }
        assert_eq!((nav.cursor(), nav.offset()), (15, 0));

        nav.set_viewport_height(5);
        assert_eq!((nav.cursor(), nav.offset()), (15, 11));
        assert_window(&nav);

        nav.set_viewport_height(0);
        assert_eq!(nav.viewport_height(), 1);
        assert_window(&nav);
    }

    #[test]
    fn test_visible_window_slice() {
        let mut nav = nav_with(&["b.txt", "a.pdf", "dir1"], 2);
        assert_eq!(nav.visible(), &nav.displayed()[0..2]);

        nav.go_to_bottom();
        assert_eq!(names(nav.visible()), vec!["a.pdf", "dir1"]);

        nav.enter_search();
        nav.push_search_char('z');
        assert!(nav.visible().is_empty());
    }

    #[test]
    fn test_enter_directory_and_back() -> Result<(), Box<dyn error::Error>> {
        let base = tempdir()?;
        let base_path = base.path().canonicalize()?;
        let sub = base_path.join("subdir");
        fs::create_dir(&sub)?;
        File::create(sub.join("inner.pdf"))?;
        File::create(base_path.join("top.txt"))?;

        let mut nav = Navigator::open(&base_path)?;
        nav.set_viewport_height(7);
        assert_eq!(nav.current_dir(), base_path);
        assert!(nav.entries()[0].is_parent());

        nav.enter_search();
        nav.push_search_char('s');
        nav.push_search_char('u');
        nav.confirm_search();
        let target = nav.selection_path().ok_or("nothing selected")?;
        assert_eq!(target, sub);

        let child = nav.enter_directory(&target)?;
        assert_eq!(child.current_dir(), sub);
        assert!(!child.is_searching());
        assert_eq!(child.query(), "");
        assert_eq!((child.cursor(), child.offset()), (0, 0));
        assert_eq!(child.viewport_height(), 7);
        assert_eq!(names(child.displayed()), vec!["..", "inner.pdf"]);

        let up = child.selection_path().ok_or("nothing selected")?;
        let parent = child.enter_directory(&up)?;
        assert_eq!(parent.current_dir(), base_path);
        Ok(())
    }

    #[test]
    fn test_enter_directory_failure_leaves_state() -> Result<(), Box<dyn error::Error>> {
        let base = tempdir()?;
        let mut nav = Navigator::open(base.path())?;
        nav.enter_search();
        nav.push_search_char('x');
        let snapshot = (nav.current_dir().to_path_buf(), nav.query().to_string());

        let missing = base.path().join("vanished");
        let err = nav
            .enter_directory(&missing)
            .expect_err("listing a missing directory must fail");
        assert_eq!(err.path, missing);
        assert_eq!(
            (nav.current_dir().to_path_buf(), nav.query().to_string()),
            snapshot
        );
        Ok(())
    }
}
