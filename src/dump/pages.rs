//! Raw page text sources

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::config::PagesConfig;
use super::error::DumpError;

/// Something that returns the raw wikitext of a page by title.
pub trait PageSource {
    /// `Ok(None)` when the page does not exist.
    fn page(&self, title: &str) -> Result<Option<String>, DumpError>;
}

/// Pages stored as `<root>/<title>.<extension>`.
///
/// A `/` in the title selects a sub-directory, so `Module:Exchange/Dragon claws`
/// lives at `<root>/Module:Exchange/Dragon claws.txt`.
#[derive(Debug, Clone)]
pub struct PageDirectory {
    root: PathBuf,
    extension: String,
}

impl PageDirectory {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &PagesConfig) -> Self {
        Self::new(&config.dir, &config.extension)
    }

    pub fn path_for(&self, title: &str) -> PathBuf {
        self.root.join(format!("{}.{}", title, self.extension))
    }
}

impl PageSource for PageDirectory {
    fn page(&self, title: &str) -> Result<Option<String>, DumpError> {
        let path = self.path_for(title);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(DumpError::Read { path, source }),
        }
    }
}

/// In-memory pages keyed by title.
impl PageSource for HashMap<String, String> {
    fn page(&self, title: &str) -> Result<Option<String>, DumpError> {
        Ok(self.get(title).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_pages_by_title() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join("Module:Exchange")).expect("mkdir");
        fs::write(dir.path().join("Dragon claws.txt"), "{{Infobox Item|a = 1}}").expect("write");
        fs::write(
            dir.path().join("Module:Exchange").join("Dragon claws.txt"),
            "return { limit = 70 }",
        )
        .expect("write");

        let pages = PageDirectory::new(dir.path(), "txt");
        assert_eq!(
            pages.page("Dragon claws").expect("read").as_deref(),
            Some("{{Infobox Item|a = 1}}")
        );
        assert_eq!(
            pages.page("Module:Exchange/Dragon claws").expect("read").as_deref(),
            Some("return { limit = 70 }")
        );
    }

    #[test]
    fn test_missing_page_is_none() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pages = PageDirectory::new(dir.path(), "txt");
        assert!(pages.page("Abyssal whip").expect("read").is_none());
    }
}
