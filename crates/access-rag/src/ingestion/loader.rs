//! Corpus loading: one subdirectory per category, UTF-8 text files inside

use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::RawDocument;

/// Loads raw documents from the corpus directory tree
///
/// Layout: `<root>/<category>/*.txt`. Files without a `.txt` extension
/// and loose files at the root are ignored. Unreadable or non-UTF-8
/// files are skipped with a warning, never failing the batch.
pub struct CorpusLoader {
    root: PathBuf,
}

impl CorpusLoader {
    /// Create a loader over the given corpus root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load every readable text file under the category directories
    pub fn load(&self) -> Result<Vec<RawDocument>> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            Error::Config(format!(
                "Cannot read corpus root {}: {}",
                self.root.display(),
                e
            ))
        })?;

        let mut documents = Vec::new();

        for entry in entries.filter_map(|e| e.ok()) {
            let category_path = entry.path();
            if !category_path.is_dir() {
                continue;
            }
            let category = match category_path.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };

            tracing::info!("Loading category: {}", category);

            for file in WalkDir::new(&category_path)
                .max_depth(1)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = file.path();
                if !path.is_file() {
                    continue;
                }
                let is_text = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
                if !is_text {
                    continue;
                }

                match fs::read_to_string(path) {
                    Ok(content) => {
                        let filename = path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default();
                        documents.push(RawDocument {
                            category: category.clone(),
                            filename,
                            source: path.to_string_lossy().to_string(),
                            content,
                        });
                    }
                    Err(e) => {
                        let err = Error::load(path.to_string_lossy(), e.to_string());
                        tracing::warn!("Skipping corpus file: {}", err);
                    }
                }
            }
        }

        // Directory iteration order is platform-dependent
        documents.sort_by(|a, b| {
            (a.category.as_str(), a.filename.as_str())
                .cmp(&(b.category.as_str(), b.filename.as_str()))
        });

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn corpus() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("blindness")).unwrap();
        fs::create_dir(dir.path().join("mobility")).unwrap();
        fs::write(
            dir.path().join("blindness/braille.txt"),
            "Braille is a tactile writing system.",
        )
        .unwrap();
        fs::write(
            dir.path().join("blindness/screen_readers.txt"),
            "Screen readers convert text to speech.",
        )
        .unwrap();
        fs::write(
            dir.path().join("mobility/canes.txt"),
            "White canes aid independent travel.",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_loads_txt_files_per_category() {
        let dir = corpus();
        let documents = CorpusLoader::new(dir.path()).load().unwrap();

        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].category, "blindness");
        assert_eq!(documents[0].filename, "braille.txt");
        assert!(documents[0].source.ends_with("braille.txt"));
        assert_eq!(documents[2].category, "mobility");
    }

    #[test]
    fn test_ignores_non_txt_and_root_files() {
        let dir = corpus();
        fs::write(dir.path().join("blindness/notes.md"), "ignored").unwrap();
        fs::write(dir.path().join("loose.txt"), "ignored").unwrap();

        let documents = CorpusLoader::new(dir.path()).load().unwrap();
        assert_eq!(documents.len(), 3);
    }

    #[test]
    fn test_skips_non_utf8_files() {
        let dir = corpus();
        let mut file = fs::File::create(dir.path().join("blindness/binary.txt")).unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        let documents = CorpusLoader::new(dir.path()).load().unwrap();
        assert_eq!(documents.len(), 3);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let result = CorpusLoader::new("/nonexistent/corpus").load();
        assert!(result.is_err());
    }
}
