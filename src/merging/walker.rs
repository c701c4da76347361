use crate::chunking::CHUNK_EXTENSION;
use crate::error::{PrompterError, Result};
use crate::ui::notice;
use glob::{MatchOptions, Pattern, glob_with};
use std::path::{Path, PathBuf};

pub struct ChunkWalker;

impl ChunkWalker {
    /// Lists the `*.csv` files directly inside `dir` (no recursion).
    ///
    /// A missing directory is not an error: it yields an empty list and a
    /// warning, same as an empty one.
    pub fn walk(dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            tracing::warn!(dir = %dir.display(), "Input directory does not exist");
            notice::input_dir_missing(dir);
            return Ok(Vec::new());
        }

        let pattern = format!(
            "{}/*.{}",
            Pattern::escape(&dir.to_string_lossy()),
            CHUNK_EXTENSION
        );
        // Dotfiles (editor swap files, `.csv` itself) are never chunks
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let entries =
            glob_with(&pattern, options).map_err(|e| PrompterError::invalid(e.to_string()))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                PrompterError::io(&path, e.into())
            })?;
            if path.is_file() {
                files.push(path);
            }
        }

        tracing::debug!(dir = %dir.display(), found = files.len(), "Listed chunk files");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_only_csv_files_at_top_level() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("chunk_1.csv"), "a\n1\n").unwrap();
        fs::write(dir.path().join("chunk_2.csv"), "a\n2\n").unwrap();
        fs::write(dir.path().join("readme.md"), "x").unwrap();
        fs::create_dir(dir.path().join("nested.csv")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("chunk_3.csv"), "a\n3\n").unwrap();

        let mut files = ChunkWalker::walk(dir.path()).unwrap();
        files.sort();
        assert_eq!(
            files,
            vec![dir.path().join("chunk_1.csv"), dir.path().join("chunk_2.csv")]
        );
    }

    #[test]
    fn skips_dotfiles() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".csv"), "a\n0\n").unwrap();
        fs::write(dir.path().join(".hidden.csv"), "a\n0\n").unwrap();
        fs::write(dir.path().join("chunk_1.csv"), "a\n1\n").unwrap();

        let files = ChunkWalker::walk(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("chunk_1.csv")]);
    }

    #[test]
    fn missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let files = ChunkWalker::walk(&dir.path().join("typo")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn glob_metacharacters_in_dir_are_literal() {
        let dir = TempDir::new().unwrap();
        let odd = dir.path().join("run [1]");
        fs::create_dir(&odd).unwrap();
        fs::write(odd.join("chunk_1.csv"), "a\n1\n").unwrap();

        let files = ChunkWalker::walk(&odd).unwrap();
        assert_eq!(files, vec![odd.join("chunk_1.csv")]);
    }
}
