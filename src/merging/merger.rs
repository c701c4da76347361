use crate::error::{PrompterError, Result};
use crate::merging::walker::ChunkWalker;
use crate::merging::{MERGED_EXTENSION, PROMPT_SEPARATOR};
use crate::ui::notice;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Merger;

impl Merger {
    /// Prepends `prompt` to every `*.csv` file in `input_dir` and writes the
    /// result to `output_dir/<stem>.md`. Returns the written paths in listing
    /// order. A missing or empty `input_dir` yields an empty list.
    pub fn merge(prompt: &str, input_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).map_err(|e| PrompterError::io(output_dir, e))?;

        let sources = ChunkWalker::walk(input_dir)?;
        let mut merged = Vec::with_capacity(sources.len());

        for source in sources {
            let contents = fs::read_to_string(&source).map_err(|e| PrompterError::io(&source, e))?;
            let name = merged_file_name(&source)?;
            let target = output_dir.join(name);

            fs::write(&target, merge_text(prompt, &contents))
                .map_err(|e| PrompterError::io(&target, e))?;
            notice::merged(&source, &target);

            merged.push(target);
        }

        tracing::debug!(
            input = %input_dir.display(),
            output = %output_dir.display(),
            count = merged.len(),
            "Merged prompt into chunk files"
        );
        Ok(merged)
    }
}

pub fn merge_text(prompt: &str, contents: &str) -> String {
    let mut text = String::with_capacity(prompt.len() + PROMPT_SEPARATOR.len() + contents.len());
    text.push_str(prompt);
    text.push_str(PROMPT_SEPARATOR);
    text.push_str(contents);
    text
}

/// `<stem>.md` for a chunk file path.
pub fn merged_file_name(source: &Path) -> Result<String> {
    let stem = source.file_stem().ok_or_else(|| {
        PrompterError::invalid(format!("no file name in {}", source.display()))
    })?;
    Ok(format!("{}.{}", stem.to_string_lossy(), MERGED_EXTENSION))
}
