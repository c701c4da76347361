use crate::chunking::{CHUNK_EXTENSION, chunk_file_name, plan};
use crate::error::{PrompterError, Result};
use crate::table::Table;
use crate::ui::notice;
use csv::WriterBuilder;
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct ChunkOptions {
    /// Remove `chunk_<N>.csv` files left over from a previous run with a
    /// larger chunk count.
    pub clean_stale: bool,
}

pub struct Chunker;

impl Chunker {
    /// Splits `table` into at most `n_chunks` contiguous chunks and writes
    /// each one to `output_dir/chunk_<i>.csv`. Returns the written paths in
    /// chunk order.
    pub fn chunk(table: &Table, n_chunks: usize, output_dir: &Path) -> Result<Vec<PathBuf>> {
        Self::chunk_with(table, n_chunks, output_dir, &ChunkOptions::default())
    }

    pub fn chunk_with(
        table: &Table,
        n_chunks: usize,
        output_dir: &Path,
        options: &ChunkOptions,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).map_err(|e| PrompterError::io(output_dir, e))?;

        let ranges = plan(table.len(), n_chunks)?;
        tracing::debug!(
            total_rows = table.len(),
            n_chunks,
            planned = ranges.len(),
            dir = %output_dir.display(),
            "Chunking table"
        );

        let mut saved = Vec::with_capacity(ranges.len());
        for (i, range) in ranges.into_iter().enumerate() {
            let rows = table.slice(range);
            let path = output_dir.join(chunk_file_name(i + 1));

            write_chunk(&path, table.headers(), rows)?;
            notice::chunk_saved(i + 1, rows.len(), &path);

            saved.push(path);
        }

        if options.clean_stale {
            for stale in remove_stale_chunks(output_dir, saved.len())? {
                notice::stale_removed(&stale);
            }
        }

        Ok(saved)
    }
}

fn write_chunk(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    let file = File::create(path).map_err(|e| PrompterError::io(path, e))?;
    let mut writer = WriterBuilder::new().from_writer(BufWriter::new(file));

    if !headers.is_empty() {
        writer
            .write_record(headers)
            .map_err(|e| PrompterError::csv(path, e))?;
    }
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| PrompterError::csv(path, e))?;
    }

    let mut inner = writer
        .into_inner()
        .map_err(|e| PrompterError::io(path, e.into_error()))?;
    inner.flush().map_err(|e| PrompterError::io(path, e))?;
    Ok(())
}

/// Deletes every `chunk_<N>.csv` in `dir` with `N > keep`.
pub fn remove_stale_chunks(dir: &Path, keep: usize) -> Result<Vec<PathBuf>> {
    let pattern = format!(r"^chunk_(\d+)\.{}$", CHUNK_EXTENSION);
    let re = Regex::new(&pattern).map_err(|e| PrompterError::invalid(e.to_string()))?;

    let mut removed = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| PrompterError::io(dir, e))? {
        let entry = entry.map_err(|e| PrompterError::io(dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        let index = re
            .captures(name)
            .and_then(|caps| caps[1].parse::<usize>().ok());
        if let Some(index) = index {
            if index > keep && entry.path().is_file() {
                let path = entry.path();
                fs::remove_file(&path).map_err(|e| PrompterError::io(&path, e))?;
                tracing::debug!(path = %path.display(), "Removed stale chunk");
                removed.push(path);
            }
        }
    }

    removed.sort();
    Ok(removed)
}
