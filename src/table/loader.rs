//! Loads a [`Table`] from a CSV/TSV file or a JSON array of records.

use crate::error::{PrompterError, Result};
use crate::table::Table;
use csv::ReaderBuilder;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter for `.csv` input. `.tsv` always uses a tab.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl LoadOptions {
    /// Parses a delimiter given as text (`","`, `";"`, `"\t"` or `"tab"`).
    pub fn with_delimiter(delimiter: &str) -> Result<Self> {
        let byte = match delimiter {
            "\\t" | "tab" | "\t" => b'\t',
            s if s.len() == 1 && s.is_ascii() => s.as_bytes()[0],
            s => {
                return Err(PrompterError::invalid(format!(
                    "delimiter must be a single ASCII character, got {:?}",
                    s
                )));
            }
        };
        Ok(Self { delimiter: byte })
    }
}

/// Loads a table, picking the format from the file extension.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let file = File::open(path).map_err(|e| PrompterError::io(path, e))?;
    let reader = BufReader::new(file);

    let table = match ext.as_str() {
        "csv" => read_csv(reader, options.delimiter, path)?,
        "tsv" => read_csv(reader, b'\t', path)?,
        "json" => read_json(reader)?,
        other => {
            return Err(PrompterError::invalid(format!(
                "unsupported table format {:?} for {}",
                other,
                path.display()
            )));
        }
    };

    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "Loaded table"
    );
    Ok(table)
}

/// Reads delimited text with a header row. Cells are kept verbatim.
pub fn read_csv<R: Read>(reader: R, delimiter: u8, source: &Path) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| PrompterError::csv(source, e))?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| PrompterError::csv(source, e))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Table::new(headers, rows)
}

/// Reads a JSON array of objects. Columns follow first-seen key order.
pub fn read_json<R: Read>(reader: R) -> Result<Table> {
    let records: Vec<Map<String, Value>> = serde_json::from_reader(reader)?;

    let mut headers: Vec<String> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|h| record.get(h).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    Table::new(headers, rows)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
