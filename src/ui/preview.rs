use crate::error::{PrompterError, Result};
use crate::merging::PROMPT_SEPARATOR;
use crate::ui::theme::{RULE_RGB, prompt_skin, table_skin};
use colored::Colorize;
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

/// Renders a merged document in the terminal: the prompt in the prompt skin,
/// then the chunk rows as a table.
pub fn preview(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|e| PrompterError::io(path, e))?;
    let (prompt, body) = split_document(&text);
    let (r, g, b) = RULE_RGB;

    println!("{}", "─".repeat(60).truecolor(r, g, b));
    println!("{}", path.display().to_string().bold());
    println!("{}", "─".repeat(60).truecolor(r, g, b));
    if !prompt.is_empty() {
        prompt_skin().print_text(prompt);
        println!("{}", "┄".repeat(60).truecolor(r, g, b));
    }
    match csv_to_markdown(body) {
        Some(table) => table_skin().print_text(&table),
        None => table_skin().print_text(&format!("```\n{}\n```", body)),
    }
    println!("{}", "─".repeat(60).truecolor(r, g, b));
    Ok(())
}

/// Splits at the first blank-line separator. A document without one is all prompt.
pub fn split_document(text: &str) -> (&str, &str) {
    text.split_once(PROMPT_SEPARATOR).unwrap_or((text, ""))
}

/// CSV text as a markdown table, or `None` when it does not parse.
pub fn csv_to_markdown(body: &str) -> Option<String> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = rdr.headers().ok()?.iter().map(md_cell).collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return None;
    }

    let mut out = format!("|{}|\n|{}|\n", headers.join("|"), vec!["-"; headers.len()].join("|"));
    for record in rdr.records() {
        let record = record.ok()?;
        let cells: Vec<String> = record.iter().map(md_cell).collect();
        out.push_str(&format!("|{}|\n", cells.join("|")));
    }
    Some(out)
}

fn md_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}
