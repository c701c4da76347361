//! Localized progress notices printed to the console.

use colored::Colorize;
use rust_i18n::t;
use std::ops::Range;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silences progress notices, e.g. when stdout carries machine-readable output.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn enabled() -> bool {
    !QUIET.load(Ordering::Relaxed)
}

pub fn chunk_saved(index: usize, rows: usize, path: &Path) {
    if enabled() {
        println!(
            "{} {}",
            "✓".green(),
            t!("chunk_saved", index = index, rows = rows, path = path.display())
        );
    }
}

pub fn chunk_planned(index: usize, range: &Range<usize>) {
    if enabled() {
        println!(
            "  {}",
            t!(
                "chunk_planned",
                index = index,
                start = range.start,
                end = range.end,
                rows = range.len()
            )
            .cyan()
        );
    }
}

pub fn stale_removed(path: &Path) {
    if enabled() {
        println!("{} {}", "-".yellow(), t!("stale_removed", path = path.display()));
    }
}

pub fn merged(source: &Path, target: &Path) {
    if enabled() {
        println!(
            "{} {}",
            "✓".green(),
            t!("merged", source = source.display(), target = target.display())
        );
    }
}

pub fn input_dir_missing(dir: &Path) {
    if enabled() {
        println!("{}", t!("input_dir_missing", dir = dir.display()).yellow());
    }
}

pub fn table_loaded(path: &Path, rows: usize, columns: usize) {
    if enabled() {
        println!(
            "{}",
            t!("table_loaded", rows = rows, columns = columns, path = path.display()).blue()
        );
    }
}

pub fn chunks_summary(count: usize, dir: &Path) {
    if enabled() {
        println!(
            "{}",
            t!("summary_chunks", count = count, dir = dir.display()).purple().bold()
        );
    }
}

pub fn merged_summary(count: usize, dir: &Path) {
    if enabled() {
        println!(
            "{}",
            t!("summary_merged", count = count, dir = dir.display()).purple().bold()
        );
    }
}

pub fn prompt_empty() {
    if enabled() {
        println!("{}", t!("prompt_empty").yellow());
    }
}
