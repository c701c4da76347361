use crate::config::Settings;
use colored::Colorize;
use glob::glob;
use rust_i18n::t;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Created,
    Missing,
    Fail(String),
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "{}", "OK".green()),
            CheckStatus::Created => write!(f, "{}", "CREATED".yellow()),
            CheckStatus::Missing => write!(f, "{}", "MISSING".yellow()),
            CheckStatus::Fail(reason) => write!(f, "{} ({})", "FAIL".red(), reason),
        }
    }
}

pub struct Doctor;

impl Doctor {
    pub fn check(settings: &Settings) {
        println!("{}", t!("doctor_title").purple().bold());
        println!("{}", "─".repeat(40).dimmed());

        // 1. Where settings came from
        println!("• {}:", t!("doctor_config"));
        if let Some(path) = Settings::user_config_path() {
            println!("    {} ... {}", path.display(), config_status(&path));
        }
        let local = local_config_files();
        if local.is_empty() {
            println!("    ./prompter.* ... {}", CheckStatus::Missing);
        }
        for path in local {
            println!("    {} ... {}", path, CheckStatus::Ok);
        }

        // 2. Output directories
        println!(
            "• {} ({}) ... {}",
            t!("doctor_chunk_dir"),
            settings.chunk_dir,
            check_dir(Path::new(&settings.chunk_dir))
        );
        println!(
            "• {} ({}) ... {}",
            t!("doctor_merged_dir"),
            settings.merged_dir,
            check_dir(Path::new(&settings.merged_dir))
        );

        // 3. Prompt file
        if let Some(file) = &settings.prompt_file {
            println!(
                "• {} ({}) ... {}",
                t!("doctor_prompt_file"),
                file,
                check_prompt_file(Path::new(file))
            );
        }

        println!("\n{}", t!("doctor_done"));
    }
}

/// Ensures `dir` exists and is writable, creating it when absent.
pub fn check_dir(dir: &Path) -> CheckStatus {
    if dir.exists() {
        match dir.metadata() {
            Ok(meta) if !meta.is_dir() => CheckStatus::Fail("not a directory".into()),
            Ok(meta) if meta.permissions().readonly() => CheckStatus::Fail("read-only".into()),
            Ok(_) => CheckStatus::Ok,
            Err(e) => CheckStatus::Fail(e.to_string()),
        }
    } else {
        match fs::create_dir_all(dir) {
            Ok(_) => CheckStatus::Created,
            Err(e) => CheckStatus::Fail(e.to_string()),
        }
    }
}

pub fn check_prompt_file(path: &Path) -> CheckStatus {
    match fs::read_to_string(path) {
        Ok(_) => CheckStatus::Ok,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CheckStatus::Missing,
        Err(e) => CheckStatus::Fail(e.to_string()),
    }
}

fn config_status(base: &Path) -> CheckStatus {
    let pattern = format!("{}.*", glob::Pattern::escape(&base.to_string_lossy()));
    match glob(&pattern) {
        Ok(paths) => {
            if paths.filter_map(|p| p.ok()).next().is_some() {
                CheckStatus::Ok
            } else {
                CheckStatus::Missing
            }
        }
        Err(e) => CheckStatus::Fail(e.to_string()),
    }
}

fn local_config_files() -> Vec<String> {
    glob("prompter.*")
        .map(|paths| {
            paths
                .filter_map(|p| p.ok())
                .filter(|p| matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("toml" | "yaml" | "yml" | "json" | "ini" | "ron" | "json5")
                ))
                .map(|p| p.display().to_string())
                .collect()
        })
        .unwrap_or_default()
}
