use prompter_lex::chunking::Chunker;
use prompter_lex::merging::Merger;
use prompter_lex::table::Table;
use prompter_lex::table::loader::{LoadOptions, load_table};
use prompter_lex::ui::notice;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn table(rows: usize) -> Table {
    Table::new(
        vec!["id".into(), "city".into(), "comment".into()],
        (0..rows)
            .map(|i| vec![i.to_string(), format!("city-{}", i % 3), format!("note, #{}", i)])
            .collect(),
    )
    .unwrap()
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open chunk");
    reader
        .records()
        .map(|r| r.expect("Failed to read record").iter().map(String::from).collect())
        .collect()
}

#[test]
fn chunks_reassemble_into_the_original_table() {
    notice::set_quiet(true);
    let dir = TempDir::new().unwrap();
    let source = table(23);

    let paths = Chunker::chunk(&source, 5, dir.path()).unwrap();
    assert_eq!(paths.len(), 5);

    let sizes: Vec<usize> = paths.iter().map(|p| read_rows(p).len()).collect();
    assert_eq!(sizes, vec![5, 5, 5, 5, 3]);

    let rebuilt: Vec<Vec<String>> = paths.iter().flat_map(|p| read_rows(p)).collect();
    assert_eq!(rebuilt, source.rows());
}

#[test]
fn rechunking_is_byte_identical() {
    notice::set_quiet(true);
    let dir = TempDir::new().unwrap();
    let source = table(9);

    let first = Chunker::chunk(&source, 4, dir.path()).unwrap();
    let before: Vec<Vec<u8>> = first.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = Chunker::chunk(&source, 4, dir.path()).unwrap();
    let after: Vec<Vec<u8>> = second.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(before, after);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), first.len());
}

#[test]
fn more_chunks_than_rows() {
    notice::set_quiet(true);
    let dir = TempDir::new().unwrap();
    let paths = Chunker::chunk(&table(3), 10, dir.path()).unwrap();

    assert_eq!(paths.len(), 3);
    for path in &paths {
        assert_eq!(read_rows(path).len(), 1);
    }
}

#[test]
fn merge_prepends_prompt_to_every_chunk() {
    notice::set_quiet(true);
    let root = TempDir::new().unwrap();
    let chunk_dir = root.path().join("chunks");
    let merged_dir = root.path().join("merged");
    let prompt = "Classify the sentiment of each comment.";

    let chunks = Chunker::chunk(&table(5), 2, &chunk_dir).unwrap();
    let merged = Merger::merge(prompt, &chunk_dir, &merged_dir).unwrap();
    assert_eq!(merged.len(), chunks.len());

    for chunk in &chunks {
        let stem = chunk.file_stem().unwrap().to_string_lossy().to_string();
        let target = merged_dir.join(format!("{}.md", stem));
        assert!(merged.contains(&target));

        let expected = format!("{}\n\n{}", prompt, fs::read_to_string(chunk).unwrap());
        assert_eq!(fs::read_to_string(&target).unwrap(), expected);
    }
}

#[test]
fn json_table_end_to_end() {
    notice::set_quiet(true);
    let root = TempDir::new().unwrap();
    let input = root.path().join("rows.json");
    fs::write(
        &input,
        r#"[{"name": "ada", "score": 9}, {"name": "bob", "score": null}, {"name": "cy", "score": 7}]"#,
    )
    .unwrap();

    let source = load_table(&input, &LoadOptions::default()).unwrap();
    let chunks = Chunker::chunk(&source, 2, &root.path().join("chunks")).unwrap();

    assert_eq!(
        fs::read_to_string(&chunks[0]).unwrap(),
        "name,score\nada,9\nbob,\n"
    );
    assert_eq!(fs::read_to_string(&chunks[1]).unwrap(), "name,score\ncy,7\n");
}

#[test]
fn merging_an_empty_directory_writes_nothing() {
    notice::set_quiet(true);
    let root = TempDir::new().unwrap();
    let empty = root.path().join("empty");
    fs::create_dir(&empty).unwrap();
    let merged_dir = root.path().join("merged");

    assert!(Merger::merge("P", &empty, &merged_dir).unwrap().is_empty());
    assert_eq!(fs::read_dir(&merged_dir).unwrap().count(), 0);
}
