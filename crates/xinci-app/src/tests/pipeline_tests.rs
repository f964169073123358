//! End-to-end runs: document on disk -> JSON report on disk

use std::fs;
use std::io::Write;
use std::path::Path;

use xinci_config::Config;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::pipeline::{RunOutcome, run};

const FILLER: &str = "天地玄黄宇宙洪荒日月盈昃辰宿列张寒来暑往秋收冬藏闰余成岁律吕调阳云腾致雨露结为霜";

fn corpus() -> String {
    let left = ["测", "含", "降", "升", "查", "验"];
    let right = ["的", "值", "量", "浓", "数", "少"];
    let mut text = String::new();
    for (l, r) in left.iter().zip(right) {
        text.push_str(&format!("{l}血红蛋白{r}。\n"));
    }
    for _ in 0..3 {
        text.push_str(FILLER);
        text.push_str("……\n");
    }
    text
}

fn config_for(dir: &Path) -> Config {
    let mut config = Config::default();
    config.dictionary.root = dir.join("dicts").to_string_lossy().into_owned();
    config.output.path = dir.join("out.json").to_string_lossy().into_owned();
    config.discovery.threads = 1;
    config
}

#[test]
fn test_text_document_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("doc.txt");
    fs::write(&doc, corpus()).unwrap();
    let config = config_for(dir.path());

    let outcome = run(&doc, &config).unwrap();
    assert_eq!(
        outcome,
        RunOutcome::Written {
            path: dir.path().join("out.json"),
            candidates: 1,
        }
    );

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("out.json")).unwrap()).unwrap();
    assert_eq!(json["血红蛋白"]["count"], 6);
    assert_eq!(json["血红蛋白"]["pmi"], 4.7);
    assert_eq!(json["血红蛋白"]["entropy"], 2.58);
}

#[test]
fn test_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("doc.txt");
    fs::write(&doc, corpus() + "白蛋白偏低，蛋白质高，球蛋白，").unwrap();

    let mut config = config_for(dir.path());
    config.discovery.entropy_filter = false;
    config.discovery.min_count = 2;
    config.discovery.threads = 3;

    run(&doc, &config).unwrap();
    let first = fs::read(dir.path().join("out.json")).unwrap();
    run(&doc, &config).unwrap();
    let second = fs::read(dir.path().join("out.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_known_words_from_dictionary_dir() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("doc.txt");
    fs::write(&doc, corpus()).unwrap();

    let dicts = dir.path().join("dicts/chinese");
    fs::create_dir_all(&dicts).unwrap();
    fs::write(dicts.join("medical.json"), r#"{"xue": [{"char": "血红蛋白"}]}"#).unwrap();
    fs::write(dicts.join("corrupt.json"), "{{{{").unwrap();

    let outcome = run(&doc, &config_for(dir.path())).unwrap();
    assert!(matches!(outcome, RunOutcome::Written { candidates: 0, .. }));
}

#[test]
fn test_epub_document() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("book.epub");
    let file = fs::File::create(&doc).unwrap();
    let mut zip = ZipWriter::new(file);
    zip.start_file("mimetype", SimpleFileOptions::default()).unwrap();
    zip.write_all(b"application/epub+zip").unwrap();
    for (i, line) in corpus().lines().enumerate() {
        zip.start_file(format!("OEBPS/ch{i}.xhtml"), SimpleFileOptions::default())
            .unwrap();
        zip.write_all(format!("<html><body><p>{line}</p></body></html>").as_bytes())
            .unwrap();
    }
    zip.finish().unwrap();

    let outcome = run(&doc, &config_for(dir.path())).unwrap();
    assert!(matches!(outcome, RunOutcome::Written { candidates: 1, .. }));
}

#[test]
fn test_no_chinese_content_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("doc.txt");
    fs::write(&doc, "Only English text here. 好").unwrap();

    let outcome = run(&doc, &config_for(dir.path())).unwrap();
    assert_eq!(outcome, RunOutcome::NoContent);
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_unsupported_document_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("doc.pdf");
    fs::write(&doc, corpus()).unwrap();

    let outcome = run(&doc, &config_for(dir.path())).unwrap();
    assert_eq!(outcome, RunOutcome::NoContent);
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_missing_document_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let result = run(&dir.path().join("missing.txt"), &config_for(dir.path()));
    assert!(result.is_err());
    assert!(!dir.path().join("out.json").exists());
}
