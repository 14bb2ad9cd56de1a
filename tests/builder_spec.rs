use hsk_vocab::{HskError, HskLevel, VocabTable, VocabTableBuilder};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_list(dir: &Path, name: &str, lines: &[&str]) {
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(dir.join(name), body).unwrap();
}

/// Word lists covering every level, with the quirks the real 2025 release
/// has: homograph digit suffixes, blank lines, and a word repeated across
/// levels.
fn full_fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    write_list(base, "HSK_Level_1_words.txt", &["爱", "本"]);
    write_list(base, "HSK_Level_2_words.txt", &["本1", "点2", "你好", ""]);
    write_list(base, "HSK_Level_3_words.txt", &["打算"]);
    write_list(base, "HSK_Level_4_words.txt", &["爱", "安排"]);
    write_list(base, "HSK_Level_5_words.txt", &["把握", "123"]);
    write_list(base, "HSK_Level_6_words.txt", &["包含"]);
    write_list(base, "HSK_Level_7-9_words.txt", &["本", "罢工"]);
    dir
}

#[test]
fn full_build_assigns_last_processed_level() {
    let fixture = full_fixture();
    let outcome = VocabTableBuilder::new(fixture.path()).build().unwrap();
    let table = &outcome.table;

    assert!(outcome.missing.is_empty());

    // Digit suffixes are stripped before insertion
    assert_eq!(table.level_of("点"), Some(HskLevel::L2));
    assert_eq!(table.level_of("点2"), None);
    assert_eq!(table.level_of("你好"), Some(HskLevel::L2));

    // A word only in the level-3 list maps to 3
    assert_eq!(table.level_of("打算"), Some(HskLevel::L3));

    // Repeated across levels 1 and 4: the later list wins
    assert_eq!(table.level_of("爱"), Some(HskLevel::L4));

    // Band entries always map to 7, even over an earlier assignment
    assert_eq!(table.level_of("本"), Some(HskLevel::Advanced));
    assert_eq!(table.level_of("罢工"), Some(HskLevel::Advanced));

    // Blank and digit-only lines contribute nothing; duplicates collapse
    assert_eq!(table.len(), 9);
    assert!(table.iter().all(|(word, _)| !word.is_empty()));
}

#[test]
fn overwritten_words_keep_their_original_position() {
    let fixture = full_fixture();
    let outcome = VocabTableBuilder::new(fixture.path()).build().unwrap();

    let order: Vec<&str> = outcome.table.iter().map(|(word, _)| word).collect();
    assert_eq!(
        order,
        ["爱", "本", "点", "你好", "打算", "安排", "把握", "包含", "罢工"]
    );
}

#[test]
fn missing_lists_are_skipped_and_reported() {
    let fixture = full_fixture();
    fs::remove_file(fixture.path().join("HSK_Level_3_words.txt")).unwrap();
    fs::remove_file(fixture.path().join("HSK_Level_7-9_words.txt")).unwrap();

    let outcome = VocabTableBuilder::new(fixture.path()).build().unwrap();

    let missing: Vec<String> = outcome
        .missing
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        missing,
        ["HSK_Level_3_words.txt", "HSK_Level_7-9_words.txt"]
    );

    // Remaining lists still land; without the band, 本 keeps the
    // level-2 assignment from its 本1 homograph entry
    assert_eq!(outcome.table.level_of("打算"), None);
    assert_eq!(outcome.table.level_of("本"), Some(HskLevel::L2));
    assert_eq!(outcome.table.level_of("把握"), Some(HskLevel::L5));
}

#[test]
fn document_lands_in_nested_path_and_reloads() {
    let fixture = full_fixture();
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("lib").join("hsk").join("hsk_vocab_2025.json");

    let outcome = VocabTableBuilder::new(fixture.path())
        .build_to_file(&out_path)
        .unwrap();

    let raw = fs::read_to_string(&out_path).unwrap();
    // Indented, native script rather than \u escapes
    assert!(raw.contains("\n  \"你好\": 2"));
    assert!(!raw.contains("\\u"));

    let reloaded = VocabTable::load_json(&out_path).unwrap();
    assert_eq!(reloaded, outcome.table);
}

#[test]
fn gb18030_lists_decode_with_encoding_override() {
    let dir = tempfile::tempdir().unwrap();
    let (bytes, _, had_errors) = encoding_rs::GB18030.encode("本1\n点\n");
    assert!(!had_errors);
    fs::write(dir.path().join("HSK_Level_1_words.txt"), bytes).unwrap();

    let outcome = VocabTableBuilder::new(dir.path())
        .with_encoding("GBK")
        .build()
        .unwrap();
    assert_eq!(outcome.table.level_of("本"), Some(HskLevel::L1));
    assert_eq!(outcome.table.level_of("点"), Some(HskLevel::L1));
}

#[test]
fn undecodable_list_aborts_the_build() {
    let fixture = full_fixture();
    // "你" truncated mid-sequence makes the level-4 list invalid UTF-8
    fs::write(
        fixture.path().join("HSK_Level_4_words.txt"),
        [0xE4u8, 0xBD],
    )
    .unwrap();

    let err = VocabTableBuilder::new(fixture.path()).build().unwrap_err();
    assert!(matches!(err, HskError::Decode { .. }));
}
