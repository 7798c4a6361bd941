//! End-to-end tests for the additive dataset pipeline
//!
//! Builds the dataset from fixture text files in a temporary directory
//! and verifies the contract of the produced artifacts: idempotence,
//! code uniqueness, index consistency, and text-export round-tripping.

use additive_processor::app::services::artifact_writer::{
    write_artifacts, ArtifactJob, CanonicalSink, CompactSink, IndexSink,
};
use additive_processor::app::services::dataset_builder::build_dataset;
use additive_processor::app::services::parser::{build_records, ParserRules, SourceParser};
use additive_processor::app::services::text_exporter;
use additive_processor::constants::MAX_INPUT_FILE_BYTES;
use additive_processor::{Additive, DatasetIndex, Error, RiskLevel};
use std::path::PathBuf;
use tempfile::TempDir;

const FILE_ONE: &str = "\
E100 - Curcumin
Name: E100 - Curcumin
Description: A natural yellow pigment
extracted from turmeric root.
Function: Coloring
Health risks: Generally recognized as safe.

E102
Name: Tartrazine
Function: Coloring
Health risks: May cause hyperactivity in children.
Acceptable daily intake (ADI): Not specified.

E123
Name: Amaranth
Health risks: Banned in the United States; suspected carcinogen.
";

const FILE_TWO: &str = "\
E102
Name: Tartrazine
Description: A synthetic lemon-yellow azo dye.
Function: Coloring
Origin: Synthetic
Health risks: May cause hyperactivity in children.

E270a
Description: Lactic acid variant.

E9
Function: Placeholder entry.
";

fn write_fixtures(dir: &TempDir) -> Vec<PathBuf> {
    let one = dir.path().join("aditivi100-199.txt");
    let two = dir.path().join("dodatek.txt");
    std::fs::write(&one, FILE_ONE).expect("fixture write");
    std::fs::write(&two, FILE_TWO).expect("fixture write");
    vec![one, two]
}

async fn build_fixture_dataset(dir: &TempDir) -> Vec<Additive> {
    let rules = ParserRules::new().expect("rules");
    let parser = SourceParser::new(&rules, MAX_INPUT_FILE_BYTES);
    let paths = write_fixtures(dir);
    let outcome = parser.parse_sources(&paths, None).await.expect("parse");
    let (records, _stats) = build_dataset(outcome);
    records
}

#[tokio::test]
async fn test_every_recorded_code_survives_exactly_once() {
    let dir = TempDir::new().expect("temp dir");
    let records = build_fixture_dataset(&dir).await;

    let codes: Vec<&str> = records.iter().map(|a| a.code.as_str()).collect();
    // Sorted numeric-then-lexical, one entry per code across both files
    assert_eq!(codes, vec!["E9", "E100", "E102", "E123", "E270a"]);
}

#[tokio::test]
async fn test_duplicate_code_resolves_to_richer_record() {
    let dir = TempDir::new().expect("temp dir");
    let records = build_fixture_dataset(&dir).await;

    let tartrazine = records.iter().find(|a| a.code == "E102").expect("E102");
    // The second file's candidate carries description and origin
    assert_eq!(tartrazine.description, "A synthetic lemon-yellow azo dye.");
    assert_eq!(tartrazine.origin, "Synthetic");
    assert_eq!(tartrazine.risk_level, RiskLevel::Moderate);
}

#[tokio::test]
async fn test_name_fallback_and_grading() {
    let dir = TempDir::new().expect("temp dir");
    let records = build_fixture_dataset(&dir).await;

    let placeholder = records.iter().find(|a| a.code == "E9").expect("E9");
    assert_eq!(placeholder.name, "E9");
    assert_eq!(placeholder.risk_level, RiskLevel::Unknown);

    let amaranth = records.iter().find(|a| a.code == "E123").expect("E123");
    assert_eq!(amaranth.risk_level, RiskLevel::High);
}

#[tokio::test]
async fn test_artifacts_are_idempotent_and_index_is_consistent() {
    let dir = TempDir::new().expect("temp dir");
    let records = build_fixture_dataset(&dir).await;

    let out = dir.path().join("out");
    let jobs = |suffix: &str| {
        vec![
            ArtifactJob::new(CanonicalSink, out.join(format!("db{}.json", suffix))),
            ArtifactJob::new(CompactSink, out.join(format!("db{}.min.json", suffix))),
            ArtifactJob::new(IndexSink, out.join(format!("index{}.json", suffix))),
        ]
    };

    let first = write_artifacts(&records, jobs("1")).await;
    let second = write_artifacts(&records, jobs("2")).await;
    assert!(first.all_succeeded());
    assert!(second.all_succeeded());

    for name in ["db", "db.min", "index"] {
        let (a, b) = match name {
            "db" => ("db1.json", "db2.json"),
            "db.min" => ("db1.min.json", "db2.min.json"),
            _ => ("index1.json", "index2.json"),
        };
        let first_bytes = std::fs::read(out.join(a)).expect("read first");
        let second_bytes = std::fs::read(out.join(b)).expect("read second");
        assert_eq!(first_bytes, second_bytes, "{} artifact differs", name);
    }

    let index: DatasetIndex =
        serde_json::from_slice(&std::fs::read(out.join("index1.json")).expect("read index"))
            .expect("parse index");
    assert_eq!(index.count, records.len());
    for (position, record) in records.iter().enumerate() {
        assert_eq!(index.by_code[&record.code], position);
        assert_eq!(index.codes[position], record.code);
    }

    let canonical: Vec<Additive> =
        serde_json::from_slice(&std::fs::read(out.join("db1.json")).expect("read db"))
            .expect("parse canonical");
    let compact: Vec<Additive> =
        serde_json::from_slice(&std::fs::read(out.join("db1.min.json")).expect("read min"))
            .expect("parse compact");
    assert_eq!(canonical, compact);
    assert_eq!(canonical, records);
}

#[tokio::test]
async fn test_text_export_round_trips_through_the_grammar() {
    let dir = TempDir::new().expect("temp dir");
    let records = build_fixture_dataset(&dir).await;

    let json_path = dir.path().join("db.json");
    let report = write_artifacts(
        &records,
        vec![ArtifactJob::new(CanonicalSink, json_path.clone())],
    )
    .await;
    assert!(report.all_succeeded());

    let txt_path = dir.path().join("export.txt");
    let exported = text_exporter::export_text(&json_path, &txt_path)
        .await
        .expect("export");
    assert_eq!(exported, records.len());

    // Re-parse the export with the same grammar: field values must equal
    // the originals, modulo the "Not specified." placeholder for empties.
    let rules = ParserRules::new().expect("rules");
    let text = std::fs::read_to_string(&txt_path).expect("read export");
    let reparsed = build_records(&rules, &text);

    assert_eq!(reparsed.records.len(), records.len());
    for (original, round_tripped) in records.iter().zip(&reparsed.records) {
        assert_eq!(original.code, round_tripped.code);
        assert_eq!(original.name, round_tripped.name);
        assert_eq!(original.description, round_tripped.description);
        assert_eq!(original.function, round_tripped.function);
        assert_eq!(original.origin, round_tripped.origin);
        assert_eq!(original.health_risks, round_tripped.health_risks);
        assert_eq!(original.usage, round_tripped.usage);
        assert_eq!(original.adi, round_tripped.adi);
        assert_eq!(original.other_details, round_tripped.other_details);
    }
}

#[tokio::test]
async fn test_export_with_missing_source_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.json");
    let out = dir.path().join("export.txt");

    let result = text_exporter::export_text(&missing, &out).await;
    match result {
        Err(Error::FileNotFound { path }) => assert!(path.contains("absent.json")),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_partial_artifact_failure_does_not_block_others() {
    let dir = TempDir::new().expect("temp dir");
    let records = build_fixture_dataset(&dir).await;

    // The canonical path collides with an existing directory; the other
    // artifacts must still be written.
    let blocked = dir.path().join("blocked");
    std::fs::create_dir(&blocked).expect("create blocker");

    let report = write_artifacts(
        &records,
        vec![
            ArtifactJob::new(CanonicalSink, blocked.clone()),
            ArtifactJob::new(CompactSink, dir.path().join("db.min.json")),
            ArtifactJob::new(IndexSink, dir.path().join("index.json")),
        ],
    )
    .await;

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.written.len(), 2);
    assert!(dir.path().join("db.min.json").exists());
    assert!(dir.path().join("index.json").exists());
}
