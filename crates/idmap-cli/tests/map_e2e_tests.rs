//! End-to-end tests for idmap map and idmap entries
//!
//! These tests run the binary against a mock UniProt server and check:
//! - Output row order and duplicate fan-out
//! - One request per unique identifier
//! - Skip-prefix filtering
//! - Error isolation per identifier
//! - Fatal handling of a missing input file

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Helper to write an identifier file
fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let input = dir.path().join(name);
    fs::write(&input, content).expect("Failed to create input file");
    input
}

/// Helper to create a mock UniProt search hit
fn search_hit(accession: &str, name: &str, gene: &str) -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "primaryAccession": accession,
            "proteinDescription": {
                "recommendedName": { "fullName": { "value": name } }
            },
            "genes": [{ "geneName": { "value": gene } }]
        }]
    })
}

fn gene_query(symbol: &str) -> String {
    format!("gene_exact:\"{}\" AND organism_id:9606", symbol)
}

/// idmap batch subcommand isolated from the caller's environment
fn idmap(dir: &TempDir, server: &MockServer, subcommand: &str) -> Command {
    let mut cmd = Command::cargo_bin("idmap").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("IDMAP_SKIP_PREFIXES")
        .env_remove("IDMAP_WORKERS")
        .env_remove("LOG_OUTPUT")
        .arg("--uniprot-url")
        .arg(server.uri())
        .arg(subcommand)
        .arg("--delay-ms")
        .arg("0");
    cmd
}

#[tokio::test]
async fn test_map_preserves_order_and_deduplicates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .and(query_param("query", gene_query("TP53")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(search_hit(
                "P04637",
                "Cellular tumor antigen p53",
                "TP53",
            )),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .and(query_param("query", gene_query("BRCA1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hit(
            "P38398",
            "Breast cancer type 1 susceptibility protein",
            "BRCA1",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "genes.txt", "TP53\nBRCA1 TP53\n\n");
    let output = dir.path().join("out.txt");

    let mut cmd = idmap(&dir, &mock_server, "map");
    cmd.arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 identifier(s), 2 unique"));

    let table = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Input  UniProt_ID  Recommended Name"));
    assert_eq!(lines[1].len(), lines[0].len());
    assert!(lines[2].starts_with("TP53   P04637"));
    assert!(lines[3].starts_with("BRCA1  P38398"));
    assert!(lines[4].starts_with("TP53   P04637"));
}

#[tokio::test]
async fn test_map_skips_prefixed_identifiers_and_records_misses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .and(query_param("query", gene_query("NOTAGENE")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .and(query_param("query", gene_query("MYC")))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "set.txt",
        "HALLMARK_MYC_TARGETS http://www.gsea-msigdb.org\nNOTAGENE MYC\n",
    );
    let output = dir.path().join("out.txt");

    let mut cmd = idmap(&dir, &mock_server, "map");
    cmd.arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Skipped:   2"))
        .stdout(predicate::str::contains("Not found: 1"));

    let table = fs::read_to_string(&output).unwrap();
    assert!(table.contains("Skipped"));
    assert!(table.contains("Error: HTTP 503"));

    let miss = table
        .lines()
        .find(|line| line.starts_with("NOTAGENE"))
        .unwrap();
    assert_eq!(miss.matches("Not found").count(), 1);
    assert!(miss.contains("N/A"));
}

#[tokio::test]
async fn test_map_tsv_output() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .and(query_param("query", "protein_name:\"insulin\" AND organism_id:9606"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hit("P01308", "Insulin", "INS")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .and(query_param("query", "protein_name:\"unobtainium\" AND organism_id:9606"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("uniprot_results.txt");

    let mut cmd = idmap(&dir, &mock_server, "map");
    cmd.arg("--by")
        .arg("protein")
        .arg("--id")
        .arg("insulin")
        .arg("--id")
        .arg("unobtainium")
        .arg("--format")
        .arg("tsv")
        .arg("--output")
        .arg(&output);

    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "P01308\tInsulin\n");
}

#[tokio::test]
async fn test_entries_table() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/P01308.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "primaryAccession": "P01308",
            "proteinDescription": {
                "recommendedName": { "fullName": { "value": "Insulin" } }
            },
            "genes": [{ "geneName": { "value": "INS" } }],
            "features": [
                { "type": "Chain", "description": "Insulin B chain" },
                { "type": "Chain", "description": "Insulin A chain" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/Q00000.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ids.txt", "1 P01308\n2 Q00000\n3 P01308\n");
    let output = dir.path().join("table.txt");

    let mut cmd = idmap(&dir, &mock_server, "entries");
    cmd.arg("--input")
        .arg(&input)
        .arg("--column")
        .arg("2")
        .arg("--output")
        .arg(&output);

    cmd.assert().success();

    let table = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("UniProt ID  Recommended Name"));
    assert!(lines[2].contains("Insulin B chain, Insulin A chain"));
    assert!(lines[3].starts_with("Q00000"));
    assert!(lines[3].contains("Not found"));
    assert_eq!(lines[4], lines[2]);
}

#[tokio::test]
async fn test_missing_input_file_aborts_without_output() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    let mut cmd = idmap(&dir, &mock_server, "map");
    cmd.arg("--input")
        .arg(dir.path().join("missing.txt"))
        .arg("--output")
        .arg(&output);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));

    assert!(!output.exists());
}

#[test]
fn test_zero_workers_rejected() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("idmap").unwrap();
    cmd.current_dir(dir.path())
        .arg("map")
        .arg("--id")
        .arg("TP53")
        .arg("--workers")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Worker count must be at least 1"));
}
