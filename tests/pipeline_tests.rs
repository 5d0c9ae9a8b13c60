//! End-to-end runs against a mocked Scryfall.

use binder_merge::{run, BinderError, Config, Result, RunSummary};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HEADER: &str = "number,set,lang,foil,etched,pre release,promo";

fn named(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "object": "card", "name": name }))
}

fn binder_with(files: &[(&str, Vec<&str>)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let binder = dir.path().join("binder");
    fs::create_dir(&binder).unwrap();
    for (name, rows) in files {
        let mut content = String::from(HEADER);
        for row in rows.iter() {
            content.push_str("\r\n");
            content.push_str(row);
        }
        content.push_str("\r\n");
        fs::write(binder.join(name), content).unwrap();
    }
    dir
}

fn config_for(dir: &TempDir, server: &MockServer) -> Config {
    let binder = dir.path().join("binder");
    Config {
        cache_path: binder.join("scryfall.json"),
        output_path: binder.join("merged.csv"),
        binder_dir: binder,
        api_base_url: server.uri(),
    }
}

async fn run_blocking(config: Config) -> Result<RunSummary> {
    tokio::task::spawn_blocking(move || run(&config)).await.unwrap()
}

fn output_lines(config: &Config) -> Vec<String> {
    fs::read_to_string(&config.output_path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn run_merges_duplicates_and_splits_foils() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/neo/100"))
        .respond_with(named("Foo"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cards/dmu/7"))
        .respond_with(named("Bar"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = binder_with(&[
        ("a.csv", vec!["100,neo,en,,,,", "100,neo,en,X,,,", "7,dmu,en,,yes,,"]),
        ("b.csv", vec!["100,neo,en,,,,"]),
    ]);
    let config = config_for(&dir, &server);

    let summary = run_blocking(config.clone()).await.unwrap();

    assert_eq!(
        summary,
        RunSummary {
            rows_read: 4,
            cards_merged: 3,
            rows_written: 3,
        }
    );
    assert_eq!(
        output_lines(&config),
        vec![
            "Count,Name,Edition,Condition,Language,Foil,Collector Number,Alter,Proxy,Purchase Price",
            "2,Foo,neo,NM,en,,100,FALSE,FALSE,",
            "1,Foo,neo,NM,en,foil,100,FALSE,FALSE,",
            "1,Bar,dmu,NM,en,etched,7,FALSE,FALSE,",
        ]
    );

    let cache: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.cache_path).unwrap()).unwrap();
    assert_eq!(cache, serde_json::json!({ "neo__100": "Foo", "dmu__7": "Bar" }));
}

#[tokio::test]
async fn run_pre_release_card_uses_promo_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/pneo/5s"))
        .respond_with(named("Prerelease Thing"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = binder_with(&[("a.csv", vec!["5,neo,en,,,x,"])]);
    let config = config_for(&dir, &server);

    run_blocking(config.clone()).await.unwrap();

    assert_eq!(
        output_lines(&config)[1],
        "1,Prerelease Thing,pneo,NM,en,foil,5s,FALSE,FALSE,"
    );
}

#[tokio::test]
async fn run_uses_existing_cache_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(named("Wrong"))
        .expect(0)
        .mount(&server)
        .await;

    let dir = binder_with(&[("a.csv", vec!["100,neo,en,,,,"])]);
    let config = config_for(&dir, &server);
    fs::write(&config.cache_path, r#"{ "neo__100": "Cached Foo" }"#).unwrap();

    run_blocking(config.clone()).await.unwrap();

    assert_eq!(output_lines(&config)[1], "1,Cached Foo,neo,NM,en,,100,FALSE,FALSE,");
}

#[tokio::test]
async fn run_stops_at_first_failed_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/neo/1"))
        .respond_with(named("First"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cards/neo/2"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cards/neo/3"))
        .respond_with(named("Third"))
        .expect(0)
        .mount(&server)
        .await;

    let dir = binder_with(&[("a.csv", vec!["1,neo,en,,,,", "2,neo,en,,,,", "3,neo,en,,,,"])]);
    let config = config_for(&dir, &server);

    let result = run_blocking(config.clone()).await;

    match result {
        Err(BinderError::Lookup { key, .. }) => assert_eq!(key, "neo__2"),
        other => panic!("Expected BinderError::Lookup, got: {other:?}"),
    }
    // Earlier progress stays on disk
    assert_eq!(output_lines(&config).len(), 2);
    let cache: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.cache_path).unwrap()).unwrap();
    assert_eq!(cache, serde_json::json!({ "neo__1": "First" }));
}

#[tokio::test]
async fn run_twice_appends_without_reading_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/neo/100"))
        .respond_with(named("Foo"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = binder_with(&[("a.csv", vec!["100,neo,en,,,,"])]);
    let config = config_for(&dir, &server);

    run_blocking(config.clone()).await.unwrap();
    let second = run_blocking(config.clone()).await.unwrap();

    assert_eq!(second.rows_read, 1);
    let lines = output_lines(&config);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], lines[2]);
}

#[test]
fn default_config_uses_binder_paths() {
    let config = Config::default();
    assert_eq!(config.binder_dir, std::path::PathBuf::from("./binder"));
    assert_eq!(config.cache_path, std::path::PathBuf::from("./binder/scryfall.json"));
    assert_eq!(config.output_path, std::path::PathBuf::from("./binder/merged.csv"));
    assert_eq!(config.api_base_url, "https://api.scryfall.com");
}

#[tokio::test]
async fn run_fails_when_cache_path_is_unusable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(named("Foo"))
        .expect(0)
        .mount(&server)
        .await;

    let dir = binder_with(&[("a.csv", vec!["1,neo,en,,,,", "2,neo,en,,,,"])]);
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let config = Config {
        cache_path: blocker.join("scryfall.json"),
        ..config_for(&dir, &server)
    };

    let result = run_blocking(config.clone()).await;

    assert!(matches!(result, Err(BinderError::Io { .. })));
    assert!(!config.output_path.exists());
}
