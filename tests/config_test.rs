//! Config loading and defaults integration tests

use std::io::Write;
use std::time::Duration;

use dewhitepaper::{Config, StoreLatency};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path().join("dewhitepaper.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.gateway.urls[0], "https://ipfs.io/ipfs/");
    assert_eq!(config.gateway.timeout(), Duration::from_secs(10));
    assert_eq!(config.store.latency(), StoreLatency::default());
}

#[test]
fn test_load_full_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[gateway]
urls = ["http://localhost:8080/ipfs/", "https://dweb.link/ipfs/"]
timeout_ms = 2500
offline = true

[store]
simulate_latency = true
list_ms = 10
get_ms = 20
content_ms = 30
vote_ms = 40

[wallet]
account = "0x34Da8A6b2cC5E0A1b0d2b8E4C9a1F3e5d7b9d771"
"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.gateway.urls.len(), 2);
    assert_eq!(config.gateway.timeout(), Duration::from_millis(2500));
    assert!(config.gateway.offline);
    assert_eq!(
        config.store.latency(),
        StoreLatency {
            list: Duration::from_millis(10),
            get: Duration::from_millis(20),
            content: Duration::from_millis(30),
            vote: Duration::from_millis(40),
        }
    );
    assert_eq!(
        config.wallet.account.as_deref(),
        Some("0x34Da8A6b2cC5E0A1b0d2b8E4C9a1F3e5d7b9d771")
    );

    let resolver = config.gateway.build_resolver().unwrap();
    assert_eq!(
        resolver.gateway_url("ipfs://QmMock3"),
        "http://localhost:8080/ipfs/QmMock3"
    );
}

#[test]
fn test_partial_sections_fill_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[store]\nvote_ms = 5").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.gateway.urls.len(), 4);
    assert_eq!(config.store.latency().vote, Duration::from_millis(5));
    assert_eq!(config.store.latency().list, Duration::from_millis(500));
    assert!(config.wallet.account.is_none());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[gateway\nurls = 3").unwrap();

    assert!(Config::load(file.path()).is_err());
}
