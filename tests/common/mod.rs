//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use mentor_match::config::ClientConfig;
use mentor_match::session::TokenStorage;
use mentor_match::MatchClient;
use tempfile::TempDir;

use self::mock_api::MockApi;

/// A client wired to a mock backend with token storage in a temp dir.
pub struct TestHarness {
    pub api: MockApi,
    pub client: MatchClient,
    pub storage: TokenStorage,
    _dir: TempDir,
}

pub async fn harness() -> TestHarness {
    let api = MockApi::start().await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = TokenStorage::at(dir.path().join("token"));
    let config = ClientConfig {
        api_base_url: api.base_url(),
    };
    let client =
        MatchClient::with_storage(&config, storage.clone()).expect("Failed to build client");
    TestHarness {
        api,
        client,
        storage,
        _dir: dir,
    }
}

/// Same harness, but with a token already persisted before construction.
pub async fn authed_harness(token: &str) -> TestHarness {
    let api = MockApi::start().await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = TokenStorage::at(dir.path().join("token"));
    storage.store(token).expect("Failed to seed token");
    let config = ClientConfig {
        api_base_url: api.base_url(),
    };
    let client =
        MatchClient::with_storage(&config, storage.clone()).expect("Failed to build client");
    TestHarness {
        api,
        client,
        storage,
        _dir: dir,
    }
}
