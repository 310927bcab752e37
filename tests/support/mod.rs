use wiremock::MockServer;

/// Starts a mock server, or returns `None` when this host can't bind a
/// localhost port (sandboxed CI). Set `CATBUCKET_REQUIRE_SOCKET_TESTS=1` to
/// turn the skip into a failure.
pub async fn start_mock_server_or_skip() -> Option<MockServer> {
    if std::net::TcpListener::bind(("127.0.0.1", 0)).is_ok() {
        return Some(MockServer::start().await);
    }
    assert!(
        !std::env::var("CATBUCKET_REQUIRE_SOCKET_TESTS").is_ok_and(|v| v == "1"),
        "localhost sockets unavailable but CATBUCKET_REQUIRE_SOCKET_TESTS is set"
    );
    eprintln!("skipping: cannot bind a localhost socket for wiremock");
    None
}
