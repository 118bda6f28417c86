use numclass_domain::config::{ApiConfig, SslConfig};
use numclass_server::Server;

#[test]
fn build_with_defaults_assembles_state() {
    let server = Server::builder().port(0).build().expect("server build");
    assert_eq!(server.state().config.server.port, 0);
    assert_eq!(server.state().config.facts.base_url, "http://numbersapi.com");
}

#[test]
fn build_rejects_missing_ssl_files() {
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(SslConfig {
        cert: "/nonexistent/cert.pem".into(),
        key: "/nonexistent/key.pem".into(),
    });

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}

#[test]
fn build_rejects_a_malformed_facts_url() {
    let mut cfg = ApiConfig::default();
    cfg.facts.base_url = "not a url".into();

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("fun-fact client"));
}
