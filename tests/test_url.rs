use httpc::cli::url::{Target, find};

#[test]
fn test_find_generic_url_with_path_and_query() {
    let line = "httpc get http://httpbin.org/get?course=networking&assignment=1 -v";
    let (target, span) = find(line).unwrap();

    assert_eq!(target.host, "httpbin.org");
    assert_eq!(target.port, 80);
    assert_eq!(target.path, "/get");
    assert_eq!(target.query, "course=networking&assignment=1");
    assert_eq!(
        &line[span],
        "http://httpbin.org/get?course=networking&assignment=1"
    );
}

#[test]
fn test_find_generic_url_defaults_path_to_root() {
    let (target, _) = find("httpc get http://example.com").unwrap();

    assert_eq!(target.path, "/");
    assert_eq!(target.query, "");
}

#[test]
fn test_find_bare_localhost_with_port_and_path() {
    let (target, span) = find("httpc get localhost:8080/status -v").unwrap();

    assert_eq!(target.host, "localhost");
    assert_eq!(target.port, 8080);
    assert_eq!(target.path, "/status");
    assert_eq!(span, 10..31);
}

#[test]
fn test_find_loopback_address() {
    let (target, _) = find("httpc get 127.0.0.1/ping").unwrap();

    assert_eq!(target.host, "127.0.0.1");
    assert_eq!(target.port, 80);
    assert_eq!(target.path, "/ping");
}

#[test]
fn test_find_localhost_with_scheme_prefix() {
    let (target, _) = find("httpc get http://localhost:3000").unwrap();

    assert_eq!(target.host, "localhost");
    assert_eq!(target.port, 3000);
    assert_eq!(target.path, "/");
}

#[test]
fn test_localhost_pass_wins_over_earlier_generic_match() {
    let line = "httpc get http://example.com/x localhost:9000/y";
    let (target, _) = find(line).unwrap();

    assert_eq!(target.host, "localhost");
    assert_eq!(target.port, 9000);
    assert_eq!(target.path, "/y");
}

#[test]
fn test_localhost_prefix_of_longer_hostname_is_not_a_match() {
    let (target, _) = find("httpc get http://localhost.example.com/x").unwrap();

    // Only the generic pass matches; the host is taken verbatim.
    assert_eq!(target.host, "localhost.example.com");
    assert_eq!(target.port, 80);
}

#[test]
fn test_find_reports_absence() {
    assert!(find("httpc get -v -h key:value").is_none());
    assert!(find("httpc get ftp://example.com/x").is_none());
}

#[test]
fn test_host_header_omits_default_port() {
    let target = Target {
        host: "example.com".to_string(),
        port: 80,
        path: "/".to_string(),
        query: String::new(),
    };
    assert_eq!(target.host_header(), "example.com");
}

#[test]
fn test_host_header_includes_explicit_port() {
    let target = Target {
        host: "localhost".to_string(),
        port: 8080,
        path: "/".to_string(),
        query: String::new(),
    };
    assert_eq!(target.host_header(), "localhost:8080");
}
