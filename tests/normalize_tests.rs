// tests/normalize_tests.rs
use deterministic_password_gen::normalize::normalize_identifier;

const CORPUS: &[&str] = &[
    "https://www.Example.com/login",
    "http://example.com",
    "example.com",
    "EXAMPLE.COM/path?q=1#top",
    "HTTP://Sub.Domain.Example.org?x=1",
    "www.www.example.com",
    "x.www.example",
    "shop.example.co.uk",
    "localhost",
    "example.com:8080/x",
    "https:///path",
    "ftp://files.example.com",
    " http:// a.b",
    "Example.COM.",
    "www.",
    "www.com",
    "",
    "   ",
    "Example.com ",
    "/login",
    "?x=1",
    "ünïcödé.Example.CoM",
];

#[test]
fn strips_scheme_www_and_path() {
    assert_eq!(normalize_identifier("https://www.Example.com/login"), "example.com");
    assert_eq!(normalize_identifier("http://example.com"), "example.com");
    assert_eq!(normalize_identifier("example.com#frag"), "example.com");
    assert_eq!(normalize_identifier("EXAMPLE.COM/path?q=1#top"), "example.com");
}

#[test]
fn keeps_last_two_labels() {
    assert_eq!(
        normalize_identifier("HTTP://Sub.Domain.Example.org?x=1"),
        "example.org"
    );
    assert_eq!(normalize_identifier("www.www.example.com"), "example.com");
    assert_eq!(normalize_identifier("localhost"), "localhost");
}

#[test]
fn multi_part_public_suffix_is_not_special_cased() {
    // Known limitation: no public-suffix list
    assert_eq!(normalize_identifier("shop.example.co.uk"), "co.uk");
}

#[test]
fn port_is_part_of_the_host() {
    assert_eq!(normalize_identifier("example.com:8080/x"), "example.com:8080");
}

#[test]
fn empty_input_normalizes_to_empty() {
    assert_eq!(normalize_identifier(""), "");
}

#[test]
fn hostless_input_normalizes_to_empty() {
    let hostless = [
        "https://",
        "HTTPS:///Path",
        "https:///path",
        "/login",
        "?x=1",
        "#top",
        "www.",
    ];
    for raw in hostless {
        assert_eq!(normalize_identifier(raw), "", "{raw:?} should have no host");
    }
}

#[test]
fn whitespace_is_not_trimmed() {
    assert_eq!(normalize_identifier("Example.com "), "example.com ");
    assert_eq!(normalize_identifier(" example.com"), " example.com");
    assert_eq!(normalize_identifier("   "), "   ");
    // A leading space hides the scheme
    assert_eq!(normalize_identifier(" http:// a.b"), " http:");
}

#[test]
fn surviving_www_label_is_stripped() {
    assert_eq!(normalize_identifier("x.www.example"), "example");
    assert_eq!(normalize_identifier("www.com"), "com");
}

#[test]
fn normalization_is_idempotent() {
    for raw in CORPUS {
        let once = normalize_identifier(raw);
        let twice = normalize_identifier(&once);
        assert_eq!(once, twice, "not idempotent for {raw:?}");
    }
}

#[test]
fn scheme_and_bare_host_agree() {
    assert_eq!(
        normalize_identifier("https://www.Example.com/login"),
        normalize_identifier("example.com")
    );
}
