use super::*;
use assert_matches::assert_matches;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

fn table() -> StaticResolver {
    StaticResolver::new([
        HostEntry {
            name: "irc.example.com".into(),
            addresses: vec![ip("192.0.2.1"), ip("2001:db8::1")],
        },
        HostEntry {
            name: "shell.example.org".into(),
            addresses: vec![ip("198.51.100.5")],
        },
    ])
}

#[test]
fn test_static_resolve() {
    let resolver = table();
    assert_eq!(
        resolver.resolve("irc.example.com").unwrap(),
        vec![ip("192.0.2.1"), ip("2001:db8::1")]
    );
    assert_eq!(resolver.resolve("SHELL.example.org").unwrap(), vec![ip("198.51.100.5")]);
    assert_matches!(resolver.resolve("unknown.example"), Err(Error::HostNotFound { name }) if name == "unknown.example");
}

#[test]
fn test_static_reverse() {
    let resolver = table();
    assert_eq!(resolver.reverse(ip("2001:db8::1")).unwrap(), "irc.example.com");
    assert_eq!(resolver.reverse(ip("198.51.100.5")).unwrap(), "shell.example.org");
    assert_matches!(resolver.reverse(ip("203.0.113.9")), Err(Error::AddressNotFound { .. }));
}

#[test]
fn test_static_is_empty() {
    assert!(StaticResolver::default().is_empty());
    assert!(!table().is_empty());
}

#[test]
fn test_system_resolve_literal_address() {
    assert_eq!(SystemResolver.resolve("127.0.0.1").unwrap(), vec![ip("127.0.0.1")]);
}

#[test]
fn test_system_reverse_unavailable() {
    assert_matches!(
        SystemResolver.reverse(ip("127.0.0.1")),
        Err(Error::ReverseLookupUnavailable { .. })
    );
}

#[test]
fn test_no_resolver() {
    assert_matches!(NoResolver.resolve("irc.example.com"), Err(Error::HostNotFound { .. }));
    assert_matches!(NoResolver.reverse(ip("192.0.2.1")), Err(Error::AddressNotFound { .. }));
}

#[test]
fn test_fallback() {
    let resolver = Fallback::new(NoResolver, table());
    assert_eq!(resolver.resolve("irc.example.com").unwrap().len(), 2);
    assert_eq!(resolver.reverse(ip("192.0.2.1")).unwrap(), "irc.example.com");

    let resolver = Fallback::new(table(), NoResolver);
    assert_eq!(resolver.reverse(ip("198.51.100.5")).unwrap(), "shell.example.org");
    assert_matches!(resolver.resolve("unknown.example"), Err(Error::HostNotFound { .. }));
}

#[test]
fn test_by_reference() {
    let resolver = table();
    let by_ref = &resolver;
    assert_eq!(Resolver::reverse(&by_ref, ip("192.0.2.1")).unwrap(), "irc.example.com");
}
