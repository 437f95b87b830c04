//! Network rules: email, URL/URI/URN, IP and CIDR, MAC, host:port, hostname

use super::text;
use crate::registry::RuleRegistry;
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;
use url::Url;
use validator::ValidateEmail;

static HOSTNAME_RFC1123: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9])(?:\.(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]))*$",
    )
    .expect("Invalid regex")
});

static MAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:[0-9A-Fa-f]{2}:){5}(?:(?:[0-9A-Fa-f]{2}:){2})?[0-9A-Fa-f]{2}|(?:[0-9A-Fa-f]{2}-){5}(?:(?:[0-9A-Fa-f]{2}-){2})?[0-9A-Fa-f]{2}|(?:[0-9A-Fa-f]{4}\.){2}[0-9A-Fa-f]{4})$",
    )
    .expect("Invalid regex")
});

static URN_RFC2141: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i:urn):[A-Za-z0-9][A-Za-z0-9-]{0,31}:(?:[A-Za-z0-9()+,\-.:=@;$_!*']|%[0-9A-Fa-f]{2})+$",
    )
    .expect("Invalid regex")
});

/// Address family a CIDR rule accepts
#[derive(Clone, Copy)]
enum Family {
    Any,
    V4,
    V6,
}

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register("email", |value, _, _| text(value).validate_email());
    registry.register("emails", |value, _, _| {
        text(value)
            .split(',')
            .map(str::trim)
            .all(|address| !address.is_empty() && address.validate_email())
    });

    registry.register("url", |value, _, _| is_url(&text(value)));
    registry.register("uri", |value, _, _| Url::parse(&text(value)).is_ok());
    registry.register("urn_rfc2141", |value, _, _| URN_RFC2141.is_match(&text(value)));

    registry.register("ip", |value, _, _| text(value).parse::<IpAddr>().is_ok());
    registry.register("ipv4", |value, _, _| text(value).parse::<Ipv4Addr>().is_ok());
    registry.register("ipv6", |value, _, _| text(value).parse::<Ipv6Addr>().is_ok());
    registry.register("cidr", |value, _, _| is_cidr(&text(value), Family::Any));
    registry.register("cidrv4", |value, _, _| is_cidr(&text(value), Family::V4));
    registry.register("cidrv6", |value, _, _| is_cidr(&text(value), Family::V6));

    registry.register("mac", |value, _, _| MAC.is_match(&text(value)));

    registry.register("tcp_addr", |value, _, _| is_host_port(&text(value)));
    registry.register("udp_addr", |value, _, _| is_host_port(&text(value)));

    registry.register("hostname", |value, _, _| is_hostname(&text(value)));
    registry.register("hostname_rfc1123", |value, _, _| is_hostname(&text(value)));
}

/// Absolute URL; hierarchical schemes other than `file` need a host
fn is_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) if url.cannot_be_a_base() => true,
        Ok(url) => url.scheme() == "file" || url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

fn is_cidr(s: &str, family: Family) -> bool {
    let Some((address, prefix)) = s.split_once('/') else {
        return false;
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Ok(prefix) = prefix.parse::<u8>() else {
        return false;
    };
    match (address.parse::<IpAddr>(), family) {
        (Ok(IpAddr::V4(_)), Family::Any | Family::V4) => prefix <= 32,
        (Ok(IpAddr::V6(_)), Family::Any | Family::V6) => prefix <= 128,
        _ => false,
    }
}

fn is_hostname(s: &str) -> bool {
    s.len() <= 253 && HOSTNAME_RFC1123.is_match(s)
}

/// `host:port` with an IPv4 address, a bracketed IPv6 address or an
/// RFC 1123 hostname, and a port in 1..=65535
fn is_host_port(s: &str) -> bool {
    let (host_ok, port) = if let Some(rest) = s.strip_prefix('[') {
        let Some((host, port)) = rest.split_once("]:") else {
            return false;
        };
        (host.parse::<Ipv6Addr>().is_ok(), port)
    } else {
        let Some((host, port)) = s.rsplit_once(':') else {
            return false;
        };
        (
            !host.contains(':') && (host.parse::<Ipv4Addr>().is_ok() || is_hostname(host)),
            port,
        )
    };
    host_ok
        && !port.is_empty()
        && port.bytes().all(|b| b.is_ascii_digit())
        && port.parse::<u32>().is_ok_and(|p| (1..=65_535).contains(&p))
}
