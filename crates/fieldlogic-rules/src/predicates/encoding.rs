//! Encoding and identifier rules

use super::text;
use crate::registry::RuleRegistry;
use base64::Engine;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use regex::Regex;
use std::sync::LazyLock;
use uuid::{Uuid, Variant};

const URL_SAFE_ANY_PADDING: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:((?:[a-zA-Z0-9!#$&^_.+-]+/[a-zA-Z0-9!#$&^_.+-]+)?(?:;[a-zA-Z0-9!#$&^_.+-]+=[a-zA-Z0-9!#$&^_.+-]+)*)(;base64)?,(.*)$")
        .expect("Invalid regex")
});

static MAGNET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^magnet:\?xt(?:\.1)?=urn:(?:aich|bitprint|btih|ed2k|ed2khash|kzhash|md5|sha1|tree:tiger):[a-z0-9]{32,40}(?:&.*)?$")
        .expect("Invalid regex")
});

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("Invalid regex")
});

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register("base64", |value, _, _| {
        let s = text(value);
        !s.is_empty() && STANDARD.decode(s.as_bytes()).is_ok()
    });
    registry.register("base64url", |value, _, _| {
        let s = text(value);
        !s.is_empty() && URL_SAFE_ANY_PADDING.decode(s.as_bytes()).is_ok()
    });
    registry.register("datauri", |value, _, _| is_data_uri(&text(value)));
    registry.register("magnet", |value, _, _| MAGNET.is_match(&text(value)));
    registry.register("json", |value, _, _| {
        serde_json::from_str::<serde_json::Value>(&text(value)).is_ok()
    });

    registry.register("uuid", |value, _, _| UUID.is_match(&text(value)));
    for (name, version) in [("uuid3", 3), ("uuid4", 4), ("uuid5", 5)] {
        registry.register(name, move |value, _, _| is_uuid_version(&text(value), version));
    }

    registry.register("semver", |value, _, _| semver::Version::parse(&text(value)).is_ok());
}

fn is_data_uri(s: &str) -> bool {
    let Some(captures) = DATA_URI.captures(s) else {
        return false;
    };
    if captures.get(2).is_none() {
        return true;
    }
    let payload = captures.get(3).map_or("", |m| m.as_str());
    !payload.is_empty() && STANDARD.decode(payload.as_bytes()).is_ok()
}

/// Hyphenated RFC 4122 UUID of the given version
fn is_uuid_version(s: &str, version: usize) -> bool {
    if !UUID.is_match(s) {
        return false;
    }
    Uuid::parse_str(s)
        .is_ok_and(|id| id.get_version_num() == version && id.get_variant() == Variant::RFC4122)
}
