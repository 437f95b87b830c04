//! Tests for the standard predicate families

use crate::test_utils::passes;
use fieldlogic_domain::{FieldSubject, FieldValue, SubjectKind};
use fieldlogic_rules::validate;

#[test]
fn test_min_max_measure_by_kind() {
    let number = FieldSubject::new(SubjectKind::Number);
    assert!(!validate(&FieldValue::from(4), "min:5", &number).is_valid());
    assert!(validate(&FieldValue::from("12"), "min:5,max:20", &number).is_valid());

    assert!(!passes("hi", "min:3"));
    assert!(passes("hello", "min:3"));
    assert!(passes(vec!["a", "b"], "max:2"));
    assert!(!passes("abc", "min:three"));
}

#[test]
fn test_literal_comparisons() {
    assert!(passes("5", "eq:5"));
    assert!(passes(5, "eq=5"));
    assert!(passes("abc", "ne:abd"));
    assert!(passes("10", "gt:9,lt:11,gte:10,lte:10"));
    assert!(!passes("abc", "gt:0"));
    assert!(passes("héllo", "len:5"));
}

#[test]
fn test_field_comparisons() {
    let subject = FieldSubject::new(SubjectKind::Text)
        .with_field("password", "s3cret")
        .with_field("start", 10);
    assert!(validate(&FieldValue::from("s3cret"), "eqfield:password", &subject).is_valid());
    assert!(!validate(&FieldValue::from("other"), "eqfield:password", &subject).is_valid());
    assert!(validate(&FieldValue::from(12), "gtfield:start", &subject).is_valid());
    assert!(!validate(&FieldValue::from(9), "gtefield:start", &subject).is_valid());
    assert!(validate(&FieldValue::from(9), "ltfield:start,nefield:start", &subject).is_valid());
}

#[test]
fn test_composition_counts() {
    assert!(passes("Passw0rd!", "min_letters:5,min_uppercase,min_digits:1,min_symbols:1"));
    assert!(!passes("password", "min_uppercase"));
    assert!(!passes("Password", "min_digits:1"));
    assert!(!passes("Passw0rd", "min_symbols"));
}

#[test]
fn test_character_formats() {
    assert!(passes("abcXYZ", "alpha"));
    assert!(!passes("abc1", "alpha"));
    assert!(passes("abc1", "alphanum"));
    assert!(passes("héllo", "alphaunicode"));
    assert!(passes("-12.5", "numeric"));
    assert!(!passes("-12.5", "number"));
    assert!(passes("0xBEEF", "hexadecimal"));
    assert!(passes("abc", "lowercase"));
    assert!(!passes("aBc", "lowercase"));
    assert!(passes("ABC", "uppercase"));
    assert!(passes("日本", "multibyte"));
    assert!(!passes("plain", "multibyte"));
    assert!(passes("plain text", "ascii,printascii"));
}

#[test]
fn test_colors() {
    assert!(passes("#fff", "hexcolor"));
    assert!(passes("#A0B1C2", "hexcolor,iscolor"));
    assert!(passes("rgb(255, 0, 10)", "rgb,iscolor"));
    assert!(!passes("rgb(256,0,0)", "rgb"));
    assert!(passes("rgba(0,0,0,0.5)", "rgba"));
    assert!(passes("hsl(120, 50%, 50%)", "hsl"));
    assert!(passes("hsla(360,100%,0%,1)", "hsla"));
    assert!(!passes("blue", "iscolor"));
}

#[test]
fn test_network_formats() {
    assert!(passes("user@example.com", "email"));
    assert!(!passes("user@", "email"));
    assert!(passes("a@example.com, b@example.org", "emails"));
    assert!(!passes("a@example.com,", "emails"));
    assert!(passes("https://example.com/path?q=1", "url"));
    assert!(passes("mailto:someone@example.com", "url,uri"));
    assert!(!passes("example.com", "url"));
    assert!(passes("urn:isbn:0451450523", "urn_rfc2141"));
    assert!(passes("192.168.0.1", "ip,ipv4"));
    assert!(!passes("192.168.0.1", "ipv6"));
    assert!(passes("::1", "ip,ipv6"));
    assert!(passes("192.168.0.0/16", "cidr,cidrv4"));
    assert!(passes("00:1A:2b:3C:4d:5E", "mac"));
    assert!(passes("001a.2b3c.4d5e", "mac"));
    assert!(passes("localhost:8080", "tcp_addr,udp_addr"));
    assert!(passes("my-host.example.com", "hostname,hostname_rfc1123"));
    assert!(!passes("-bad.example.com", "hostname"));
}

#[test]
fn test_phone_numbers() {
    assert!(passes("+1 (555) 123-4567", "phone"));
    assert!(!passes("555-12", "phone"));
    assert!(passes("+14155552671", "e164"));
    assert!(!passes("004155552671", "e164"));
}

#[test]
fn test_encodings_and_identifiers() {
    assert!(passes("SGVsbG8gd29ybGQ=", "base64"));
    assert!(!passes("SGVsbG8gd29ybGQ", "base64"));
    assert!(passes("SGVsbG8gd29ybGQ", "base64url"));
    assert!(passes("data:image/png;base64,iVBORw0KGgo=", "datauri"));
    assert!(passes(
        "magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a",
        "magnet"
    ));
    assert!(passes(r#"{"a":[1,2]}"#, "json"));
    assert!(!passes("{a:1}", "json"));
    assert!(passes("f47ac10b-58cc-4372-a567-0e02b2c3d479", "uuid,uuid4"));
    assert!(!passes("f47ac10b-58cc-4372-a567-0e02b2c3d479", "uuid3"));
    assert!(passes("1.2.3-beta.1+build.5", "semver"));
    assert!(!passes("1.2", "semver"));
}

#[test]
fn test_identifier_shapes() {
    assert!(passes("51.5074", "latitude"));
    assert!(!passes("91", "latitude"));
    assert!(passes("-0.1278", "longitude"));
    assert!(!passes("181", "longitude"));
    assert!(passes("123-45-6789", "ssn"));
    assert!(passes("DEUTDEFF500", "bic"));
    assert!(passes("0x52908400098527886E0F7030069857D2E4169EE7", "eth_addr"));
    assert!(passes("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2", "btc_addr"));
    assert!(passes("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq", "btc_addr_bech32"));
    assert!(passes("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIn0.sig", "jwt"));
}

#[test]
fn test_checksums() {
    assert!(passes("4242424242424242", "credit_card"));
    assert!(!passes("4242424242424241", "credit_card"));
    assert!(passes("978-0-306-40615-7", "isbn,isbn13"));
    assert!(passes("0-306-40615-2", "isbn,isbn10"));
    assert!(passes("0378-5955", "issn"));
}

#[test]
fn test_datetime_layouts() {
    assert!(passes("2023-12-31", "datetime:2006-01-02"));
    assert!(!passes("31-12-2023", "datetime:2006-01-02"));
    assert!(passes("31/12/23 23:59", "datetime=02/01/06 15:04"));
    assert!(passes("2023-12-31T10:00:00+02:00", "datetime"));
    assert!(!passes("not a date", "datetime"));
}

#[test]
fn test_timezones() {
    assert!(passes("America/New_York", "timezone"));
    assert!(passes("UTC", "timezone"));
    assert!(!passes("Mars/Olympus", "timezone"));
}

#[test]
fn test_substring_rules() {
    assert!(passes("hello world", "contains:lo w"));
    assert!(passes("hello", "notcontains:xyz,excludes:q"));
    assert!(passes("hello", "notcontains:"));
    assert!(!passes("hello", "excludes:ell"));
    assert!(passes("hello", "containsany:xyzo"));
    assert!(!passes("hello", "excludesall:xyzo"));
    assert!(passes("hello", "startswith:he,endswith:lo"));
    assert!(passes("hello", "startsnotwith:lo,endsnotwith:he"));
}

#[test]
fn test_enumerations_and_booleans() {
    assert!(passes("red", "oneof:red|green blue"));
    assert!(!passes("pink", "oneof:red|green blue"));
    assert!(passes("pink", "neof:red green"));
    assert!(passes(true, "boolean"));
    assert!(passes("F", "boolean"));
    assert!(!passes("yes", "boolean"));
}

#[test]
fn test_file_extensions() {
    let file = FieldSubject::new(SubjectKind::File);
    let uploads = FieldValue::from(vec!["a.PNG", "b.webp"]);
    assert!(validate(&uploads, "ext:image", &file).is_valid());
    assert!(!validate(&uploads, "ext:png", &file).is_valid());
    assert!(passes("report.pdf", "ext:pdf|docx"));
}
