#![allow(dead_code)]

//! Canned candidate configurations for tests.

/// Smallest committable configuration.
pub const VALID_MINIMAL: &str = "DATA = {'1.3.6.1.2.1.1.1.0': 'hello'}\n";

/// One entry of every supported value kind.
pub const VALID_ALL_KINDS: &str = r#"
DATA = {
    '1.3.6.1.2.1.1.1.0': 'description',
    '1.3.6.1.2.1.1.2.0': octet_string('explicit'),
    '1.3.6.1.2.1.1.3.0': timeticks(123456),
    '1.3.6.1.2.1.1.4.0': 42,
    '1.3.6.1.2.1.1.5.0': integer(-7),
    '1.3.6.1.2.1.1.6.0': 3.5,
    '1.3.6.1.2.1.1.7.0': True,
    '1.3.6.1.2.1.2.1.0': counter32(1000),
    '1.3.6.1.2.1.3.1.0': ip_address('192.168.1.1'),
    '1.3.6.1.2.1.4.1.0': lambda oid: octet_string(oid),
}
"#;

/// Well-formed, but defines no `DATA` binding.
pub const MISSING_DATA: &str = "OTHER = {'1.2.3': 'x'}\n";

/// `DATA` is a list instead of a mapping.
pub const DATA_IS_LIST: &str = "DATA = [1, 2, 3]\n";

/// Unterminated mapping literal.
pub const BROKEN_SYNTAX: &str = "DATA = {\n";

/// Generate a structurally valid candidate with `n` entries; used to make
/// evaluation expensive enough to trip budget/timeout bounds.
pub fn large_candidate(n: usize) -> String {
    let mut out = String::from("DATA = {\n");
    for i in 0..n {
        out.push_str(&format!("    '1.3.6.1.2.1.99.{i}': {i},\n"));
    }
    out.push_str("}\n");
    out
}
