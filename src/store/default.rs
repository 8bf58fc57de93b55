// src/store/default.rs

//! Bootstrap content for an empty store.

/// The sample configuration written when no active configuration exists.
///
/// It demonstrates one entry of every supported value kind and doubles as
/// inline documentation for operators editing it in place.
const DEFAULT_CONFIG: &str = r#"# SNMP OID configuration
#
# This file must define a DATA mapping from dotted-decimal OID strings to
# values. Available typed helpers:
#
#   octet_string(s)   ip_address(s)   integer(n)   counter32(n)   timeticks(n)
#
# Plain strings and integers are converted to wire types by the SNMP server
# automatically. An entry may also be `lambda oid: ...`; the lambda is called
# with the OID string when that identifier is queried.

DATA = {
    # System description (OCTET STRING)
    '1.3.6.1.2.1.1.1.0': 'Example SNMP Server',

    # System uptime (TIMETICKS)
    '1.3.6.1.2.1.1.3.0': timeticks(123456),

    # Plain integer (INTEGER)
    '1.3.6.1.2.1.1.4.0': 42,

    # Basic counter (COUNTER32)
    '1.3.6.1.2.1.2.1.0': counter32(1000),

    # Agent address (IPADDRESS)
    '1.3.6.1.2.1.3.1.0': ip_address('192.168.1.1'),

    # Lazily computed value: resolved when this OID is queried
    '1.3.6.1.2.1.4.1.0': lambda oid: octet_string(oid),
}
"#;

/// Return the fixed bootstrap configuration.
///
/// Pure and infallible; the text is guaranteed to pass the full
/// evaluate-and-validate pipeline (covered by tests).
pub fn default_config() -> &'static str {
    DEFAULT_CONFIG
}
