// src/validate.rs

//! Structural validation of evaluated bindings.
//!
//! Checks run in order and short-circuit on the first failure:
//! 1. a `DATA` binding exists,
//! 2. it is a mapping,
//! 3. every key is a dotted-decimal OID string and every value is a
//!    supported entry kind.
//!
//! Validation is non-transforming: on success the `DATA` entries are
//! returned exactly as evaluated. Wire-format coercion happens downstream
//! in the SNMP server, not here.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ValidationError;
use crate::eval::{Bindings, Value};

/// Validated `DATA` entries, keyed by OID.
pub type OidMap = BTreeMap<String, Value>;

/// Strict dotted-decimal OID syntax: at least two numeric components.
///
/// The original implementation accepted any mapping key; rejecting
/// malformed identifiers here is a deliberate tightening.
static OID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)+$").expect("OID pattern is valid"));

/// Validate evaluated bindings and extract the `DATA` entries.
pub fn validate_bindings(bindings: &Bindings) -> Result<OidMap, ValidationError> {
    let data = bindings.get("DATA").ok_or(ValidationError::MissingData)?;

    let entries = match data {
        Value::Dict(entries) => entries,
        other => {
            return Err(ValidationError::WrongType {
                found: other.kind_name(),
            });
        }
    };

    let mut map = OidMap::new();
    for (key, value) in entries {
        let oid = validate_key(key)?;
        validate_entry_value(oid, value)?;
        map.insert(oid.to_string(), value.clone());
    }

    Ok(map)
}

fn validate_key(key: &Value) -> Result<&str, ValidationError> {
    let oid = match key {
        Value::Str(s) => s.as_str(),
        other => {
            return Err(ValidationError::InvalidEntry {
                key: format!("<{}>", other.kind_name()),
                reason: "keys must be OID strings".to_string(),
            });
        }
    };

    if !OID_RE.is_match(oid) {
        return Err(ValidationError::InvalidEntry {
            key: oid.to_string(),
            reason: "key is not a dotted-decimal OID".to_string(),
        });
    }

    Ok(oid)
}

fn validate_entry_value(oid: &str, value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Str(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::Bool(_)
        | Value::OctetString(_)
        | Value::Integer(_)
        | Value::Counter32(_)
        | Value::IpAddress(_)
        | Value::TimeTicks(_)
        | Value::Producer(_) => Ok(()),
        Value::List(_) | Value::Dict(_) => Err(ValidationError::InvalidEntry {
            key: oid.to_string(),
            reason: format!("{} is not a valid OID value", value.kind_name()),
        }),
    }
}
