// src/eval/value.rs

//! Tagged value model shared by the evaluator, the validator and the
//! downstream consumer.

use std::net::Ipv4Addr;

use crate::errors::EvalError;
use crate::eval::interp::{Bindings, Interp};
use crate::eval::parser::Expr;

/// A value produced by evaluating candidate configuration source.
///
/// The plain variants (`Str`, `Int`, `Float`, `Bool`) are converted to wire
/// types by the downstream SNMP server; the upper-cased variants were built
/// explicitly through the typed helpers. `Producer` is a deferred value: the
/// downstream consumer calls it with the OID string when that identifier is
/// actually queried.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    OctetString(String),
    Integer(i64),
    Counter32(u32),
    IpAddress(Ipv4Addr),
    TimeTicks(u32),
    List(Vec<Value>),
    Dict(Vec<(Value, Value)>),
    Producer(Lambda),
}

impl Value {
    /// Short human-readable kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::OctetString(_) => "OCTET STRING",
            Value::Integer(_) => "INTEGER",
            Value::Counter32(_) => "COUNTER32",
            Value::IpAddress(_) => "IPADDRESS",
            Value::TimeTicks(_) => "TIMETICKS",
            Value::List(_) => "list",
            Value::Dict(_) => "mapping",
            Value::Producer(_) => "producer",
        }
    }

    /// Resolve this value for a given OID.
    ///
    /// Literals come back unchanged; a `Producer` is called with the OID
    /// string, which is where lazy entries are finally evaluated.
    pub fn resolve(&self, oid: &str, max_steps: u64) -> Result<Value, EvalError> {
        match self {
            Value::Producer(lambda) => lambda.call(oid, max_steps),
            other => Ok(other.clone()),
        }
    }
}

/// A single-parameter deferred value (`lambda oid: ...`).
///
/// The body is kept as an unevaluated expression; at call time it sees only
/// the parameter binding and the helper set, never the namespace of the run
/// that defined it.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    param: String,
    body: Expr,
}

impl Lambda {
    pub(crate) fn new(param: String, body: Expr) -> Self {
        Self { param, body }
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    /// Evaluate the body with the parameter bound to `oid`.
    pub fn call(&self, oid: &str, max_steps: u64) -> Result<Value, EvalError> {
        let arg = Value::Str(oid.to_string());
        let env = Bindings::new();
        Interp::new(max_steps).eval(&self.body, &env, Some((self.param.as_str(), &arg)))
    }
}
