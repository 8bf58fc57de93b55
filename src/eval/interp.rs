// src/eval/interp.rs

//! Fueled tree-walking evaluator.
//!
//! Every visited expression node costs one unit of fuel, so evaluation
//! terminates even for adversarially large input. The interpreter has no
//! access to the filesystem, network, environment or clock; the only
//! callable names are the five typed helpers.

use std::collections::{BTreeMap, HashSet};
use std::net::Ipv4Addr;

use crate::errors::EvalError;
use crate::eval::parser::{Expr, Stmt};
use crate::eval::value::{Lambda, Value};

/// All top-level bindings produced by one evaluation, keyed by name.
pub type Bindings = BTreeMap<String, Value>;

/// The fixed set of type-construction helpers visible to candidate source.
pub const HELPERS: [&str; 5] = [
    "counter32",
    "integer",
    "ip_address",
    "octet_string",
    "timeticks",
];

pub(crate) struct Interp {
    fuel: u64,
    budget: u64,
}

impl Interp {
    pub(crate) fn new(max_steps: u64) -> Self {
        Self {
            fuel: max_steps,
            budget: max_steps,
        }
    }

    /// Evaluate a parsed program into its top-level bindings.
    ///
    /// Later statements may reference earlier bindings by name; rebinding a
    /// name overwrites the previous value, matching the original format.
    pub(crate) fn run(&mut self, stmts: &[Stmt]) -> Result<Bindings, EvalError> {
        let mut bindings = Bindings::new();
        for stmt in stmts {
            let value = self.eval(&stmt.value, &bindings, None)?;
            bindings.insert(stmt.name.clone(), value);
        }
        Ok(bindings)
    }

    pub(crate) fn eval(
        &mut self,
        expr: &Expr,
        env: &Bindings,
        param: Option<(&str, &Value)>,
    ) -> Result<Value, EvalError> {
        self.step()?;

        match expr {
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Int(v) => Ok(Value::Int(*v)),
            Expr::Float(v) => Ok(Value::Float(*v)),
            Expr::Bool(v) => Ok(Value::Bool(*v)),
            Expr::Name(name) => {
                if let Some((p, value)) = param {
                    if p == name {
                        return Ok(value.clone());
                    }
                }
                if let Some(value) = env.get(name) {
                    return Ok(value.clone());
                }
                if HELPERS.contains(&name.as_str()) {
                    return Err(EvalError::Runtime(format!(
                        "helper '{name}' must be called with one argument"
                    )));
                }
                Err(EvalError::Runtime(format!("name '{name}' is not defined")))
            }
            Expr::List(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(self.eval(item, env, param)?);
                }
                Ok(Value::List(values))
            }
            Expr::Dict(entries) => {
                let mut values = Vec::with_capacity(entries.len());
                let mut seen: HashSet<String> = HashSet::new();
                for (key_expr, value_expr) in entries {
                    let key = self.eval(key_expr, env, param)?;
                    if let Value::Str(s) = &key {
                        if !seen.insert(s.clone()) {
                            return Err(EvalError::Runtime(format!(
                                "duplicate key '{s}' in mapping"
                            )));
                        }
                    }
                    let value = self.eval(value_expr, env, param)?;
                    values.push((key, value));
                }
                Ok(Value::Dict(values))
            }
            Expr::Call { name, args } => {
                if !HELPERS.contains(&name.as_str()) {
                    return Err(EvalError::Runtime(format!(
                        "'{name}' is not a recognized helper"
                    )));
                }
                if args.len() != 1 {
                    return Err(EvalError::Runtime(format!(
                        "{name}() takes exactly one argument, got {}",
                        args.len()
                    )));
                }
                let arg = self.eval(&args[0], env, param)?;
                apply_helper(name, arg)
            }
            Expr::Lambda { param: p, body } => {
                Ok(Value::Producer(Lambda::new(p.clone(), (**body).clone())))
            }
        }
    }

    fn step(&mut self) -> Result<(), EvalError> {
        if self.fuel == 0 {
            return Err(EvalError::Budget { steps: self.budget });
        }
        self.fuel -= 1;
        Ok(())
    }
}

/// Apply one of the typed helpers to its already-evaluated argument.
fn apply_helper(name: &str, arg: Value) -> Result<Value, EvalError> {
    match name {
        "octet_string" => match arg {
            Value::Str(s) => Ok(Value::OctetString(s)),
            other => Err(type_err(name, "a string", &other)),
        },
        "integer" => match arg {
            Value::Int(v) => Ok(Value::Integer(v)),
            other => Err(type_err(name, "an integer", &other)),
        },
        "counter32" => match arg {
            Value::Int(v) => u32::try_from(v).map(Value::Counter32).map_err(|_| {
                EvalError::Runtime(format!("counter32 value {v} out of range (0..=4294967295)"))
            }),
            other => Err(type_err(name, "an integer", &other)),
        },
        "timeticks" => match arg {
            Value::Int(v) => u32::try_from(v).map(Value::TimeTicks).map_err(|_| {
                EvalError::Runtime(format!("timeticks value {v} out of range (0..=4294967295)"))
            }),
            other => Err(type_err(name, "an integer", &other)),
        },
        "ip_address" => match arg {
            Value::Str(s) => s
                .parse::<Ipv4Addr>()
                .map(Value::IpAddress)
                .map_err(|_| EvalError::Runtime(format!("'{s}' is not a valid IPv4 address"))),
            other => Err(type_err(name, "a string", &other)),
        },
        _ => Err(EvalError::Runtime(format!(
            "'{name}' is not a recognized helper"
        ))),
    }
}

fn type_err(helper: &str, expected: &str, found: &Value) -> EvalError {
    EvalError::Runtime(format!(
        "{helper}() expects {expected}, found {}",
        found.kind_name()
    ))
}
