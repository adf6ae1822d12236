//! Opaque comparable value representation.
//!
//! This module provides the `Value` enum that carries every result a probe
//! function can produce. Equality on `Value` is the harness's one explicit
//! comparison rule; nothing else in the workspace defines value equality.

use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

/// Represents any value a probe function can return.
///
/// Dynamic probe results collapse to this single comparable type at the
/// harness boundary. Primitive values are stored inline; composite results
/// (array snapshots, collection dumps) are ordered lists.
///
/// # Equality rule
///
/// `PartialEq` is structural, with one deliberate deviation from IEEE 754:
/// `Double(NaN)` compares equal to `Double(NaN)`. Differential verdicts must
/// be deterministic, and a probe that legitimately produces NaN in both
/// tiers has not diverged.
///
/// # Examples
///
/// ```
/// use harness_types::Value;
///
/// let joined = Value::String("1,2,3".to_string());
/// assert_eq!(joined.type_of(), "string");
///
/// assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
/// assert_ne!(Value::Smi(1), Value::Double(1.0));
/// ```
#[derive(Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits, tagged representation)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(std::string::String),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Ordered composite value (array or collection snapshot)
    List(Vec<Value>),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Smi(n) => f.debug_tuple("Smi").field(n).finish(),
            Value::Double(n) => f.debug_tuple("Double").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Smi(a), Value::Smi(b)) => a == b,
            // NaN equals NaN here; see the type-level equality rule.
            (Value::Double(a), Value::Double(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Returns the JavaScript `typeof`-style tag for this value.
    ///
    /// Composite lists report `"object"`, matching what an array snapshot
    /// would answer in the engine under test.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::BigInt(_) => "bigint",
            Value::List(_) => "object",
        }
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::BigInt(n) => !n.is_zero(),
            Value::List(_) => true,
        }
    }

    /// Returns whether this value is a number (Smi or Double).
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Smi(_) | Value::Double(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_equals_nan() {
        assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
    }

    #[test]
    fn test_nan_inside_list() {
        let a = Value::List(vec![Value::Double(f64::NAN), Value::Smi(1)]);
        let b = Value::List(vec![Value::Double(f64::NAN), Value::Smi(1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_smi_double_distinct() {
        assert_ne!(Value::Smi(1), Value::Double(1.0));
    }

    #[test]
    fn test_type_of() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Smi(3).type_of(), "number");
        assert_eq!(Value::BigInt(BigInt::from(9)).type_of(), "bigint");
        assert_eq!(Value::List(vec![]).type_of(), "object");
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Double(f64::NAN).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(Value::List(vec![]).is_truthy());
        assert!(Value::BigInt(BigInt::from(1)).is_truthy());
        assert!(!Value::BigInt(BigInt::from(0)).is_truthy());
    }

    #[test]
    fn test_display_list() {
        let v = Value::List(vec![Value::Smi(1), Value::Null, Value::String("x".into())]);
        assert_eq!(v.to_string(), "[1, null, x]");
    }
}
