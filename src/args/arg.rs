use std::fmt;

/// A loosely typed argument as handed over by a dynamic caller
///
/// Only [`Arg::Nil`] and `Arg::Bool(false)` are falsy, every other value is truthy,
/// including `0` and the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    Symbol(String),
}

impl Arg {
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Arg::Nil | Arg::Bool(false))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Arg::Nil)
    }

    /// Name of the value's type as used in conversion errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Nil => "nil",
            Arg::Bool(true) => "true",
            Arg::Bool(false) => "false",
            Arg::Integer(_) => "integer",
            Arg::Float(_) => "float",
            Arg::Str(_) => "string",
            Arg::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Nil => f.write_str("nil"),
            Arg::Bool(value) => write!(f, "{value}"),
            Arg::Integer(value) => write!(f, "{value}"),
            Arg::Float(value) => write!(f, "{value:?}"),
            Arg::Str(value) => write!(f, "{value:?}"),
            Arg::Symbol(value) => write!(f, ":{value}"),
        }
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Integer(value)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Nil, Into::into)
    }
}
