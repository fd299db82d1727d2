use std::fmt;

use num::BigInt;

use crate::interner::IStr;

pub type Sym = IStr;
pub type Int = BigInt;

/// One element of a sequence read from user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Elem {
    Int(Int),
    Sym(Sym),
    Char(char),
}

impl fmt::Display for Elem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elem::Int(i) => write!(f, "{i}"),
            Elem::Sym(s) => write!(f, "{s}"),
            Elem::Char(c) => write!(f, "'{c}'"),
        }
    }
}

impl From<i64> for Elem {
    fn from(i: i64) -> Self {
        Elem::Int(i.into())
    }
}

impl From<char> for Elem {
    fn from(c: char) -> Self {
        Elem::Char(c)
    }
}

impl From<&str> for Elem {
    fn from(s: &str) -> Self {
        Elem::Sym(s.into())
    }
}
