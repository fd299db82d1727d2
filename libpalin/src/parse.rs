//! Reads a single sequence literal such as `[1, 2, 1]`, `[a b a]` or
//! `"racecar"` into a [`Node`] of [`Elem`]s.

use std::{fmt, str::FromStr};

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{multispace0, multispace1, none_of, satisfy},
    combinator::{all_consuming, cut, map_res, opt, recognize, value},
    error::{context, ContextError, ErrorKind, FromExternalError, ParseError},
    multi::separated_list0,
    sequence::{delimited, pair, preceded, terminated, tuple},
    Finish, Parser,
};

use crate::{
    elem::{Elem, Int, Sym},
    list::Node,
    utils::my_nom::{Res, Span},
};


/// Where in the input a [`Problem`] was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loc {
    pub line: u32,
    pub col: usize,
    /// The start of the input that could not be parsed.
    pub snippet: String,
}

const SNIPPET_LEN: usize = 12;

impl<'i> From<Span<'i>> for Loc {
    fn from(i: Span<'i>) -> Self {
        Loc {
            line: i.location_line(),
            col: i.get_utf8_column(),
            snippet: i.fragment().chars().take(SNIPPET_LEN).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Kind(ErrorKind),
    Expected(char),
    Context(&'static str),
    External(String),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Kind(kind) => write!(f, "unexpected input ({})", kind.description()),
            Problem::Expected(c) => write!(f, "expected `{c}`"),
            Problem::Context(ctx) => write!(f, "while reading {ctx}"),
            Problem::External(msg) => f.write_str(msg),
        }
    }
}

/// A parse failure, as a stack of problems from the innermost parser out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    stack: Vec<(Loc, Problem)>,
}

impl Error {
    pub fn problems(&self) -> impl Iterator<Item = &(Loc, Problem)> {
        self.stack.iter()
    }
}

impl<'i> ParseError<Span<'i>> for Error {
    fn from_error_kind(input: Span<'i>, kind: ErrorKind) -> Self {
        Error {
            stack: vec![(input.into(), Problem::Kind(kind))],
        }
    }

    fn append(input: Span<'i>, kind: ErrorKind, mut other: Self) -> Self {
        other.stack.push((input.into(), Problem::Kind(kind)));
        other
    }

    fn from_char(input: Span<'i>, c: char) -> Self {
        Error {
            stack: vec![(input.into(), Problem::Expected(c))],
        }
    }
}

impl<'i> ContextError<Span<'i>> for Error {
    fn add_context(input: Span<'i>, ctx: &'static str, mut other: Self) -> Self {
        other.stack.push((input.into(), Problem::Context(ctx)));
        other
    }
}

impl<'i, E: fmt::Display> FromExternalError<Span<'i>, E> for Error {
    fn from_external_error(input: Span<'i>, _kind: ErrorKind, e: E) -> Self {
        Error {
            stack: vec![(input.into(), Problem::External(e.to_string()))],
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (loc, problem) in &self.stack {
            let near = if loc.snippet.is_empty() {
                "end of input".to_string()
            } else {
                format!("`{}`", loc.snippet)
            };
            writeln!(f, "  [{}:{}] {problem}, near {near}", loc.line, loc.col)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

fn int(i: Span) -> Res<Int> {
    map_res(
        recognize(pair(opt(tag("-")), take_while1(|c: char| c.is_ascii_digit()))),
        |digits: Span| Int::from_str(digits.fragment()),
    )
    .parse(i)
}

fn char_lit(i: Span) -> Res<char> {
    preceded(
        tag("'"),
        context("a character literal", cut(terminated(none_of("'"), tag("'")))),
    )
    .parse(i)
}

fn sym(i: Span) -> Res<Sym> {
    recognize(tuple((
        satisfy(|c| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    )))
    .map(|span: Span| Sym::from(*span.fragment()))
    .parse(i)
}

pub fn elem(i: Span) -> Res<Elem> {
    alt((
        int.map(Elem::Int),
        char_lit.map(Elem::Char),
        sym.map(Elem::Sym),
    ))
    .parse(i)
}

/// Elements are separated by a comma, by whitespace, or both.
fn sep(i: Span) -> Res {
    alt((
        value((), tuple((multispace0, tag(","), multispace0))),
        value((), multispace1),
    ))
    .parse(i)
}

fn list(i: Span) -> Res<Vec<Elem>> {
    delimited(
        terminated(tag("["), multispace0),
        terminated(
            separated_list0(sep, elem),
            opt(preceded(multispace0, tag(","))),
        ),
        context("a closing `]`", cut(preceded(multispace0, tag("]")))),
    )
    .parse(i)
}

/// A double-quoted text literal stands for the sequence of its characters.
fn text(i: Span) -> Res<Vec<Elem>> {
    delimited(
        tag("\""),
        take_while(|c: char| c != '"'),
        context("a closing `\"`", cut(tag("\""))),
    )
    .map(|txt: Span| txt.fragment().chars().map(Elem::Char).collect::<Vec<_>>())
    .parse(i)
}

fn sequence(i: Span) -> Res<Vec<Elem>> {
    context(
        "a `[...]` list or a \"text\" literal",
        delimited(multispace0, alt((list, text)), multispace0),
    )
    .parse(i)
}

/// Parses `src` as exactly one sequence literal, with nothing after it but
/// whitespace.
pub fn entire_sequence(src: &str) -> Result<Node<Elem>, Error> {
    let (_, elems) = all_consuming(sequence).parse(Span::new(src)).finish()?;
    Ok(Node::from_sequence(elems))
}
