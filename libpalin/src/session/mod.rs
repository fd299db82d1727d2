use std::{
    collections::BTreeSet,
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::{debug, info};

use crate::{
    err::{Err, Res},
    is_palindrome, is_palindrome_iterative,
    list::Node,
    palindrome::recursion_depth,
    parse,
};

#[cfg(test)]
mod tests;

/// Deep enough for any list a person types in. A recursive check at this
/// depth fits in the 2 MiB stack of a spawned thread, even in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Always recurse, refusing lists deeper than the configured limit.
    Recursive,
    /// Always use the explicit-stack checker.
    Iterative,
    /// Recurse while the list fits under the depth limit, otherwise iterate.
    #[default]
    Auto,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => f.write_str("recursive"),
            Strategy::Iterative => f.write_str("iterative"),
            Strategy::Auto => f.write_str("auto"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" | "rec" | "r" => Ok(Strategy::Recursive),
            "iterative" | "iter" | "i" => Ok(Strategy::Iterative),
            "auto" | "a" => Ok(Strategy::Auto),
            other => Err(Err::UnknownStrategy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub strategy: Strategy,
    /// The most stack frames a recursive check may use.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub len: usize,
    /// Stack frames used, for recursive checks only.
    pub depth: Option<usize>,
    /// The strategy that actually ran. Never [`Strategy::Auto`].
    pub strategy: Strategy,
    pub is_palindrome: bool,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] # length {}, ", self.is_palindrome, self.len)?;
        match self.depth {
            Some(depth) => write!(f, "checked recursively (depth {depth})"),
            None => write!(f, "checked iteratively"),
        }
    }
}

/// The outcome of checking one line of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// 1-based.
    pub line_no: usize,
    pub src: String,
    pub outcome: Res<Verdict>,
}

#[derive(Debug, Default)]
pub struct Session {
    pub config: Config,
    loaded_files: BTreeSet<PathBuf>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            loaded_files: BTreeSet::new(),
        }
    }

    /// Checks `list` with the configured strategy.
    pub fn check<T: PartialEq>(&self, list: &Node<T>) -> Res<Verdict> {
        let len = list.len();
        let depth = recursion_depth(len);
        let limit = self.config.max_depth;

        let strategy = match self.config.strategy {
            Strategy::Recursive if depth > limit => {
                return Err(Err::MaxRecursionDepthExceeded { depth, limit })
            }
            Strategy::Auto if depth > limit => {
                debug!("depth {depth} exceeds limit {limit}, falling back to iterative check");
                Strategy::Iterative
            }
            Strategy::Auto => Strategy::Recursive,
            strategy => strategy,
        };

        let verdict = match strategy {
            Strategy::Recursive => Verdict {
                len,
                depth: Some(depth),
                strategy,
                is_palindrome: is_palindrome(list),
            },
            _ => Verdict {
                len,
                depth: None,
                strategy: Strategy::Iterative,
                is_palindrome: is_palindrome_iterative(list),
            },
        };

        Ok(verdict)
    }

    /// Parses `src` as a sequence literal and checks it.
    pub fn check_src(&self, src: &str) -> Res<Verdict> {
        let list = parse::entire_sequence(src)?;
        self.check(&list)
    }

    /// Checks every line of `src` holding a sequence. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn check_lines(&self, src: &str) -> Vec<LineReport> {
        src.lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(i, line)| LineReport {
                line_no: i + 1,
                src: line.trim().to_string(),
                outcome: self.check_src(line),
            })
            .collect()
    }

    /// Reads `path` and checks each of its lines. The file is remembered for
    /// [`Session::reload`] once it has been read.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Res<Vec<LineReport>> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)?;
        let reports = self.check_lines(&src);
        info!("checked {} sequence(s) in `{}`", reports.len(), path.display());
        self.loaded_files.insert(path.to_path_buf());
        Ok(reports)
    }

    /// Checks every previously loaded file again.
    pub fn reload(&mut self) -> Vec<(PathBuf, Res<Vec<LineReport>>)> {
        let to_load: Vec<PathBuf> = self.loaded_files.iter().cloned().collect();
        to_load
            .into_iter()
            .map(|path| {
                let reports = self.load_file(&path);
                (path, reports)
            })
            .collect()
    }

    pub fn loaded_files(&self) -> impl Iterator<Item = &Path> {
        self.loaded_files.iter().map(PathBuf::as_path)
    }

    /// Forgets a loaded file. Returns false if it was never loaded.
    pub fn unload(&mut self, path: impl AsRef<Path>) -> bool {
        self.loaded_files.remove(path.as_ref())
    }
}
