use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use lasso::{Rodeo, Spur};
use magic_static::magic_static;

#[magic_static]
pub static INTERNER: Mutex<Rodeo> = Mutex::new(Rodeo::default());

fn rodeo() -> MutexGuard<'static, Rodeo> {
    // A panic while holding the lock cannot leave the rodeo half-updated.
    INTERNER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An interned string. Two `IStr`s are equal exactly when their text is, so
/// comparing symbols never touches the string data.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct IStr(Spur);

impl IStr {
    pub fn new(s: impl AsRef<str>) -> Self {
        IStr(rodeo().get_or_intern(s.as_ref()))
    }

    /// Runs `f` on the text behind this symbol while the interner is locked.
    pub fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(rodeo().resolve(&self.0))
    }
}

impl fmt::Debug for IStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| write!(f, "Sym({s})"))
    }
}

impl fmt::Display for IStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| f.write_str(s))
    }
}

impl From<&str> for IStr {
    fn from(s: &str) -> Self {
        IStr::new(s)
    }
}

impl From<String> for IStr {
    fn from(s: String) -> Self {
        IStr::new(s)
    }
}
