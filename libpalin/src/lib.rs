#![deny(unused_must_use)]

pub mod elem;
pub mod err;
pub mod interner;
pub mod list;
pub mod palindrome;
pub mod parse;
pub mod session;
pub mod stack;
pub mod utils;

pub use list::Node;
pub use palindrome::{is_palindrome, iterative::is_palindrome_iterative};

#[magic_static::main(interner::INTERNER)]
pub fn init_interner() {}
