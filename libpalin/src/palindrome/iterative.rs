//! The same check as [`super::is_palindrome`], with the first half of the
//! list held on an explicit [`Stack`] instead of the call stack.

use log::debug;

use crate::{
    list::Node,
    stack::{Lifo, Stack},
};

/// Returns true if the values of `list` read the same backward as forward.
/// Uses heap memory proportional to half the list instead of stack frames.
///
/// Like the recursive check, the empty list is *not* a palindrome.
pub fn is_palindrome_iterative<T: PartialEq>(list: &Node<T>) -> bool {
    let len = list.len();
    if len == 0 {
        return false;
    }
    debug!("iterative palindrome check over {len} elements");

    let mut front_half = Stack::with_capacity(len / 2);
    let mut values = list.iter();
    for value in values.by_ref().take(len / 2) {
        front_half.push(value);
    }
    if len % 2 == 1 {
        // The middle element pairs with itself.
        values.next();
    }

    values.all(|value| front_half.pop().is_some_and(|mirror| mirror == value))
}
