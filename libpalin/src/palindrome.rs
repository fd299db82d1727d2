//! Palindrome detection over a [`Node`] chain in a single recursive pass.
//!
//! The checker descends toward the middle of the list, consuming two
//! positions of the remaining length per call while advancing one node, then
//! compares mirrored pairs on the way back up:
//!
//! ```text
//!  remaining   frame head
//!      7       0 ( 1 ( 2 ( 3 ) 2 ) 1 ) 0
//!      5           1 ( 2 ( 3 ) 2 ) 1 ) 0
//!      3               2 ( 3 ) 2 ) 1 ) 0
//!      1                   3 ) 2 ) 1 ) 0
//! ```
//!
//! The innermost frame hands back the node just past the middle, each frame
//! compares its own head with the node it was handed and passes on that
//! node's successor. The only working memory is the call stack, which grows
//! to `⌈n/2⌉` frames; see [`iterative`] for a version that does not.

use log::{debug, trace};

use crate::list::Node;

pub mod iterative;

/// What a frame reports to its parent.
#[derive(Debug)]
pub enum CheckResult<'l, T> {
    /// Some mirrored pair differs. Carries no position, since nothing is
    /// compared after a mismatch.
    Mismatch,
    /// Every pair inside this frame matched. `next` is the node the parent
    /// must compare its own head against.
    StillPalindrome { next: Option<&'l Node<T>> },
}

impl<'l, T: PartialEq> CheckResult<'l, T> {
    /// Compares the value at `lhs` with the value at `rhs`. On a match, the
    /// parent's partner is the node after `rhs`.
    pub fn pair(lhs: &'l Node<T>, rhs: Option<&'l Node<T>>) -> Self {
        match (lhs.value(), rhs.and_then(Node::value)) {
            (Some(l), Some(r)) if l == r => CheckResult::StillPalindrome {
                next: rhs.and_then(Node::successor),
            },
            _ => CheckResult::Mismatch,
        }
    }
}

impl<'l, T> CheckResult<'l, T> {
    pub fn is_palindrome(&self) -> bool {
        matches!(self, CheckResult::StillPalindrome { .. })
    }
}

/// Checks whether the first `remaining` values from `head` onward, paired
/// around their midpoint, read the same in both directions.
///
/// `remaining` counts paired positions, not nodes walked: it drops by two per
/// call while `head` moves one node. Call it with `head.len()` to check a
/// whole list.
pub fn check_recursively<T: PartialEq>(head: &Node<T>, remaining: usize) -> CheckResult<'_, T> {
    let rest = match head.successor() {
        Some(rest) => rest,
        None => return CheckResult::Mismatch,
    };

    trace!("check frame, {remaining} positions remaining");

    match remaining {
        // `head` is the middle of an odd-length run and has no partner.
        0 | 1 => CheckResult::StillPalindrome { next: Some(rest) },
        2 => CheckResult::pair(head, Some(rest)),
        _ => match check_recursively(rest, remaining - 2) {
            CheckResult::StillPalindrome { next: Some(next) } => {
                CheckResult::pair(head, Some(next))
            }
            settled => settled,
        },
    }
}

/// The number of stack frames [`check_recursively`] uses on a list of `len`
/// elements.
pub fn recursion_depth(len: usize) -> usize {
    (len + 1) / 2
}

/// Returns true if the values of `list` read the same backward as forward.
///
/// The empty list is *not* considered a palindrome.
pub fn is_palindrome<T: PartialEq>(list: &Node<T>) -> bool {
    if list.is_empty() {
        return false;
    }
    let len = list.len();
    debug!(
        "recursive palindrome check over {len} elements (depth {})",
        recursion_depth(len)
    );
    check_recursively(list, len).is_palindrome()
}
