//! An immutable, singly-linked sequence.
//!
//! A [`Node`] is either an element holding a value together with the rest of
//! the sequence, or the [`Node::End`] marker. Every node exclusively owns its
//! successor, so a chain is always finite and can never contain a cycle.

use std::{fmt, mem};

pub enum Node<T> {
    Element { value: T, rest: Box<Node<T>> },
    End,
}

impl<T> Node<T> {
    /// Builds a chain holding `values` in order. An empty input gives
    /// [`Node::End`].
    pub fn from_sequence(values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        values
            .into_iter()
            .rev()
            .fold(Node::End, |rest, value| Node::cons(value, rest))
    }

    pub fn cons(value: T, rest: Node<T>) -> Self {
        Node::Element {
            value,
            rest: Box::new(rest),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Node::Element { value, .. } => Some(value),
            Node::End => None,
        }
    }

    pub fn successor(&self) -> Option<&Node<T>> {
        match self {
            Node::Element { rest, .. } => Some(&**rest),
            Node::End => None,
        }
    }

    /// The number of elements between this node and the end of the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True for [`Node::End`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::End)
    }

    /// True if this node is the end marker or the last element.
    pub fn is_end_of_list(&self) -> bool {
        self.successor().map_or(true, Node::is_empty)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { node: self }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for Node<T> {
    // The derived teardown would recurse once per element.
    fn drop(&mut self) {
        let mut rest = match self {
            Node::Element { rest, .. } => mem::replace(&mut **rest, Node::End),
            Node::End => return,
        };
        while let Node::Element { rest: next, .. } = &mut rest {
            let tail = mem::replace(&mut **next, Node::End);
            rest = tail;
        }
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node::End
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T> FromIterator<T> for Node<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Node::from_sequence(iter)
    }
}

impl<T> From<Vec<T>> for Node<T> {
    fn from(values: Vec<T>) -> Self {
        Node::from_sequence(values)
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// Borrows the values of a chain from front to back.
pub struct Iter<'l, T> {
    node: &'l Node<T>,
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.node {
            Node::Element { value, rest } => {
                self.node = &**rest;
                Some(value)
            }
            Node::End => None,
        }
    }
}

impl<'l, T> IntoIterator for &'l Node<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
