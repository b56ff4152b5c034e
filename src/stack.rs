//! A LIFO container with index-based removal
//!
//! [`Stack`] is owned exclusively and needs no synchronization. When several threads need to
//! work on the same stack, wrap it in a [`SharedStack`] handle, which guards every operation
//! with a lock owned by that one stack.

#[cfg(not(feature = "std"))]
use alloc::vec::{self, Vec};
use core::{fmt, slice};
#[cfg(feature = "std")]
use std::vec;

use crate::error::Error;

#[cfg(feature = "std")]
mod shared;

#[cfg(feature = "std")]
pub use self::shared::SharedStack;

/// A last-in-first-out sequence of elements.
///
/// Position `0` is the bottom of the stack; the top is at `size() - 1`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack {
            elements: Vec::new(),
        }
    }
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Create an empty stack with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Add `element` to the top of the stack and return a reference to it
    pub fn push(&mut self, element: T) -> &T {
        self.elements.push(element);
        let top = self.elements.len() - 1;
        &self.elements[top]
    }

    /// Push a value that may be absent.
    ///
    /// An absent value is rejected with [`Error::InvalidArgument`]; the stack never stores one.
    pub fn try_push(&mut self, element: Option<T>) -> Result<&T, Error> {
        match element {
            Some(element) => Ok(self.push(element)),
            None => Err(Error::invalid_argument("element cannot be absent")),
        }
    }

    /// Return the top element without removing it
    pub fn peek(&self) -> Result<&T, Error> {
        self.elements.last().ok_or(Error::empty("peek"))
    }

    /// Return a mutable reference to the top element
    pub fn peek_mut(&mut self) -> Result<&mut T, Error> {
        self.elements.last_mut().ok_or(Error::empty("peek"))
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::empty("pop"));
        }
        self.remove_element_by_index(self.size() - 1)
    }

    /// The number of elements on the stack
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Whether the stack holds no elements
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Remove all elements. This function is idempotent.
    pub fn clear(&mut self) {
        self.elements.clear()
    }

    /// Remove and return the element at `index`, counted from the bottom.
    ///
    /// Elements above `index` move down by one position.
    pub fn remove_element_by_index(&mut self, index: usize) -> Result<T, Error> {
        let size = self.size();
        if index >= size {
            return Err(Error::IndexOutOfRange { index, size });
        }
        Ok(self.elements.remove(index))
    }

    /// Iterate over the elements from the bottom to the top
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter)
    }
}

impl<T> IntoIterator for Stack<T> {
    type IntoIter = vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (position, element) in self.elements.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}
