use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{error::Error, stack::Stack};

/// A cloneable handle to a [`Stack`] that several threads may use at once.
///
/// Every operation holds the lock of this one stack for its whole duration, so handles to
/// different stacks never contend with each other. Blocked callers are released in no
/// particular order and there is no timeout.
///
/// ```
/// use std::thread;
///
/// use shunting::SharedStack;
///
/// let stack = SharedStack::new();
/// let workers: Vec<_> = (0..4)
///     .map(|worker| {
///         let stack = stack.clone();
///         thread::spawn(move || {
///             for value in 0..25 {
///                 stack.push(worker * 100 + value);
///             }
///         })
///     })
///     .collect();
/// for worker in workers {
///     worker.join().unwrap();
/// }
/// assert_eq!(100, stack.size());
/// ```
#[derive(Debug)]
pub struct SharedStack<T> {
    inner: Arc<Mutex<Stack<T>>>,
}

impl<T> Clone for SharedStack<T> {
    fn clone(&self) -> Self {
        SharedStack {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedStack<T> {
    fn default() -> Self {
        SharedStack::from(Stack::new())
    }
}

impl<T> From<Stack<T>> for SharedStack<T> {
    fn from(stack: Stack<T>) -> Self {
        SharedStack {
            inner: Arc::new(Mutex::new(stack)),
        }
    }
}

impl<T> SharedStack<T> {
    /// Create a handle to a new, empty stack
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    // A panic while the lock is held cannot leave the stack half-updated, as every
    // operation on it is a single `Vec` call.
    fn lock(&self) -> MutexGuard<'_, Stack<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `operation` with the stack locked, so that several steps happen atomically
    pub fn with<F, R>(&self, operation: F) -> R
    where
        F: FnOnce(&mut Stack<T>) -> R,
    {
        operation(&mut self.lock())
    }

    /// Remove and return the top element
    pub fn pop(&self) -> Result<T, Error> {
        self.lock().pop()
    }

    /// The number of elements on the stack
    pub fn size(&self) -> usize {
        self.lock().size()
    }

    /// Whether the stack holds no elements
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove all elements. This function is idempotent.
    pub fn clear(&self) {
        self.lock().clear()
    }

    /// Remove and return the element at `index`, counted from the bottom
    pub fn remove_element_by_index(&self, index: usize) -> Result<T, Error> {
        self.lock().remove_element_by_index(index)
    }
}

impl<T: Clone> SharedStack<T> {
    /// Add `element` to the top of the stack and return a copy of it.
    ///
    /// Use [`SharedStack::with`] to push values that cannot be cloned.
    pub fn push(&self, element: T) -> T {
        self.lock().push(element).clone()
    }

    /// Push a value that may be absent; an absent value is rejected
    pub fn try_push(&self, element: Option<T>) -> Result<T, Error> {
        self.lock().try_push(element).cloned()
    }

    /// Return a copy of the top element without removing it
    pub fn peek(&self) -> Result<T, Error> {
        self.lock().peek().cloned()
    }

    /// Copy the current contents out of the shared stack
    pub fn snapshot(&self) -> Stack<T> {
        self.lock().clone()
    }
}
