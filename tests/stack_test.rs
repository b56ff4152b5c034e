//! Stack laws, and pushes from several threads onto one shared stack.

use std::thread;

use proptest::prelude::*;
use shunting::{Error, SharedStack, Stack};

const THREADS: usize = 5;
const PUSHES_PER_THREAD: usize = 10;

proptest! {
    #[test]
    fn pops_return_pushes_in_reverse(values in proptest::collection::vec(-10i32..=10, 0..64)) {
        let mut stack = Stack::new();
        for &value in &values {
            stack.push(value);
        }

        for &expected in values.iter().rev() {
            prop_assert_eq!(Ok(expected), stack.pop());
        }
        prop_assert!(stack.is_empty());
    }

    #[test]
    fn emptiness_tracks_size(operations in proptest::collection::vec(any::<Option<u8>>(), 0..64)) {
        let mut stack = Stack::new();
        for operation in operations {
            match operation {
                Some(value) => {
                    stack.push(value);
                },
                None => {
                    let _ = stack.pop();
                },
            }
            prop_assert_eq!(stack.is_empty(), stack.size() == 0);
        }
    }

    #[test]
    fn peek_never_changes_size(values in proptest::collection::vec(any::<u16>(), 1..32), peeks in 1usize..16) {
        let stack: Stack<_> = values.iter().copied().collect();
        let size = stack.size();
        for _ in 0..peeks {
            prop_assert_eq!(Ok(values.last().unwrap()), stack.peek());
        }
        prop_assert_eq!(size, stack.size());
    }
}

#[test]
fn empty_stack_never_yields_a_default() {
    let mut stack = Stack::<i64>::new();
    assert!(matches!(stack.pop(), Err(Error::EmptyStack { .. })));
    assert!(matches!(stack.peek(), Err(Error::EmptyStack { .. })));
    assert!(matches!(
        stack.remove_element_by_index(0),
        Err(Error::IndexOutOfRange { .. })
    ));
}

#[test]
fn remove_by_index_keeps_the_rest_in_order() {
    let values = [4, -3, 9, 0, 7, 7, -10, 2, 5, 1];
    let mut stack: Stack<_> = values.into_iter().collect();

    assert_eq!(Ok(values[2]), stack.remove_element_by_index(2));
    assert_eq!(values.len() - 1, stack.size());
    assert_eq!(
        Err(Error::IndexOutOfRange {
            index: stack.size(),
            size: stack.size(),
        }),
        stack.remove_element_by_index(stack.size())
    );
    assert_eq!(Ok(1), stack.pop());
    assert_eq!(Ok(4), stack.remove_element_by_index(0));
}

#[test]
fn concurrent_pushes_are_not_lost() {
    let stack = SharedStack::new();
    let workers: Vec<_> = (0..THREADS)
        .map(|worker| {
            let stack = stack.clone();
            thread::spawn(move || {
                for value in 0..PUSHES_PER_THREAD {
                    stack.push(worker * PUSHES_PER_THREAD + value);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("Pushing thread should not panic");
    }

    assert_eq!(THREADS * PUSHES_PER_THREAD, stack.size());
    let mut pushed: Vec<_> = stack.snapshot().into_iter().collect();
    pushed.sort_unstable();
    assert_eq!((0..THREADS * PUSHES_PER_THREAD).collect::<Vec<_>>(), pushed);
}

#[test]
fn concurrent_pops_take_each_element_once() {
    let stack = SharedStack::from((0..1000).collect::<Stack<u32>>());
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let stack = stack.clone();
            thread::spawn(move || {
                let mut taken = Vec::new();
                while let Ok(value) = stack.pop() {
                    taken.push(value);
                }
                taken
            })
        })
        .collect();

    let mut taken: Vec<u32> = workers
        .into_iter()
        .flat_map(|worker| worker.join().expect("Popping thread should not panic"))
        .collect();
    taken.sort_unstable();
    assert_eq!((0..1000).collect::<Vec<_>>(), taken);
    assert!(stack.is_empty());
}

#[test]
fn shared_stack_rejects_absent_values() {
    let stack = SharedStack::new();
    assert!(matches!(stack.try_push(None::<u8>), Err(Error::InvalidArgument(_))));
    assert_eq!(Ok(3), stack.try_push(Some(3)));
    assert_eq!(Ok(3), stack.remove_element_by_index(0));
    stack.clear();
    assert!(stack.is_empty());
}
