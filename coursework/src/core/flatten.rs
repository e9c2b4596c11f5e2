//! Flattening nested sequences into their leaves.
//!
//! Both strategies visit leaves depth-first, left to right, and must return
//! identical output for identical input. [`flatten_recursive`] uses one stack
//! frame per nesting level and is bounded by the thread's call stack;
//! callers with deep or untrusted input should use [`flatten_iterative`].

use super::nested::Nested;

/// Flatten `xs` by recursive descent.
pub fn flatten_recursive<T: Clone>(xs: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    for item in xs {
        match item {
            Nested::List(items) => result.extend(flatten_recursive(items)),
            Nested::Leaf(value) => result.push(value.clone()),
        }
    }
    result
}

/// Flatten `xs` with an explicit LIFO work list.
///
/// Lists push their elements in reverse so the leftmost element is popped
/// first. Depth is bounded only by available memory.
pub fn flatten_iterative<T: Clone>(xs: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    let mut stack: Vec<&Nested<T>> = xs.iter().rev().collect();
    while let Some(current) = stack.pop() {
        match current {
            Nested::List(items) => stack.extend(items.iter().rev()),
            Nested::Leaf(value) => result.push(value.clone()),
        }
    }
    result
}
