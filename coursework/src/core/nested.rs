//! Arbitrarily nested sequences of leaves.

use serde::{Deserialize, Serialize};

/// A leaf value or an ordered list of further nested values.
///
/// Deserializes from JSON with arrays as lists and every other value as a
/// leaf. Ownership makes cycles unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    // Must stay first: untagged deserialization tries variants in order.
    List(Vec<Nested<T>>),
    Leaf(T),
}

impl<T> Nested<T> {
    /// Number of list levels enclosing the deepest element.
    ///
    /// A leaf has depth 0, `[]` has depth 1, `[[1]]` has depth 2. Computed
    /// with an explicit stack so it is safe on any input.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, level)) = stack.pop() {
            if let Nested::List(items) = node {
                let inner = level + 1;
                deepest = deepest.max(inner);
                stack.extend(items.iter().map(|item| (item, inner)));
            }
        }
        deepest
    }

    /// Consume the value and return its leaves in left-to-right order.
    ///
    /// Lists are dismantled one level at a time, so this also tears down
    /// structures too deep for the default recursive `Drop`.
    pub fn into_leaves(self) -> Vec<T> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Nested::List(items) => stack.extend(items.into_iter().rev()),
                Nested::Leaf(value) => leaves.push(value),
            }
        }
        leaves
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

/// Maximum [`Nested::depth`] across the items of a top-level sequence.
pub fn max_depth<T>(xs: &[Nested<T>]) -> usize {
    xs.iter().map(Nested::depth).max().unwrap_or(0)
}
