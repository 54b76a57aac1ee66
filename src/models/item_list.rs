// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Ordered item sequences and the structural readiness check for field values.
//! Every operation here returns a fresh vector; inputs are never mutated.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Copy of `items` with `candidate` appended at the end.
pub fn appended<T: Clone>(items: &[T], candidate: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(candidate);
    next
}

/// Copy of `items` with position `index` replaced by `data`.
///
/// `index` must be in range; out-of-range indices leave the copy unchanged.
pub fn replaced<T: Clone>(items: &[T], index: usize, data: T) -> Vec<T> {
    debug_assert!(index < items.len(), "edit index {index} out of range");
    let mut next = items.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = data;
    }
    next
}

/// Copy of `items` without position `index`, keeping the relative order of the rest.
pub fn removed<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    debug_assert!(index < items.len(), "remove index {index} out of range");
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Anything that can expose a readable length and positional access.
///
/// A `None` length means the value is not (yet) a sequence, e.g. an
/// uninitialized placeholder or a scalar.
pub trait SequenceLike<T> {
    fn seq_len(&self) -> Option<usize>;
    fn seq_get(&self, index: usize) -> Option<&T>;
}

impl<T> SequenceLike<T> for [T] {
    fn seq_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn seq_get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> SequenceLike<T> for Vec<T> {
    fn seq_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn seq_get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> SequenceLike<T> for VecDeque<T> {
    fn seq_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn seq_get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, S: SequenceLike<T>> SequenceLike<T> for Option<S> {
    fn seq_len(&self) -> Option<usize> {
        self.as_ref().and_then(<S as SequenceLike<T>>::seq_len)
    }

    fn seq_get(&self, index: usize) -> Option<&T> {
        self.as_ref().and_then(|s| s.seq_get(index))
    }
}

impl SequenceLike<serde_json::Value> for serde_json::Value {
    fn seq_len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn seq_get(&self, index: usize) -> Option<&serde_json::Value> {
        self.as_array().and_then(|items| items.get(index))
    }
}

/// Value slot held by the field-wrapper model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue<T> {
    /// The model has not applied an initial value yet.
    Unset,
    /// Scalar placeholder; never treated as a list.
    Text(String),
    List(Vec<T>),
}

impl<T> SequenceLike<T> for FieldValue<T> {
    fn seq_len(&self) -> Option<usize> {
        match self {
            Self::List(items) => Some(items.len()),
            Self::Unset | Self::Text(_) => None,
        }
    }

    fn seq_get(&self, index: usize) -> Option<&T> {
        match self {
            Self::List(items) => items.get(index),
            Self::Unset | Self::Text(_) => None,
        }
    }
}

impl<T> Default for FieldValue<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<Vec<T>> for FieldValue<T> {
    fn from(items: Vec<T>) -> Self {
        Self::List(items)
    }
}

/// Whether `value` exposes a defined length.
pub fn is_ready<T, S: SequenceLike<T> + ?Sized>(value: &S) -> bool {
    value.seq_len().is_some()
}

/// Shallow-clone a sequence-like value into a plain vector.
///
/// Returns `None` while the value is not ready, or if it reports a length it
/// cannot back with items.
pub fn normalize<T: Clone, S: SequenceLike<T> + ?Sized>(value: &S) -> Option<Vec<T>> {
    let len = value.seq_len()?;
    (0..len).map(|i| value.seq_get(i).cloned()).collect()
}
