// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Chain: return-key chain traversal for field groups.
//!
//! This crate decides *which field comes next* when the user advances through
//! a form (return key, Tab, or a delete press in an already-empty field that
//! should hop back to the previous input). It is deliberately pure: policies
//! read an immutable snapshot of candidates and return an identifier, and
//! nothing here touches focus state. The companion [`driver`] module (feature
//! `driver`) bridges decisions into a `limelight_intent::FieldGroup`.
//!
//! - **Traversal intents** ([`Advance`]): forward or backward through the
//!   chain.
//! - **A view of candidates** ([`ChainEntry`] / [`ChainView`]): the fields of
//!   a form in declaration order, with their ordering keys and enabled state.
//! - Pluggable **policies** ([`AdvancePolicy`]) that select the next field
//!   given an origin, a direction, and the candidate view.
//!
//! ## Minimal example
//!
//! A two-field form traversed front to back:
//!
//! ```rust
//! use limelight_chain::{Advance, AdvancePolicy, ChainEntry, ChainView, OrderPolicy, WrapMode};
//!
//! let fields = vec![
//!     ChainEntry {
//!         id: "email",
//!         order: None,
//!         enabled: true,
//!         chain_end: false,
//!     },
//!     ChainEntry {
//!         id: "password",
//!         order: None,
//!         enabled: true,
//!         chain_end: true,
//!     },
//! ];
//!
//! let view = ChainView { fields: &fields };
//! let policy = OrderPolicy { wrap: WrapMode::Never };
//!
//! // Return moves from email to password…
//! assert_eq!(policy.next("email", Advance::Next, &view), Some("password"));
//! // …and the chain stops at the end instead of wrapping.
//! assert_eq!(policy.next("password", Advance::Next, &view), None);
//! ```
//!
//! Candidates are ranked by explicit [`ChainEntry::order`] when present
//! (ordered entries sort before unordered ones), with declaration order as
//! the tie-break. Disabled entries stay in the view, keeping declaration
//! order stable, but are never selected.
//!
//! The types are generic over the field identifier `K`, so callers can use
//! any small, copyable handle (an enum of the screen's fields, a numeric id).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

#[cfg(feature = "driver")]
pub mod driver;

/// Direction of chain traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Advance {
    /// Move to the next field in chain order (for example, the return key).
    Next,
    /// Move to the previous field in chain order (for example, delete in an
    /// empty field).
    Prev,
}

/// Edge behavior when traversal runs off either end of the chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Do not wrap; reaching the end of the chain yields no next candidate.
    Never,
    /// Wrap around to the other end of the chain.
    Wrap,
}

/// A single field within a [`ChainView`].
#[derive(Clone, Copy, Debug)]
pub struct ChainEntry<K> {
    /// Identifier for this field.
    pub id: K,
    /// Optional explicit ordering key; entries carrying one sort before
    /// entries without one.
    pub order: Option<i32>,
    /// Whether this field can be targeted by traversal.
    pub enabled: bool,
    /// Whether this field terminates the chain (return resigns here instead
    /// of advancing). Policies ignore it; drivers consult it.
    pub chain_end: bool,
}

/// A read-only snapshot of a form's fields, in declaration order.
///
/// Policies treat the view as immutable; slice position is the declaration
/// order and the final tie-break for ranking.
#[derive(Clone, Copy, Debug)]
pub struct ChainView<'a, K> {
    /// Candidate fields visible to the policy.
    pub fields: &'a [ChainEntry<K>],
}

/// Trait for chain traversal policies.
///
/// A policy receives the origin field, a traversal intent, and a read-only
/// view of candidates, and returns the next field if any. Implementations
/// are free to use ordering keys, enabled state, or their own rules.
pub trait AdvancePolicy<K>
where
    K: Copy + Eq,
{
    /// Compute the next field given an origin, traversal intent, and view.
    fn next(&self, origin: K, advance: Advance, view: &ChainView<'_, K>) -> Option<K>;
}

/// Default traversal policy: explicit order first, declaration order second.
#[derive(Copy, Clone, Debug)]
pub struct OrderPolicy {
    /// Edge behavior at the ends of the chain.
    pub wrap: WrapMode,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        // Form chains terminate; the last field dismisses the keyboard.
        Self {
            wrap: WrapMode::Never,
        }
    }
}

impl<K> AdvancePolicy<K> for OrderPolicy
where
    K: Copy + Eq,
{
    fn next(&self, origin: K, advance: Advance, view: &ChainView<'_, K>) -> Option<K> {
        next_in_chain(origin, advance, view, self.wrap)
    }
}

fn next_in_chain<K>(
    origin: K,
    advance: Advance,
    view: &ChainView<'_, K>,
    wrap: WrapMode,
) -> Option<K>
where
    K: Copy + Eq,
{
    let fields = view.fields;

    // Collect enabled candidates and rank them by explicit order and
    // declaration position.
    let mut indices: Vec<usize> = fields
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.enabled.then_some(i))
        .collect();
    if indices.is_empty() {
        return None;
    }

    indices.sort_by(|&ia, &ib| compare_entries(&fields[ia], ia, &fields[ib], ib));

    // Locate the origin within the ranked candidates, if present. A missing
    // origin (disabled mid-flight, or not part of the view) starts traversal
    // from the appropriate end.
    let origin_pos = indices.iter().position(|&i| fields[i].id == origin);

    match advance {
        Advance::Next => match origin_pos {
            Some(pos) => {
                if pos + 1 < indices.len() {
                    Some(fields[indices[pos + 1]].id)
                } else if wrap == WrapMode::Wrap {
                    Some(fields[indices[0]].id)
                } else {
                    None
                }
            }
            None => Some(fields[indices[0]].id),
        },
        Advance::Prev => match origin_pos {
            Some(pos) => {
                if pos > 0 {
                    Some(fields[indices[pos - 1]].id)
                } else if wrap == WrapMode::Wrap {
                    Some(fields[indices[indices.len() - 1]].id)
                } else {
                    None
                }
            }
            None => Some(fields[indices[indices.len() - 1]].id),
        },
    }
}

fn compare_entries<K>(a: &ChainEntry<K>, ai: usize, b: &ChainEntry<K>, bi: usize) -> Ordering {
    match (a.order, b.order) {
        (Some(ao), Some(bo)) => ao.cmp(&bo).then(ai.cmp(&bi)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => ai.cmp(&bi),
    }
}
