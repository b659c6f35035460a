// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Intent: first-responder intent coordination for input fields.
//!
//! This crate separates what an application *wants* focused from what the host
//! platform has *actually* focused. Application logic issues optimistic
//! requests; the host UI layer (which owns the real keyboard focus) confirms
//! them later, and only confirmations move authoritative state:
//!
//! - [`FocusIntent`]: the per-field state, two request states and two
//!   confirmed states.
//! - [`FieldGroup`]: the coordinator for a group of named fields (for example,
//!   a login form). It records requests, applies host confirmations, and
//!   enforces that at most one field in the group is focused at a time.
//! - [`binding`]: the boolean "is editing" adapter that declarative UI
//!   bindings consume.
//!
//! ## Request / confirm cycle
//!
//! ```rust
//! use limelight_intent::{FieldGroup, FieldProps, FocusIntent};
//!
//! let mut group: FieldGroup<u32> = FieldGroup::new();
//! group.register(1, FieldProps::default()).unwrap();
//! group.register(2, FieldProps::default()).unwrap();
//!
//! // Application asks for field 1; nothing is focused yet.
//! group.request_focus(1).unwrap();
//! assert_eq!(group.intent_of(1), Some(FocusIntent::ShouldBecomeFocused));
//! assert_eq!(group.currently_focused(), None);
//!
//! // The host observes the pending request and confirms it.
//! let pending = group.pending_focus().unwrap();
//! group.report_focused(pending).unwrap();
//! assert_eq!(group.currently_focused(), Some(1));
//!
//! // Confirming field 2 later hands focus over and demotes field 1.
//! let demoted = group.report_focused(2).unwrap();
//! assert_eq!(demoted, Some(1));
//! assert_eq!(group.currently_focused(), Some(2));
//! ```
//!
//! ## Design notes
//!
//! - Requests are *optimistic*: two fields may both hold a pending focus
//!   request while the host is busy. Arbitration happens only when the host
//!   confirms ([`FieldGroup::report_focused`]); the last confirmation wins.
//! - Stale confirmations (for a field that already resigned, or that never
//!   asked) are no-ops, mirroring real keyboard/focus latency.
//! - Referencing an unregistered field is a [`GroupError`]: a wiring defect
//!   in the screen, not a runtime condition to retry.
//!
//! The coordinator is generic over the field identifier `K`, so callers can
//! use any small, copyable handle (an enum of the screen's fields, a numeric
//! id, an interned symbol).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod binding;
mod group;
mod intent;

pub use group::{Field, FieldFlags, FieldGroup, FieldProps, GroupError};
pub use intent::FocusIntent;
