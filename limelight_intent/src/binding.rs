// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing-flag adapter for declarative two-way bindings.
//!
//! Declarative UI frameworks typically bind a text field's editing state to a
//! single boolean. This module spells out the mapping between that flag and
//! [`FocusIntent`] as plain functions, so the transition logic stays
//! independent of any particular binding mechanism:
//!
//! - Reading: the flag is `true` only for a host-confirmed
//!   [`FocusIntent::IsFocused`]. Pending requests read as `false`; the
//!   binding reflects facts, not wishes.
//! - Writing: setting the flag records a request
//!   ([`FocusIntent::ShouldBecomeFocused`] or
//!   [`FocusIntent::ShouldResignFocused`]); it never moves authoritative
//!   state directly.
//!
//! ```rust
//! use limelight_intent::{FieldGroup, FieldProps, FocusIntent};
//!
//! let mut group: FieldGroup<&str> = FieldGroup::new();
//! group.register("email", FieldProps::default()).unwrap();
//!
//! // A toggle bound to the field writes `true`…
//! group.set_editing("email", true).unwrap();
//! assert_eq!(group.intent_of("email"), Some(FocusIntent::ShouldBecomeFocused));
//! // …but reads back `false` until the host confirms.
//! assert_eq!(group.is_editing("email"), Some(false));
//!
//! group.report_focused("email").unwrap();
//! assert_eq!(group.is_editing("email"), Some(true));
//! ```

use crate::group::{FieldGroup, GroupError};
use crate::intent::FocusIntent;

/// The boolean a view binding reads for a field with the given intent.
#[must_use]
pub const fn editing_flag(intent: FocusIntent) -> bool {
    intent.is_focused()
}

/// The intent a view binding writes when it sets the editing flag.
#[must_use]
pub const fn intent_for_editing(editing: bool) -> FocusIntent {
    if editing {
        FocusIntent::ShouldBecomeFocused
    } else {
        FocusIntent::ShouldResignFocused
    }
}

impl<K: Copy + Eq> FieldGroup<K> {
    /// Read side of the editing binding: `true` only for confirmed focus.
    ///
    /// Returns `None` if `id` is not registered.
    #[must_use]
    pub fn is_editing(&self, id: K) -> Option<bool> {
        self.intent_of(id).map(editing_flag)
    }

    /// Write side of the editing binding.
    ///
    /// Routed through [`request_focus`](Self::request_focus) /
    /// [`request_resign`](Self::request_resign), so it inherits their no-op
    /// and counter-request semantics: writing `false` to an unfocused field
    /// changes nothing, and writing `false` while a focus request is pending
    /// cancels the request.
    ///
    /// # Errors
    ///
    /// [`GroupError::UnknownField`] if `id` is not registered.
    pub fn set_editing(&mut self, id: K, editing: bool) -> Result<(), GroupError> {
        if editing {
            self.request_focus(id)
        } else {
            self.request_resign(id)
        }
    }
}
