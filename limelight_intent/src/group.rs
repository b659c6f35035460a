// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The field group coordinator.

use core::fmt;

use smallvec::SmallVec;

use crate::intent::FocusIntent;

bitflags::bitflags! {
    /// Per-field flags controlling registration-time behavior and traversal.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u8 {
        /// Field can hold focus and participates in chain traversal.
        const ENABLED   = 0b0000_0001;
        /// Field registers with a pending focus request, so the host can give
        /// it initial focus when the screen appears.
        const AUTOFOCUS = 0b0000_0010;
        /// Field terminates a return-key chain: return resigns instead of
        /// advancing.
        const CHAIN_END = 0b0000_0100;
    }
}

impl Default for FieldFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Per-field properties provided at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldProps {
    /// Behavior flags. Defaults to [`FieldFlags::ENABLED`].
    pub flags: FieldFlags,
    /// Optional explicit chain-ordering key.
    ///
    /// Fields carrying an explicit order sort before fields without one;
    /// fields without one fall back to registration order.
    pub order: Option<i32>,
}

/// A registered field: identifier, properties, and current intent.
///
/// Handed out by [`FieldGroup::fields`] as a read-only view; all mutation
/// goes through the group's request and confirmation methods.
#[derive(Clone, Copy, Debug)]
pub struct Field<K> {
    /// Identifier for this field.
    pub id: K,
    /// Properties provided at registration (possibly updated via
    /// [`FieldGroup::set_enabled`]).
    pub props: FieldProps,
    /// Current focus intent.
    pub intent: FocusIntent,
}

/// Error for operations referencing a misconfigured field group.
///
/// Both variants indicate a wiring defect in the owning screen rather than a
/// recoverable runtime condition, so callers typically propagate them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupError {
    /// The field id is not registered in this group.
    UnknownField,
    /// The field id is already registered in this group.
    DuplicateField,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField => f.write_str("field id is not registered in this group"),
            Self::DuplicateField => f.write_str("field id is already registered in this group"),
        }
    }
}

impl core::error::Error for GroupError {}

/// Focus coordinator for a group of named input fields.
///
/// A `FieldGroup` mediates between application-level focus *requests* and
/// host-confirmed focus *facts*. Application logic calls
/// [`request_focus`](Self::request_focus) / [`request_resign`](Self::request_resign);
/// the host UI layer, which owns actual keyboard focus, observes the pending
/// intents (via [`pending_focus`](Self::pending_focus) /
/// [`pending_resign`](Self::pending_resign) or by watching
/// [`intent_of`](Self::intent_of)) and reports back through
/// [`report_focused`](Self::report_focused) /
/// [`report_resigned`](Self::report_resigned).
///
/// The group upholds one invariant: at most one field is
/// [`FocusIntent::IsFocused`] at any time. The invariant is enforced at
/// confirmation time, not request time: several fields may hold pending
/// requests simultaneously, and whichever the host confirms last wins.
///
/// Fields iterate in registration order, which is also the default chain
/// order for return-key traversal.
#[derive(Clone, Debug)]
pub struct FieldGroup<K> {
    /// Registered fields, in registration order.
    fields: SmallVec<[Field<K>; 4]>,
}

impl<K: Copy + Eq> FieldGroup<K> {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: SmallVec::new(),
        }
    }

    /// Register a field.
    ///
    /// The field starts [`FocusIntent::NotFocused`], or
    /// [`FocusIntent::ShouldBecomeFocused`] when `props.flags` contains
    /// [`FieldFlags::AUTOFOCUS`], so exactly the screen's chosen field can
    /// request initial focus.
    ///
    /// # Errors
    ///
    /// [`GroupError::DuplicateField`] if `id` is already registered.
    pub fn register(&mut self, id: K, props: FieldProps) -> Result<(), GroupError> {
        if self.index_of(id).is_some() {
            return Err(GroupError::DuplicateField);
        }
        let intent = if props.flags.contains(FieldFlags::AUTOFOCUS) {
            FocusIntent::ShouldBecomeFocused
        } else {
            FocusIntent::NotFocused
        };
        self.fields.push(Field { id, props, intent });
        Ok(())
    }

    /// Record an application-level request for `id` to become focused.
    ///
    /// Sets the field to [`FocusIntent::ShouldBecomeFocused`]. No other field
    /// is touched; arbitration against a currently focused field happens when
    /// the host confirms via [`report_focused`](Self::report_focused).
    /// Requesting focus for the field that already holds it is a no-op, as is
    /// re-requesting while a request is pending. The request is recorded even
    /// for disabled fields; whether to honor it is the host's call.
    ///
    /// # Errors
    ///
    /// [`GroupError::UnknownField`] if `id` is not registered.
    pub fn request_focus(&mut self, id: K) -> Result<(), GroupError> {
        let field = self.field_mut(id)?;
        match field.intent {
            FocusIntent::IsFocused | FocusIntent::ShouldBecomeFocused => {}
            FocusIntent::NotFocused | FocusIntent::ShouldResignFocused => {
                field.intent = FocusIntent::ShouldBecomeFocused;
            }
        }
        Ok(())
    }

    /// Record an application-level request for `id` to give up focus.
    ///
    /// Sets the field to [`FocusIntent::ShouldResignFocused`] when it holds
    /// focus or has a pending focus request (the resign acts as a
    /// counter-request that cancels the pending focus). A resign request
    /// against a field that is already [`FocusIntent::NotFocused`] is a no-op,
    /// so its observable state is unchanged.
    ///
    /// # Errors
    ///
    /// [`GroupError::UnknownField`] if `id` is not registered.
    pub fn request_resign(&mut self, id: K) -> Result<(), GroupError> {
        let field = self.field_mut(id)?;
        match field.intent {
            FocusIntent::IsFocused | FocusIntent::ShouldBecomeFocused => {
                field.intent = FocusIntent::ShouldResignFocused;
            }
            FocusIntent::NotFocused | FocusIntent::ShouldResignFocused => {}
        }
        Ok(())
    }

    /// Host confirmation that `id` became the active responder.
    ///
    /// Sets `id` to [`FocusIntent::IsFocused`] and demotes whichever *other*
    /// field was focused to [`FocusIntent::NotFocused`]; this is where the
    /// single-focus invariant is enforced. Pending requests on other fields
    /// are left standing (the host may still service them later). Confirming
    /// the field that is already focused changes nothing.
    ///
    /// Returns the field that lost focus, if any.
    ///
    /// # Errors
    ///
    /// [`GroupError::UnknownField`] if `id` is not registered.
    pub fn report_focused(&mut self, id: K) -> Result<Option<K>, GroupError> {
        self.index_of(id).ok_or(GroupError::UnknownField)?;
        let mut demoted = None;
        for field in &mut self.fields {
            if field.id == id {
                field.intent = FocusIntent::IsFocused;
            } else if field.intent == FocusIntent::IsFocused {
                field.intent = FocusIntent::NotFocused;
                demoted = Some(field.id);
            }
        }
        Ok(demoted)
    }

    /// Host confirmation that `id` resigned focus.
    ///
    /// Sets the field to [`FocusIntent::NotFocused`] if it was
    /// [`FocusIntent::ShouldResignFocused`] or [`FocusIntent::IsFocused`].
    /// Anything else is a stale confirmation and is ignored; in particular a
    /// standing [`FocusIntent::ShouldBecomeFocused`] request survives.
    ///
    /// # Errors
    ///
    /// [`GroupError::UnknownField`] if `id` is not registered.
    pub fn report_resigned(&mut self, id: K) -> Result<(), GroupError> {
        let field = self.field_mut(id)?;
        match field.intent {
            FocusIntent::IsFocused | FocusIntent::ShouldResignFocused => {
                field.intent = FocusIntent::NotFocused;
            }
            FocusIntent::NotFocused | FocusIntent::ShouldBecomeFocused => {}
        }
        Ok(())
    }

    /// The field the host has confirmed as focused, if any.
    #[must_use]
    pub fn currently_focused(&self) -> Option<K> {
        self.fields
            .iter()
            .find(|f| f.intent == FocusIntent::IsFocused)
            .map(|f| f.id)
    }

    /// The first field (in registration order) with a pending focus request.
    ///
    /// Hosts poll this to learn which field wants focus next.
    #[must_use]
    pub fn pending_focus(&self) -> Option<K> {
        self.fields
            .iter()
            .find(|f| f.intent == FocusIntent::ShouldBecomeFocused)
            .map(|f| f.id)
    }

    /// The first field (in registration order) with a pending resign request.
    #[must_use]
    pub fn pending_resign(&self) -> Option<K> {
        self.fields
            .iter()
            .find(|f| f.intent == FocusIntent::ShouldResignFocused)
            .map(|f| f.id)
    }

    /// Current intent of `id`, or `None` if it is not registered.
    #[must_use]
    pub fn intent_of(&self, id: K) -> Option<FocusIntent> {
        self.index_of(id).map(|i| self.fields[i].intent)
    }

    /// Enable or disable a field.
    ///
    /// Disabled fields keep their registration and whatever intent they hold;
    /// they are only skipped by chain traversal. Disabling a focused field
    /// does not resign it; whether it should is host policy.
    ///
    /// # Errors
    ///
    /// [`GroupError::UnknownField`] if `id` is not registered.
    pub fn set_enabled(&mut self, id: K, enabled: bool) -> Result<(), GroupError> {
        let field = self.field_mut(id)?;
        field.props.flags.set(FieldFlags::ENABLED, enabled);
        Ok(())
    }

    /// Whether `id` is enabled, or `None` if it is not registered.
    #[must_use]
    pub fn is_enabled(&self, id: K) -> Option<bool> {
        self.index_of(id)
            .map(|i| self.fields[i].props.flags.contains(FieldFlags::ENABLED))
    }

    /// Iterate over the registered fields in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field<K>> {
        self.fields.iter()
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn index_of(&self, id: K) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    fn field_mut(&mut self, id: K) -> Result<&mut Field<K>, GroupError> {
        self.fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(GroupError::UnknownField)
    }
}

impl<K: Copy + Eq> Default for FieldGroup<K> {
    fn default() -> Self {
        Self::new()
    }
}
