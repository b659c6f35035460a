// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-field focus intent state.

/// Focus intent for a single input field.
///
/// Two variants are *requests* recorded on behalf of application logic
/// ([`ShouldBecomeFocused`](Self::ShouldBecomeFocused),
/// [`ShouldResignFocused`](Self::ShouldResignFocused)); the other two are
/// *facts* established by host confirmations. Only the host moves a field
/// into or out of [`IsFocused`](Self::IsFocused).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusIntent {
    /// The field does not have focus and nothing is pending.
    NotFocused,
    /// Application logic asked for focus; the host has not confirmed yet.
    ShouldBecomeFocused,
    /// The host confirmed this field as the active responder.
    IsFocused,
    /// Application logic asked to release focus; the host has not confirmed yet.
    ShouldResignFocused,
}

impl FocusIntent {
    /// Returns `true` if the host has confirmed this field as focused.
    #[must_use]
    pub const fn is_focused(self) -> bool {
        matches!(self, Self::IsFocused)
    }

    /// Returns `true` if a request is awaiting host confirmation.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::ShouldBecomeFocused | Self::ShouldResignFocused)
    }

    /// Returns `true` if this field holds or has requested focus.
    #[must_use]
    pub const fn wants_focus(self) -> bool {
        matches!(self, Self::IsFocused | Self::ShouldBecomeFocused)
    }
}

impl Default for FocusIntent {
    fn default() -> Self {
        Self::NotFocused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_partition_the_states() {
        assert!(FocusIntent::IsFocused.is_focused());
        assert!(!FocusIntent::ShouldBecomeFocused.is_focused());

        assert!(FocusIntent::ShouldBecomeFocused.is_pending());
        assert!(FocusIntent::ShouldResignFocused.is_pending());
        assert!(!FocusIntent::NotFocused.is_pending());
        assert!(!FocusIntent::IsFocused.is_pending());

        assert!(FocusIntent::IsFocused.wants_focus());
        assert!(FocusIntent::ShouldBecomeFocused.wants_focus());
        assert!(!FocusIntent::ShouldResignFocused.wants_focus());
    }

    #[test]
    fn default_is_not_focused() {
        assert_eq!(FocusIntent::default(), FocusIntent::NotFocused);
    }
}
