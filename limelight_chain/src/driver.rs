// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge from chain policy decisions into a [`FieldGroup`].
//!
//! The driver owns the two keyboard behaviors a field chain exists for:
//!
//! - **Return**: advance to the next enabled field, or request resignation
//!   when the focused field terminates the chain (its registration carries
//!   [`FieldFlags::CHAIN_END`]) or no further field is reachable.
//! - **Delete in an empty field**: hop back to the previous enabled field.
//!   The caller decides emptiness; the driver only computes the move.
//!
//! Both handlers issue *requests* on the group; the host confirms them the
//! same way it confirms any other request, so the single-focus invariant and
//! the confirmation-time arbitration of `limelight_intent` apply unchanged.
//!
//! ```rust
//! use limelight_chain::driver::{ReturnFlow, chain_view_of, handle_return};
//! use limelight_chain::OrderPolicy;
//! use limelight_intent::{FieldFlags, FieldGroup, FieldProps};
//!
//! let mut group: FieldGroup<&str> = FieldGroup::new();
//! group.register("email", FieldProps::default()).unwrap();
//! group
//!     .register(
//!         "password",
//!         FieldProps {
//!             flags: FieldFlags::ENABLED | FieldFlags::CHAIN_END,
//!             order: None,
//!         },
//!     )
//!     .unwrap();
//! group.report_focused("email").unwrap();
//!
//! let flow = handle_return(&mut group, &OrderPolicy::default()).unwrap();
//! assert_eq!(flow, ReturnFlow::MovedTo("password"));
//! // The move is a request; the host still has to confirm it.
//! assert_eq!(group.pending_focus(), Some("password"));
//! ```

use alloc::vec::Vec;

use limelight_intent::{FieldFlags, FieldGroup, GroupError};

use crate::{Advance, AdvancePolicy, ChainEntry, ChainView};

/// What a chain handler asked the group to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReturnFlow<K> {
    /// A focus request was recorded for the given field.
    MovedTo(K),
    /// A resign request was recorded for the given (formerly current) field.
    Resigned(K),
    /// Nothing was focused, or no target was reachable; no request recorded.
    Unchanged,
}

/// Snapshot a group's fields as chain entries, in registration order.
#[must_use]
pub fn chain_view_of<K: Copy + Eq>(group: &FieldGroup<K>) -> Vec<ChainEntry<K>> {
    group
        .fields()
        .map(|f| ChainEntry {
            id: f.id,
            order: f.props.order,
            enabled: f.props.flags.contains(FieldFlags::ENABLED),
            chain_end: f.props.flags.contains(FieldFlags::CHAIN_END),
        })
        .collect()
}

/// Handle a return key press in the currently focused field.
///
/// Requests focus for the policy's next target, or requests resignation when
/// the focused field is a chain end or the chain is exhausted. With nothing
/// focused this is [`ReturnFlow::Unchanged`].
///
/// # Errors
///
/// Propagates [`GroupError`] from the underlying requests.
pub fn handle_return<K, P>(
    group: &mut FieldGroup<K>,
    policy: &P,
) -> Result<ReturnFlow<K>, GroupError>
where
    K: Copy + Eq,
    P: AdvancePolicy<K>,
{
    let Some(origin) = group.currently_focused() else {
        return Ok(ReturnFlow::Unchanged);
    };

    let entries = chain_view_of(group);
    let at_chain_end = entries
        .iter()
        .find(|e| e.id == origin)
        .is_some_and(|e| e.chain_end);
    if at_chain_end {
        group.request_resign(origin)?;
        return Ok(ReturnFlow::Resigned(origin));
    }

    let view = ChainView { fields: &entries };
    match policy.next(origin, Advance::Next, &view) {
        Some(next) if next != origin => {
            group.request_focus(next)?;
            Ok(ReturnFlow::MovedTo(next))
        }
        // Exhausted chain: behave like a chain end and dismiss.
        _ => {
            group.request_resign(origin)?;
            Ok(ReturnFlow::Resigned(origin))
        }
    }
}

/// Handle a delete press in the currently focused field when its text is
/// already empty: hop back to the previous enabled field.
///
/// The caller is responsible for checking emptiness before calling. With
/// nothing focused, or no previous field reachable, this is
/// [`ReturnFlow::Unchanged`].
///
/// # Errors
///
/// Propagates [`GroupError`] from the underlying request.
pub fn handle_delete_on_empty<K, P>(
    group: &mut FieldGroup<K>,
    policy: &P,
) -> Result<ReturnFlow<K>, GroupError>
where
    K: Copy + Eq,
    P: AdvancePolicy<K>,
{
    let Some(origin) = group.currently_focused() else {
        return Ok(ReturnFlow::Unchanged);
    };

    let entries = chain_view_of(group);
    let view = ChainView { fields: &entries };
    match policy.next(origin, Advance::Prev, &view) {
        Some(prev) if prev != origin => {
            group.request_focus(prev)?;
            Ok(ReturnFlow::MovedTo(prev))
        }
        _ => Ok(ReturnFlow::Unchanged),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrderPolicy;
    use limelight_intent::{FieldProps, FocusIntent};

    fn props(flags: FieldFlags) -> FieldProps {
        FieldProps { flags, order: None }
    }

    fn login_group() -> FieldGroup<&'static str> {
        let mut group = FieldGroup::new();
        group
            .register("email", props(FieldFlags::ENABLED | FieldFlags::AUTOFOCUS))
            .unwrap();
        group
            .register(
                "password",
                props(FieldFlags::ENABLED | FieldFlags::CHAIN_END),
            )
            .unwrap();
        group
    }

    #[test]
    fn snapshot_carries_flags_and_order() {
        let mut group: FieldGroup<u8> = FieldGroup::new();
        group
            .register(
                0,
                FieldProps {
                    flags: FieldFlags::ENABLED,
                    order: Some(3),
                },
            )
            .unwrap();
        group.register(1, props(FieldFlags::CHAIN_END)).unwrap();

        let entries = chain_view_of(&group);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].order, Some(3));
        assert!(entries[0].enabled);
        assert!(!entries[1].enabled);
        assert!(entries[1].chain_end);
    }

    #[test]
    fn return_advances_to_the_next_field() {
        let mut group = login_group();
        group.report_focused("email").unwrap();

        let flow = handle_return(&mut group, &OrderPolicy::default()).unwrap();
        assert_eq!(flow, ReturnFlow::MovedTo("password"));
        assert_eq!(
            group.intent_of("password"),
            Some(FocusIntent::ShouldBecomeFocused)
        );
        // Email keeps focus until the host confirms the handoff.
        assert_eq!(group.currently_focused(), Some("email"));

        group.report_focused("password").unwrap();
        assert_eq!(group.currently_focused(), Some("password"));
    }

    #[test]
    fn return_at_the_chain_end_requests_resignation() {
        let mut group = login_group();
        group.report_focused("password").unwrap();

        let flow = handle_return(&mut group, &OrderPolicy::default()).unwrap();
        assert_eq!(flow, ReturnFlow::Resigned("password"));
        assert_eq!(
            group.intent_of("password"),
            Some(FocusIntent::ShouldResignFocused)
        );

        group.report_resigned("password").unwrap();
        assert_eq!(group.currently_focused(), None);
    }

    #[test]
    fn return_with_nothing_focused_is_unchanged() {
        let mut group = login_group();
        let flow = handle_return(&mut group, &OrderPolicy::default()).unwrap();
        assert_eq!(flow, ReturnFlow::Unchanged);
        // The autofocus request from registration is untouched.
        assert_eq!(group.pending_focus(), Some("email"));
    }

    #[test]
    fn return_skips_disabled_fields() {
        let mut group: FieldGroup<u8> = FieldGroup::new();
        group.register(0, props(FieldFlags::ENABLED)).unwrap();
        group.register(1, props(FieldFlags::empty())).unwrap();
        group.register(2, props(FieldFlags::ENABLED)).unwrap();
        group.report_focused(0).unwrap();

        let flow = handle_return(&mut group, &OrderPolicy::default()).unwrap();
        assert_eq!(flow, ReturnFlow::MovedTo(2));
    }

    #[test]
    fn exhausted_chain_resigns_like_a_chain_end() {
        // Last field reachable but not flagged CHAIN_END.
        let mut group: FieldGroup<u8> = FieldGroup::new();
        group.register(0, props(FieldFlags::ENABLED)).unwrap();
        group.register(1, props(FieldFlags::ENABLED)).unwrap();
        group.report_focused(1).unwrap();

        let flow = handle_return(&mut group, &OrderPolicy::default()).unwrap();
        assert_eq!(flow, ReturnFlow::Resigned(1));
    }

    #[test]
    fn lone_field_resigns_instead_of_advancing_to_itself() {
        let mut group: FieldGroup<u8> = FieldGroup::new();
        group.register(0, props(FieldFlags::ENABLED)).unwrap();
        group.report_focused(0).unwrap();

        // Even a wrapping policy must not "move" focus to the origin.
        let policy = OrderPolicy {
            wrap: crate::WrapMode::Wrap,
        };
        let flow = handle_return(&mut group, &policy).unwrap();
        assert_eq!(flow, ReturnFlow::Resigned(0));
    }

    #[test]
    fn delete_on_empty_hops_to_the_previous_field() {
        let mut group = login_group();
        group.report_focused("password").unwrap();

        let flow = handle_delete_on_empty(&mut group, &OrderPolicy::default()).unwrap();
        assert_eq!(flow, ReturnFlow::MovedTo("email"));
        assert_eq!(
            group.intent_of("email"),
            Some(FocusIntent::ShouldBecomeFocused)
        );

        group.report_focused("email").unwrap();
        assert_eq!(group.currently_focused(), Some("email"));
        assert_eq!(
            group.intent_of("password"),
            Some(FocusIntent::NotFocused)
        );
    }

    #[test]
    fn delete_on_empty_at_the_front_is_unchanged() {
        let mut group = login_group();
        group.report_focused("email").unwrap();

        let flow = handle_delete_on_empty(&mut group, &OrderPolicy::default()).unwrap();
        assert_eq!(flow, ReturnFlow::Unchanged);
        assert_eq!(group.currently_focused(), Some("email"));
    }

    #[test]
    fn delete_on_empty_with_nothing_focused_is_unchanged() {
        let mut group = login_group();
        let flow = handle_delete_on_empty(&mut group, &OrderPolicy::default()).unwrap();
        assert_eq!(flow, ReturnFlow::Unchanged);
    }
}
