// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-field login form: request/confirm focus, return chaining, delete hop.
//!
//! This example wires a `FieldGroup` to a simulated host UI layer. The host
//! owns the "real" keyboard focus: it watches for pending requests and
//! confirms them, the way a platform focus system would after its own event
//! loop turn.
//!
//! Run:
//! - `cargo run -p limelight_demos --example login_form`

use limelight_chain::OrderPolicy;
use limelight_chain::driver::{handle_delete_on_empty, handle_return};
use limelight_intent::{FieldFlags, FieldGroup, FieldProps, FocusIntent};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Login {
    Email,
    Password,
}

/// Service pending requests the way a platform focus system would.
///
/// Focus requests are honored only for enabled fields; resign requests are
/// always honored.
fn pump_host(group: &mut FieldGroup<Login>) {
    while let Some(id) = group.pending_resign() {
        group.report_resigned(id).unwrap();
        println!("  host: {id:?} resigned");
    }
    while let Some(id) = group.pending_focus() {
        if group.is_enabled(id) != Some(true) {
            break;
        }
        match group.report_focused(id).unwrap() {
            Some(prev) => println!("  host: {id:?} focused ({prev:?} demoted)"),
            None => println!("  host: {id:?} focused"),
        }
    }
}

fn dump(group: &FieldGroup<Login>) {
    for field in group.fields() {
        let marker = match field.intent {
            FocusIntent::IsFocused => "[*]",
            FocusIntent::ShouldBecomeFocused => "[>]",
            FocusIntent::ShouldResignFocused => "[<]",
            FocusIntent::NotFocused => "[ ]",
        };
        println!(
            "  {marker} {:?} (editing: {})",
            field.id,
            group.is_editing(field.id).unwrap()
        );
    }
}

fn main() {
    let mut group: FieldGroup<Login> = FieldGroup::new();
    group
        .register(
            Login::Email,
            FieldProps {
                flags: FieldFlags::ENABLED | FieldFlags::AUTOFOCUS,
                order: None,
            },
        )
        .unwrap();
    group
        .register(
            Login::Password,
            FieldProps {
                flags: FieldFlags::ENABLED | FieldFlags::CHAIN_END,
                order: None,
            },
        )
        .unwrap();

    let policy = OrderPolicy::default();

    println!("== Screen appears (email autofocuses) ==");
    pump_host(&mut group);
    dump(&group);

    println!("\n== Return in email advances the chain ==");
    let flow = handle_return(&mut group, &policy).unwrap();
    println!("  app: {flow:?}");
    pump_host(&mut group);
    dump(&group);

    println!("\n== Delete in the empty password field hops back ==");
    let flow = handle_delete_on_empty(&mut group, &policy).unwrap();
    println!("  app: {flow:?}");
    pump_host(&mut group);
    dump(&group);

    println!("\n== Return twice: advance, then dismiss at the chain end ==");
    let flow = handle_return(&mut group, &policy).unwrap();
    println!("  app: {flow:?}");
    pump_host(&mut group);
    let flow = handle_return(&mut group, &policy).unwrap();
    println!("  app: {flow:?}");
    pump_host(&mut group);
    dump(&group);
    assert_eq!(group.currently_focused(), None);

    println!("\n== An 'Editing Email?' toggle drives the same requests ==");
    group.set_editing(Login::Email, true).unwrap();
    pump_host(&mut group);
    dump(&group);
    group.set_editing(Login::Email, false).unwrap();
    pump_host(&mut group);
    dump(&group);

    println!("\n== With password disabled, return in email dismisses ==");
    group.set_enabled(Login::Password, false).unwrap();
    group.request_focus(Login::Email).unwrap();
    pump_host(&mut group);
    let flow = handle_return(&mut group, &policy).unwrap();
    println!("  app: {flow:?}");
    pump_host(&mut group);
    dump(&group);
}
