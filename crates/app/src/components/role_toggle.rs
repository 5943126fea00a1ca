use dioxus::prelude::*;
use shared_types::{FeatureFlags, UserRole};
use shared_ui::{Button, ButtonVariant};

use crate::session::{use_role, use_session};

/// Demo control that flips the stored role between `"admin"` and `"user"`.
///
/// Renders only when the `role_toggle` feature flag is on. It mutates the
/// role and nothing else; the redirect to the matching dashboard comes from
/// the role-change effect in the mounted view.
#[component]
pub fn RoleToggle() -> Element {
    let flags: FeatureFlags = use_context();
    let mut session = use_session();
    let role = use_role();

    if !flags.role_toggle {
        return rsx! {};
    }

    let next = if role == UserRole::Admin { "user" } else { "admin" };

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            onclick: move |_| session.update_role(next),
            "Switch to {next} view"
        }
    }
}
