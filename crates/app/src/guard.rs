use dioxus::prelude::*;
use shared_types::UserRole;

use crate::routes::Route;
use crate::session::use_session;

/// Maps a role string to the route it should land on.
///
/// Navigation is defined only for the two recognized roles; an empty or
/// unrecognized role keeps the user on the current route. This is not
/// access control — nothing blocks navigating to either dashboard directly.
pub fn redirect_target(role: &str) -> Option<Route> {
    match UserRole::classify(role) {
        UserRole::Admin => Some(Route::Admin {}),
        UserRole::User => Some(Route::User {}),
        UserRole::Guest | UserRole::Unknown => None,
    }
}

/// Render-nothing component that follows role changes.
///
/// Mounted inside the dashboards. The memo absorbs writes that leave the
/// role unchanged, so the effect navigates once per actual role value.
#[component]
pub fn RoleRedirect() -> Element {
    let session = use_session();
    let role = use_memo(move || session.current.read().role.clone());

    use_effect(move || {
        if let Some(target) = redirect_target(&role()) {
            navigator().push(target);
        }
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Session;

    #[test]
    fn admin_role_targets_admin_route() {
        assert_eq!(redirect_target("admin"), Some(Route::Admin {}));
    }

    #[test]
    fn user_role_targets_user_route() {
        assert_eq!(redirect_target("user"), Some(Route::User {}));
    }

    #[test]
    fn empty_role_stays_put() {
        assert_eq!(redirect_target(""), None);
    }

    #[test]
    fn unrecognized_role_stays_put() {
        assert_eq!(redirect_target("manager"), None);
        // Exact match only.
        assert_eq!(redirect_target("Admin"), None);
        assert_eq!(redirect_target("user "), None);
    }

    #[test]
    fn latest_role_wins_after_partial_update() {
        let mut session = Session::default();
        session.set_user("bob", "user");
        session.update_role("admin");
        assert_eq!(session.username, "bob");
        assert_eq!(redirect_target(&session.role), Some(Route::Admin {}));
    }

    #[test]
    fn failed_login_leaves_guard_inert() {
        // A transport failure performs no mutation, so the guard keeps
        // seeing the empty role.
        let session = Session::default();
        assert_eq!(redirect_target(&session.role), None);
    }
}
