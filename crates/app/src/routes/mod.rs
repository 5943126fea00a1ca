pub mod admin;
pub mod login;
pub mod not_found;
pub mod user;

use dioxus::prelude::*;

use admin::Admin;
use login::Login;
use not_found::NotFound;
use user::User;

/// Application routes.
///
/// The role redirect consumes this table; it does not define it. There is
/// no route protection — both dashboards are reachable directly.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/admin")]
    Admin {},
    #[route("/user")]
    User {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
