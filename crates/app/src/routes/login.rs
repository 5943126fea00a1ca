use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;
use shared_types::Credentials;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label};

use crate::api;
use crate::guard::redirect_target;
use crate::session::use_session;

/// Login page with an email/password form.
///
/// A successful login stores the returned `{username, role}` and navigates
/// to the dashboard matching the role. A transport failure is logged and
/// swallowed — the session stays empty and the form stays put.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);

        let credentials = Credentials {
            email: email(),
            password: password(),
        };

        match api::login(&credentials).await {
            Ok(resp) => {
                session.set_user(resp.username, resp.role.clone());
                if let Some(target) = redirect_target(&resp.role) {
                    navigator().push(target);
                }
            }
            Err(err) => {
                tracing::error!(%err, "login failed");
            }
        }
        loading.set(false);
    };

    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Welcome back" }
                    CardDescription { "Sign in to reach your dashboard" }
                }

                CardContent {
                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            div { class: "auth-password-wrap",
                                Input {
                                    input_type: "{password_type}",
                                    id: "password",
                                    placeholder: "Enter your password",
                                    value: password(),
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "auth-password-toggle",
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() {
                                        Icon::<LdEyeOff> { icon: LdEyeOff, width: 18, height: 18 }
                                    } else {
                                        Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                                    }
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
