use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all 404 page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            span { class: "not-found-code", "404" }
            h1 { "Nothing at "
                code { "{path}" }
            }
            Link { to: Route::Login {}, class: "not-found-link", "Back to sign in" }
        }
    }
}
