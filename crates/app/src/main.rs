use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod api;
mod components;
mod fixtures;
mod guard;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One session store for the whole app; views reach it through context.
    use_context_provider(SessionState::new);

    // Demo affordances are switched on only in debug builds.
    use_context_provider(|| FeatureFlags {
        role_toggle: cfg!(debug_assertions),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
