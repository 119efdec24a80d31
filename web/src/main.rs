use dioxus::prelude::*;

use ui::components::SiteHeader;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteChrome)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Global language code signal; localized views re-render off this context.
        use_context_provider(|| Signal::new("en-US".to_string()));
    }

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific wrapper around the shared `SiteHeader` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn SiteChrome() -> Element {
    rsx! {
        SiteHeader { }
        Outlet::<Route> {}
    }
}
