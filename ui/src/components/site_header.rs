//! Localized site chrome: the brand mark and the language selector.
//!
//! Lives in `ui` (not the platform crate) so the `t!` lookups resolve against
//! this crate's `i18n.toml`. The platform crate wraps it around its router
//! outlet.
//!
//! The language selector triggers a re-render via a local signal; every
//! render pulls fresh localized strings through the shared loader. If the
//! platform provided a global language-code signal, the chosen tag is
//! propagated so localized views elsewhere refresh too.

use dioxus::prelude::*;

use crate::i18n;
use crate::t;

#[component]
pub fn SiteHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain the global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            // Update local select state
            current_lang.set(val.clone());
            // Propagate to the global language code signal
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    rsx! {
        header { class: "site-header",
            // Hidden marker ensures the chrome re-renders on language change.
            div { style: "display:none", "{_lang_marker}" }
            span { class: "site-header__brand", {t!("site-brand")} }
            if show_switcher {
                select {
                    class: "site-header__lang",
                    aria_label: t!("language-selector-label"),
                    value: "{current_lang}",
                    onchange: on_change,
                    for lang in langs() {
                        option { value: "{lang}", "{lang}" }
                    }
                }
            }
        }
    }
}
