use dioxus::prelude::*;

use crate::t;
use crate::Hero;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    // Debug render log
    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        main { class: "page page-home",
            Hero {}

            // Anchor targets for the hero's call-to-action buttons.
            section { id: "research", class: "page-section page-section--research",
                h2 { {t!("section-research-title")} }
            }
            section { id: "team", class: "page-section page-section--team",
                h2 { {t!("section-team-title")} }
            }
        }
    }
}
