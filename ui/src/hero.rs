//! The landing hero: staggered entrance reveals, scroll parallax on the
//! title block, up to three promotional theme cards, anchor buttons, and the
//! polaroid-framed group photo.

use dioxus::prelude::*;

use crate::content::{self, Locale, Theme};
use crate::core::scroll::{self, use_scroll_sample};
use crate::reveal::{use_fade_in, RevealConfig};
use crate::t;

/// Accent gradient per card slot, cycling like the source palette.
const CARD_ACCENTS: [&str; 3] = [
    "hero-card__icon--blue",
    "hero-card__icon--purple",
    "hero-card__icon--green",
];

#[component]
pub fn Hero() -> Element {
    crate::i18n::init();

    // Re-render when the surrounding app switches languages.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| "en-US".to_string());
    let locale = Locale::from_tag(&lang_current);

    let scroll_sample = use_scroll_sample();

    // One theme load per mount; failure leaves the card strip as it was.
    let themes = use_signal(Vec::<Theme>::new);
    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut themes_signal = themes;
        async move {
            let outcome = content::load_themes().await;
            themes_signal.with_mut(|displayed| content::apply_load(displayed, outcome));
        }
    });

    // Stagger mirrors the original page: title first, buttons last.
    let title_reveal = use_fade_in(RevealConfig {
        delay_ms: 0,
        duration_ms: 600,
        translate_y_px: 25.0,
        scale: 0.95,
    });
    let subtitle_reveal = use_fade_in(RevealConfig {
        delay_ms: 150,
        translate_y_px: 20.0,
        ..Default::default()
    });
    let photo_reveal = use_fade_in(RevealConfig {
        delay_ms: 200,
        ..Default::default()
    });
    let cards_reveal = use_fade_in(RevealConfig {
        delay_ms: 300,
        translate_y_px: 25.0,
        scale: 0.97,
        ..Default::default()
    });
    let buttons_reveal = use_fade_in(RevealConfig {
        delay_ms: 450,
        ..Default::default()
    });

    let sample = scroll_sample();
    let parallax_style = format!(
        "transform: translateY({}px); opacity: {};",
        sample.parallax_offset(),
        sample.fade()
    );

    let displayed = themes();
    let cards = displayed.iter().enumerate().map(|(index, theme)| {
        let accent = CARD_ACCENTS[index % CARD_ACCENTS.len()];
        let name = theme.localized_name(locale);
        let icon = content::resolve_image_path(&format!(
            "/generated_contents/theme/{}",
            theme.thumbnail
        ));

        rsx! {
            div { key: "{theme.id}", class: "hero-card glass-card",
                div { class: "hero-card__icon {accent}",
                    img { src: "{icon}", alt: "{name}" }
                }
                span { class: "hero-card__name", "{name}" }
            }
        }
    });

    rsx! {
        section { class: "hero",
            div { class: "hero__inner",
                div { class: "hero__title-block", style: "{parallax_style}",
                    h1 {
                        class: "hero__title",
                        style: title_reveal.style(),
                        span { class: "hero__title-part", {t!("hero-title-part1")} }
                        span { class: "hero__title-part hero__title-part--accent",
                            {t!("hero-title-part2")}
                        }
                    }
                    p {
                        class: "hero__subtitle",
                        style: subtitle_reveal.style(),
                        {t!("hero-subtitle")}
                    }
                }

                div { class: "hero__photo", style: photo_reveal.style(),
                    div { class: "polaroid",
                        div { class: "polaroid__frame",
                            img {
                                class: "polaroid__image",
                                src: content::resolve_image_path("/img/lab-group2023.png"),
                                alt: t!("hero-photo-alt"),
                            }
                            div { class: "polaroid__vignette" }
                            div { class: "polaroid__grain" }
                        }
                        p { class: "polaroid__caption", {t!("hero-photo-caption")} }
                    }
                }

                div { class: "hero__cards", style: cards_reveal.style(), {cards} }

                div { class: "hero__actions", style: buttons_reveal.style(),
                    button {
                        r#type: "button",
                        class: "hero__action hero__action--primary",
                        onclick: move |_| scroll::scroll_to_anchor("research"),
                        {t!("hero-explore")}
                    }
                    button {
                        r#type: "button",
                        class: "hero__action hero__action--outline",
                        onclick: move |_| scroll::scroll_to_anchor("team"),
                        {t!("hero-team")}
                    }
                }
            }

            div { class: "hero__scroll-hint", aria_hidden: "true" }
        }
    }
}
