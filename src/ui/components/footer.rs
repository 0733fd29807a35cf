use dioxus::prelude::*;

use crate::domain::entities::preferences::{Language, ThemeMode};
use crate::ui::i18n::{text, Label};
use crate::ui::theme::palette;

pub const CONTACT_EMAIL: &str = "arjunrao777@arjunlearn.co";

const FOOTER_LINKS: [Label; 3] = [Label::AboutUs, Label::ContactUs, Label::CookieSettings];

#[component]
pub fn Footer(theme: ThemeMode, language: Language) -> Element {
    let colors = palette(theme);

    rsx! {
        footer {
            style: "padding: 1rem; background-color: {colors.footer_background}; color: {colors.text}; text-align: center; margin-top: auto;",
            div { "{CONTACT_EMAIL}" }
            div { style: "margin-top: 0.5rem;",
                for (idx, link) in FOOTER_LINKS.into_iter().enumerate() {
                    if idx > 0 { "|" }
                    a { href: "#", style: "margin: 0 0.5rem; color: {colors.text};",
                        "{text(language, link)}"
                    }
                }
            }
        }
    }
}
