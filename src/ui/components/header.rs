use dioxus::prelude::*;

use crate::domain::entities::preferences::{Language, ThemeMode};
use crate::ui::i18n::{text, Label};
use crate::ui::theme::palette;

pub const COMPANY_NAME: &str = "Arjun Learning Company";

#[component]
pub fn Header(
    theme: ThemeMode,
    language: Language,
    on_toggle_theme: EventHandler<()>,
    on_select_language: EventHandler<Language>,
) -> Element {
    let colors = palette(theme);
    let toggle_label = if theme.is_dark() {
        format!("☀️ {}", text(language, Label::Light))
    } else {
        format!("🌙 {}", text(language, Label::Dark))
    };

    rsx! {
        header {
            style: "padding: 1rem; background-color: {colors.header_background}; color: {colors.text}; display: flex; justify-content: space-between; align-items: center;",
            div { style: "font-weight: bold; font-size: 1.2rem;", "{COMPANY_NAME}" }
            div { style: "display: flex; gap: 1rem; align-items: center;",
                label {
                    "{text(language, Label::Language)}: "
                    select {
                        style: "padding: 0.25rem;",
                        onchange: move |event| {
                            if let Some(next) = Language::parse(&event.value()) {
                                on_select_language.call(next);
                            }
                        },
                        for option_language in Language::ALL {
                            option {
                                value: option_language.code(),
                                selected: option_language == language,
                                "{option_language.native_name()}"
                            }
                        }
                    }
                }
                button { style: "padding: 0.5rem 1rem; cursor: pointer;",
                    "{text(language, Label::AddUser)}"
                }
                button {
                    style: "padding: 0.5rem 1rem; cursor: pointer; background-color: {colors.toggle_background}; border: 1px solid #999; color: {colors.text};",
                    onclick: move |_| on_toggle_theme.call(()),
                    "{toggle_label}"
                }
            }
        }
    }
}
