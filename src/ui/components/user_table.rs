use dioxus::prelude::*;

use crate::domain::entities::preferences::{Language, ThemeMode};
use crate::ui::columns::{sort_indicator, Column};
use crate::ui::i18n::{text, Label};
use crate::ui::theme::{input_style, pager_button_style, palette};
use crate::usecase::services::list_controller::{ListController, PAGE_SIZES};
use crate::usecase::services::record_store::{FetchStatus, RecordStore};

#[component]
pub fn UserTable(
    store: Signal<RecordStore>,
    mut controller: Signal<ListController>,
    theme: ThemeMode,
    language: Language,
) -> Element {
    let colors = palette(theme);
    let status = store.read().status();
    let error = store.read().error().unwrap_or_default().to_string();
    let view = controller.read().derive(store.read().visible_records());
    let query = controller.read().query().to_string();
    let total_pages = view.total_pages;
    let current_page = view.current_page;
    let field_style = input_style(colors);

    rsx! {
        div { style: "padding: 1rem; flex: 1;",
            h2 { style: "color: {colors.text};", "{text(language, Label::UserList)}" }

            if status == FetchStatus::Loading {
                p { "{text(language, Label::LoadingUsers)}" }
            }
            if status == FetchStatus::Failed {
                p { style: "color: red;", title: "{error}", "{text(language, Label::FailedToLoadUsers)}" }
            }

            if status == FetchStatus::Succeeded {
                div { style: "margin-bottom: 0.5rem;",
                    label { style: "color: {colors.text};",
                        "{text(language, Label::Filter)}: "
                        input {
                            r#type: "text",
                            value: "{query}",
                            placeholder: text(language, Label::SearchByNameOrEmail),
                            style: "{field_style}",
                            oninput: move |event| controller.write().set_query(event.value()),
                        }
                    }
                }
                div { style: "margin-bottom: 0.5rem;",
                    label { style: "color: {colors.text};",
                        "{text(language, Label::PageSize)}: "
                        select {
                            style: "{field_style}",
                            onchange: move |event| {
                                if let Ok(size) = event.value().parse::<usize>() {
                                    controller.write().set_page_size(size);
                                }
                            },
                            for size in PAGE_SIZES {
                                option {
                                    value: "{size}",
                                    selected: size == view.page_size,
                                    "{size}"
                                }
                            }
                        }
                    }
                }

                div { class: "table-container",
                    table {
                        class: "user-table",
                        style: "border-collapse: collapse; width: 100%; border: 1px solid {colors.table_border}; background-color: {colors.background}; color: {colors.text};",
                        thead {
                            tr { style: "background-color: {colors.table_header};",
                                for column in Column::ALL {
                                    th {
                                        style: "padding: 5px; cursor: pointer; border: 1px solid {colors.table_border};",
                                        onclick: move |_| controller.write().request_sort(column.key()),
                                        "{text(language, column.label())}{sort_indicator(controller.read().indicator(column.key()))}"
                                    }
                                }
                            }
                        }
                        tbody {
                            for user in view.rows.iter() {
                                tr { style: "border-color: {colors.table_border};",
                                    for column in Column::ALL {
                                        td { style: "padding: 5px; border: 1px solid {colors.table_border};",
                                            "{column.cell(user)}"
                                        }
                                    }
                                }
                            }
                            if view.is_empty() {
                                tr {
                                    td { colspan: "7", style: "text-align: center; padding: 5px;",
                                        "{text(language, Label::NoUsersFound)}"
                                    }
                                }
                            }
                        }
                    }
                }

                div { style: "margin-top: 0.5rem; text-align: center;",
                    button {
                        style: "{pager_button_style(colors, false, !view.has_prev())}",
                        disabled: !view.has_prev(),
                        onclick: move |_| controller.write().prev_page(total_pages),
                        "{text(language, Label::Prev)}"
                    }
                    for page in view.pages() {
                        button {
                            style: "{pager_button_style(colors, page == current_page, page == current_page)}",
                            disabled: page == current_page,
                            onclick: move |_| controller.write().set_current_page(page),
                            "{page}"
                        }
                    }
                    button {
                        style: "{pager_button_style(colors, false, !view.has_next())}",
                        disabled: !view.has_next(),
                        onclick: move |_| controller.write().next_page(total_pages),
                        "{text(language, Label::Next)}"
                    }
                }
            }
        }
    }
}
