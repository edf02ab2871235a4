//! Sidebar with the dashboard entry and collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::sections::{section_icon, section_label, ANALYSIS, DASHBOARD, DATA_ENTRY};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    /// Section key; `None` for entries that are not available yet
    key: Option<&'static str>,
    label: &'static str,
    icon: &'static str,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "data_entry",
            label: "Data Entry",
            icon: "layers",
            items: DATA_ENTRY
                .iter()
                .map(|&key| MenuItem {
                    key: Some(key),
                    label: section_label(key),
                    icon: section_icon(key),
                })
                .collect(),
        },
        MenuGroup {
            id: "analysis",
            label: "Analysis",
            icon: "bar-chart",
            items: ANALYSIS
                .iter()
                .map(|&label| MenuItem {
                    key: None,
                    label,
                    icon: "bar-chart",
                })
                .collect(),
        },
    ]
}

#[component]
fn SidebarItem(item: MenuItem) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    match item.key {
        Some(key) => view! {
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.is_active(key)
                on:click=move |_| ctx.open_section(key)
            >
                <div class="app-sidebar__item-content">
                    {icon(item.icon)}
                    <span>{item.label}</span>
                </div>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="app-sidebar__item app-sidebar__item--disabled" title="Coming soon">
                <div class="app-sidebar__item-content">
                    {icon(item.icon)}
                    <span>{item.label}</span>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let expanded_groups = RwSignal::new(vec!["data_entry"]);
    let dashboard_item = MenuItem {
        key: Some(DASHBOARD),
        label: section_label(DASHBOARD),
        icon: section_icon(DASHBOARD),
    };

    view! {
        <div class="app-sidebar__content">
            <SidebarItem item=dashboard_item />

            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                expanded_groups.update(|ids| {
                                    if let Some(pos) = ids.iter().position(|x| *x == group_id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|ids| ids.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {group.items.clone().into_iter().map(|item| view! { <SidebarItem item=item /> }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
