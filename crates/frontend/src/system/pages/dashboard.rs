use crate::layout::global_context::AppGlobalContext;
use crate::layout::sections::{section_icon, section_label, ANALYSIS, DATA_ENTRY};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;
use thaw::*;

/// Home page: one entry per data-entry section
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <PageFrame page_id="dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page-header">
                <h1 class="page-header__title">"Dashboard"</h1>
            </div>

            <section class="dashboard-group">
                <h2 class="dashboard-group__title">"Data Entry"</h2>
                <Flex gap=FlexGap::Large class="dashboard-group__cards">
                    {DATA_ENTRY.iter().map(|&key| view! {
                        <Button
                            class="dashboard-card"
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| ctx.open_section(key)
                        >
                            {icon(section_icon(key))}
                            <span>{section_label(key)}</span>
                        </Button>
                    }).collect_view()}
                </Flex>
            </section>

            <section class="dashboard-group">
                <h2 class="dashboard-group__title">"Analysis"</h2>
                <Flex gap=FlexGap::Large class="dashboard-group__cards">
                    {ANALYSIS.iter().map(|&label| view! {
                        <Button class="dashboard-card" appearance=ButtonAppearance::Secondary disabled=true>
                            {icon("bar-chart")}
                            <span>{label}</span>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                "Coming soon"
                            </Badge>
                        </Button>
                    }).collect_view()}
                </Flex>
            </section>
        </PageFrame>
    }
}
