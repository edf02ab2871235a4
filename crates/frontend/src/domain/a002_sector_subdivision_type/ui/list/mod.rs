use crate::shared::api_client::use_api_client;
use crate::shared::components::name_list::NameListPage;
use crate::shared::list_controller::ListController;
use contracts::domain::a002_sector_subdivision_type::aggregate::SectorSubdivisionType;
use contracts::domain::common::Resource;
use leptos::prelude::*;

#[component]
pub fn SectorSubdivisionTypeList() -> impl IntoView {
    let controller = ListController::<SectorSubdivisionType>::remote(
        use_api_client(),
        Resource::SectorSubdivisionTypes,
    );

    view! {
        <NameListPage
            controller=controller
            title="Sector Subdivision Types"
            label="Sector Subdivision Type"
            page_id="a002_sector_subdivision_type--list"
        />
    }
}
