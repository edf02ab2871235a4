use crate::shared::api_client::use_api_client;
use crate::shared::components::name_list::NameListPage;
use crate::shared::list_controller::ListController;
use contracts::domain::a004_subcity::aggregate::Subcity;
use contracts::domain::common::Resource;
use leptos::prelude::*;

#[component]
pub fn SubcityList() -> impl IntoView {
    let controller = ListController::<Subcity>::remote(use_api_client(), Resource::Subcities);

    view! {
        <NameListPage
            controller=controller
            title="Subcities"
            label="Subcity"
            page_id="a004_subcity--list"
        />
    }
}
