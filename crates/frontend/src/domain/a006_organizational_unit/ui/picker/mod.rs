use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::picker_aggregate::{
    AggregatePickerResult, GenericAggregatePicker, TableDisplayable,
};
use contracts::domain::a006_organizational_unit::aggregate::OrganizationalUnit;
use contracts::domain::a006_organizational_unit::details::NOT_AVAILABLE;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;

impl AggregatePickerResult for OrganizationalUnit {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl TableDisplayable for OrganizationalUnit {
    fn headers() -> &'static [&'static str] {
        &["Name", "Division", "Parent"]
    }

    fn cells(&self) -> Vec<String> {
        let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
        vec![
            self.name.clone(),
            or_na(&self.division_name),
            or_na(&self.parent_name),
        ]
    }

    fn matches_search(&self, needle: &str) -> bool {
        [Some(&self.name), self.division_name.as_ref(), self.parent_name.as_ref()]
            .into_iter()
            .flatten()
            .any(|v| v.to_lowercase().contains(needle))
    }
}

/// Controller paging over units already loaded, filtered locally.
pub fn local_unit_controller(
    units: Signal<Vec<OrganizationalUnit>>,
) -> ListController<OrganizationalUnit> {
    ListController::local(
        Resource::OrganizationalUnits,
        units,
        <OrganizationalUnit as TableDisplayable>::matches_search,
    )
}

/// Organizational unit picker in a modal dialog
#[component]
pub fn OrganizationalUnitPicker(
    #[prop(into)]
    title: String,
    controller: ListController<OrganizationalUnit>,
    #[prop(optional_no_strip)]
    initial_selected_id: Option<EntityId>,
    on_confirm: Callback<OrganizationalUnit>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel class="modal--picker">
            <GenericAggregatePicker
                controller=controller
                initial_selected_id=initial_selected_id
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </Modal>
    }
}
