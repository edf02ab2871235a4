//! Maps a section key to the page rendered in the center zone.

use super::*;
use crate::domain::a002_sector_subdivision_type::ui::list::SectorSubdivisionTypeList;
use crate::domain::a004_subcity::ui::list::SubcityList;
use crate::domain::a005_woreda::ui::list::WoredaList;
use crate::domain::a006_organizational_unit::ui::list::OrganizationalUnitList;
use crate::domain::a008_employee::ui::list::EmployeeList;
use crate::system::pages::dashboard::DashboardPage;
use leptos::prelude::*;

pub fn render_section(key: &str) -> AnyView {
    match key {
        SECTOR_SUBDIVISION_TYPES => view! { <SectorSubdivisionTypeList /> }.into_any(),
        SUBCITIES => view! { <SubcityList /> }.into_any(),
        WOREDAS => view! { <WoredaList /> }.into_any(),
        ORGANIZATIONAL_UNITS => view! { <OrganizationalUnitList /> }.into_any(),
        EMPLOYEES => view! { <EmployeeList /> }.into_any(),
        _ => view! { <DashboardPage /> }.into_any(),
    }
}
