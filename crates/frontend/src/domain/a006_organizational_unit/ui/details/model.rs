use crate::shared::api_client::ApiClient;
use contracts::domain::a001_division::aggregate::Division;
use contracts::domain::a002_sector_subdivision_type::aggregate::SectorSubdivisionType;
use contracts::domain::a003_subcity_subdivision_type::aggregate::SubcitySubdivisionType;
use contracts::domain::a004_subcity::aggregate::Subcity;
use contracts::domain::a005_woreda::aggregate::Woreda;
use contracts::domain::a006_organizational_unit::aggregate::{
    OrganizationalUnit, OrganizationalUnitDraft,
};
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;

pub const REFERENCE_LOAD_FAILED: &str =
    "Failed to load necessary data for the form. Please try again.";

/// Every list the form's dropdowns and rules read from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub divisions: Vec<Division>,
    pub sector_types: Vec<SectorSubdivisionType>,
    pub subcity_types: Vec<SubcitySubdivisionType>,
    pub units: Vec<OrganizationalUnit>,
    pub subcities: Vec<Subcity>,
    pub woredas: Vec<Woreda>,
}

/// Requests all six lists at once and waits for every one to settle.
pub async fn load_reference_data(client: &ApiClient) -> Result<ReferenceData, ApiError> {
    let (divisions, sector_types, subcity_types, units, subcities, woredas) = futures::join!(
        client.fetch_all::<Division>(Resource::Divisions),
        client.fetch_all::<SectorSubdivisionType>(Resource::SectorSubdivisionTypes),
        client.fetch_all::<SubcitySubdivisionType>(Resource::SubcitySubdivisionTypes),
        client.fetch_all::<OrganizationalUnit>(Resource::OrganizationalUnits),
        client.fetch_all::<Subcity>(Resource::Subcities),
        client.fetch_all::<Woreda>(Resource::Woredas),
    );

    Ok(ReferenceData {
        divisions: divisions?,
        sector_types: sector_types?,
        subcity_types: subcity_types?,
        units: units?,
        subcities: subcities?,
        woredas: woredas?,
    })
}

pub async fn save(client: &ApiClient, draft: &OrganizationalUnitDraft) -> Result<(), ApiError> {
    match draft.id {
        Some(id) => client.update(Resource::OrganizationalUnits, id, draft).await,
        None => client.create(Resource::OrganizationalUnits, draft).await,
    }
}
