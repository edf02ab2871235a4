use super::EntityId;

/// REST collections exposed under `/api/employee-tracker/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Divisions,
    SectorSubdivisionTypes,
    SubcitySubdivisionTypes,
    Subcities,
    Woredas,
    OrganizationalUnits,
    EmployeeRoles,
    Employees,
}

impl Resource {
    pub fn segment(self) -> &'static str {
        match self {
            Resource::Divisions => "divisions",
            Resource::SectorSubdivisionTypes => "sector-subdivision-types",
            Resource::SubcitySubdivisionTypes => "subcity-subdivision-types",
            Resource::Subcities => "subcities",
            Resource::Woredas => "woredas",
            Resource::OrganizationalUnits => "organizational-units",
            Resource::EmployeeRoles => "employee-roles",
            Resource::Employees => "employees",
        }
    }

    /// Collection path relative to the employee-tracker base, e.g. `woredas/`.
    pub fn collection_path(self) -> String {
        format!("{}/", self.segment())
    }

    /// Item path relative to the employee-tracker base, e.g. `woredas/7/`.
    pub fn item_path(self, id: EntityId) -> String {
        format!("{}/{}/", self.segment(), id)
    }

    /// Lower-case singular noun used in user-facing messages.
    pub fn singular(self) -> &'static str {
        match self {
            Resource::Divisions => "division",
            Resource::SectorSubdivisionTypes => "sector subdivision type",
            Resource::SubcitySubdivisionTypes => "subcity subdivision type",
            Resource::Subcities => "subcity",
            Resource::Woredas => "woreda",
            Resource::OrganizationalUnits => "organizational unit",
            Resource::EmployeeRoles => "employee role",
            Resource::Employees => "employee",
        }
    }

    /// Lower-case plural noun used in user-facing messages.
    pub fn plural(self) -> &'static str {
        match self {
            Resource::Divisions => "divisions",
            Resource::SectorSubdivisionTypes => "sector subdivision types",
            Resource::SubcitySubdivisionTypes => "subcity subdivision types",
            Resource::Subcities => "subcities",
            Resource::Woredas => "woredas",
            Resource::OrganizationalUnits => "organizational units",
            Resource::EmployeeRoles => "employee roles",
            Resource::Employees => "employees",
        }
    }
}
