pub mod common;

pub mod a001_division;
pub mod a002_sector_subdivision_type;
pub mod a003_subcity_subdivision_type;
pub mod a004_subcity;
pub mod a005_woreda;
pub mod a006_organizational_unit;
pub mod a007_employee_role;
pub mod a008_employee;
