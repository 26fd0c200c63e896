pub mod eligibility;
pub mod hotels;
