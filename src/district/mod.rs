mod district;
mod id;
mod validate;
mod votes;

pub use district::{District, DistrictRecord};
pub use id::DistrictId;
pub use validate::{has_geometry, is_district, is_district_plan};
pub use votes::PartyVotes;
