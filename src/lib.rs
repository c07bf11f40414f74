#![doc = "OpenMander plan metrics: partisan symmetry and compactness"]
mod district;
mod error;
mod geom;
mod metrics;
mod scorecard;

#[doc(inline)]
pub use district::{District, DistrictId, DistrictRecord, PartyVotes};

#[doc(inline)]
pub use district::{has_geometry, is_district, is_district_plan};

#[doc(inline)]
pub use error::{ErrorKind, MetricError, Result};

#[doc(inline)]
pub use geom::PlanarGeometry;

#[doc(inline)]
pub use metrics::{competitiveness, efficiency_gap, mean_median_diff, partisan_index, wasted_votes, WastedVotes};

#[doc(inline)]
pub use metrics::{convex_hull_ratio, polsby_popper, schwartzberg};

#[doc(inline)]
pub use scorecard::{DistrictScore, Metric, MetricValue, Report, ReportEntry, Scorecard};
