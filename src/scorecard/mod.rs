mod metric;
mod scorecard;

pub use metric::{DistrictScore, Metric, MetricValue};
pub use scorecard::{Report, ReportEntry, Scorecard};
