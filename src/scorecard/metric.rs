use std::fmt;

use serde::{Deserialize, Serialize};

use crate::district::{DistrictId, DistrictRecord};
use crate::error::Result;
use crate::metrics;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub(crate) enum MetricKind {
    // Partisan-symmetry metrics:
    EfficiencyGap { party_a: String, party_b: String },
    MeanMedianDiff { party_to_analyze: String, competing_party: String },
    Competitiveness { party_a: String, party_b: String, range: f64 },

    // Compactness metrics:
    PolsbyPopper,
    Schwartzberg,
    ConvexHullRatio,
}

/// A single configured metric, as selected in a [`Scorecard`](crate::Scorecard).
///
/// Serializes as an internally tagged object, e.g.
/// `{"metric": "competitiveness", "party_a": "dem", "party_b": "rep", "range": 0.05}`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metric {
    kind: MetricKind,
}

impl Metric {
    /// Efficiency gap between two parties (positive favours `party_a`).
    pub fn efficiency_gap(party_a: impl Into<String>, party_b: impl Into<String>) -> Self {
        Self { kind: MetricKind::EfficiencyGap { party_a: party_a.into(), party_b: party_b.into() } }
    }

    /// Median minus mean of the analyzed party's district vote shares.
    pub fn mean_median_diff(party_to_analyze: impl Into<String>, competing_party: impl Into<String>) -> Self {
        Self {
            kind: MetricKind::MeanMedianDiff {
                party_to_analyze: party_to_analyze.into(),
                competing_party: competing_party.into(),
            },
        }
    }

    /// Number of districts with a two-party share within `range` of an even split.
    pub fn competitiveness(party_a: impl Into<String>, party_b: impl Into<String>, range: f64) -> Self {
        Self { kind: MetricKind::Competitiveness { party_a: party_a.into(), party_b: party_b.into(), range } }
    }

    /// Polsby–Popper compactness of each district.
    pub fn polsby_popper() -> Self {
        Self { kind: MetricKind::PolsbyPopper }
    }

    /// Schwartzberg compactness of each district.
    pub fn schwartzberg() -> Self {
        Self { kind: MetricKind::Schwartzberg }
    }

    /// Convex-hull ratio of each district.
    pub fn convex_hull_ratio() -> Self {
        Self { kind: MetricKind::ConvexHullRatio }
    }

    /// Get a short name for this metric (for display purposes).
    pub fn short_name(&self) -> &str {
        match &self.kind {
            MetricKind::EfficiencyGap { .. } => "EfficiencyGap",
            MetricKind::MeanMedianDiff { .. } => "MeanMedianDiff",
            MetricKind::Competitiveness { .. } => "Competitiveness",
            MetricKind::PolsbyPopper => "PolsbyPopper",
            MetricKind::Schwartzberg => "Schwartzberg",
            MetricKind::ConvexHullRatio => "ConvexHullRatio",
        }
    }

    /// The two party keys compared by a partisan metric, if any.
    pub(crate) fn parties(&self) -> Option<(&str, &str)> {
        match &self.kind {
            MetricKind::EfficiencyGap { party_a, party_b }
            | MetricKind::Competitiveness { party_a, party_b, .. } => Some((party_a, party_b)),
            MetricKind::MeanMedianDiff { party_to_analyze, competing_party } =>
                Some((party_to_analyze, competing_party)),
            MetricKind::PolsbyPopper | MetricKind::Schwartzberg | MetricKind::ConvexHullRatio => None,
        }
    }

    /// The competitiveness band half-width, if this is a competitiveness metric.
    pub(crate) fn range(&self) -> Option<f64> {
        match &self.kind {
            MetricKind::Competitiveness { range, .. } => Some(*range),
            _ => None,
        }
    }

    /// Evaluate this metric for a plan.
    ///
    /// Partisan metrics yield one value for the whole plan; compactness
    /// metrics yield one score per district, in plan order.
    pub fn compute<D: DistrictRecord>(&self, plan: &[D]) -> Result<MetricValue> {
        let value = match &self.kind {
            MetricKind::EfficiencyGap { party_a, party_b } =>
                MetricValue::Scalar(metrics::efficiency_gap(plan, party_a, party_b)?),
            MetricKind::MeanMedianDiff { party_to_analyze, competing_party } =>
                MetricValue::Scalar(metrics::mean_median_diff(plan, party_to_analyze, competing_party)?),
            MetricKind::Competitiveness { party_a, party_b, range } =>
                MetricValue::Count(metrics::competitiveness(plan, party_a, party_b, *range)?),
            MetricKind::PolsbyPopper => per_district(plan, metrics::polsby_popper)?,
            MetricKind::Schwartzberg => per_district(plan, metrics::schwartzberg)?,
            MetricKind::ConvexHullRatio => per_district(plan, metrics::convex_hull_ratio)?,
        };

        Ok(value)
    }
}

/// Apply a single-district metric across a plan.
fn per_district<D: DistrictRecord>(plan: &[D], metric: fn(&D) -> Result<f64>) -> Result<MetricValue> {
    plan.iter()
        .map(|district| metric(district).map(|score| DistrictScore { id: district.id().cloned(), score }))
        .collect::<Result<Vec<_>>>()
        .map(MetricValue::PerDistrict)
}

/// Score of a single district under a per-district metric.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DistrictScore {
    pub id: Option<DistrictId>,
    pub score: f64,
}

/// Result of evaluating a [`Metric`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// One value for the whole plan.
    Scalar(f64),
    /// A count of districts.
    Count(usize),
    /// One score per district, in plan order.
    PerDistrict(Vec<DistrictScore>),
}

impl MetricValue {
    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        if let MetricValue::Scalar(value) = self { Some(*value) } else { None }
    }

    #[inline]
    pub fn as_count(&self) -> Option<usize> {
        if let MetricValue::Count(count) = self { Some(*count) } else { None }
    }

    #[inline]
    pub fn as_per_district(&self) -> Option<&[DistrictScore]> {
        if let MetricValue::PerDistrict(scores) = self { Some(scores) } else { None }
    }

    /// Collapse to a single number. Per-district scores are averaged
    /// (`None` for an empty plan).
    pub fn summary(&self) -> Option<f64> {
        match self {
            MetricValue::Scalar(value) => Some(*value),
            MetricValue::Count(count) => Some(*count as f64),
            MetricValue::PerDistrict(scores) if scores.is_empty() => None,
            MetricValue::PerDistrict(scores) =>
                Some(scores.iter().map(|s| s.score).sum::<f64>() / scores.len() as f64),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            MetricKind::EfficiencyGap { party_a, party_b } =>
                write!(f, "EfficiencyGap(party_a='{}', party_b='{}')", party_a, party_b),
            MetricKind::MeanMedianDiff { party_to_analyze, competing_party } =>
                write!(f, "MeanMedianDiff(party_to_analyze='{}', competing_party='{}')",
                    party_to_analyze, competing_party),
            MetricKind::Competitiveness { party_a, party_b, range } =>
                write!(f, "Competitiveness(party_a='{}', party_b='{}', range={})", party_a, party_b, range),
            MetricKind::PolsbyPopper => write!(f, "PolsbyPopper"),
            MetricKind::Schwartzberg => write!(f, "Schwartzberg"),
            MetricKind::ConvexHullRatio => write!(f, "ConvexHullRatio"),
        }
    }
}

/// Report label: the metric kind with its parameters.
impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Metric({})", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use geo::polygon;

    use super::*;
    use crate::district::District;

    #[test]
    fn json_shape() {
        let metric = Metric::competitiveness("dem", "rep", 0.05);
        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "metric": "competitiveness", "party_a": "dem", "party_b": "rep", "range": 0.05 })
        );

        let parsed: Metric = serde_json::from_str(r#"{"metric": "polsby_popper"}"#).unwrap();
        assert_eq!(parsed, Metric::polsby_popper());
    }

    #[test]
    fn display_includes_parameters() {
        assert_eq!(
            Metric::efficiency_gap("dem", "rep").to_string(),
            "EfficiencyGap(party_a='dem', party_b='rep')"
        );
        assert_eq!(format!("{:?}", Metric::schwartzberg()), "Metric(Schwartzberg)");
        assert_eq!(Metric::mean_median_diff("a", "b").short_name(), "MeanMedianDiff");
    }

    #[test]
    fn compactness_is_per_district() {
        let plan = vec![
            District::new().with_id("A").with_geometry(
                polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)]
            ),
            District::new().with_id("B").with_geometry(
                polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 1.0), (x: 1.0, y: 1.0), (x: 1.0, y: 2.0), (x: 0.0, y: 2.0)]
            ),
        ];

        let value = Metric::convex_hull_ratio().compute(&plan).unwrap();
        let scores = value.as_per_district().unwrap();
        assert_eq!(scores[0], DistrictScore { id: Some("A".into()), score: 1.0 });
        assert_eq!(scores[1].score, 3.0 / 3.5);
        assert_eq!(value.summary(), Some((1.0 + 3.0 / 3.5) / 2.0));
    }

    #[test]
    fn summary_of_empty_per_district() {
        assert_eq!(MetricValue::PerDistrict(vec![]).summary(), None);
        assert_eq!(MetricValue::Count(3).summary(), Some(3.0));
    }
}
