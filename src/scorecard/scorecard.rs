//! Batch evaluation: a configured list of metrics run against one plan.
//!
//! A scorecard is plain configuration. It can be built in code or loaded
//! from JSON, e.g.
//!
//! ```json
//! {"metrics": [
//!     {"metric": "efficiency_gap", "party_a": "dem", "party_b": "rep"},
//!     {"metric": "competitiveness", "party_a": "dem", "party_b": "rep", "range": 0.05},
//!     {"metric": "polsby_popper"}
//! ]}
//! ```

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use crate::district::DistrictRecord;
use crate::error::Result;
use crate::scorecard::{Metric, MetricValue};

/// An ordered list of metrics to evaluate together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    metrics: Vec<Metric>,
}

impl Scorecard {
    /// Construct a scorecard from a list of metrics.
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self { metrics }
    }

    /// Number of metrics in this scorecard.
    #[inline] pub fn num_metrics(&self) -> usize { self.metrics.len() }

    /// Accessor for the configured metrics.
    #[inline] pub fn metrics(&self) -> &[Metric] { &self.metrics }

    /// Parse and validate a scorecard from JSON.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let scorecard: Self = serde_json::from_str(json).context("Failed to parse scorecard JSON")?;
        scorecard.validate()?;
        Ok(scorecard)
    }

    /// Serialize this scorecard to pretty-printed JSON.
    pub fn to_json_string(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scorecard to JSON")
    }

    /// Check the configuration for mistakes that would make every evaluation meaningless.
    ///
    /// A competitiveness range outside `[0, 0.5]` is accepted; the metric
    /// itself warns about it.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.metrics.is_empty(), "[Scorecard.validate] no metrics configured");

        for metric in &self.metrics {
            if let Some((a, b)) = metric.parties() {
                ensure!(!a.is_empty() && !b.is_empty(), "[Scorecard.validate] {metric} has an empty party key");
                ensure!(a != b, "[Scorecard.validate] {metric} compares party '{a}' with itself");
            }
            if let Some(range) = metric.range() {
                ensure!(range.is_finite(), "[Scorecard.validate] {metric} has a non-finite range");
            }
        }

        Ok(())
    }

    /// Evaluate every metric against `plan`, in order.
    /// Stops at the first metric that fails.
    pub fn evaluate<D: DistrictRecord>(&self, plan: &[D]) -> Result<Report> {
        let entries = self.metrics.iter()
            .map(|metric| {
                let value = metric.compute(plan)?;
                log::debug!("scorecard: {metric} = {value:?}");
                Ok(ReportEntry { name: metric.to_string(), value })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Report { entries })
    }
}

/// One evaluated metric.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub value: MetricValue,
}

/// Scorecard results, in scorecard order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    #[inline] pub fn entries(&self) -> &[ReportEntry] { &self.entries }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Look up a result by metric label, e.g. `"PolsbyPopper"` or
    /// `"EfficiencyGap(party_a='dem', party_b='rep')"`.
    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.entries.iter().find(|entry| entry.name == name).map(|entry| &entry.value)
    }

    /// Serialize this report to pretty-printed JSON.
    pub fn to_json_string(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")
    }
}
