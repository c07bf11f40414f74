//! Partisan-symmetry metrics over a districting plan.
//!
//! By convention `party_a` / `party_to_analyze` is the party whose advantage
//! scores positive and `party_b` / `competing_party` the party whose advantage
//! scores negative. Only the two named parties count; third-party votes in
//! the same district are ignored.

use crate::district::{is_district, is_district_plan, DistrictRecord};
use crate::error::{MetricError, Result};
use crate::metrics::stats::{mean, median};

/// Votes for two parties in one district, as `(party_a, party_b)`.
///
/// Each count must be finite and non-negative. Other parties in the mapping
/// are not inspected.
fn two_party_votes<D>(district: &D, party_a: &str, party_b: &str) -> Result<(f64, f64)>
where
    D: DistrictRecord + ?Sized,
{
    let party_votes = district.party_votes()
        .ok_or_else(|| MetricError::MissingPartyVotes { district: district.label() })?;

    let votes_for = |party: &str| -> Result<f64> {
        let votes = party_votes.get(party)
            .ok_or_else(|| MetricError::MissingParty { district: district.label(), party: party.to_owned() })?;
        if !(votes.is_finite() && votes >= 0.0) {
            return Err(MetricError::InvalidVotes { district: district.label(), party: party.to_owned(), votes });
        }
        Ok(votes)
    };

    Ok((votes_for(party_a)?, votes_for(party_b)?))
}

/// Two-party vote share of `party_to_analyze` in a single district, in `[0, 1]`.
/// Exactly `0.5` is a tie.
///
/// Fails with [`MetricError::DivisionByZero`] if neither party received votes.
pub fn partisan_index<D>(district: &D, party_to_analyze: &str, competing_party: &str) -> Result<f64>
where
    D: DistrictRecord + ?Sized,
{
    let district = is_district(Some(district))?;
    let (votes, competing) = two_party_votes(district, party_to_analyze, competing_party)?;

    let total = votes + competing;
    if total == 0.0 { return Err(MetricError::DivisionByZero("partisan index")) }

    let index = votes / total;
    log::trace!("partisan index of district {} for '{party_to_analyze}': {index}", district.label());
    Ok(index)
}

/// Wasted votes for each party in a single district.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WastedVotes {
    pub party_a: f64,
    pub party_b: f64,
}

/// Count wasted votes in a single district.
///
/// Every vote for the loser is wasted, as is every vote for the winner beyond
/// half of the two-party total. A tie wastes nothing.
pub fn wasted_votes<D>(district: &D, party_a: &str, party_b: &str) -> Result<WastedVotes>
where
    D: DistrictRecord + ?Sized,
{
    let district = is_district(Some(district))?;
    let (a, b) = two_party_votes(district, party_a, party_b)?;
    Ok(WastedVotes::split(a, b))
}

impl WastedVotes {
    fn split(a: f64, b: f64) -> Self {
        let threshold = (a + b) / 2.0;
        if a > b {
            WastedVotes { party_a: a - threshold, party_b: b }
        } else if a < b {
            WastedVotes { party_a: a, party_b: b - threshold }
        } else {
            WastedVotes::default()
        }
    }
}

/// Efficiency gap of a plan: `(wasted_b - wasted_a) / total_two_party_votes`.
///
/// Positive values favour `party_a`, negative values favour `party_b`.
/// Fails with [`MetricError::DivisionByZero`] if the plan has no two-party
/// votes at all (including an empty plan).
pub fn efficiency_gap<'a, D, I>(plan: I, party_a: &str, party_b: &str) -> Result<f64>
where
    D: DistrictRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a D>,
{
    let plan = is_district_plan(Some(plan))?;

    let mut party_a_wasted = 0.0;
    let mut party_b_wasted = 0.0;
    let mut total_votes = 0.0;

    for district in plan {
        let (a, b) = two_party_votes(district, party_a, party_b)?;
        let wasted = WastedVotes::split(a, b);
        party_a_wasted += wasted.party_a;
        party_b_wasted += wasted.party_b;
        total_votes += a + b;
    }

    if total_votes == 0.0 { return Err(MetricError::DivisionByZero("efficiency gap")) }

    let gap = (party_b_wasted - party_a_wasted) / total_votes;
    log::debug!(
        "efficiency gap '{party_a}' vs '{party_b}': {gap} (wasted {party_a_wasted} / {party_b_wasted} of {total_votes})"
    );
    Ok(gap)
}

/// Median minus mean of the per-district two-party vote share of `party_to_analyze`.
///
/// Positive values suggest an advantage for the analyzed party, negative
/// values a disadvantage; values near zero indicate a symmetric distribution.
pub fn mean_median_diff<'a, D, I>(plan: I, party_to_analyze: &str, competing_party: &str) -> Result<f64>
where
    D: DistrictRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a D>,
{
    let plan = is_district_plan(Some(plan))?;

    let shares = plan.into_iter()
        .map(|district| partisan_index(district, party_to_analyze, competing_party))
        .collect::<Result<Vec<_>>>()?;

    let (Some(share_median), Some(share_mean)) = (median(&shares), mean(&shares)) else {
        return Err(MetricError::EmptyPlan("mean-median difference"));
    };

    let diff = share_median - share_mean;
    log::debug!(
        "mean-median difference for '{party_to_analyze}': {diff} (median {share_median}, mean {share_mean})"
    );
    Ok(diff)
}

/// Count districts whose partisan index for `party_a` lies strictly inside
/// `(0.5 - range, 0.5 + range)`.
///
/// `range` is meaningful in `[0, 0.5]`. Other values are used as given and
/// produce an interval that is either empty or covers every possible share.
pub fn competitiveness<'a, D, I>(plan: I, party_a: &str, party_b: &str, range: f64) -> Result<usize>
where
    D: DistrictRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a D>,
{
    let plan = is_district_plan(Some(plan))?;

    if !(0.0..=0.5).contains(&range) {
        log::warn!("competitiveness range {range} is outside [0, 0.5]; the interval is degenerate");
    }

    let (low, high) = (0.5 - range, 0.5 + range);
    let mut count = 0;
    for district in plan {
        let index = partisan_index(district, party_a, party_b)?;
        if low < index && index < high { count += 1 }
    }

    log::debug!("competitiveness '{party_a}' vs '{party_b}' within {range}: {count} districts");
    Ok(count)
}
