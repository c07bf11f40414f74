//! Guard clauses shared by the partisan-symmetry and compactness metrics.
//!
//! Absence is modelled with `Option`: a `None` district or plan is rejected
//! with a shape error. Vote counts are checked by the partisan metrics, and
//! only for the two parties they compare.

use crate::district::DistrictRecord;
use crate::error::{MetricError, Result};

/// Check that `district` is present.
pub fn is_district<D>(district: Option<&D>) -> Result<&D>
where
    D: DistrictRecord + ?Sized,
{
    district.ok_or_else(|| MetricError::NotADistrict("value is absent".to_owned()))
}

/// Check that `district` is a district with a geometry attached, returning the geometry.
pub fn has_geometry<D>(district: Option<&D>) -> Result<&D::Geometry>
where
    D: DistrictRecord + ?Sized,
{
    let district = is_district(district)?;
    district.geometry()
        .ok_or_else(|| MetricError::MissingGeometry { district: district.label() })
}

/// Check that `plan` is present and that every element is a district.
///
/// Returns the validated districts in iteration order. An empty plan is
/// valid here; aggregate metrics reject it themselves.
pub fn is_district_plan<'a, D, I>(plan: Option<I>) -> Result<Vec<&'a D>>
where
    D: DistrictRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a D>,
{
    let plan = plan.ok_or(MetricError::NotAPlan)?;
    plan.into_iter()
        .map(|district| is_district(Some(district)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::District;
    use crate::error::ErrorKind;

    #[test]
    fn absent_district_is_rejected() {
        let err = is_district(None::<&District>).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn vote_counts_are_left_to_the_metrics() {
        let district = District::new().with_id("3").with_party_votes([("dem", -1.0), ("grn", f64::NAN)]);
        assert!(is_district(Some(&district)).is_ok());
    }

    #[test]
    fn empty_district_is_a_district() {
        let district = District::new();
        assert!(is_district(Some(&district)).is_ok());
    }

    #[test]
    fn missing_geometry() {
        let district = District::new().with_id("9");
        assert_eq!(
            has_geometry(Some(&district)).unwrap_err(),
            MetricError::MissingGeometry { district: "9".into() },
        );
    }

    #[test]
    fn plan_keeps_iteration_order() {
        let plan = vec![District::new().with_id("1"), District::new().with_id("2"), District::new().with_id("3")];
        let labels = is_district_plan(Some(&plan)).unwrap()
            .into_iter()
            .map(|district| district.label())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["1", "2", "3"]);
    }

    #[test]
    fn absent_and_empty_plans() {
        assert_eq!(is_district_plan(None::<&[District]>).unwrap_err(), MetricError::NotAPlan);
        assert!(is_district_plan(Some(&Vec::<District>::new())).unwrap().is_empty());
    }
}
