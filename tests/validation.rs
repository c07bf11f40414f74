// Integration tests for the validation helpers and their use as guard
// clauses by every metric.

use geo::{polygon, Polygon};
use openmander_metrics::{
    competitiveness, convex_hull_ratio, efficiency_gap, has_geometry, is_district, is_district_plan,
    mean_median_diff, polsby_popper, schwartzberg, District, DistrictId, DistrictRecord, ErrorKind,
    MetricError, PartyVotes, PlanarGeometry,
};

#[test]
fn absent_district_fails_shape_check() {
    let err = is_district(None::<&District>).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn absent_plan_fails_shape_check() {
    let err = is_district_plan(None::<&Vec<District>>).unwrap_err();
    assert_eq!(err, MetricError::NotAPlan);
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn district_without_geometry_fails_shape_check() {
    let err = has_geometry(Some(&District::new())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn empty_plan_is_valid_but_aggregates_fail() {
    let plan: Vec<District> = vec![];
    assert!(is_district_plan(Some(&plan)).unwrap().is_empty());

    assert_eq!(efficiency_gap(&plan, "dem", "rep").unwrap_err().kind(), ErrorKind::Arithmetic);
    assert_eq!(mean_median_diff(&plan, "dem", "rep").unwrap_err().kind(), ErrorKind::Arithmetic);
    assert_eq!(competitiveness(&plan, "dem", "rep", 0.05).unwrap(), 0);
}

#[test]
fn invalid_vote_counts_stop_every_partisan_metric() {
    let plan = vec![
        District::new().with_id("1").with_party_votes([("dem", 10.0), ("rep", 20.0)]),
        District::new().with_id("2").with_party_votes([("dem", -3.0), ("rep", 20.0)]),
    ];

    for err in [
        efficiency_gap(&plan, "dem", "rep").unwrap_err(),
        mean_median_diff(&plan, "dem", "rep").unwrap_err(),
        competitiveness(&plan, "dem", "rep", 0.1).unwrap_err(),
    ] {
        assert_eq!(err.kind(), ErrorKind::Shape);
    }
}

#[test]
fn compactness_without_geometry_fails_shape_check() {
    let district = District::new().with_id("077");
    let expected = MetricError::MissingGeometry { district: "077".into() };
    assert_eq!(polsby_popper(&district).unwrap_err(), expected);
    assert_eq!(schwartzberg(&district).unwrap_err(), expected);
    assert_eq!(convex_hull_ratio(&district).unwrap_err(), expected);
}

/// A caller-side record type: a precinct aggregate that is not a `District`
/// but carries the fields the metrics need.
struct Precinct {
    id: DistrictId,
    results: PartyVotes,
    shape: Option<Box<dyn PlanarGeometry>>,
}

impl DistrictRecord for Precinct {
    type Geometry = dyn PlanarGeometry;

    fn id(&self) -> Option<&DistrictId> { Some(&self.id) }

    fn party_votes(&self) -> Option<&PartyVotes> { Some(&self.results) }

    fn geometry(&self) -> Option<&Self::Geometry> { self.shape.as_deref() }
}

#[test]
fn any_record_honouring_the_contract_is_accepted() {
    let square: Polygon<f64> = polygon![(x: 0.0, y: 0.0), (x: 5.0, y: 0.0), (x: 5.0, y: 5.0), (x: 0.0, y: 5.0)];
    let plan = vec![
        Precinct { id: "a".into(), results: PartyVotes::from([("dem", 60.0), ("rep", 40.0)]), shape: Some(Box::new(square)) },
        Precinct { id: "b".into(), results: PartyVotes::from([("dem", 40.0), ("rep", 60.0)]), shape: None },
    ];

    assert_eq!(is_district_plan(Some(&plan)).unwrap().len(), 2);
    assert_eq!(efficiency_gap(&plan, "dem", "rep").unwrap(), 0.0);
    assert!((polsby_popper(&plan[0]).unwrap() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    assert_eq!(polsby_popper(&plan[1]).unwrap_err(), MetricError::MissingGeometry { district: "b".into() });
}
