use std::f64::consts::PI;

use crate::district::{has_geometry, DistrictRecord};
use crate::error::{MetricError, Result};
use crate::geom::PlanarGeometry;

/// Compute the Polsby-Popper compactness score for a district (0 to 1).
/// Formula: 4 * pi * area / (perimeter^2)
/// A circle scores 1; a thin sliver approaches 0.
/// If the perimeter is zero, fails with [`MetricError::DivisionByZero`].
pub fn polsby_popper<D>(district: &D) -> Result<f64>
where
    D: DistrictRecord + ?Sized,
{
    let geometry = has_geometry(Some(district))?;
    let area = geometry.area()?;
    let perimeter = geometry.perimeter()?;
    if perimeter == 0.0 { return Err(MetricError::DivisionByZero("Polsby-Popper score")) }

    let score = 4.0 * PI * area / (perimeter * perimeter);
    log::debug!("Polsby-Popper score of district {}: {score}", district.label());
    Ok(score)
}

/// Compute the Schwartzberg compactness score for a district (0 to 1).
/// Formula: 2 * pi * sqrt(area / pi) / perimeter, i.e. the circumference of
/// the circle with the district's area divided by the district's perimeter.
/// If the perimeter is zero, fails with [`MetricError::DivisionByZero`].
pub fn schwartzberg<D>(district: &D) -> Result<f64>
where
    D: DistrictRecord + ?Sized,
{
    let geometry = has_geometry(Some(district))?;
    let area = geometry.area()?;
    let perimeter = geometry.perimeter()?;
    if perimeter == 0.0 { return Err(MetricError::DivisionByZero("Schwartzberg score")) }

    let circumference = 2.0 * PI * (area / PI).sqrt();
    let score = circumference / perimeter;
    log::debug!("Schwartzberg score of district {}: {score}", district.label());
    Ok(score)
}

/// Compute the convex hull compactness score for a district (0 to 1).
/// Formula: area(district) / area(convex_hull(district))
/// Any convex shape scores 1.
/// If the convex hull area is zero, fails with [`MetricError::DivisionByZero`].
pub fn convex_hull_ratio<D>(district: &D) -> Result<f64>
where
    D: DistrictRecord + ?Sized,
{
    let geometry = has_geometry(Some(district))?;
    let area = geometry.area()?;
    let hull_area = geometry.convex_hull_area()?;
    if hull_area == 0.0 { return Err(MetricError::DivisionByZero("convex hull ratio")) }

    let score = area / hull_area;
    log::debug!("convex hull ratio of district {}: {score}", district.label());
    Ok(score)
}

#[cfg(test)]
mod tests {
    use geo::{line_string, polygon, Geometry, MultiPolygon, Polygon};

    use super::*;
    use crate::district::District;
    use crate::error::ErrorKind;

    fn square(side: f64) -> Polygon<f64> {
        polygon![(x: 0.0, y: 0.0), (x: side, y: 0.0), (x: side, y: side), (x: 0.0, y: side)]
    }

    #[test]
    fn square_scores() {
        let district = District::new().with_geometry(square(3.0));
        assert!((polsby_popper(&district).unwrap() - PI / 4.0).abs() < 1e-12);
        assert!((schwartzberg(&district).unwrap() - PI.sqrt() / 2.0).abs() < 1e-12);
        assert_eq!(convex_hull_ratio(&district).unwrap(), 1.0);
    }

    #[test]
    fn missing_geometry_is_a_shape_error() {
        let district = District::new();
        for result in [polsby_popper(&district), schwartzberg(&district), convex_hull_ratio(&district)] {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::Shape);
        }
    }

    #[test]
    fn non_polygonal_geometry_is_an_attribute_error() {
        let line = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]);
        let district = District::new().with_geometry(line);
        assert_eq!(polsby_popper(&district).unwrap_err().kind(), ErrorKind::Attribute);
        assert_eq!(convex_hull_ratio(&district).unwrap_err().kind(), ErrorKind::Attribute);
    }

    #[test]
    fn empty_geometry_does_not_divide_by_zero() {
        let district = District::new().with_geometry(MultiPolygon::<f64>(vec![]));
        assert_eq!(polsby_popper(&district).unwrap_err(), MetricError::DivisionByZero("Polsby-Popper score"));
        assert_eq!(schwartzberg(&district).unwrap_err(), MetricError::DivisionByZero("Schwartzberg score"));
        assert_eq!(convex_hull_ratio(&district).unwrap_err(), MetricError::DivisionByZero("convex hull ratio"));
    }
}
