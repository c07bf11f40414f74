use geo::{Area, ConvexHull, Euclidean, Geometry, Length, MultiPolygon, Polygon};

use crate::error::{MetricError, Result};

/// The three numeric queries compactness metrics need from a shape.
///
/// Coordinates are taken as planar: lengths and areas are Euclidean in the
/// units of the input projection. Nothing is reprojected here, so callers
/// should supply an equal-area projection suited to the district's scale.
pub trait PlanarGeometry {
    /// Unsigned area of the shape (holes excluded).
    fn area(&self) -> Result<f64>;

    /// Total boundary length, including hole boundaries.
    fn perimeter(&self) -> Result<f64>;

    /// Area of the convex hull of the shape.
    fn convex_hull_area(&self) -> Result<f64>;
}

/// Euclidean perimeter of a polygon, exterior plus interiors.
#[inline]
fn polygon_perimeter(polygon: &Polygon<f64>) -> f64 {
    Euclidean.length(polygon.exterior())
        + polygon.interiors().iter().map(|ring| Euclidean.length(ring)).sum::<f64>()
}

impl PlanarGeometry for Polygon<f64> {
    #[inline] fn area(&self) -> Result<f64> { Ok(self.unsigned_area()) }

    #[inline] fn perimeter(&self) -> Result<f64> { Ok(polygon_perimeter(self)) }

    #[inline] fn convex_hull_area(&self) -> Result<f64> { Ok(self.convex_hull().unsigned_area()) }
}

impl PlanarGeometry for MultiPolygon<f64> {
    #[inline] fn area(&self) -> Result<f64> { Ok(self.unsigned_area()) }

    #[inline] fn perimeter(&self) -> Result<f64> { Ok(self.0.iter().map(polygon_perimeter).sum()) }

    fn convex_hull_area(&self) -> Result<f64> {
        if self.0.is_empty() { return Ok(0.0) }
        Ok(self.convex_hull().unsigned_area())
    }
}

/// Name of a geometry variant, for error messages.
fn geometry_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Run `query` against the polygonal content of `geometry`.
/// Non-polygonal variants have no area or perimeter to measure.
fn with_polygonal(
    geometry: &Geometry<f64>,
    name: &'static str,
    query: impl Fn(&dyn PlanarGeometry) -> Result<f64>,
) -> Result<f64> {
    match geometry {
        Geometry::Polygon(polygon) => query(polygon),
        Geometry::MultiPolygon(polygons) => query(polygons),
        Geometry::Rect(rect) => query(&rect.to_polygon()),
        Geometry::Triangle(triangle) => query(&triangle.to_polygon()),
        other => Err(MetricError::UnsupportedGeometry { query: name, geometry: geometry_name(other) }),
    }
}

impl PlanarGeometry for Geometry<f64> {
    fn area(&self) -> Result<f64> { with_polygonal(self, "area", |g| g.area()) }

    fn perimeter(&self) -> Result<f64> { with_polygonal(self, "perimeter", |g| g.perimeter()) }

    fn convex_hull_area(&self) -> Result<f64> {
        with_polygonal(self, "convex hull area", |g| g.convex_hull_area())
    }
}

impl<T: PlanarGeometry + ?Sized> PlanarGeometry for &T {
    #[inline] fn area(&self) -> Result<f64> { (**self).area() }

    #[inline] fn perimeter(&self) -> Result<f64> { (**self).perimeter() }

    #[inline] fn convex_hull_area(&self) -> Result<f64> { (**self).convex_hull_area() }
}

impl<T: PlanarGeometry + ?Sized> PlanarGeometry for Box<T> {
    #[inline] fn area(&self) -> Result<f64> { (**self).area() }

    #[inline] fn perimeter(&self) -> Result<f64> { (**self).perimeter() }

    #[inline] fn convex_hull_area(&self) -> Result<f64> { (**self).convex_hull_area() }
}
