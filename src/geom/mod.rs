mod planar;

pub use planar::PlanarGeometry;
