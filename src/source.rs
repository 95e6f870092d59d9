use crate::bounding_box::BoundingBox;
use crate::ray::Ray;
use crate::utilities::uniform;

/// Minimum distance between the origin plane and the box center, so origins
/// stay behind the mesh even when the mesh is flat on the z axis.
const MIN_PLANE_OFFSET: f64 = 0.25;

/// Samples rays from a plane behind the mesh toward random points inside its
/// bounding box. Rays are biased to intersect the mesh volume but hits are
/// not guaranteed.
#[derive(Debug, Clone)]
pub struct PlaneSource {
    pub bounds: BoundingBox,
    pub plane_z: f64,
    pub tmin: f64,
    pub tmax: f64,
}

impl PlaneSource {
    pub fn new(bounds: BoundingBox, tmin: f64, tmax: f64) -> Self {
        let plane_z = bounds.center[2] - (bounds.width[2] * 0.5).max(MIN_PLANE_OFFSET);
        Self {
            bounds,
            plane_z,
            tmin,
            tmax,
        }
    }

    /// Draw one ray. Consumes exactly five uniform draws in a fixed order
    /// (origin x, origin y, target x, target y, target z); the draw order is
    /// part of the dataset's reproducibility contract and must not change.
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Ray {
        let lower = &self.bounds.lower_left;
        let upper = &self.bounds.upper_right;

        let ox = uniform(rng, lower[0], upper[0]);
        let oy = uniform(rng, lower[1], upper[1]);
        let origin = [ox, oy, self.plane_z];

        let tx = uniform(rng, lower[0], upper[0]);
        let ty = uniform(rng, lower[1], upper[1]);
        let tz = uniform(rng, lower[2], upper[2]);

        Ray::towards(origin, [tx, ty, tz], self.tmin, self.tmax)
    }
}
