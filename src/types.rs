//! Geometric primitives shared by every pattern variant.
//!
//! Coordinates are f64 surface pixels; sub-pixel positions are allowed.
//! The origin is the surface's top-left corner with y growing downward,
//! matching the drawing surfaces the geometry is handed to.

use glam::DVec2;

/// A connected polyline in surface pixel space.
///
/// Holds at least two vertices. Consumers either walk [`points`] or drain
/// [`flat`] when the toolkit wants an `x0, y0, x1, y1, ...` coordinate
/// list.
///
/// [`points`]: Polyline::points
/// [`flat`]: Polyline::flat
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    points: Vec<DVec2>,
}

impl Polyline {
    /// Build a polyline from its vertices, in drawing order.
    pub fn new(points: Vec<DVec2>) -> Polyline {
        debug_assert!(points.len() >= 2, "a polyline needs at least two vertices");
        Polyline { points }
    }

    /// A straight segment between two vertices.
    pub fn segment(a: DVec2, b: DVec2) -> Polyline {
        Polyline { points: vec![a, b] }
    }

    /// The vertices, in drawing order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex.
    pub fn first(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    /// Last vertex.
    pub fn last(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    /// Flattened coordinates, `x0, y0, x1, y1, ...`
    pub fn flat(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().flat_map(|p| [p.x, p.y])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn segment_has_two_points() {
        let line = Polyline::segment(dvec2(0.0, 1.0), dvec2(2.0, 3.0));
        assert_eq!(line.len(), 2);
        assert_eq!(line.first(), Some(dvec2(0.0, 1.0)));
        assert_eq!(line.last(), Some(dvec2(2.0, 3.0)));
    }

    #[test]
    fn flat_interleaves_coordinates() {
        let line = Polyline::new(vec![dvec2(0.0, 1.0), dvec2(2.0, 3.0), dvec2(4.0, 5.0)]);
        let flat: Vec<f64> = line.flat().collect();
        assert_eq!(flat, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn flat_length_is_even_and_at_least_four() {
        let line = Polyline::segment(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        let flat: Vec<f64> = line.flat().collect();
        assert_eq!(flat.len() % 2, 0);
        assert!(flat.len() >= 4);
    }
}
