//! Triangle geometry for meaning-space distances.
//!
//! The experiment's stimuli are triangles drawn in a 2D display plane. One
//! vertex carries an orienting spot; the other two are unordered, so
//! triangle comparison takes the cheaper of the two pairings of the
//! unmarked vertices.

use serde::{Deserialize, Serialize};

/// A point in the stimulus display plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A triangle stimulus. `spot` is the orienting vertex; `b` and `c` are
/// unordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub spot: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(spot: Point, b: Point, c: Point) -> Self {
        Self { spot, b, c }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.spot, self.b, self.c]
    }

    /// Sum of the three side lengths.
    pub fn perimeter(&self) -> f64 {
        self.spot.distance(&self.b) + self.b.distance(&self.c) + self.spot.distance(&self.c)
    }

    /// Area via the shoelace formula.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices();
        ((a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0).abs()
    }

    /// Mean of the three vertices.
    pub fn centroid(&self) -> Point {
        Point::new(
            (self.spot.x + self.b.x + self.c.x) / 3.0,
            (self.spot.y + self.b.y + self.c.y) / 3.0,
        )
    }
}

/// How to align two triangles before comparing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Align the centroids.
    Centroid,
    /// Align the orienting spots.
    Spot,
}

/// Distance between two triangles in the display plane.
///
/// Spot-to-spot distance plus the cheaper of the two pairings of the
/// unmarked vertices.
pub fn triangle_distance(a: &Triangle, b: &Triangle) -> f64 {
    let paired = a.b.distance(&b.b) + a.c.distance(&b.c);
    let crossed = a.b.distance(&b.c) + a.c.distance(&b.b);
    a.spot.distance(&b.spot) + paired.min(crossed)
}

/// Absolute difference in area between two triangles.
pub fn area_distance(a: &Triangle, b: &Triangle) -> f64 {
    (a.area() - b.area()).abs()
}

/// Translate `target` so that its centroid (or orienting spot) coincides
/// with that of `reference`.
pub fn translate(reference: &Triangle, target: &Triangle, alignment: Alignment) -> Triangle {
    let (x_shift, y_shift) = match alignment {
        Alignment::Centroid => {
            let r = reference.centroid();
            let t = target.centroid();
            (r.x - t.x, r.y - t.y)
        }
        Alignment::Spot => (
            reference.spot.x - target.spot.x,
            reference.spot.y - target.spot.y,
        ),
    };
    let shift = |p: Point| Point::new(p.x + x_shift, p.y + y_shift);
    Triangle::new(shift(target.spot), shift(target.b), shift(target.c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 4.0),
        )
    }

    #[test]
    fn perimeter_and_area() {
        let t = right_triangle();
        assert!((t.perimeter() - 12.0).abs() < 1e-12);
        assert!((t.area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn centroid() {
        let c = right_triangle().centroid();
        assert!((c.x - 1.0).abs() < 1e-12);
        assert!((c.y - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let t = right_triangle();
        assert_eq!(triangle_distance(&t, &t), 0.0);
        assert_eq!(area_distance(&t, &t), 0.0);
    }

    #[test]
    fn distance_uses_cheaper_vertex_pairing() {
        let a = right_triangle();
        // Same triangle with the unmarked vertices swapped.
        let b = Triangle::new(a.spot, a.c, a.b);
        assert_eq!(triangle_distance(&a, &b), 0.0);
    }

    #[test]
    fn translation_alignment() {
        let a = right_triangle();
        let b = Triangle::new(
            Point::new(10.0, -5.0),
            Point::new(13.0, -5.0),
            Point::new(10.0, -1.0),
        );

        let aligned = translate(&a, &b, Alignment::Spot);
        assert_eq!(aligned, a);

        let aligned = translate(&a, &b, Alignment::Centroid);
        assert!(triangle_distance(&a, &aligned) < 1e-12);
    }

    #[test]
    fn triangle_serde_round_trip() {
        let t = right_triangle();
        let json = serde_json::to_string(&t).unwrap();
        let back: Triangle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn translation_preserves_shape() {
        let a = right_triangle();
        let b = Triangle::new(
            Point::new(2.0, 2.0),
            Point::new(7.0, 3.0),
            Point::new(4.0, 9.0),
        );
        let moved = translate(&a, &b, Alignment::Centroid);
        assert!((moved.perimeter() - b.perimeter()).abs() < 1e-12);
        assert!((moved.area() - b.area()).abs() < 1e-12);
    }
}
