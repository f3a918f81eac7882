//! Zone Boundaries
//!
//! A geological zone is bounded by one of three shapes. Polygon membership
//! uses the ray casting (crossing number) test over vertices given as
//! (lat, lng) pairs; longitude is the x axis and latitude the y axis.

use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, GeoBounds};

/// Geometric boundary of a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Boundary {
    /// Closed ring of (lat, lng) vertices; the closing edge is implicit
    Polygon { vertices: Vec<(f64, f64)> },

    /// Centre plus radius in kilometres (haversine)
    Circle { center: Coordinate, radius_km: f64 },

    /// Axis-aligned lat/lng rectangle
    Rectangle { bounds: GeoBounds },
}

impl Boundary {
    pub fn polygon(vertices: &[(f64, f64)]) -> Self {
        Boundary::Polygon { vertices: vertices.to_vec() }
    }

    pub fn circle(lat: f64, lng: f64, radius_km: f64) -> Self {
        Boundary::Circle { center: Coordinate::new(lat, lng), radius_km }
    }

    pub fn rectangle(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Boundary::Rectangle { bounds: GeoBounds::new(min_lat, max_lat, min_lng, max_lng) }
    }

    /// Test whether the coordinate lies inside this boundary
    pub fn contains(&self, coord: &Coordinate) -> bool {
        match self {
            Boundary::Polygon { vertices } => point_in_polygon(coord.lat, coord.lng, vertices),
            Boundary::Circle { center, radius_km } => center.distance_km(coord) <= *radius_km,
            Boundary::Rectangle { bounds } => bounds.contains(coord),
        }
    }

    /// Shape name for display
    pub fn kind(&self) -> &'static str {
        match self {
            Boundary::Polygon { .. } => "polygon",
            Boundary::Circle { .. } => "circle",
            Boundary::Rectangle { .. } => "rectangle",
        }
    }

    /// Reject degenerate shapes (fewer than 3 vertices, non-positive radius,
    /// inverted rectangle)
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Boundary::Polygon { vertices } if vertices.len() < 3 => {
                Err(format!("polygon needs at least 3 vertices, got {}", vertices.len()))
            }
            Boundary::Circle { radius_km, .. } if !(*radius_km > 0.0) => {
                Err(format!("circle radius must be positive, got {}", radius_km))
            }
            Boundary::Rectangle { bounds } if !bounds.is_well_formed() => {
                Err("rectangle bounds are inverted".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Ray casting algorithm for point-in-polygon test.
/// Returns true if (lat, lng) is inside the ring of (lat, lng) vertices.
pub fn point_in_polygon(lat: f64, lng: f64, vertices: &[(f64, f64)]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let (x, y) = (lng, lat);
    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (yi, xi) = vertices[i];
        let (yj, xj) = vertices[j];

        // Check if ray from point crosses edge
        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<(f64, f64)> {
        vec![(10.0, 70.0), (10.0, 80.0), (20.0, 80.0), (20.0, 70.0)]
    }

    #[test]
    fn test_point_in_square() {
        assert!(point_in_polygon(15.0, 75.0, &square()));
        assert!(!point_in_polygon(25.0, 75.0, &square()));
        assert!(!point_in_polygon(15.0, 85.0, &square()));
    }

    #[test]
    fn test_concave_polygon() {
        // U-shape opening north; the notch is outside
        let u = vec![
            (10.0, 70.0), (10.0, 80.0), (20.0, 80.0), (20.0, 77.0),
            (13.0, 77.0), (13.0, 73.0), (20.0, 73.0), (20.0, 70.0),
        ];
        assert!(point_in_polygon(11.0, 75.0, &u));
        assert!(!point_in_polygon(16.0, 75.0, &u));
        assert!(point_in_polygon(16.0, 71.5, &u));
    }

    #[test]
    fn test_degenerate_polygon() {
        assert!(!point_in_polygon(0.0, 0.0, &[(0.0, 0.0), (1.0, 1.0)]));
        assert!(Boundary::polygon(&[(0.0, 0.0), (1.0, 1.0)]).validate().is_err());
    }

    #[test]
    fn test_rotation_invariance() {
        let ring = vec![
            (10.0, 70.0), (11.0, 76.0), (10.0, 80.0), (20.0, 80.0),
            (17.0, 75.0), (20.0, 70.0),
        ];
        let probes = [(15.0, 75.0), (12.0, 71.0), (18.5, 75.0), (10.2, 76.0), (25.0, 75.0)];
        for (lat, lng) in probes {
            let expected = point_in_polygon(lat, lng, &ring);
            for k in 1..ring.len() {
                let mut rotated = ring.clone();
                rotated.rotate_left(k);
                assert_eq!(point_in_polygon(lat, lng, &rotated), expected);
            }
        }
    }

    #[test]
    fn test_circle_and_rectangle() {
        let c = Boundary::circle(13.05, 80.25, 25.0);
        assert!(c.contains(&Coordinate::new(13.09, 80.27)));
        assert!(!c.contains(&Coordinate::new(13.60, 80.27)));

        let r = Boundary::rectangle(22.0, 24.5, 74.5, 78.5);
        assert!(r.contains(&Coordinate::new(23.0, 76.0)));
        assert!(!r.contains(&Coordinate::new(21.9, 76.0)));
        assert!(!r.contains(&Coordinate::new(23.0, 78.6)));
    }
}
