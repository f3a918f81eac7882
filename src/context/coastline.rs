//! Coastal Distance
//!
//! Distance to the coast is the minimum haversine distance to a curated set
//! of shoreline sample points. Stretches where the shoreline bends sharply
//! (Gulf of Kutch, Gulf of Khambhat, Palk Bay, the Hooghly mouth) are
//! sampled more densely than straight stretches.

use crate::geo::{haversine_km, Coordinate};

/// Shoreline sample points as (lat, lng), grouped by region
static COASTLINE_POINTS: &[(f64, f64)] = &[
    // Gujarat: Kutch and Saurashtra
    (23.70, 68.40), (23.22, 68.72), (22.83, 69.35), (22.74, 69.70), (23.03, 70.22),
    (22.96, 70.45), (22.72, 70.28), (22.55, 70.05), (22.47, 69.07), (22.24, 68.97),
    (21.64, 69.60), (21.12, 70.11), (20.91, 70.37), (20.71, 70.98), (20.87, 71.37),
    (20.97, 71.52), (21.20, 72.10), (21.77, 72.23),
    // Gujarat: Gulf of Khambhat and south Gujarat
    (22.30, 72.62), (21.70, 72.55), (21.10, 72.64), (20.90, 72.80), (20.60, 72.88),
    (20.41, 72.83), (20.20, 72.75),
    // Konkan
    (19.97, 72.71), (19.72, 72.70), (19.35, 72.80), (19.10, 72.82), (18.95, 72.82),
    (18.64, 72.87), (18.33, 72.96), (18.03, 73.01), (17.81, 73.09), (17.59, 73.16),
    (16.99, 73.27), (16.60, 73.34), (16.38, 73.37), (16.06, 73.46), (15.86, 73.63),
    // Goa and Karnataka
    (15.49, 73.82), (15.28, 73.91), (14.81, 74.12), (14.55, 74.31), (14.28, 74.44),
    (13.99, 74.55), (13.63, 74.67), (13.34, 74.70), (12.87, 74.81),
    // Kerala
    (12.50, 74.98), (11.87, 75.35), (11.25, 75.77), (10.77, 75.92), (10.40, 76.07),
    (9.96, 76.24), (9.49, 76.32), (8.88, 76.58), (8.48, 76.92), (8.38, 77.00),
    (8.17, 77.25), (8.08, 77.55),
    // Tamil Nadu: Gulf of Mannar and Palk Bay
    (8.50, 78.12), (8.76, 78.19), (9.08, 78.37), (9.29, 79.31), (9.48, 78.90),
    (9.74, 79.02), (10.05, 79.25), (10.30, 79.86),
    // Tamil Nadu: Coromandel
    (10.77, 79.85), (10.92, 79.84), (11.40, 79.77), (11.75, 79.77), (11.93, 79.83),
    (12.25, 79.98), (12.62, 80.19), (12.90, 80.25), (13.08, 80.29), (13.23, 80.33),
    (13.42, 80.32), (13.72, 80.23),
    // Andhra Pradesh
    (14.25, 80.12), (14.65, 80.15), (15.05, 80.05), (15.48, 80.12), (15.82, 80.35),
    (16.17, 81.13), (16.33, 81.70), (16.95, 82.25), (17.35, 82.55), (17.69, 83.29),
    (17.89, 83.45), (18.34, 84.13),
    // Odisha
    (18.88, 84.60), (19.26, 84.91), (19.70, 85.47), (19.80, 85.83), (19.88, 86.10),
    (20.26, 86.67), (20.80, 86.95), (21.45, 87.02),
    // West Bengal: Hooghly mouth and Sundarbans
    (21.63, 87.55), (21.65, 88.07), (22.03, 88.06), (21.60, 88.60), (21.70, 89.05),
    // Island territories
    (10.57, 72.64), (11.62, 92.73), (13.25, 93.00), (9.15, 92.80),
];

/// Minimum distance (km) from the coordinate to any shoreline sample point
pub fn coastal_distance_km(coord: &Coordinate) -> f64 {
    COASTLINE_POINTS
        .iter()
        .map(|&(lat, lng)| haversine_km(coord.lat, coord.lng, lat, lng))
        .fold(f64::INFINITY, f64::min)
}

/// Number of curated shoreline samples
pub fn coastline_point_count() -> usize {
    COASTLINE_POINTS.len()
}
