//! Resolution Integration Tests
//!
//! Runs the full pipeline (context, matching, ranking, adjustment) against
//! the compiled-in catalogs and a few hand-built ones.

use aquifer_resolver_rust::catalog::exclusion::ExclusionRules;
use aquifer_resolver_rust::catalog::{default_descriptor, primary_catalog, proximity_descriptor, special_catalog};
use aquifer_resolver_rust::geo::point_in_polygon;
use aquifer_resolver_rust::{
    build_context, resolve_aquifer, AquiferCode, AquiferDescriptor, AquiferResolution, AquiferResolver, Boundary,
    ConfidenceLabel, Coordinate, EngineConfig, GeologicalZone, MatchType, ZoneCatalog, ZoneSetting,
};

/// 1° grid over the India envelope
fn india_grid() -> Vec<Coordinate> {
    (6..=37)
        .flat_map(|lat| (68..=98).map(move |lng| Coordinate::new(lat as f64 + 0.25, lng as f64 + 0.25)))
        .filter(|c| c.lat <= 37.0 && c.lng <= 98.0)
        .collect()
}

fn assert_default(d: &AquiferDescriptor) {
    assert_eq!(d.code, AquiferCode::HardRock);
    assert_eq!(d.code.code(), "HR");
    assert_eq!(d.confidence, ConfidenceLabel::Medium);
}

/// Descriptor the resolution started from, before adjustment
fn unadjusted(coord: &Coordinate, r: &AquiferResolution) -> AquiferDescriptor {
    match &r.zone_name {
        Some(name) => primary_catalog()
            .find(name)
            .or_else(|| special_catalog().find(name))
            .map(|z| z.aquifer.clone())
            .unwrap(),
        None if r.match_type == MatchType::Proximity => {
            proximity_descriptor(coord, r.context.as_ref().unwrap()).clone()
        }
        None => default_descriptor().clone(),
    }
}

#[test]
fn test_out_of_bounds_returns_default() {
    let outside = [
        (0.0, 0.0),
        (5.99, 77.0),
        (37.01, 77.0),
        (20.0, 67.99),
        (20.0, 98.01),
        (-33.9, 151.2),
        (f64::NAN, 77.0),
        (20.0, f64::INFINITY),
    ];
    for (lat, lng) in outside {
        let d = resolve_aquifer(Coordinate::new(lat, lng));
        assert_default(&d);
    }
}

#[test]
fn test_scenario_chennai() {
    let r = AquiferResolver::builtin().resolve(Coordinate::new(13.09, 80.27));
    assert_eq!(r.descriptor.code.code(), "AL");
    assert_eq!(r.descriptor.confidence, ConfidenceLabel::High);
    assert!(r.context.unwrap().coastal_distance_km <= 10.0);
}

#[test]
fn test_scenario_amravati() {
    let d = resolve_aquifer(Coordinate::new(20.93, 77.75));
    assert_eq!(d.code.code(), "BS");
}

#[test]
fn test_scenario_origin() {
    let r = AquiferResolver::builtin().resolve(Coordinate::new(0.0, 0.0));
    assert_eq!(r.match_type, MatchType::Default);
    assert_default(&r.descriptor);
}

#[test]
fn test_scenario_shimla() {
    let r = AquiferResolver::builtin().resolve(Coordinate::new(31.10, 77.17));
    assert!(r.descriptor.code.is_himalayan());
    assert!(r.context.unwrap().elevation_m > 1000.0);
}

#[test]
fn test_adjustments_only_widen() {
    let resolver = AquiferResolver::builtin();
    for coord in india_grid() {
        let r = resolver.resolve(coord);
        let base = unadjusted(&coord, &r);
        let d = &r.descriptor;

        assert_eq!(d.code, base.code);
        assert!(d.water_quality.dominates(&base.water_quality), "EC narrowed at {:?}", coord);
        assert!(d.depth_to_water.dominates(&base.depth_to_water), "DTW narrowed at {:?}", coord);
        assert!(d.yield_range.dominates(&base.yield_range), "yield narrowed at {:?}", coord);
        assert_eq!(d.weathered_zone_depth, base.weathered_zone_depth);
        assert_eq!(d.fracture_zone_depth, base.fracture_zone_depth);
    }
}

#[test]
fn test_confidence_always_in_unit_interval() {
    let resolver = AquiferResolver::builtin();
    for r in resolver.resolve_many(&india_grid()) {
        assert!((0.0..=1.0).contains(&r.confidence));
        assert!(r.descriptor.confidence <= ConfidenceLabel::from_confidence(r.confidence));
    }
}

#[test]
fn test_deterministic() {
    let resolver = AquiferResolver::builtin();
    let grid = india_grid();
    let first: Vec<_> = grid.iter().map(|c| resolver.resolve(*c)).collect();
    let second: Vec<_> = grid.iter().map(|c| resolver.resolve(*c)).collect();
    assert_eq!(first, second);

    let other = AquiferResolver::builtin();
    assert_eq!(other.resolve_many(&grid), first);
}

#[test]
fn test_batch_preserves_order() {
    let coords = [
        Coordinate::new(31.10, 77.17),
        Coordinate::new(0.0, 0.0),
        Coordinate::new(20.93, 77.75),
        Coordinate::new(13.09, 80.27),
    ];
    let codes: Vec<&str> = AquiferResolver::builtin()
        .resolve_many(&coords)
        .iter()
        .map(|r| r.descriptor.code.code())
        .collect();
    assert_eq!(codes, vec!["HM", "HR", "BS", "AL"]);
}

#[test]
fn test_polygon_rotation_invariance() {
    let zone = primary_catalog().find("Deccan Trap Basalt").unwrap();
    let vertices = match &zone.boundary {
        Boundary::Polygon { vertices } => vertices.clone(),
        other => panic!("expected polygon, got {}", other.kind()),
    };

    let probes = [(20.93, 77.75), (18.5, 73.85), (13.0, 80.0), (25.0, 85.0), (21.0, 74.0)];
    for (lat, lng) in probes {
        let expected = point_in_polygon(lat, lng, &vertices);
        for shift in 1..vertices.len() {
            let mut rotated = vertices.clone();
            rotated.rotate_left(shift);
            assert_eq!(point_in_polygon(lat, lng, &rotated), expected, "({}, {}) shift {}", lat, lng, shift);
        }
    }
}

fn test_zone(name: &str, code: AquiferCode) -> GeologicalZone {
    let mut aquifer = default_descriptor().clone();
    aquifer.code = code;
    aquifer.name = name.to_string();
    GeologicalZone {
        name: name.to_string(),
        priority: 1,
        boundary: Boundary::rectangle(21.0, 22.0, 79.0, 80.0),
        aquifer,
        setting: ZoneSetting::Inland,
        features: vec![],
        exclusions: ExclusionRules::none(),
    }
}

#[test]
fn test_tie_break_prefers_alluvium_near_coast() {
    // Hill zone registered first, so it wins without a tie-break
    let primary = ZoneCatalog::new(
        "tie-test",
        vec![
            test_zone("Test Hill Crystallines", AquiferCode::HimalayanCrystalline),
            test_zone("Test Alluvium", AquiferCode::Alluvium),
        ],
    )
    .unwrap();
    let special = ZoneCatalog::new("empty", vec![]).unwrap();
    let resolver = AquiferResolver::with_catalogs(&primary, &special, EngineConfig::default());

    let coord = Coordinate::new(21.5, 79.5);
    let ctx = build_context(&coord).with_coastal_distance(3.0);
    let r = resolver.resolve_in_context(coord, ctx).unwrap();

    assert_eq!(r.descriptor.code, AquiferCode::Alluvium);
    assert_eq!(r.zone_name.as_deref(), Some("Test Alluvium"));

    // Without the forced coastal distance no rule favours alluvium
    let inland = resolver.resolve(coord);
    assert_eq!(inland.descriptor.code, AquiferCode::HimalayanCrystalline);
}

#[test]
fn test_external_catalog_file() {
    let json = serde_json::to_string(primary_catalog()).unwrap();
    let path = std::env::temp_dir().join("aquifer_resolver_catalog_test.json");
    std::fs::write(&path, json).unwrap();

    let loaded = ZoneCatalog::load(&path).unwrap();
    assert_eq!(loaded.version, primary_catalog().version);
    assert_eq!(loaded.len(), primary_catalog().len());

    std::fs::remove_file(&path).ok();
}
