//! Prediction property tests
//!
//! Seeded `StdRng` loops over many coordinates, checking the invariants of
//! distance, site matching, risk scoring and response shape.

use bluvia::config::defaults::{DEFAULT_BASELINE_PPM, EARTH_RADIUS_KM, SITE_MATCH_RADIUS_KM};
use bluvia::geodesy::haversine_km;
use bluvia::prediction::risk::{risk_score, risk_scores};
use bluvia::{
    Coordinate, KnownSite, Metal, MetalMap, PredictionEngine, SiteRegistry, SiteResolver,
    ValueSource,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn engine() -> PredictionEngine<'static> {
    PredictionEngine::arizona(SITE_MATCH_RADIUS_KM)
}

fn random_coordinate(rng: &mut StdRng) -> Coordinate {
    Coordinate::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
}

/// Reference Haversine written independently of the library.
fn reference_haversine(a: Coordinate, b: Coordinate) -> f64 {
    let (phi1, phi2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_phi = phi2 - phi1;
    let d_lambda = (b.lon - a.lon).to_radians();
    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Destination `km` away from `origin` on `bearing_deg`, great-circle.
fn destination(origin: Coordinate, bearing_deg: f64, km: f64) -> Coordinate {
    let delta = km / EARTH_RADIUS_KM;
    let theta = bearing_deg.to_radians();
    let phi1 = origin.lat.to_radians();
    let lambda1 = origin.lon.to_radians();
    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());
    Coordinate::new(phi2.to_degrees(), lambda2.to_degrees())
}

#[test]
fn test_distance_matches_reference() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1_000 {
        let a = random_coordinate(&mut rng);
        let b = random_coordinate(&mut rng);
        let d = haversine_km(a, b);
        assert!((d - reference_haversine(a, b)).abs() < 1e-6, "{a} -> {b}");
        assert!(haversine_km(a, a).abs() < 1e-9);
    }
}

#[test]
fn test_displaced_past_radius_never_matches() {
    for site in SiteRegistry::arizona().sites() {
        let solo = SiteRegistry::new(vec![site.clone()]);
        let resolver = SiteResolver::with_default_radius(&solo);
        for bearing in (0..360).step_by(15) {
            let outside = destination(site.location, f64::from(bearing), SITE_MATCH_RADIUS_KM + 0.01);
            assert!(
                resolver.resolve(outside).is_none(),
                "{} matched at bearing {bearing}",
                site.name
            );
            let inside = destination(site.location, f64::from(bearing), SITE_MATCH_RADIUS_KM - 0.01);
            assert!(resolver.resolve(inside).is_some());
        }
    }
}

#[test]
fn test_tie_break_follows_registry_order() {
    let target = Coordinate::new(34.0, -111.0);
    let make = |name: &str, km: f64| {
        KnownSite::new(
            name,
            destination(target, 90.0, km),
            MetalMap::new(1.0, 1.0, 1.0, 1.0, 1.0),
            MetalMap::default(),
        )
    };

    let registry = SiteRegistry::new(vec![make("First", 3.0), make("Second", 0.5)]);
    let resolver = SiteResolver::with_default_radius(&registry);
    assert_eq!(resolver.resolve(target).unwrap().name, "First");

    let swapped = SiteRegistry::new(vec![make("Second", 0.5), make("First", 3.0)]);
    let resolver = SiteResolver::with_default_radius(&swapped);
    assert_eq!(resolver.resolve(target).unwrap().name, "Second");
}

#[test]
fn test_risk_score_bounds_and_monotonicity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let baseline = rng.gen_range(0.0..50_000.0);
        let a = rng.gen_range(0.0..200_000.0);
        let b = rng.gen_range(0.0..200_000.0);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let s_lo = risk_score(lo, baseline);
        let s_hi = risk_score(hi, baseline);
        assert!((0.0..=100.0).contains(&s_lo));
        assert!((0.0..=100.0).contains(&s_hi));
        assert!(s_hi >= s_lo, "risk({hi}) < risk({lo}) at baseline {baseline}");
    }
}

#[test]
fn test_average_is_rounded_mean_of_scores() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..500 {
        let values = MetalMap::from_fn(|_| rng.gen_range(0.0..80_000.0));
        let baseline = MetalMap::from_fn(|_| rng.gen_range(0.0..50_000.0));
        let scores = risk_scores(&values, &baseline);
        let mean = Metal::ALL.iter().map(|m| scores.per_metal[*m]).sum::<f64>() / 5.0;
        assert!((scores.average - (mean * 10.0 + 0.5).floor() / 10.0).abs() < 1e-9);
    }
}

#[test]
fn test_average_consistent_in_predictions() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..500 {
        let coord = random_coordinate(&mut rng);
        let result = engine().predict(coord, &mut rng);
        let mean = result.risk_scores.per_metal.mean();
        assert!((result.risk_scores.average - (mean * 10.0 + 0.5).floor() / 10.0).abs() < 1e-9);
        for (_, s) in result.risk_scores.per_metal.iter() {
            assert!((0.0..=100.0).contains(&s));
        }
    }
}

#[test]
fn test_unknown_location_uses_default_baseline() {
    let mut rng = StdRng::seed_from_u64(10);
    let result = engine().predict(Coordinate::new(0.0, 0.0), &mut rng);
    assert!(matches!(result.source, ValueSource::Estimated { .. }));

    let values = MetalMap::from_fn(|m| result.metal(m).unwrap().ppm);
    assert_eq!(result.risk_scores, risk_scores(&values, &DEFAULT_BASELINE_PPM));
}

#[test]
fn test_known_sites_echo_measured_values() {
    let mut rng = StdRng::seed_from_u64(11);
    let registry = SiteRegistry::arizona();
    let resolver = SiteResolver::with_default_radius(registry);
    for site in registry.sites() {
        let matched = resolver.resolve(site.location).unwrap();
        let result = engine().predict(site.location, &mut rng);
        assert!(result.is_known_site());
        for (metal, ppm) in matched.measured.iter() {
            assert_eq!(result.metal(metal).unwrap().ppm, ppm);
            let err = result.metal(metal).unwrap().error;
            assert!((2.0..=6.0).contains(&err));
        }
    }
}

#[test]
fn test_shape_is_stable_across_calls() {
    let mut rng = StdRng::seed_from_u64(12);
    let coord = Coordinate::new(36.1, -113.4);
    for _ in 0..100 {
        let result = engine().predict(coord, &mut rng);
        assert_eq!(result.location, coord);
        let names: Vec<Metal> = result.metals.iter().map(|m| m.name).collect();
        assert_eq!(names, Metal::ALL);
        for m in &result.metals {
            assert!((3.0..=8.0).contains(&m.error));
        }
    }
}

#[test]
fn test_unknown_values_vary_between_calls() {
    let mut rng = StdRng::seed_from_u64(13);
    let coord = Coordinate::new(36.1, -113.4);
    let first = engine().predict(coord, &mut rng);
    let differs = (0..20).any(|_| engine().predict(coord, &mut rng).metals != first.metals);
    assert!(differs);
}
