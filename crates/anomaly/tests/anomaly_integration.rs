//! Integration tests for the anomaly crate

use anomaly::{
    DetectorConfigBuilder, DetectorState, SlidingWindow, StatisticsEngine, StreamingDetector,
    ZScoreDetector,
};

fn detector(window_size: usize, threshold: f64) -> ZScoreDetector {
    ZScoreDetector::new(window_size, threshold).unwrap()
}

/// Classify then update, the way every orchestrator must.
fn classify_all(detector: &mut ZScoreDetector, values: &[f64]) -> Vec<bool> {
    values
        .iter()
        .map(|&v| {
            let flagged = detector.is_anomaly(v);
            detector.update(v);
            flagged
        })
        .collect()
}

#[test]
fn test_constant_window_suppresses_outlier() {
    let mut d = detector(3, 2.0);
    let flags = classify_all(&mut d, &[10.0, 10.0, 10.0, 10.0, 100.0]);
    assert_eq!(flags, vec![false; 5]);
    // 100 was admitted after being judged
    assert_eq!(d.window().to_vec(), vec![10.0, 10.0, 100.0]);
}

#[test]
fn test_spread_window_flags_outlier() {
    let mut d = detector(3, 1.0);
    for v in [1.0, 2.0, 3.0] {
        d.update(v);
    }
    assert!((d.mean() - 2.0).abs() < 1e-12);
    assert!((d.std_dev() - 0.816_496_580_927_726).abs() < 1e-12);

    let z = d.z_score(10.0).unwrap();
    assert!((z - 9.797_958_971_132_712).abs() < 1e-9);
    assert!(d.is_anomaly(10.0));
}

#[test]
fn test_warm_up_for_short_sequences() {
    let mut d = detector(50, 0.5);
    let values: Vec<f64> = (0..49).map(|i| if i % 7 == 0 { 1e6 } else { i as f64 }).collect();
    assert!(classify_all(&mut d, &values).iter().all(|&f| !f));
    assert_eq!(d.state(), DetectorState::WarmingUp);
}

#[test]
fn test_matches_z_score_formula_when_active() {
    let window = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
    let mut d = detector(window.len(), 1.5);
    for v in window {
        d.update(v);
    }

    let n = window.len() as f64;
    let mu = window.iter().sum::<f64>() / n;
    let sigma = (window.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / n).sqrt();

    for candidate in [-50.0, 0.0, 10.0, 18.0, 30.0, 40.0, 60.0] {
        let expected = (candidate - mu).abs() / sigma > 1.5;
        assert_eq!(d.is_anomaly(candidate), expected, "candidate {}", candidate);
    }
}

#[test]
fn test_exact_threshold_is_not_anomalous() {
    let mut d = detector(2, 2.0);
    d.update(1.0);
    d.update(3.0);
    assert!(!d.is_anomaly(4.0));
    assert!(!d.is_anomaly(0.0));
}

#[test]
fn test_window_keeps_last_values_in_order() {
    let mut window = SlidingWindow::new(4).unwrap();
    for v in 1..=11 {
        window.update(v as f64);
    }
    assert_eq!(window.to_vec(), vec![8.0, 9.0, 10.0, 11.0]);
    assert_eq!(window.len(), 4);
}

#[test]
fn test_outlier_enters_baseline_only_after_judgement() {
    let mut d = detector(4, 2.0);
    for v in [1.0, 2.0, 1.0, 2.0] {
        d.update(v);
    }
    let first = d.observe(50.0).unwrap();
    assert!(first.is_anomaly);
    // The outlier now inflates the spread, so a repeat is judged leniently.
    let second = d.observe(50.0).unwrap();
    assert!(second.z_score.unwrap() < first.z_score.unwrap());
}

#[test]
fn test_independent_instances_do_not_interfere() {
    let mut a = detector(3, 1.0);
    let mut b = detector(3, 1.0);
    for v in [1.0, 2.0, 3.0] {
        a.update(v);
    }
    assert_eq!(b.state(), DetectorState::WarmingUp);
    b.update(5.0);
    assert_eq!(a.window().to_vec(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_builder_feeds_detector() {
    let config = DetectorConfigBuilder::new()
        .window_size(5)
        .threshold(2.5)
        .build()
        .unwrap();
    let d = ZScoreDetector::from_config(config).unwrap();
    assert_eq!(d.window_size(), 5);
    assert_eq!(d.threshold(), 2.5);
    assert_eq!(d.config(), config);
}
