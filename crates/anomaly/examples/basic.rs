//! Basic example demonstrating streaming anomaly detection
//!
//! Run with: cargo run --example basic -p anomaly

use anomaly::{
    run_simulation, DataStreamSimulator, SimulationConfig, SimulatorConfig, StreamingDetector,
    ZScoreDetector,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== anomaly Basic Examples ===\n");

    // 1. Classify then update, one point at a time
    println!("1. Hand-fed detector (window=3, threshold=1.0)");
    let mut detector = ZScoreDetector::new(3, 1.0)?;
    for value in [1.0, 2.0, 3.0, 10.0] {
        let observation = detector.observe(value)?;
        println!(
            "   point {}: value={:.1} anomaly={} z={:?}",
            observation.position, value, observation.is_anomaly, observation.z_score
        );
    }

    // 2. Simulated stream
    println!("\n2. Simulated stream (window=100, threshold=3.0)");
    let mut source = DataStreamSimulator::seeded(42)?;
    let mut detector = ZScoreDetector::default();
    for _ in 0..1000 {
        let sample = source.next_sample();
        let observation = detector.observe(sample.value)?;
        if observation.is_anomaly || sample.injected {
            println!(
                "   tick {:4}: value={:8.3} flagged={:5} injected={}",
                sample.tick, sample.value, observation.is_anomaly, sample.injected
            );
        }
    }

    // 3. Batch simulation
    println!("\n3. Batch simulation");
    let summary = run_simulation(&SimulationConfig {
        simulator: SimulatorConfig::seeded(7),
        ..SimulationConfig::default()
    })?;
    println!("   Detected {} anomalies", summary.anomaly_count());
    for record in &summary.anomalies {
        println!("   Anomaly at point {}: {:.4}", record.position, record.value);
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
