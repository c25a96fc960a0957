//! Text chart of a recorded series with anomalies highlighted.

use anomaly::SeriesRecorder;

const POINT: char = '·';
const ANOMALY: char = 'X';

/// Render the series into `height` rows of at most `width` columns.
///
/// Consecutive points are bucketed into columns; a column containing a
/// flagged point shows it as `X`. Rows are labelled with their value.
pub fn render(recorder: &SeriesRecorder, width: usize, height: usize) -> String {
    let Some((lo, hi)) = recorder.bounds() else {
        return String::from("(no data)\n");
    };
    let width = width.max(1);
    let height = height.max(2);

    let pad = ((hi - lo) * 0.05).max(1e-9);
    let (y_min, y_max) = (lo - pad, hi + pad);
    let row_of = |v: f64| -> usize {
        let frac = (v - y_min) / (y_max - y_min);
        let row = ((1.0 - frac) * (height - 1) as f64).round();
        (row.max(0.0) as usize).min(height - 1)
    };

    let values = recorder.values();
    let per_col = values.len().div_ceil(width);
    let columns = values.len().div_ceil(per_col);
    let mut grid = vec![vec![' '; columns]; height];

    for (i, &v) in values.iter().enumerate() {
        grid[row_of(v)][i / per_col] = POINT;
    }
    for &i in recorder.flagged_indices() {
        grid[row_of(values[i])][i / per_col] = ANOMALY;
    }

    let mut out = String::new();
    for (r, row) in grid.iter().enumerate() {
        let label = y_max - (y_max - y_min) * r as f64 / (height - 1) as f64;
        out.push_str(&format!("{:>9.2} |", label));
        out.extend(row.iter());
        out.push('\n');
    }
    out.push_str(&format!("{:>9} +{}\n", "", "-".repeat(columns)));
    out.push_str(&format!(
        "{:>9}  0{:>width$}\n",
        "",
        values.len() - 1,
        width = columns.saturating_sub(1)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomaly::{AnomalySink, Observation, StreamMonitor, StreamingDetector, ZScoreDetector};

    fn recorder(values: &[(f64, bool)]) -> SeriesRecorder {
        let mut recorder = SeriesRecorder::new();
        for (position, &(value, is_anomaly)) in values.iter().enumerate() {
            recorder.record(&Observation {
                position,
                value,
                is_anomaly,
                z_score: None,
            });
        }
        recorder
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&SeriesRecorder::new(), 40, 10), "(no data)\n");
    }

    #[test]
    fn test_anomaly_marked_on_top_row() {
        let chart = render(&recorder(&[(0.0, false), (1.0, false), (10.0, true)]), 10, 5);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].ends_with("  X"));
        assert!(lines[4].contains(POINT));
    }

    #[test]
    fn test_recorder_attached_to_warm_detector() {
        let mut detector = ZScoreDetector::new(3, 1.0).unwrap();
        for v in (0..200).map(|i| (i % 3) as f64) {
            detector.update(v);
        }
        let mut monitor = StreamMonitor::new(detector, SeriesRecorder::new());
        monitor.push(1.0).unwrap();
        assert!(monitor.push(50.0).unwrap().is_anomaly);
        let (_, recorder) = monitor.into_parts();
        assert_eq!(recorder.anomalies()[0].position, 201);
        assert_eq!(recorder.flagged_indices(), &[1]);

        let chart = render(&recorder, 10, 5);
        assert!(chart.lines().next().unwrap().ends_with('X'));
    }

    #[test]
    fn test_buckets_long_series() {
        let data: Vec<(f64, bool)> = (0..1000).map(|i| ((i as f64).sin(), false)).collect();
        let chart = render(&recorder(&data), 50, 8);
        for line in chart.lines().take(8) {
            assert!(line.chars().count() <= 11 + 50);
        }
    }
}
