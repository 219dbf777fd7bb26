//! Simulated connection speed test.

use rand::RngExt;

/// Result of one simulated speed test run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTestResult {
    pub download_mbps: f64,
    pub upload_mbps: f64,
    pub ping_ms: u32,
    pub jitter_ms: u32,
}

/// Sample a speed test. No traffic is generated; figures land in fixed
/// ranges (50–100 down, 10–30 up, 10–40 ms ping, 1–6 ms jitter).
pub fn sample_speed_test<R: RngExt>(rng: &mut R) -> SpeedTestResult {
    SpeedTestResult {
        download_mbps: round2(rng.random_range(50.0..100.0)),
        upload_mbps: round2(rng.random_range(10.0..30.0)),
        ping_ms: rng.random_range(10..40),
        jitter_ms: rng.random_range(1..6),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_in_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let r = sample_speed_test(&mut rng);
            assert!(r.download_mbps >= 50.0 && r.download_mbps <= 100.0);
            assert!(r.upload_mbps >= 10.0 && r.upload_mbps <= 30.0);
            assert!(r.ping_ms >= 10 && r.ping_ms < 40);
            assert!(r.jitter_ms >= 1 && r.jitter_ms < 6);
        }
    }

    #[test]
    fn seeded_run_is_reproducible() {
        let a = sample_speed_test(&mut StdRng::seed_from_u64(9));
        let b = sample_speed_test(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
