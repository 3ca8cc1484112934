use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

const LATENCY_BUCKETS: [u64; 5] = [10, 50, 250, 1_000, u64::MAX];
const BUCKET_MIDPOINTS: [f64; 5] = [5.0, 30.0, 150.0, 625.0, 2_000.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Predict,
    Profile,
    RecommendCatalog,
    RecommendRules,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Predict,
        Operation::Profile,
        Operation::RecommendCatalog,
        Operation::RecommendRules,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Predict => "predict",
            Self::Profile => "profile",
            Self::RecommendCatalog => "recommendCatalog",
            Self::RecommendRules => "recommendRules",
        }
    }
}

#[derive(Default)]
pub struct OperationMetrics {
    pub call_count: AtomicU64,
    pub total_latency_us: AtomicU64,
    latency_buckets: [AtomicU64; 5],
}

impl OperationMetrics {
    fn record(&self, latency_us: u64) {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.total_latency_us.fetch_add(latency_us, Ordering::Relaxed);
        for (i, &threshold) in LATENCY_BUCKETS.iter().enumerate() {
            if latency_us <= threshold {
                self.latency_buckets[i].fetch_add(1, Ordering::Relaxed);
                return;
            }
        }
    }

    /// Approximate p50/p95 from bucket midpoints, in microseconds.
    fn percentiles(&self) -> (f64, f64) {
        let counts: Vec<u64> = self
            .latency_buckets
            .iter()
            .map(|b| b.load(Ordering::Relaxed))
            .collect();
        let total: u64 = counts.iter().sum();
        if total == 0 {
            return (0.0, 0.0);
        }

        let percentile = |pct: f64| -> f64 {
            let target = (pct / 100.0 * total as f64).ceil() as u64;
            let mut cumulative = 0u64;
            for (i, &count) in counts.iter().enumerate() {
                cumulative += count;
                if cumulative >= target {
                    return BUCKET_MIDPOINTS[i];
                }
            }
            BUCKET_MIDPOINTS[BUCKET_MIDPOINTS.len() - 1]
        };

        (percentile(50.0), percentile(95.0))
    }
}

pub struct MetricsRegistry {
    metrics: HashMap<Operation, OperationMetrics>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let metrics = Operation::ALL
            .iter()
            .map(|op| (*op, OperationMetrics::default()))
            .collect();
        Self { metrics }
    }

    pub fn record_call(&self, op: Operation, latency_us: u64) {
        if let Some(metric) = self.metrics.get(&op) {
            metric.record(latency_us);
        }
    }

    pub fn snapshot(&self) -> HashMap<String, MetricsSnapshot> {
        self.metrics
            .iter()
            .map(|(op, metric)| {
                let (p50_us, p95_us) = metric.percentiles();
                (
                    op.as_str().to_string(),
                    MetricsSnapshot {
                        call_count: metric.call_count.load(Ordering::Relaxed),
                        total_latency_us: metric.total_latency_us.load(Ordering::Relaxed),
                        p50_us,
                        p95_us,
                    },
                )
            })
            .collect()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub call_count: u64,
    pub total_latency_us: u64,
    pub p50_us: f64,
    pub p95_us: f64,
}
