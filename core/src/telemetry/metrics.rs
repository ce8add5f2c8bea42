use std::collections::BTreeMap;
use std::sync::Mutex;

/// Counters for one node name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeMetrics {
    pub invocations: usize,
    pub errors: usize,
}

/// Per-node invocation and error counters.
pub struct MetricsRecorder {
    inner: Mutex<BTreeMap<String, NodeMetrics>>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn record_invocation(&self, node: &str) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.entry(node.to_string()).or_default().invocations += 1;
        }
    }

    pub fn record_error(&self, node: &str) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.entry(node.to_string()).or_default().errors += 1;
        }
    }

    pub fn snapshot(&self) -> Vec<(String, NodeMetrics)> {
        if let Ok(metrics) = self.inner.lock() {
            metrics
                .iter()
                .map(|(name, counts)| (name.clone(), *counts))
                .collect()
        } else {
            Vec::new()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_per_node() {
        let recorder = MetricsRecorder::new();
        recorder.record_invocation("MaskFromPercent");
        recorder.record_invocation("MaskFromPercent");
        recorder.record_error("OverMergeMasks");

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].0, "MaskFromPercent");
        assert_eq!(snapshot[0].1.invocations, 2);
        assert_eq!(snapshot[1].1.errors, 1);
    }
}
