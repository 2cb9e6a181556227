use prometheus::{Counter, CounterVec, Gauge, Histogram, HistogramOpts, Opts, Registry};
use std::sync::Arc;

/// Prometheus metrics for the lookup service
#[derive(Clone)]
pub struct LookupMetrics {
    // Counters
    pub lookups_total: CounterVec,
    pub rejected_requests: Counter,

    // Gauges
    pub indexed_words: Gauge,
    pub anagram_groups: Gauge,

    // Histograms
    pub lookup_latency: Histogram,

    // Registry
    registry: Arc<Registry>,
}

impl LookupMetrics {
    /// Create a new LookupMetrics instance
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let lookups_total = CounterVec::new(
            Opts::new(
                "unscramble_lookups_total",
                "Total number of lookups by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(lookups_total.clone()))?;

        let rejected_requests = Counter::with_opts(Opts::new(
            "unscramble_rejected_requests_total",
            "Total number of requests rejected by input validation",
        ))?;
        registry.register(Box::new(rejected_requests.clone()))?;

        let indexed_words = Gauge::with_opts(Opts::new(
            "unscramble_indexed_words",
            "Number of words in the anagram index, duplicates included",
        ))?;
        registry.register(Box::new(indexed_words.clone()))?;

        let anagram_groups = Gauge::with_opts(Opts::new(
            "unscramble_anagram_groups",
            "Number of distinct canonical keys in the anagram index",
        ))?;
        registry.register(Box::new(anagram_groups.clone()))?;

        let lookup_latency = Histogram::with_opts(
            HistogramOpts::new("unscramble_lookup_latency_seconds", "Lookup latency").buckets(
                vec![
                    0.000_001, 0.000_005, 0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.005,
                ],
            ),
        )?;
        registry.register(Box::new(lookup_latency.clone()))?;

        Ok(Self {
            lookups_total,
            rejected_requests,
            indexed_words,
            anagram_groups,
            lookup_latency,
            registry: Arc::new(registry),
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Record a lookup with its outcome ("hit" or "miss")
    pub fn record_lookup(&self, outcome: &str, duration_secs: f64) {
        self.lookups_total.with_label_values(&[outcome]).inc();
        self.lookup_latency.observe(duration_secs);
    }

    /// Record a request rejected by input validation
    pub fn record_rejected(&self) {
        self.rejected_requests.inc();
    }

    /// Update the index size gauges after construction
    pub fn set_index_stats(&self, words: usize, groups: usize) {
        self.indexed_words.set(words as f64);
        self.anagram_groups.set(groups as f64);
    }
}

impl Default for LookupMetrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}
