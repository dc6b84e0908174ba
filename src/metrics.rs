use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, Histogram, TextEncoder, register_counter,
    register_counter_vec, register_histogram,
};

lazy_static! {
    pub static ref REQUEST_TOTAL: CounterVec = register_counter_vec!(
        "fitness_chat_requests_total",
        "Total number of requests",
        &["endpoint"]
    )
    .expect("register fitness_chat_requests_total");
    pub static ref CACHE_HITS: Counter =
        register_counter!("fitness_chat_cache_hits_total", "Total cache hits")
            .expect("register fitness_chat_cache_hits_total");
    pub static ref CACHE_MISSES: Counter =
        register_counter!("fitness_chat_cache_misses_total", "Total cache misses")
            .expect("register fitness_chat_cache_misses_total");
    pub static ref COMPLETION_LATENCY: Histogram = register_histogram!(
        "fitness_chat_completion_latency_seconds",
        "Completion API latency in seconds"
    )
    .expect("register fitness_chat_completion_latency_seconds");
    pub static ref COMPLETION_ERRORS: Counter = register_counter!(
        "fitness_chat_completion_errors_total",
        "Completion API calls that failed"
    )
    .expect("register fitness_chat_completion_errors_total");
}

// Text exposition of every registered metric
pub fn render() -> Result<String, String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| e.to_string())?;
    String::from_utf8(buffer).map_err(|e| e.to_string())
}
