//! Daily spark prompts.
//!
//! # Responsibility
//! - Provide the rotating journaling prompts shown on the home screen.
//!
//! # Invariants
//! - Rotation wraps; every index maps to a prompt.

/// Rotating journaling prompts, in presentation order.
pub const SPARK_PROMPTS: [&str; 8] = [
    "What made you smile today?",
    "Log a meal you shared recently.",
    "Write a haiku about your partner.",
    "Upload a photo from your last date.",
    "What is one thing you appreciate about them?",
    "Record a small act of kindness they did.",
    "What song reminds you of them right now?",
    "Plan your next weekend getaway.",
];

/// Returns the prompt at `index`, wrapping modulo the prompt count.
pub fn prompt_at(index: usize) -> &'static str {
    SPARK_PROMPTS[index % SPARK_PROMPTS.len()]
}

/// Returns the index following `index` in rotation order.
pub fn next_prompt_index(index: usize) -> usize {
    (index + 1) % SPARK_PROMPTS.len()
}
