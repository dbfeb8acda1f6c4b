//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mindjournal_core` linkage.
//! - Score text passed as arguments for quick local sanity checks.
//!
//! Output is deterministic for a given invocation.

use mindjournal_core::score_sentiment;

fn main() {
    println!("mindjournal_core ping={}", mindjournal_core::ping());
    println!("mindjournal_core version={}", mindjournal_core::core_version());

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !text.is_empty() {
        let result = score_sentiment(&text);
        println!("sentiment score={:.4} label={}", result.score, result.label);
    }
}
