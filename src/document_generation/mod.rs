pub mod domain_guidance;
pub mod prd_generator;
pub mod prd_metrics;
pub mod prd_template;
pub mod types;

// Re-export main types and functions for convenience
pub use prd_generator::PRDSynthesizer;
pub use prd_metrics::StoryMetrics;
pub use types::*;
