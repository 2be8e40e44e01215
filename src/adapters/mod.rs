pub mod annotator;
pub mod loader;
pub mod placeholder;
pub mod ref_resolver;
pub mod render;
pub mod sample_cache;
pub mod synthesizer;
