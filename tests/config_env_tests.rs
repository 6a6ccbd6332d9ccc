//! Reads the process environment, so it lives in its own test binary.

use epicycles::VisualizerConfig;
use epicycles::config::{ENV_ITERATIONS, ENV_SPEED};

#[test]
fn from_env_skips_unparsable_values() {
    // SAFETY: the only test in this binary, nothing else touches the environment.
    unsafe {
        std::env::set_var(ENV_ITERATIONS, "a great many");
        std::env::set_var(ENV_SPEED, "0.25");
    }

    let config = VisualizerConfig::from_env();
    assert_eq!(config.iterations, VisualizerConfig::default().iterations);
    assert_eq!(config.speed, 0.25);
}
