#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Profile YAML parsing must never panic
        if let Ok(config) = serde_yaml_ng::from_str::<breakdown::Config>(content) {
            let _ = breakdown::ConfigPatternProvider::from_config(&config);
        }
    }
});
