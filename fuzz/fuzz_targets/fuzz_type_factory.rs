#![no_main]

use libfuzzer_sys::fuzz_target;

use breakdown::config::Config;
use breakdown::{ConfigPatternProvider, TypeFactory};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // First line is the pattern, the rest is the token
    let (pattern, token) = content.split_once('\n').unwrap_or((content, ""));
    let config = Config::with_patterns(pattern, pattern);
    let factory = TypeFactory::new(ConfigPatternProvider::from_config(&config));
    let _ = factory.create_both(token, token);
});
