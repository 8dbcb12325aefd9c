#![no_main]

use libfuzzer_sys::fuzz_target;

use breakdown::config::Config;
use breakdown::{
    ConfigProfile, DefaultPatternProvider, InputFilePathResolver, OutputFilePathResolver,
    PathOptions, PathParams, PromptTemplatePathResolver, RootedFs, TwoParams,
};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(params) =
        TwoParams::create("to", "issue", ConfigProfile::default(), DefaultPatternProvider)
    else {
        return;
    };

    let options = PathOptions::new()
        .with_from_file(raw)
        .with_destination_file(raw)
        .with_adaptation(raw);
    let path_params = PathParams::new(&params, &options);
    let config = Config::default();
    let fs = RootedFs::new("/fuzz-root");

    let _ = InputFilePathResolver::new(&fs).resolve(&path_params);
    let _ = OutputFilePathResolver::new(&config, &fs).resolve(&path_params);
    let _ = PromptTemplatePathResolver::new(&config, &fs).resolve(&path_params);
});
