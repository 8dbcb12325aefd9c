//! Property tests for the path resolvers.

use proptest::prelude::*;

use breakdown::config::Config;
use breakdown::infrastructure::RootedFs;
use breakdown::{
    ConfigProfile, DefaultPatternProvider, InputFilePathResolver, OutputFilePathResolver,
    PathKind, PathOptions, PathParams, TwoParams,
};

fn params() -> TwoParams {
    TwoParams::create("to", "task", ConfigProfile::default(), DefaultPatternProvider).unwrap()
}

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}\\.md").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Input and output resolution never panic on arbitrary option strings.
    #[test]
    fn property_resolvers_never_panic(s in "(?s).{0,128}") {
        let two = params();
        let config = Config::default();
        let fs = RootedFs::new("/nonexistent-breakdown-root");
        let options = PathOptions::new().with_from_file(s.as_str()).with_destination_file(s.as_str());
        let path_params = PathParams::new(&two, &options);

        let _ = InputFilePathResolver::new(&fs).resolve(&path_params);
        let _ = OutputFilePathResolver::new(&config, &fs).resolve(&path_params);
    }

    /// PROPERTY: A bare input filename always resolves inside the working directory.
    #[test]
    fn property_bare_input_joins_cwd(name in file_name()) {
        let two = params();
        let fs = RootedFs::new("/nonexistent-breakdown-root");
        let options = PathOptions::new().with_from_file(name.as_str());

        let result = InputFilePathResolver::new(&fs)
            .resolve(&PathParams::new(&two, &options))
            .unwrap();

        prop_assert_eq!(result.kind(), PathKind::Filename);
        prop_assert_eq!(result.value(), fs.root().join(&name));
        prop_assert!(!result.exists());
    }

    /// PROPERTY: A bare output filename lands in the layer directory.
    #[test]
    fn property_bare_output_goes_to_layer_dir(name in file_name()) {
        let two = params();
        let config = Config::default();
        let fs = RootedFs::new("/nonexistent-breakdown-root");
        let options = PathOptions::new().with_output(name.as_str());

        let result = OutputFilePathResolver::new(&config, &fs)
            .resolve(&PathParams::new(&two, &options))
            .unwrap();

        prop_assert_eq!(result.kind(), PathKind::Filename);
        prop_assert_eq!(result.value(), fs.root().join("task").join(&name));
        prop_assert!(!result.is_generated());
    }
}
