pub(crate) mod strategy;

use proptest::strategy::Strategy;
use proptest::test_runner::{Config, TestCaseResult, TestRunner};

/// Runs `test` against values generated by `strategy`, persisting failures next to `source_file`
pub(crate) fn run<S, F>(source_file: &'static str, strategy: S, test: F)
where
    S: Strategy,
    F: Fn(S::Value) -> TestCaseResult,
{
    init_logger();
    TestRunner::new(Config::with_source_file(source_file))
        .run(&strategy, test)
        .unwrap();
}

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
