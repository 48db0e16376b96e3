use assertive_core::assert::reporter::{RecordingReporter, Reporter, TestReporter};
use assertive_core::assert::{deep_equal, equal, nil, no_error, not_nil, that};
use assertive_core::logger::init_logger_debug;
use assertive_core::{AsValue, Nil};

#[derive(AsValue)]
struct Meters(u32);

#[test]
fn passing_assertions_report_nothing() {
    init_logger_debug();
    let reporter = TestReporter::new();
    equal(&reporter, &Meters(3), &3i64);
    equal(&reporter, &Nil, &0u8);
    deep_equal(&reporter, &vec![1, 2, 3], &vec![1, 2, 3]);
    nil(&reporter, &None::<Box<u8>>);
    not_nil(&reporter, &42);
    no_error(&reporter, &"7".parse::<u8>());
    that(&reporter, true);
    assert!(reporter.failures().is_empty());
}

#[test]
#[should_panic(expected = "-1i8 != 255u8")]
fn test_reporter_fails_the_test() {
    let reporter = TestReporter::new();
    equal(&reporter, &-1i8, &255u8);
}

#[test]
fn first_failure_aborts_the_sequence() {
    init_logger_debug();
    let recorder = RecordingReporter::check(|r| {
        equal(r, &1, &1u8);
        equal(r, &1, &2);
        equal(r, "never", "reached");
    });
    assert!(recorder.failed());
    assert_eq!(recorder.messages(), vec!["1i32 != 2i32"]);
}

#[test]
fn reporters_are_substitutable() {
    let recorder = RecordingReporter::new();
    let reporter: &dyn Reporter = &recorder;
    reporter.report_and_continue("noted");
    assert!(recorder.failed());

    let recorder = RecordingReporter::check(|r| {
        let reporter: &dyn Reporter = r;
        nil(reporter, &5u8);
    });
    assert_eq!(recorder.messages(), vec!["5u8 cannot be nil"]);
}

#[test]
fn empty_sequence_is_not_nil() {
    let recorder = RecordingReporter::check(|r| {
        not_nil(r, &vec![1, 2]);
        nil(r, &Vec::<u8>::new());
    });
    assert_eq!(recorder.messages(), vec!["[] != nil"]);
}

#[test]
fn no_error_reports_the_error() {
    let recorder = RecordingReporter::check(|r| {
        no_error(r, &"x".parse::<u8>());
    });
    assert!(recorder.failed());
    assert_eq!(recorder.messages().len(), 1);
}
