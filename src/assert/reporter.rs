use core::cell::{Cell, RefCell};
use core::panic::AssertUnwindSafe;
use log::error;

/// The test-reporting collaborator assertions report their failures to.
pub trait Reporter {
    /// Records a failure, execution continues.
    fn report_and_continue(&self, message: &str);

    /// Records a failure and unwinds the current check sequence.
    fn report_and_abort(&self, message: &str) -> !;
}

/// Reporter for the Rust test harness, where a failed test is a panicking test.
///
/// Failures reported with [`Reporter::report_and_continue`] are collected and
/// raised together when the reporter is dropped.
#[derive(Debug, Default)]
pub struct TestReporter {
    failures: RefCell<Vec<String>>,
}

impl TestReporter {
    pub fn new() -> Self {
        TestReporter::default()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }
}

impl Reporter for TestReporter {
    fn report_and_continue(&self, message: &str) {
        error!("{message}");
        self.failures.borrow_mut().push(message.to_string());
    }

    fn report_and_abort(&self, message: &str) -> ! {
        let mut failures = self.failures.take();
        failures.push(message.to_string());
        panic!("{}", failures.join("\n"));
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        let failures = core::mem::take(self.failures.get_mut());
        if !failures.is_empty() && !std::thread::panicking() {
            panic!("{}", failures.join("\n"));
        }
    }
}

/// Unwind payload of [`RecordingReporter::report_and_abort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// Reporter that records failures instead of failing the test, used to test
/// assertions themselves.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    failed: Cell<bool>,
    messages: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        RecordingReporter::default()
    }

    /// Runs `checks` against a fresh recorder and returns it.
    /// An abort ends `checks`, any other panic is propagated.
    pub fn check<F>(checks: F) -> RecordingReporter
    where
        F: FnOnce(&RecordingReporter),
    {
        let recorder = RecordingReporter::new();
        let outcome =
            std::panic::catch_unwind(AssertUnwindSafe(|| checks(&recorder)));
        if let Err(payload) = outcome {
            if !payload.is::<Aborted>() {
                std::panic::resume_unwind(payload);
            }
        }
        recorder
    }

    pub fn failed(&self) -> bool {
        self.failed.get()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    fn record(&self, message: &str) {
        self.failed.set(true);
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl Reporter for RecordingReporter {
    fn report_and_continue(&self, message: &str) {
        self.record(message);
    }

    fn report_and_abort(&self, message: &str) -> ! {
        self.record(message);
        // resume_unwind skips the panic hook, so aborts stay silent
        std::panic::resume_unwind(Box::new(Aborted))
    }
}
