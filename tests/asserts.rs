use std::{collections::HashMap, fmt};

use caller_asserts::{
    assert, assert_that, capture_failure,
    config::{
        file::{ColorMode, ConfigFile},
        Config, EnvOverrides,
    },
    equals, here, logging::init_test_logging, not_equals, ok, Fatal, TestContext,
};
use error_stack::Report;

#[derive(thiserror::Error, Debug)]
#[error("boom")]
struct Boom;

#[test]
fn scenario_condition() {
    init_test_logging();
    let tb = Fatal::default();

    assert!(capture_failure(|| assert_that!(&tb, 1 == 1, "should be equal")).is_none());

    let message = capture_failure(|| assert_that!(&tb, 1 == 2, "mismatch: {} vs {}", 1, 2));
    assert!(message.unwrap().contains("mismatch: 1 vs 2"));
}

#[test]
fn scenario_error() {
    let tb = Fatal::default();

    assert!(capture_failure(|| ok(&tb, None::<Boom>)).is_none());

    let message = capture_failure(|| ok(&tb, Some(Boom))).unwrap();
    assert!(message.contains("unexpected error: boom"));

    let result: Result<(), Report<Boom>> = Err(Report::new(Boom));
    let message = capture_failure(|| ok(&tb, result)).unwrap();
    assert!(message.contains("unexpected error: boom"));
}

#[test]
fn scenario_sequences() {
    let tb = Fatal::default();

    assert!(capture_failure(|| equals(&tb, vec![1, 2, 3], vec![1, 2, 3])).is_none());

    let message = capture_failure(|| equals(&tb, vec![1, 2, 3], vec![1, 2, 4])).unwrap();
    assert!(message.contains("[1, 2, 3]"));
    assert!(message.contains("[1, 2, 4]"));
}

#[test]
fn scenario_maps() {
    let tb = Fatal::default();
    let message = capture_failure(|| {
        not_equals(&tb, HashMap::from([("a", 1)]), HashMap::from([("a", 1)]))
    });
    assert!(message.is_some());
}

#[test]
fn failure_points_at_this_file() {
    let tb = Fatal::default();
    let line = line!() + 1;
    let message = capture_failure(|| assert(&tb, false, "here")).unwrap();
    assert_eq!(
        message,
        format!("\x1b[31masserts.rs:{}: here\x1b[39m\n\n", line)
    );
}

#[test]
fn configured_context_without_color() {
    let file = ConfigFile {
        color: Some(ColorMode::Auto),
        path: None,
    };
    let env = EnvOverrides {
        color: None,
        no_color: true,
    };
    let config = Config::new(file, env).unwrap();
    let tb = Fatal::with_config(&config);

    let line = line!() + 1;
    let message = capture_failure(|| equals(&tb, 1, 2)).unwrap();
    assert_eq!(
        message,
        format!("asserts.rs:{}:\n\n\texp: 1\n\n\tgot: 2\n\n", line)
    );
}

/// Context which records the failure before halting.
struct Recording {
    log: std::cell::RefCell<Vec<String>>,
}

impl TestContext for Recording {
    fn fatal(&self, message: String) -> ! {
        self.log.borrow_mut().push(message);
        std::panic::resume_unwind(Box::new("halted"))
    }
}

#[test]
fn custom_context_is_halted() {
    let tb = Recording {
        log: Default::default(),
    };
    let mut reached_end = false;
    let message = capture_failure(|| {
        ok(&tb, Err::<(), _>(fmt::Error));
        reached_end = true;
    });

    assert_eq!(message.as_deref(), Some("halted"));
    assert!(!reached_end);
    assert_eq!(tb.log.borrow().len(), 1);
    assert!(tb.log.borrow()[0].contains("unexpected error: an error occurred"));
}

#[test]
fn here_is_this_file() {
    let site = here();
    assert_eq!(site.base_name(), "asserts.rs");
}
