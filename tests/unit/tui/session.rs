use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default, Clone)]
struct MockMode {
    calls: Arc<Mutex<Vec<&'static str>>>,
    fail_enter: bool,
}

impl ScreenMode for MockMode {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        if self.fail_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

#[test]
fn session_leaves_on_drop() {
    let mode = MockMode::default();
    {
        let session = ScreenSession::start(mode.clone()).unwrap();
        assert!(session.is_active());
    }
    assert_eq!(&*mode.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn ending_twice_leaves_once() {
    let mode = MockMode::default();
    let mut session = ScreenSession::start(mode.clone()).unwrap();
    session.end().unwrap();
    session.end().unwrap();
    assert!(!session.is_active());
    drop(session);

    assert_eq!(&*mode.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_start_does_not_leave() {
    let mode = MockMode {
        fail_enter: true,
        ..MockMode::default()
    };
    assert!(ScreenSession::start(mode.clone()).is_err());
    assert_eq!(&*mode.calls.lock().unwrap(), &["enter"]);
}
