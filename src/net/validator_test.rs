use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;

/// Scripted validator that counts calls.
struct FakeValidator {
    answer: Mutex<Result<bool, ApiError>>,
    calls: AtomicUsize,
}

impl FakeValidator {
    fn answering(answer: Result<bool, ApiError>) -> Self {
        Self { answer: Mutex::new(answer), calls: AtomicUsize::new(0) }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl SessionValidator for FakeValidator {
    async fn check(&self, _session: &Session) -> Result<bool, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.lock().unwrap().clone()
    }
}

// =============================================================
// Short-circuit
// =============================================================

#[test]
fn empty_session_id_is_rejected_without_a_call() {
    let fake = FakeValidator::answering(Ok(true));
    assert!(!block_on(validate(&fake, &Session::new("", "u-1"))));
    assert_eq!(fake.calls(), 0);
}

#[test]
fn empty_user_id_is_rejected_without_a_call() {
    let fake = FakeValidator::answering(Ok(true));
    assert!(!block_on(validate(&fake, &Session::new("sid-1", " "))));
    assert_eq!(fake.calls(), 0);
}

// =============================================================
// Verdicts
// =============================================================

#[test]
fn accepted_session_is_valid_after_one_call() {
    let fake = FakeValidator::answering(Ok(true));
    assert!(block_on(validate(&fake, &Session::new("sid-1", "u-1"))));
    assert_eq!(fake.calls(), 1);
}

#[test]
fn rejected_session_is_invalid() {
    let fake = FakeValidator::answering(Ok(false));
    assert!(!block_on(validate(&fake, &Session::new("sid-1", "u-1"))));
    assert_eq!(fake.calls(), 1);
}

#[test]
fn every_error_kind_fails_closed_without_retry() {
    let errors = [
        ApiError::Transport("offline".into()),
        ApiError::Status { status: 500, message: None },
        ApiError::Decode("missing field `valid`".into()),
        ApiError::Unavailable,
    ];
    for err in errors {
        let fake = FakeValidator::answering(Err(err.clone()));
        assert!(!block_on(validate(&fake, &Session::new("sid-1", "u-1"))), "{err:?} must fail closed");
        assert_eq!(fake.calls(), 1, "{err:?} must not be retried");
    }
}
