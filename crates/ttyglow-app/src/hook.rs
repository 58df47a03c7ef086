/// Runs a closure exactly once when dropped.
///
/// Create it before the run loop so the action fires on every way out of the
/// enclosing scope: normal return, early `?` return, or panic unwinding.
pub struct ExitHook<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> ExitHook<F> {
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }
}

impl<F: FnOnce()> Drop for ExitHook<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn runs_once_on_scope_exit() {
        let calls = Cell::new(0);
        {
            let _hook = ExitHook::new(|| calls.set(calls.get() + 1));
            assert_eq!(calls.get(), 0);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn runs_during_unwind() {
        let calls = Cell::new(0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _hook = ExitHook::new(|| calls.set(calls.get() + 1));
            panic!("render fault");
        }));
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn runs_on_early_error_return() {
        fn setup(calls: &Cell<u32>, fail: bool) -> Result<(), &'static str> {
            let _hook = ExitHook::new(|| calls.set(calls.get() + 1));
            if fail {
                return Err("setup failed");
            }
            Ok(())
        }

        let calls = Cell::new(0);
        assert!(setup(&calls, true).is_err());
        assert_eq!(calls.get(), 1);
    }
}
