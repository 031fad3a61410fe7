//! Fade-out, swap, fade-in sequencing around content replacement.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;

use crate::config::transition::{FADE_IN_MS, FADE_OUT_MS};
use crate::models::Phase;

/// Source of timed delays.
#[allow(async_fn_in_trait)]
pub trait Clock {
    async fn sleep(&self, ms: u32);
}

/// Delays backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

/// Cross-fade timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub fade_out_ms: u32,
    pub fade_in_ms: u32,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            fade_out_ms: FADE_OUT_MS,
            fade_in_ms: FADE_IN_MS,
        }
    }
}

impl Transition {
    /// Run `swap` while the container is hidden.
    ///
    /// `swap` is only polled after the fade-out delay has elapsed, and the
    /// fade-in phase is reported only after `swap` has completed.
    pub async fn run<C, F, T>(&self, clock: &C, on_phase: impl Fn(Phase), swap: F) -> T
    where
        C: Clock,
        F: Future<Output = T>,
    {
        on_phase(Phase::FadingOut);
        clock.sleep(self.fade_out_ms).await;
        on_phase(Phase::Hidden);

        let output = swap.await;

        on_phase(Phase::FadingIn);
        clock.sleep(self.fade_in_ms).await;
        on_phase(Phase::Visible);

        output
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Shared log of everything that happened during a test run.
    pub(crate) type EventLog = Rc<RefCell<Vec<String>>>;

    /// Clock that records each sleep and returns immediately.
    #[derive(Default, Clone)]
    pub(crate) struct RecordingClock {
        pub log: EventLog,
    }

    impl Clock for RecordingClock {
        async fn sleep(&self, ms: u32) {
            self.log.borrow_mut().push(format!("sleep {}", ms));
        }
    }

    #[tokio::test]
    async fn test_swap_runs_between_fades() {
        let clock = RecordingClock::default();
        let log = clock.log.clone();
        let transition = Transition {
            fade_out_ms: 10,
            fade_in_ms: 20,
        };

        let swap_log = log.clone();
        let output = transition
            .run(
                &clock,
                |phase| log.borrow_mut().push(format!("{:?}", phase)),
                async move {
                    swap_log.borrow_mut().push("swap".to_string());
                    7
                },
            )
            .await;

        assert_eq!(output, 7);
        assert_eq!(
            *log.borrow(),
            vec![
                "FadingOut",
                "sleep 10",
                "Hidden",
                "swap",
                "FadingIn",
                "sleep 20",
                "Visible"
            ]
        );
    }

    #[test]
    fn test_default_timings() {
        let transition = Transition::default();
        assert_eq!(transition.fade_out_ms, FADE_OUT_MS);
        assert_eq!(transition.fade_in_ms, FADE_IN_MS);
    }
}
