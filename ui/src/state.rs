use std::sync::Arc;

use flume::{Receiver, Sender};
use log::debug;
use userboard_business::{
    BusinessConfig, EhttpFetcher, FetchResult, FetchService, UsersView, fetch_users,
};

/// The main application state.
///
/// The users fetch completes off the UI thread; its result travels back over a
/// channel and is applied at the start of the next frame, so the view has a
/// single writer.
pub struct State {
    /// Where the users are fetched from.
    pub config: BusinessConfig,
    /// Loading / error / ready view over the fetched users.
    pub users_view: UsersView,
    fetcher: Arc<dyn FetchService>,
    fetch_started: bool,
    fetch_sender: Sender<FetchResult>,
    fetch_receiver: Receiver<FetchResult>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_fetcher(config, Arc::new(EhttpFetcher))
    }

    pub fn with_fetcher(config: BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        let (fetch_sender, fetch_receiver) = flume::bounded(1);
        Self {
            config,
            users_view: UsersView::default(),
            fetcher,
            fetch_started: false,
            fetch_sender,
            fetch_receiver,
        }
    }

    /// State pointed at a mock server.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }

    pub const fn fetch_started(&self) -> bool {
        self.fetch_started
    }

    /// Starts the users fetch. Only the first call does anything.
    pub fn start_fetch(&mut self, ctx: &egui::Context) {
        if self.fetch_started {
            return;
        }
        self.fetch_started = true;

        let sender = self.fetch_sender.clone();
        let ctx = ctx.clone();
        fetch_users(self.fetcher.as_ref(), &self.config, move |result| {
            if sender.send(result).is_err() {
                debug!("Users view dropped before the fetch completed");
            }
            ctx.request_repaint();
        });
    }

    /// Applies a completed fetch, if any, to the view.
    pub fn poll_fetch(&mut self) {
        while let Ok(result) = self.fetch_receiver.try_recv() {
            self.users_view.apply(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::Mutex;

    use ehttp::Request;
    use userboard_business::OnFetchDone;

    use super::*;

    /// Holds on to the completion until the test decides to fire it.
    #[derive(Default)]
    struct DeferredFetcher {
        calls: Mutex<usize>,
        pending: Mutex<Option<OnFetchDone>>,
    }

    impl fmt::Debug for DeferredFetcher {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("DeferredFetcher")
                .field("calls", &self.calls)
                .finish_non_exhaustive()
        }
    }

    impl DeferredFetcher {
        fn calls(&self) -> usize {
            *self.calls.lock().expect("lock")
        }

        fn fail(&self, message: &str) {
            let on_done = self.pending.lock().expect("lock").take();
            if let Some(on_done) = on_done {
                on_done(Err(message.to_owned()));
            }
        }
    }

    impl FetchService for DeferredFetcher {
        fn fetch(&self, _request: Request, on_done: OnFetchDone) {
            *self.calls.lock().expect("lock") += 1;
            *self.pending.lock().expect("lock") = Some(on_done);
        }
    }

    fn deferred_state() -> (Arc<DeferredFetcher>, State) {
        let fetcher = Arc::new(DeferredFetcher::default());
        let state = State::with_fetcher(BusinessConfig::new("http://mock"), fetcher.clone());
        (fetcher, state)
    }

    #[test]
    fn test_fetch_runs_once() {
        let (fetcher, mut state) = deferred_state();
        let ctx = egui::Context::default();

        state.start_fetch(&ctx);
        state.start_fetch(&ctx);

        assert!(state.fetch_started());
        assert_eq!(fetcher.calls(), 1);
    }

    #[test]
    fn test_result_applies_on_poll() {
        let (fetcher, mut state) = deferred_state();
        state.start_fetch(&egui::Context::default());

        state.poll_fetch();
        assert!(state.users_view.is_loading());

        fetcher.fail("Network Error");
        assert!(state.users_view.is_loading());

        state.poll_fetch();
        assert_eq!(state.users_view.error_message(), Some("Network Error"));
    }

    #[test]
    fn test_completion_after_drop_is_ignored() {
        let (fetcher, mut state) = deferred_state();
        state.start_fetch(&egui::Context::default());

        drop(state);
        fetcher.fail("Network Error");
    }
}
