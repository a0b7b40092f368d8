//! Background recommendation worker
//!
//! Entropy scoring can take a noticeable moment on large lists, so the TUI
//! hands it to a thread and keeps drawing. Every request carries a
//! generation number and its own cancel flag; a new request raises the flag
//! of the one before it, and replies for anything but the newest generation
//! are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::Scope;

use crate::core::WordGuess;
use crate::solver::{Cancelled, Recommendation, Solver};
use crate::wordlists::WordLists;

struct Request {
    generation: u64,
    guesses: Vec<WordGuess>,
    word_length: usize,
    cancel: Arc<AtomicBool>,
}

/// A finished recommendation for one generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reply<'a> {
    pub generation: u64,
    pub recommendation: Option<Recommendation<'a>>,
}

/// Handle to the recommendation thread
///
/// The thread lives in the scope it was spawned on. Dropping the handle
/// cancels the request in flight and lets the thread exit.
pub struct RecommendationWorker<'a> {
    requests: Sender<Request>,
    replies: Receiver<Reply<'a>>,
    generation: u64,
    cancel: Arc<AtomicBool>,
    pending: bool,
}

impl<'a> RecommendationWorker<'a> {
    pub fn spawn<'scope>(scope: &'scope Scope<'scope, 'a>, lists: &'a WordLists) -> Self {
        let (requests, request_rx) = mpsc::channel();
        let (reply_tx, replies) = mpsc::channel();

        scope.spawn(move || serve(&Solver::new(lists), &request_rx, &reply_tx));

        Self {
            requests,
            replies,
            generation: 0,
            cancel: Arc::new(AtomicBool::new(false)),
            pending: false,
        }
    }

    /// Queue a recommendation, superseding any in flight
    ///
    /// Returns the generation number of the new request.
    pub fn submit(&mut self, guesses: Vec<WordGuess>, word_length: usize) -> u64 {
        self.cancel.store(true, Ordering::Relaxed);
        self.cancel = Arc::new(AtomicBool::new(false));
        self.generation += 1;

        let request = Request {
            generation: self.generation,
            guesses,
            word_length,
            cancel: Arc::clone(&self.cancel),
        };
        self.pending = self.requests.send(request).is_ok();
        if !self.pending {
            log::warn!("recommendation worker is gone");
        }
        self.generation
    }

    /// Abandon the request in flight, if any
    pub fn cancel(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        self.pending = false;
    }

    /// Take the reply for the newest generation, if it has arrived
    pub fn poll(&mut self) -> Option<Reply<'a>> {
        loop {
            match self.replies.try_recv() {
                Ok(reply) if reply.generation == self.generation && self.pending => {
                    self.pending = false;
                    return Some(reply);
                }
                Ok(reply) => {
                    log::debug!("dropping stale recommendation {}", reply.generation);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return None,
            }
        }
    }

    /// Whether a request is still being worked on
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for RecommendationWorker<'_> {
    /// Stop any scoring in flight so the owning scope can join promptly
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

fn serve<'a>(solver: &Solver<'a>, requests: &Receiver<Request>, replies: &Sender<Reply<'a>>) {
    while let Ok(mut request) = requests.recv() {
        // Only the newest queued request matters
        while let Ok(newer) = requests.try_recv() {
            request = newer;
        }

        if request.cancel.load(Ordering::Relaxed) {
            log::debug!("recommendation {} cancelled before start", request.generation);
            continue;
        }

        match solver.recommend_cancellable(&request.guesses, request.word_length, &request.cancel) {
            Ok(recommendation) => {
                let reply = Reply {
                    generation: request.generation,
                    recommendation,
                };
                if replies.send(reply).is_err() {
                    break;
                }
            }
            Err(Cancelled) => {
                log::debug!("recommendation {} cancelled", request.generation);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_guess;
    use crate::wordlists::WordList;
    use std::time::{Duration, Instant};

    fn lists() -> WordLists {
        WordLists::new(
            WordList::from_strs(&["sodas", "today", "codas", "found", "modal"]),
            WordList::from_strs(&["codas", "sodas", "today"]),
        )
    }

    fn guesses(texts: &[&str]) -> Vec<WordGuess> {
        texts.iter().map(|t| parse_guess(t).unwrap()).collect()
    }

    fn wait<'a>(worker: &mut RecommendationWorker<'a>) -> Reply<'a> {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if let Some(reply) = worker.poll() {
                return reply;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("no reply from worker");
    }

    #[test]
    fn replies_with_recommendation() {
        let lists = lists();
        std::thread::scope(|scope| {
            let mut worker = RecommendationWorker::spawn(scope, &lists);
            let generation = worker.submit(guesses(&["f=oun+d", "m=o=d=al"]), 5);
            assert!(worker.is_pending());

            let reply = wait(&mut worker);
            assert_eq!(reply.generation, generation);
            assert_eq!(reply.recommendation.unwrap().word.text(), "SODAS");
            assert!(!worker.is_pending());
        });
    }

    #[test]
    fn only_newest_generation_is_delivered() {
        let lists = lists();
        std::thread::scope(|scope| {
            let mut worker = RecommendationWorker::spawn(scope, &lists);
            worker.submit(guesses(&["f=oun+d", "m=o=d=al"]), 5);
            let newest = worker.submit(guesses(&["c=o=d=a=s"]), 5);

            let reply = wait(&mut worker);
            assert_eq!(reply.generation, newest);
            assert_eq!(reply.recommendation.unwrap().word.text(), "SODAS");
            assert_eq!(reply.recommendation.unwrap().candidates, 1);

            // Nothing else arrives for the superseded request
            std::thread::sleep(Duration::from_millis(50));
            assert!(worker.poll().is_none());
        });
    }

    #[test]
    fn new_request_raises_previous_flag() {
        let lists = lists();
        std::thread::scope(|scope| {
            let mut worker = RecommendationWorker::spawn(scope, &lists);
            worker.submit(guesses(&["f=oun+d"]), 5);
            let first = Arc::clone(&worker.cancel);

            worker.submit(guesses(&["f=oun+d", "m=o=d=al"]), 5);

            assert!(first.load(Ordering::Relaxed));
            assert!(!worker.cancel.load(Ordering::Relaxed));
            assert_eq!(worker.generation(), 2);
        });
    }

    #[test]
    fn cancel_discards_reply() {
        let lists = lists();
        std::thread::scope(|scope| {
            let mut worker = RecommendationWorker::spawn(scope, &lists);
            worker.submit(guesses(&["f=oun+d", "m=o=d=al"]), 5);
            worker.cancel();

            assert!(!worker.is_pending());
            std::thread::sleep(Duration::from_millis(50));
            assert!(worker.poll().is_none());
        });
    }

    #[test]
    fn dropping_worker_cancels_request_in_flight() {
        let lists = lists();
        std::thread::scope(|scope| {
            let mut worker = RecommendationWorker::spawn(scope, &lists);
            worker.submit(guesses(&["f=oun+d"]), 5);
            let in_flight = Arc::clone(&worker.cancel);

            drop(worker);
            assert!(in_flight.load(Ordering::Relaxed));
        });
    }

    #[test]
    fn empty_history_replies_none() {
        let lists = lists();
        std::thread::scope(|scope| {
            let mut worker = RecommendationWorker::spawn(scope, &lists);
            worker.submit(Vec::new(), 5);
            assert_eq!(wait(&mut worker).recommendation, None);
        });
    }
}
