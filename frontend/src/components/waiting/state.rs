//! State of the waiting view.

use gloo_timers::callback::Interval;

use common::jobs::poll::{GenerationMode, PollTracker};
use common::jobs::BulkJob;

pub const QUOTES: [&str; 10] = [
    "Drinking tea is important, but it has nothing to do with your work.",
    "Somewhere a developer just pressed save.",
    "Your pages are loading. The universe is expanding.",
    "This is the part where we pretend progress bars are honest.",
    "A build finished somewhere and nobody clapped.",
    "We are waiting. The servers are, too.",
    "If you can read this, the job is still running.",
    "Your template is doing its best.",
    "Loading... and pondering the meaning of tabs vs spaces.",
    "An API call walks into a bar. It gets a 200.",
];

pub struct WaitingView {
    pub job_id: String,
    pub mode: GenerationMode,
    /// Last snapshot received; rendered as-is.
    pub job: Option<BulkJob>,
    pub error: Option<String>,
    /// Settle-once terminal-transition guard.
    pub tracker: PollTracker,
    /// True while a status request is outstanding; ticks observed in that
    /// window are skipped so slow responses cannot stack requests.
    pub in_flight: bool,
    /// Dropping the handle cancels the repeating task.
    pub poll_timer: Option<Interval>,
    pub quote_timer: Option<Interval>,
    pub quote_order: Vec<usize>,
    pub quote_index: usize,
}

impl WaitingView {
    pub fn new(job_id: String, mode: GenerationMode) -> Self {
        Self {
            job_id,
            mode,
            job: None,
            error: None,
            tracker: PollTracker::new(),
            in_flight: false,
            poll_timer: None,
            quote_timer: None,
            quote_order: shuffled_indices(QUOTES.len()),
            quote_index: 0,
        }
    }

    pub fn stop_polling(&mut self) {
        self.poll_timer = None;
    }

    pub fn current_quote(&self) -> &'static str {
        self.quote_order
            .get(self.quote_index)
            .map(|&index| QUOTES[index])
            .unwrap_or(QUOTES[0])
    }

    pub fn advance_quote(&mut self) {
        if self.quote_index + 1 < self.quote_order.len() {
            self.quote_index += 1;
        } else {
            self.quote_order = shuffled_indices(QUOTES.len());
            self.quote_index = 0;
        }
    }
}

fn shuffled_indices(len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    for i in (1..order.len()).rev() {
        let j = (js_sys::Math::random() * (i as f64 + 1.0)).floor() as usize;
        order.swap(i, j);
    }
    order
}
