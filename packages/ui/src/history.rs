//! Lookups made this session, newest last, shown in the header panel.
//!
//! Each lookup gets one entry when it is submitted and is settled in place
//! when its response is applied. A lookup overtaken by a newer submit on the
//! same page is marked superseded instead of borrowing the newer outcome.
//! Entries can be run again: the panel parks the lookup here and the page that
//! owns it picks it up through [`use_rerun`].

use api::{MyIpView, QueryState, QueryView};
use dioxus::prelude::*;

use crate::Page;

/// Oldest entries are dropped beyond this.
pub const MAX_ENTRIES: usize = 200;

/// What was looked up, enough to run it again.
#[derive(Clone, Debug, PartialEq)]
pub struct Lookup {
    pub page: Page,
    /// Trimmed input; empty for the My IP refresh.
    pub input: String,
}

impl Lookup {
    pub fn new(page: Page, input: &str) -> Self {
        Self {
            page,
            input: input.trim().to_string(),
        }
    }

    pub fn describe(&self) -> String {
        if self.input.is_empty() {
            self.page.label().to_string()
        } else {
            format!("{} {}", self.page.label(), self.input)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LookupStatus {
    Running,
    Succeeded,
    Failed(String),
    Superseded,
}

impl LookupStatus {
    /// Status of a query view after its submit returned. `applied` is what the
    /// client reported: `false` means the response was dropped as stale.
    pub fn of<T>(view: &QueryView<T>, applied: bool) -> Self {
        if !applied {
            return LookupStatus::Superseded;
        }
        match view.state() {
            QueryState::Loaded(_) => LookupStatus::Succeeded,
            QueryState::Failed(message) => LookupStatus::Failed(message.clone()),
            QueryState::Idle | QueryState::Pending => LookupStatus::Running,
        }
    }

    /// A refresh fails if the address did; a failed detail lookup still fails
    /// the entry even though the address is shown.
    pub fn of_my_ip(view: &MyIpView, applied: bool) -> Self {
        match LookupStatus::of(&view.address, applied) {
            LookupStatus::Succeeded => match view.details.state() {
                QueryState::Failed(message) => LookupStatus::Failed(message.clone()),
                _ => LookupStatus::Succeeded,
            },
            other => other,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            LookupStatus::Running => "running",
            LookupStatus::Succeeded => "success",
            LookupStatus::Failed(_) => "error",
            LookupStatus::Superseded => "superseded",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    pub started_at: String,
    pub lookup: Lookup,
    pub status: LookupStatus,
}

#[derive(Clone, Debug, Default)]
pub struct LookupHistory {
    pub entries: Vec<HistoryEntry>,
    pub visible: bool,
    next_id: u64,
    rerun: Option<Lookup>,
}

impl LookupHistory {
    /// Record a submitted lookup as running. Returns its id for [`Self::settle`].
    pub fn start(&mut self, started_at: String, lookup: Lookup) -> u64 {
        if self.entries.len() >= MAX_ENTRIES {
            let excess = self.entries.len() + 1 - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(HistoryEntry {
            id,
            started_at,
            lookup,
            status: LookupStatus::Running,
        });
        id
    }

    /// Set the outcome of a lookup. Ignored once the entry was cleared or evicted.
    pub fn settle(&mut self, id: u64, status: LookupStatus) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.status = status;
        }
    }

    pub fn has_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.status, LookupStatus::Failed(_)))
    }

    /// Park entry `id` for its page to run again. Returns the page to open.
    pub fn request_rerun(&mut self, id: u64) -> Option<Page> {
        let lookup = self.entries.iter().find(|e| e.id == id)?.lookup.clone();
        let page = lookup.page;
        self.rerun = Some(lookup);
        Some(page)
    }

    pub fn has_rerun_for(&self, page: Page) -> bool {
        self.rerun.as_ref().is_some_and(|l| l.page == page)
    }

    /// Hand the parked lookup to `page`, if it is the one waiting.
    pub fn take_rerun(&mut self, page: Page) -> Option<String> {
        if !self.has_rerun_for(page) {
            return None;
        }
        self.rerun.take().map(|l| l.input)
    }
}

pub fn use_history() -> Signal<LookupHistory> {
    use_context::<Signal<LookupHistory>>()
}

/// Record a lookup about to be submitted. Blank input is not recorded: the
/// form shows the validation message and nothing is sent.
pub fn begin_lookup(history: &mut Signal<LookupHistory>, page: Page, input: &str) -> Option<u64> {
    if page != Page::MyIp && input.trim().is_empty() {
        return None;
    }
    let lookup = Lookup::new(page, input);
    tracing::info!("lookup: {}", lookup.describe());
    Some(history.write().start(current_time(), lookup))
}

pub fn settle_lookup(history: &mut Signal<LookupHistory>, id: Option<u64>, status: LookupStatus) {
    if let Some(id) = id {
        tracing::debug!("lookup #{id} settled: {status:?}");
        history.write().settle(id, status);
    }
}

/// Run `run` with the input of a lookup parked for `page` by the history panel.
pub fn use_rerun(page: Page, mut run: impl FnMut(String) + 'static) {
    let mut history = use_history();
    use_effect(move || {
        if !history.read().has_rerun_for(page) {
            return;
        }
        let parked = history.write().take_rerun(page);
        if let Some(input) = parked {
            run(input);
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
