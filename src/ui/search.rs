/// Popup search view: type a fragment of a tab title, click a result (or
/// press Enter on it) to jump to that tab.
use std::rc::Rc;

use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::matcher::filter_tabs;
use crate::platform::{Localization, PreferenceStore, TabProvider};
use crate::prefs;
use crate::tab_data::TabRecord;

/// Keys that move focus between the input and the result rows rather than
/// editing the query; they must not restart the search.
const NAVIGATION_KEYS: [&str; 3] = ["Tab", "ArrowUp", "ArrowDown"];

/// Search bookkeeping kept free of DOM and framework types.
///
/// Every keystroke supersedes whatever query is still in flight: `begin_query`
/// hands out a ticket, and `accept` throws away completions whose ticket is
/// no longer current. The browser gives no way to cancel an issued query, so
/// late responses are discarded here instead.
pub struct SearchState {
    seq: u64,
    case_sensitive: bool,
    results: Vec<TabRecord>,
}

impl SearchState {
    pub fn new(case_sensitive: bool) -> SearchState {
        SearchState {
            seq: 0,
            case_sensitive,
            results: Vec::new(),
        }
    }

    /// Start a new query: drop the rendered results and supersede any query
    /// still in flight. Returns the ticket its completion must present.
    pub fn begin_query(&mut self) -> u64 {
        self.seq += 1;
        self.results.clear();
        self.seq
    }

    /// Take in a completed query. Stale tickets are discarded outright;
    /// a current ticket replaces the whole result set with the tabs that
    /// match `query`. Returns whether the result set was replaced.
    pub fn accept(&mut self, ticket: u64, query: &str, tabs: &[TabRecord]) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.results = filter_tabs(query, tabs, self.case_sensitive);
        true
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.seq
    }

    pub fn results(&self) -> &[TabRecord] {
        &self.results
    }
}

pub enum SearchMsg {
    /// A key went down in the query input.
    QueryEdited(KeyboardEvent),
    /// A tab query completed.
    TabsArrived { ticket: u64, tabs: Vec<TabRecord> },
    /// A tab query failed; rendered as "no results".
    QueryFailed { ticket: u64, reason: String },
    /// A result row was clicked.
    Activate(i32),
    /// A key went down on a focused result row.
    RowKey { tab_id: i32, event: KeyboardEvent },
}

#[derive(Properties)]
pub struct SearchProps {
    pub tabs: Rc<dyn TabProvider>,
    pub prefs: Rc<dyn PreferenceStore>,
    pub i18n: Rc<dyn Localization>,
}

impl PartialEq for SearchProps {
    fn eq(&self, other: &SearchProps) -> bool {
        Rc::ptr_eq(&self.tabs, &other.tabs)
            && Rc::ptr_eq(&self.prefs, &other.prefs)
            && Rc::ptr_eq(&self.i18n, &other.i18n)
    }
}

pub struct SearchView {
    state: SearchState,
    instruction: String,
    input_ref: NodeRef,
}

impl Component for SearchView {
    type Message = SearchMsg;
    type Properties = SearchProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        SearchView {
            // The case policy is read once per popup instance.
            state: SearchState::new(prefs::load_case_flag(props.prefs.as_ref())),
            instruction: props.i18n.message("instruction"),
            input_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        // Focus on field
        match self.input_ref.cast::<HtmlInputElement>() {
            Some(input) => {
                let _ = input.focus();
            }
            None => log::error!("Missing component: search input"),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SearchMsg::QueryEdited(event) => {
                if NAVIGATION_KEYS.contains(&event.key().as_str()) {
                    return false;
                }
                let ticket = self.state.begin_query();
                let provider = ctx.props().tabs.clone();
                ctx.link().send_future(async move {
                    match provider.query_tabs("").await {
                        Ok(tabs) => SearchMsg::TabsArrived { ticket, tabs },
                        Err(reason) => SearchMsg::QueryFailed { ticket, reason },
                    }
                });
                true
            }
            SearchMsg::TabsArrived { ticket, tabs } => {
                // Read the query now, not at keydown: the keydown event
                // fires before the character lands in the input.
                let query = self.query_text();
                self.state.accept(ticket, &query, &tabs)
            }
            SearchMsg::QueryFailed { ticket, reason } => {
                if self.state.is_current(ticket) {
                    log::warn!("Tab query failed: {}", reason);
                }
                false
            }
            SearchMsg::Activate(tab_id) => {
                ctx.props().tabs.activate_tab(tab_id);
                false
            }
            SearchMsg::RowKey { tab_id, event } => {
                if event.key() == "Enter" {
                    ctx.props().tabs.activate_tab(tab_id);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="tabfinder-search">
                <p class="instructions">{ self.instruction.clone() }</p>
                <input
                    type="text"
                    class="search-input"
                    ref={self.input_ref.clone()}
                    onkeydown={link.callback(SearchMsg::QueryEdited)}
                />
                <div class="found-tabs">
                    { for self.state.results().iter().map(|tab| result_row(link, tab)) }
                </div>
            </div>
        }
    }
}

impl SearchView {
    fn query_text(&self) -> String {
        self.input_ref
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }
}

/// One focusable, clickable row per matching tab.
fn result_row(link: &Scope<SearchView>, tab: &TabRecord) -> Html {
    let tab_id = tab.id;
    let activate = link.callback(move |_: MouseEvent| SearchMsg::Activate(tab_id));
    let row_key = link.callback(move |event: KeyboardEvent| SearchMsg::RowKey { tab_id, event });

    html! {
        <div class="result-row" tabindex="0" onclick={activate} onkeydown={row_key}>
            { tab.title.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<TabRecord> {
        vec![
            TabRecord::new(1, "Rust stdlib docs"),
            TabRecord::new(2, "Issue tracker"),
            TabRecord::new(3, "rustup updates"),
        ]
    }

    #[test]
    fn test_begin_query_clears_results() {
        let mut state = SearchState::new(false);
        let ticket = state.begin_query();
        assert!(state.accept(ticket, "", &snapshot()));
        assert_eq!(state.results().len(), 3);

        state.begin_query();
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_accept_filters_with_case_policy() {
        let mut state = SearchState::new(false);
        let ticket = state.begin_query();
        state.accept(ticket, "RUST", &snapshot());
        assert_eq!(
            state.results(),
            &[
                TabRecord::new(1, "Rust stdlib docs"),
                TabRecord::new(3, "rustup updates"),
            ]
        );

        let mut sensitive = SearchState::new(true);
        let ticket = sensitive.begin_query();
        sensitive.accept(ticket, "RUST", &snapshot());
        assert!(sensitive.results().is_empty());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = SearchState::new(false);
        let old = state.begin_query();
        let fresh = state.begin_query();

        // The older query resolves after the newer one.
        assert!(state.accept(fresh, "rust", &snapshot()));
        let rendered = state.results().to_vec();

        assert!(!state.accept(old, "", &snapshot()));
        assert_eq!(state.results(), rendered);
    }

    #[test]
    fn test_out_of_order_arrival_keeps_newest_wins() {
        let mut state = SearchState::new(false);
        let old = state.begin_query();
        let fresh = state.begin_query();

        // Stale response lands first; it must not render at all.
        assert!(!state.accept(old, "issue", &snapshot()));
        assert!(state.results().is_empty());

        assert!(state.accept(fresh, "issue", &snapshot()));
        assert_eq!(state.results(), &[TabRecord::new(2, "Issue tracker")]);
    }

    #[test]
    fn test_is_current_tracks_latest_ticket() {
        let mut state = SearchState::new(false);
        let first = state.begin_query();
        assert!(state.is_current(first));

        let second = state.begin_query();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }
}
