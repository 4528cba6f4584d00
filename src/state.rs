use crate::api::HeroSearch;
use crate::config::{CardStats, Config};
use crate::error::SearchError;
use crate::model::Hero;
use crate::theme::Theme;
use gpui::*;
use std::sync::Arc;

pub struct AppState {
    pub service: Arc<dyn HeroSearch>,
    pub theme: Theme,
    pub card_stats: CardStats,
}

impl Global for AppState {}

impl AppState {
    pub fn new(service: Arc<dyn HeroSearch>, config: &Config) -> Self {
        Self {
            service,
            theme: config.theme(),
            card_stats: config.card_stats,
        }
    }
}

/// Handed out when a search starts; the response is only applied if its
/// generation is still the latest when it arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

/// Everything the search screen renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    pub query: String,
    pub results: Vec<Hero>,
    pub selected: Option<Hero>,
    pub loading: bool,
    pub has_searched: bool,
    pub error: Option<String>,
    generation: u64,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_query_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    pub fn can_search(&self) -> bool {
        !self.is_query_blank() && !self.loading
    }

    /// Returns `None` for a blank query, leaving the state untouched.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.is_query_blank() {
            return None;
        }

        self.error = None;
        self.loading = true;
        self.has_searched = true;
        self.generation += 1;

        Some(SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Applies a finished request. Returns `false` when a newer search has
    /// started since `generation` was issued and the outcome was dropped.
    pub fn complete_search(
        &mut self,
        generation: u64,
        outcome: Result<Vec<Hero>, SearchError>,
    ) -> bool {
        if generation != self.generation {
            log::debug!(
                "dropping stale search response (generation {generation}, latest {})",
                self.generation
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(heroes) => {
                self.results = heroes;
                self.error = None;
            }
            Err(err) => {
                self.results.clear();
                self.error = Some(err.to_string());
            }
        }
        true
    }

    pub fn select_hero(&mut self, hero: Option<Hero>) {
        if let Some(hero) = &hero {
            log::debug!("showing hero {} ({})", hero.name, hero.id);
        }
        self.selected = hero;
    }

    pub fn shows_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn shows_empty_state(&self) -> bool {
        self.results.is_empty() && !self.loading && self.has_searched && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::rust_2021::test;
    use crate::api::interpret;
    use crate::model::fixtures::hero;
    use crate::model::ApiResponse;
    use anyhow::anyhow;

    fn with_query(query: &str) -> ScreenState {
        ScreenState {
            query: query.to_string(),
            ..ScreenState::new()
        }
    }

    fn envelope(status: &str, results: Vec<Hero>) -> anyhow::Result<ApiResponse> {
        Ok(ApiResponse {
            response: status.to_string(),
            results,
            error: None,
        })
    }

    #[test]
    fn initial_state_is_empty() {
        let state = ScreenState::new();
        assert!(state.results.is_empty());
        assert!(state.selected.is_none());
        assert!(!state.loading);
        assert!(!state.has_searched);
        assert!(state.error.is_none());
        assert!(!state.can_search());
        assert!(!state.shows_empty_state());
    }

    #[test]
    fn begin_search_resets_error_and_marks_loading() {
        let mut state = with_query("Batman");
        state.error = Some("old".into());

        let ticket = state.begin_search().unwrap();
        assert_eq!(ticket.query, "Batman");
        assert!(state.loading);
        assert!(state.has_searched);
        assert!(state.error.is_none());
        assert!(!state.can_search());
    }

    #[test]
    fn successful_search_replaces_results() {
        let mut state = with_query("Batman");
        let ticket = state.begin_search().unwrap();
        let batman = hero("Batman", ["100"; 6]);

        let applied = state.complete_search(
            ticket.generation,
            interpret(envelope("success", vec![batman.clone()])),
        );
        assert!(applied);
        assert!(!state.loading);
        assert_eq!(state.results, vec![batman]);
        assert!(state.shows_results());
        assert!(state.error.is_none());

        let card = &state.results[0];
        assert!(card.is_notable());
    }

    #[test]
    fn empty_results_show_not_found() {
        let mut state = with_query("Zzzznotahero");
        let ticket = state.begin_search().unwrap();

        state.complete_search(ticket.generation, interpret(envelope("success", Vec::new())));
        assert_eq!(
            state.error.as_deref(),
            Some("No heroes found with that name")
        );
        assert!(!state.loading);
        assert!(!state.shows_results());
        assert!(!state.shows_empty_state());
    }

    #[test]
    fn not_found_clears_previous_results() {
        let mut state = with_query("Batman");
        let first = state.begin_search().unwrap();
        state.complete_search(first.generation, Ok(vec![hero("Batman", ["50"; 6])]));

        state.query = "nobody".into();
        let second = state.begin_search().unwrap();
        state.complete_search(second.generation, interpret(envelope("error", Vec::new())));
        assert!(state.results.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("No heroes found with that name")
        );
    }

    #[test]
    fn blank_query_is_a_no_op() {
        let mut state = with_query("   ");
        let before = state.clone();

        assert!(state.begin_search().is_none());
        assert_eq!(state, before);
        assert!(!state.can_search());
    }

    #[test]
    fn transport_fault_reports_cause() {
        let mut state = with_query("Superman");
        let ticket = state.begin_search().unwrap();

        state.complete_search(ticket.generation, interpret(Err(anyhow!("timeout"))));
        assert_eq!(state.error.as_deref(), Some("Error loading heroes: timeout"));
        assert!(!state.loading);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = with_query("Bat");
        let first = state.begin_search().unwrap();
        state.query = "Batman".into();
        let second = state.begin_search().unwrap();
        assert!(second.generation > first.generation);

        let batman = hero("Batman", ["90"; 6]);
        assert!(state.complete_search(second.generation, Ok(vec![batman.clone()])));
        assert!(!state.complete_search(first.generation, Ok(vec![hero("Batgirl", ["10"; 6])])));
        assert_eq!(state.results, vec![batman]);
        assert!(!state.loading);
    }

    #[test]
    fn loading_persists_until_latest_response() {
        let mut state = with_query("Bat");
        let first = state.begin_search().unwrap();
        let second = state.begin_search().unwrap();

        state.complete_search(first.generation, Err(SearchError::NotFound));
        assert!(state.loading);
        assert!(state.error.is_none());

        state.complete_search(second.generation, Err(SearchError::NotFound));
        assert!(!state.loading);
    }

    #[test]
    fn selecting_and_dismissing_hero() {
        let mut state = ScreenState::new();
        let batman = hero("Batman", ["100"; 6]);

        state.select_hero(Some(batman.clone()));
        assert_eq!(state.selected, Some(batman));

        state.select_hero(None);
        assert!(state.selected.is_none());
    }

    #[test]
    fn dismissing_when_hidden_is_idempotent() {
        let mut state = ScreenState::new();
        let before = state.clone();
        state.select_hero(None);
        assert_eq!(state, before);
    }

    #[test]
    fn empty_state_only_after_clean_empty_search() {
        let mut state = with_query("x");
        let ticket = state.begin_search().unwrap();
        assert!(!state.shows_empty_state());
        state.complete_search(ticket.generation, Ok(Vec::new()));
        assert!(state.shows_empty_state());
    }
}
