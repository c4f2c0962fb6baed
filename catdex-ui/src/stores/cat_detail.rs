//! Cat detail state store
//!
//! Drives the detail page through fetch cycles. Every cycle gets a new
//! generation number; outcomes carrying an older generation are dropped so a
//! slow response for a previous cat can never replace the current one.

use crate::display_types::CatImage;
use tracing::debug;

/// What the detail page shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatDetailState {
    /// A fetch is outstanding, or there is no cat id to fetch
    #[default]
    Loading,
    /// The cat could not be found or the request failed
    Unavailable,
    /// The cat was fetched
    Loaded(CatImage),
}

/// Result of one fetch, already collapsed for display
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Found(CatImage),
    Unavailable,
}

/// Handle for one outstanding fetch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub cat_id: String,
}

/// Fetch-cycle state machine for the detail page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatDetailCycle {
    cat_id: Option<String>,
    generation: u64,
    state: CatDetailState,
}

impl CatDetailCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a cycle for `cat_id` if it differs from the current one.
    ///
    /// Returns a ticket when a fetch must be issued. Blank ids count as
    /// absent: the state goes back to `Loading` and no ticket is returned.
    /// Other ids are passed through untouched.
    pub fn request(&mut self, cat_id: Option<&str>) -> Option<FetchTicket> {
        let cat_id = cat_id.filter(|id| !id.trim().is_empty());

        if self.generation > 0 && self.cat_id.as_deref() == cat_id {
            return None;
        }

        self.generation += 1;
        self.cat_id = cat_id.map(str::to_string);
        self.state = CatDetailState::Loading;

        let cat_id = self.cat_id.clone()?;
        Some(FetchTicket {
            generation: self.generation,
            cat_id,
        })
    }

    /// Apply the outcome of a fetch. Returns false for stale tickets.
    pub fn resolve(&mut self, ticket: &FetchTicket, outcome: FetchOutcome) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Dropping stale outcome for cat {} (generation {} < {})",
                ticket.cat_id, ticket.generation, self.generation
            );
            return false;
        }

        self.state = match outcome {
            FetchOutcome::Found(cat) => CatDetailState::Loaded(cat),
            FetchOutcome::Unavailable => CatDetailState::Unavailable,
        };
        true
    }

    pub fn state(&self) -> &CatDetailState {
        &self.state
    }

    pub fn cat_id(&self) -> Option<&str> {
        self.cat_id.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::Breed;

    fn cat(id: &str) -> CatImage {
        CatImage {
            id: id.to_string(),
            url: format!("http://img/{id}.jpg"),
            width: None,
            height: None,
            breeds: vec![Breed {
                id: "beng".into(),
                name: Some("Bengal".into()),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let cycle = CatDetailCycle::new();
        assert_eq!(cycle.state(), &CatDetailState::Loading);
        assert_eq!(cycle.cat_id(), None);
    }

    #[test]
    fn test_found_outcome_loads_cat() {
        let mut cycle = CatDetailCycle::new();
        let ticket = cycle.request(Some("abc")).unwrap();
        assert_eq!(ticket.cat_id, "abc");
        assert_eq!(cycle.state(), &CatDetailState::Loading);

        assert!(cycle.resolve(&ticket, FetchOutcome::Found(cat("abc"))));
        assert_eq!(cycle.state(), &CatDetailState::Loaded(cat("abc")));
    }

    #[test]
    fn test_unavailable_outcome() {
        let mut cycle = CatDetailCycle::new();
        let ticket = cycle.request(Some("xx00")).unwrap();
        assert!(cycle.resolve(&ticket, FetchOutcome::Unavailable));
        assert_eq!(cycle.state(), &CatDetailState::Unavailable);
    }

    #[test]
    fn test_new_request_resets_to_loading() {
        let mut cycle = CatDetailCycle::new();
        let ticket = cycle.request(Some("abc")).unwrap();
        cycle.resolve(&ticket, FetchOutcome::Unavailable);

        let next = cycle.request(Some("def")).unwrap();
        assert_eq!(next.generation, ticket.generation + 1);
        assert_eq!(cycle.state(), &CatDetailState::Loading);
    }

    #[test]
    fn test_same_id_does_not_refetch() {
        let mut cycle = CatDetailCycle::new();
        let ticket = cycle.request(Some("abc")).unwrap();
        cycle.resolve(&ticket, FetchOutcome::Found(cat("abc")));

        assert_eq!(cycle.request(Some("abc")), None);
        assert_eq!(cycle.generation(), 1);
        assert_eq!(cycle.state(), &CatDetailState::Loaded(cat("abc")));
    }

    #[test]
    fn test_stale_outcome_is_dropped() {
        let mut cycle = CatDetailCycle::new();
        let old = cycle.request(Some("abc")).unwrap();
        let new = cycle.request(Some("def")).unwrap();

        assert!(!cycle.resolve(&old, FetchOutcome::Found(cat("abc"))));
        assert_eq!(cycle.state(), &CatDetailState::Loading);

        assert!(cycle.resolve(&new, FetchOutcome::Found(cat("def"))));
        assert!(!cycle.resolve(&old, FetchOutcome::Unavailable));
        assert_eq!(cycle.state(), &CatDetailState::Loaded(cat("def")));
    }

    #[test]
    fn test_missing_id_stays_loading() {
        let mut cycle = CatDetailCycle::new();
        assert_eq!(cycle.request(None), None);
        assert_eq!(cycle.request(Some("   ")), None);
        assert_eq!(cycle.state(), &CatDetailState::Loading);
    }

    #[test]
    fn test_id_is_not_rewritten() {
        let mut cycle = CatDetailCycle::new();
        let ticket = cycle.request(Some(" beng")).unwrap();
        assert_eq!(ticket.cat_id, " beng");
        assert_eq!(cycle.cat_id(), Some(" beng"));

        let next = cycle.request(Some("beng")).unwrap();
        assert_eq!(next.cat_id, "beng");
    }

    #[test]
    fn test_missing_id_invalidates_outstanding_fetch() {
        let mut cycle = CatDetailCycle::new();
        let ticket = cycle.request(Some("abc")).unwrap();
        assert_eq!(cycle.request(None), None);

        assert!(!cycle.resolve(&ticket, FetchOutcome::Found(cat("abc"))));
        assert_eq!(cycle.state(), &CatDetailState::Loading);
    }
}
