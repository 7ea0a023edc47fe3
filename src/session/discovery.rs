use crate::core::{filter_candidates, FilterCriteria};
use crate::models::Candidate;

/// Criteria lifecycle state for the discovery screen
///
/// `Editing` accumulates interim selections without invoking the evaluator;
/// `apply` finalizes them, `cancel_editing` restores whatever was applied
/// before the draft was opened.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaState {
    Default,
    Editing {
        draft: FilterCriteria,
        prior_applied: Option<FilterCriteria>,
    },
    Applied {
        criteria: FilterCriteria,
    },
}

/// What the current result list means, for the empty-state rendering
///
/// The presentation layer must tell an empty candidate store apart from a
/// criteria set that matched nothing, and offer a reset affordance for the
/// latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    EmptyStore,
    NoMatches,
    Matches(usize),
}

/// Discovery screen session: owns the criteria lifecycle and result list
///
/// The session holds an immutable candidate snapshot supplied at
/// construction and drives the pure evaluator on its behalf. Evaluator
/// invocations are counted so the one-call-per-transition contract is
/// observable.
#[derive(Debug, Clone)]
pub struct DiscoverySession {
    candidates: Vec<Candidate>,
    state: CriteriaState,
    results: Vec<Candidate>,
    evaluations: u64,
}

impl DiscoverySession {
    /// Open a discovery session over a candidate snapshot
    ///
    /// Runs one evaluation with default criteria so the initial list is
    /// populated, as the screen does on mount.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let mut session = Self {
            candidates,
            state: CriteriaState::Default,
            results: Vec::new(),
            evaluations: 0,
        };
        session.evaluate(&FilterCriteria::default());
        session
    }

    pub fn state(&self) -> &CriteriaState {
        &self.state
    }

    /// The criteria currently in effect (a draft in progress does not count)
    pub fn applied_criteria(&self) -> FilterCriteria {
        match &self.state {
            CriteriaState::Default => FilterCriteria::default(),
            CriteriaState::Editing { prior_applied, .. } => {
                prior_applied.clone().unwrap_or_default()
            }
            CriteriaState::Applied { criteria } => criteria.clone(),
        }
    }

    /// Current filtered result list
    pub fn results(&self) -> &[Candidate] {
        &self.results
    }

    pub fn outcome(&self) -> DiscoveryOutcome {
        if self.candidates.is_empty() {
            DiscoveryOutcome::EmptyStore
        } else if self.results.is_empty() {
            DiscoveryOutcome::NoMatches
        } else {
            DiscoveryOutcome::Matches(self.results.len())
        }
    }

    /// Total evaluator invocations so far
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Open a criteria draft seeded from the applied criteria
    ///
    /// Re-entering while already editing keeps the existing draft.
    pub fn begin_editing(&mut self) {
        if matches!(self.state, CriteriaState::Editing { .. }) {
            tracing::debug!("begin_editing called while already editing; keeping draft");
            return;
        }

        let prior_applied = match &self.state {
            CriteriaState::Applied { criteria } => Some(criteria.clone()),
            _ => None,
        };
        let draft = prior_applied.clone().unwrap_or_default();

        self.state = CriteriaState::Editing {
            draft,
            prior_applied,
        };
    }

    pub fn set_draft_search_term(&mut self, term: &str) {
        if let Some(draft) = self.draft_mut("set_draft_search_term") {
            draft.search_term = term.to_string();
        }
    }

    pub fn set_draft_max_distance(&mut self, miles: f64) {
        if let Some(draft) = self.draft_mut("set_draft_max_distance") {
            draft.max_distance_miles = miles;
        }
    }

    pub fn toggle_draft_category(&mut self, category: &str) {
        if let Some(draft) = self.draft_mut("toggle_draft_category") {
            draft.toggle_category(category);
        }
    }

    pub fn toggle_draft_availability(&mut self, tag: &str) {
        if let Some(draft) = self.draft_mut("toggle_draft_availability") {
            draft.toggle_availability(tag);
        }
    }

    /// Finalize the draft and run exactly one evaluation with it
    pub fn apply(&mut self) {
        let draft = match std::mem::replace(&mut self.state, CriteriaState::Default) {
            CriteriaState::Editing { draft, .. } => draft,
            other => {
                tracing::warn!("apply called outside editing state; ignoring");
                self.state = other;
                return;
            }
        };

        self.state = CriteriaState::Applied {
            criteria: draft.clone(),
        };
        self.evaluate(&draft);
    }

    /// Discard the draft and restore the prior state; no evaluation
    pub fn cancel_editing(&mut self) {
        if let CriteriaState::Editing { prior_applied, .. } =
            std::mem::replace(&mut self.state, CriteriaState::Default)
        {
            self.state = match prior_applied {
                Some(criteria) => CriteriaState::Applied { criteria },
                None => CriteriaState::Default,
            };
        }
    }

    /// Return to defaults from any state, running one evaluation
    pub fn reset(&mut self) {
        self.state = CriteriaState::Default;
        self.evaluate(&FilterCriteria::default());
    }

    /// Live search box: one edit-and-apply step, one evaluation
    ///
    /// Any open draft is discarded; the term applies on top of whatever
    /// criteria were last applied.
    pub fn search(&mut self, term: &str) {
        if matches!(self.state, CriteriaState::Editing { .. }) {
            tracing::debug!("search while editing; discarding draft");
            self.cancel_editing();
        }

        let mut criteria = self.applied_criteria();
        criteria.search_term = term.to_string();

        self.state = CriteriaState::Applied {
            criteria: criteria.clone(),
        };
        self.evaluate(&criteria);
    }

    fn draft_mut(&mut self, operation: &str) -> Option<&mut FilterCriteria> {
        match &mut self.state {
            CriteriaState::Editing { draft, .. } => Some(draft),
            _ => {
                tracing::warn!("{} called outside editing state; ignoring", operation);
                None
            }
        }
    }

    fn evaluate(&mut self, criteria: &FilterCriteria) {
        self.results = filter_candidates(&self.candidates, criteria);
        self.evaluations += 1;
        tracing::debug!(
            "Evaluated criteria: {} of {} candidates pass",
            self.results.len(),
            self.candidates.len()
        );
    }
}
