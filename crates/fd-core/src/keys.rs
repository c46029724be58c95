//! Candidate key discovery.
//!
//! Three strategies of increasing cost:
//!
//! - **direct**: left sides of declared dependencies whose closure covers the
//!   whole domain. Cheap, often finds nothing.
//! - **augmented**: declared-dependency closures missing at most two
//!   attributes, with those attributes added to the left side. A heuristic:
//!   the result is neither checked for minimality nor re-closed.
//! - **exhaustive**: backtracking over every attribute subset (the empty
//!   set included), followed by
//!   [`minimal_keys`]. The only strategy that finds the true candidate keys.

use crate::attr_set::AttrSet;
use crate::error::{CoreError, CoreResult};
use crate::relation::Relation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Number of domain attributes above which an unbounded exhaustive search
/// gets a warning.
const WIDE_RELATION: usize = 16;

/// Which candidate key strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyStrategy {
    /// Direct first, augmented if that finds nothing, exhaustive if the
    /// cheaper strategies find nothing or only keys wider than two attributes.
    #[default]
    Auto,
    Direct,
    Augmented,
    Exhaustive,
}

impl fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Direct => write!(f, "direct"),
            Self::Augmented => write!(f, "augmented"),
            Self::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// Upper bound on the work an exhaustive search may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchBudget {
    /// Maximum number of attribute-set closures to compute (unbounded when
    /// absent)
    #[serde(default)]
    pub max_closures: Option<usize>,
}

impl SearchBudget {
    /// A budget with no limit.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A budget of at most `max_closures` closure computations.
    pub fn closures(max_closures: usize) -> Self {
        Self {
            max_closures: Some(max_closures),
        }
    }
}

/// Keys found by [`Relation::find_keys`] along with the strategy that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReport {
    pub strategy: KeyStrategy,
    pub keys: Vec<AttrSet>,
}

impl KeyReport {
    /// Size of the smallest key, if any.
    pub fn smallest(&self) -> Option<usize> {
        self.keys.iter().map(AttrSet::len).min()
    }

    /// Whether these keys leave room for an exhaustive search to do better:
    /// none were found, or the smallest is wider than two attributes.
    pub fn needs_exhaustive(&self) -> bool {
        !matches!(self.smallest(), Some(n) if n <= 2)
    }
}

impl Relation {
    /// Candidate keys taken directly from declared dependencies whose
    /// closure is the whole domain. May return none; see
    /// [`candidate_keys_bf`](Self::candidate_keys_bf).
    pub fn candidate_keys(&self) -> Vec<AttrSet> {
        let mut keys = Vec::new();
        for cfd in self.closures() {
            if cfd.right.contains(self.attrs()) {
                push_unique(&mut keys, cfd.left);
            }
        }
        log::debug!("Direct search found {} keys for '{}'", keys.len(), self.name());
        keys
    }

    /// Candidate keys from declared-dependency closures that miss at most two
    /// attributes, with the missing attributes added to the left side.
    pub fn candidate_keys_alt(&self) -> Vec<AttrSet> {
        let mut keys = Vec::new();
        for cfd in self.closures() {
            if cfd.right.len() + 2 < self.attrs().len() {
                continue;
            }
            let mut left = cfd.left;
            left.extend(
                self.attrs()
                    .difference([&cfd.right])
                    .into_iter()
                    .take(2),
            );
            push_unique(&mut keys, left);
        }
        log::debug!(
            "Augmented search found {} keys for '{}'",
            keys.len(),
            self.name()
        );
        keys
    }

    /// Every candidate key of the relation, by exhaustive search. No
    /// returned key contains another.
    pub fn candidate_keys_bf(&self) -> Vec<AttrSet> {
        let mut search = KeySearch::new(self, SearchBudget::unbounded());
        search.run();
        minimal_keys(search.found)
    }

    /// Like [`candidate_keys_bf`](Self::candidate_keys_bf) but gives up with
    /// [`CoreError::SearchBudgetExceeded`] once `budget` is spent.
    pub fn candidate_keys_bf_with(&self, budget: &SearchBudget) -> CoreResult<Vec<AttrSet>> {
        let mut search = KeySearch::new(self, *budget);
        search.try_run()?;
        Ok(minimal_keys(search.found))
    }

    /// Direct keys, or augmented keys when the direct strategy finds none.
    pub fn cheap_keys(&self) -> KeyReport {
        let direct = self.candidate_keys();
        if !direct.is_empty() {
            return KeyReport {
                strategy: KeyStrategy::Direct,
                keys: direct,
            };
        }
        log::debug!("No direct keys for '{}', trying augmented", self.name());
        KeyReport {
            strategy: KeyStrategy::Augmented,
            keys: self.candidate_keys_alt(),
        }
    }

    /// Run `strategy`, falling back through the strategies for
    /// [`KeyStrategy::Auto`].
    pub fn find_keys(&self, strategy: KeyStrategy, budget: &SearchBudget) -> CoreResult<KeyReport> {
        let report = |strategy: KeyStrategy, keys: Vec<AttrSet>| KeyReport { strategy, keys };
        match strategy {
            KeyStrategy::Direct => Ok(report(strategy, self.candidate_keys())),
            KeyStrategy::Augmented => Ok(report(strategy, self.candidate_keys_alt())),
            KeyStrategy::Exhaustive => Ok(report(strategy, self.candidate_keys_bf_with(budget)?)),
            KeyStrategy::Auto => {
                let found = self.cheap_keys();
                if !found.needs_exhaustive() {
                    return Ok(found);
                }
                log::debug!("Falling back to exhaustive key search for '{}'", self.name());
                Ok(report(
                    KeyStrategy::Exhaustive,
                    self.candidate_keys_bf_with(budget)?,
                ))
            }
        }
    }
}

/// Reduce `candidates` to its minimal members: any candidate containing
/// another candidate is dropped. Equal candidates collapse into one.
///
/// Candidates are taken smallest-first, so the result is ordered by size.
pub fn minimal_keys(mut candidates: Vec<AttrSet>) -> Vec<AttrSet> {
    if candidates.len() <= 1 {
        return candidates;
    }

    // largest first, so the smallest sits at the end
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut result = Vec::new();
    while let Some(smallest) = candidates.pop() {
        candidates = candidates
            .into_iter()
            .filter(|c| !c.contains(&smallest))
            .collect();
        result.push(smallest);
    }
    result
}

fn push_unique(keys: &mut Vec<AttrSet>, key: AttrSet) {
    if !keys.contains(&key) {
        keys.push(key);
    }
}

/// State of one exhaustive search. Nothing here outlives the call.
struct KeySearch<'a> {
    relation: &'a Relation,
    budget: SearchBudget,
    tested: HashSet<AttrSet>,
    found: Vec<AttrSet>,
    closures: usize,
}

impl<'a> KeySearch<'a> {
    fn new(relation: &'a Relation, budget: SearchBudget) -> Self {
        Self {
            relation,
            budget,
            tested: HashSet::new(),
            found: Vec::new(),
            closures: 0,
        }
    }

    fn run(&mut self) {
        if self.relation.attrs().len() > WIDE_RELATION {
            log::warn!(
                "Exhaustive key search over {} attributes of '{}' without a budget",
                self.relation.attrs().len(),
                self.relation.name()
            );
        }
        // an unbounded budget never trips
        let _ = self.try_run();
    }

    fn try_run(&mut self) -> CoreResult<()> {
        let width = self.relation.attrs().len();
        let mut current = AttrSet::new();
        // a dependency with an empty left side can make {} the only key
        self.check(&current)?;
        if self.found.is_empty() {
            self.recur(&mut current, width)?;
        }
        log::debug!(
            "Exhaustive search over '{}': {} closures, {} superkeys",
            self.relation.name(),
            self.closures,
            self.found.len()
        );
        Ok(())
    }

    /// Grow `current` by one attribute at a time, testing each new subset.
    /// A subset reached again in a different order has the same subtree, so
    /// it is neither tested nor expanded twice.
    fn recur(&mut self, current: &mut AttrSet, remaining: usize) -> CoreResult<()> {
        let relation = self.relation;
        for attr in relation.attrs() {
            if !current.add(attr.clone()) {
                continue;
            }
            if self.check(current)? && remaining > 1 {
                self.recur(current, remaining - 1)?;
            }
            current.remove(attr);
        }
        Ok(())
    }

    /// Test `candidate` unless already seen. Returns whether it was new.
    fn check(&mut self, candidate: &AttrSet) -> CoreResult<bool> {
        if !self.tested.insert(candidate.clone()) {
            return Ok(false);
        }

        if let Some(limit) = self.budget.max_closures {
            if self.closures >= limit {
                return Err(CoreError::SearchBudgetExceeded {
                    limit,
                    attrs: self.relation.attrs().len(),
                });
            }
        }
        self.closures += 1;

        if self.relation.is_superkey(candidate) {
            self.found.push(candidate.clone());
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "keys_test.rs"]
mod tests;
