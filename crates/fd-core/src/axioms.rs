//! Armstrong's axioms (and the rules derived from them) as operators on
//! [`FuncDep`].
//!
//! Not every rule applies to every pair of dependencies. Each operator
//! returns a [`Derivation`] so callers must handle the not-applicable case.

use crate::attr::Attr;
use crate::attr_set::AttrSet;
use crate::func_dep::FuncDep;

/// Outcome of applying an inference rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Derivation<T> {
    /// The rule applied and derived `T`.
    Applicable(T),
    /// The rule's precondition does not hold for these inputs.
    NotApplicable,
}

impl<T> Derivation<T> {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Derivation::Applicable(_))
    }

    /// Convert into an `Option`, discarding the not-applicable case.
    pub fn applied(self) -> Option<T> {
        match self {
            Derivation::Applicable(v) => Some(v),
            Derivation::NotApplicable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Derivation<U> {
        match self {
            Derivation::Applicable(v) => Derivation::Applicable(f(v)),
            Derivation::NotApplicable => Derivation::NotApplicable,
        }
    }
}

impl<T> From<Option<T>> for Derivation<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Derivation::Applicable(v),
            None => Derivation::NotApplicable,
        }
    }
}

impl FuncDep {
    /// Reflexivity: if `subset ⊆ set` then `set --> subset`.
    pub fn reflexive(set: &AttrSet, subset: &AttrSet) -> Derivation<FuncDep> {
        if !set.contains(subset) {
            return Derivation::NotApplicable;
        }
        Derivation::Applicable(FuncDep::new(set.clone(), subset.clone()))
    }

    /// Augmentation: if `A --> B` and `C` is an attribute, then `AC --> BC`.
    ///
    /// Always applicable.
    pub fn augment(&self, attr: &Attr) -> Derivation<FuncDep> {
        let mut res = self.clone();
        res.left.add(attr.clone());
        res.right.add(attr.clone());
        Derivation::Applicable(res)
    }

    /// Transitivity: if `A --> B` and `B --> C` then `A --> C`.
    ///
    /// Also covers pseudo-transitivity: `A --> BX` and `B --> C` give
    /// `A --> C`, dropping `X`. The reverse orientation (`other` feeding
    /// into `self`) is tried when the forward one does not hold.
    pub fn transitive_with(&self, other: &FuncDep) -> Derivation<FuncDep> {
        if self.right.contains(&other.left) {
            // A --> B1, B2 --> C with B2 ⊆ B1
            Derivation::Applicable(FuncDep::new(self.left.clone(), other.right.clone()))
        } else if other.right.contains(&self.left) {
            // A1 --> B, C --> A2 with A1 ⊆ A2
            Derivation::Applicable(FuncDep::new(other.left.clone(), self.right.clone()))
        } else {
            Derivation::NotApplicable
        }
    }

    /// Decomposition: if `A --> XYZ` then `A --> X`, `A --> Y` and `A --> Z`.
    ///
    /// Not applicable unless the right side has more than one attribute.
    pub fn decompose(&self) -> Derivation<Vec<FuncDep>> {
        if self.right.len() <= 1 {
            return Derivation::NotApplicable;
        }
        let parts = self
            .right
            .iter()
            .map(|a| FuncDep::new(self.left.clone(), AttrSet::from(a.clone())))
            .collect();
        Derivation::Applicable(parts)
    }

    /// Composition: if `A --> B` and `X --> Y` then `AX --> BY`.
    ///
    /// Always applicable.
    pub fn compose(&self, other: &FuncDep) -> Derivation<FuncDep> {
        Derivation::Applicable(FuncDep::new(
            self.left.union([&other.left]),
            self.right.union([&other.right]),
        ))
    }

    /// Union: if `A --> B` and `A --> C` then `A --> BC`.
    ///
    /// Not applicable when `other`'s left side has an attribute missing from
    /// this dependency's left side.
    pub fn union(&self, other: &FuncDep) -> Derivation<FuncDep> {
        if !self.left.contains(&other.left) {
            return Derivation::NotApplicable;
        }
        Derivation::Applicable(FuncDep::new(
            self.left.clone(),
            self.right.union([&other.right]),
        ))
    }
}

#[cfg(test)]
#[path = "axioms_test.rs"]
mod tests;
