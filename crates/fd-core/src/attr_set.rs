//! Attribute sets and their set algebra.

use crate::attr::Attr;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Separator used by [`AttrSet`]'s `Display` impl.
pub const DEFAULT_SEPARATOR: &str = ",";

/// A set of unique attributes.
///
/// Members are kept in their total order, so iteration and rendering are
/// canonical: two equal sets always render the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrSet(BTreeSet<Attr>);

impl AttrSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.0.iter()
    }

    /// Whether `attr` is a member.
    pub fn has(&self, attr: &str) -> bool {
        self.0.contains(attr)
    }

    /// Insert `attr`, returning whether it was absent.
    pub fn add(&mut self, attr: Attr) -> bool {
        self.0.insert(attr)
    }

    /// Remove `attr`, returning whether it was present.
    pub fn remove(&mut self, attr: &str) -> bool {
        self.0.remove(attr)
    }

    /// Add every member of every set in `others` in place.
    pub fn add_all<'a>(&mut self, others: impl IntoIterator<Item = &'a AttrSet>) {
        for other in others {
            self.0.extend(other.0.iter().cloned());
        }
    }

    /// Subset test: true iff every member of `other` is in `self`.
    pub fn contains(&self, other: &AttrSet) -> bool {
        other.0.is_subset(&self.0)
    }

    /// New set with the members of `self` and every set in `others`.
    pub fn union<'a>(&self, others: impl IntoIterator<Item = &'a AttrSet>) -> AttrSet {
        let mut res = self.clone();
        res.add_all(others);
        res
    }

    /// New set with the members of `self` present in every set in `others`.
    pub fn intersection<'a>(&self, others: impl IntoIterator<Item = &'a AttrSet>) -> AttrSet {
        let mut res = self.clone();
        for other in others {
            res.0.retain(|a| other.0.contains(a));
            if res.is_empty() {
                break;
            }
        }
        res
    }

    /// New set with the members of `self` absent from every set in `others`.
    pub fn difference<'a>(&self, others: impl IntoIterator<Item = &'a AttrSet>) -> AttrSet {
        let mut res = self.clone();
        for other in others {
            for a in other.iter() {
                res.0.remove(a);
                if res.is_empty() {
                    return res;
                }
            }
        }
        res
    }

    /// Join the members with `separator` in canonical order.
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, a) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(a.as_str());
        }
        out
    }
}

impl fmt::Display for AttrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_SEPARATOR))
    }
}

impl FromIterator<Attr> for AttrSet {
    fn from_iter<I: IntoIterator<Item = Attr>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Attr> for AttrSet {
    fn extend<I: IntoIterator<Item = Attr>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for AttrSet {
    type Item = Attr;
    type IntoIter = std::collections::btree_set::IntoIter<Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrSet {
    type Item = &'a Attr;
    type IntoIter = std::collections::btree_set::Iter<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Attr> for AttrSet {
    fn from(attr: Attr) -> Self {
        std::iter::once(attr).collect()
    }
}

/// Build an [`AttrSet`] from string literals. Panics on empty names.
///
/// Intended for tests and hand-built relations; text input goes through
/// `fd-parse`.
pub fn attrs<I, S>(names: I) -> AttrSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Attr::new).collect()
}

#[cfg(test)]
#[path = "attr_set_test.rs"]
mod tests;
