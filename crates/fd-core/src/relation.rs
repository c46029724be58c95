//! Relations: an attribute domain plus the functional dependencies over it.

use crate::attr_set::{AttrSet, DEFAULT_SEPARATOR};
use crate::error::{CoreError, CoreResult};
use crate::func_dep::FuncDep;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A named relation with a set of functional dependencies.
///
/// Every dependency only mentions attributes of the relation's domain. This
/// is checked on construction and on every mutation of the dependency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation {
    name: String,
    attrs: AttrSet,
    func_deps: Vec<FuncDep>,
}

impl Relation {
    /// Build a relation, failing if any dependency references attributes
    /// outside `attrs`. All offending attributes are reported together.
    pub fn new(
        name: impl Into<String>,
        attrs: AttrSet,
        func_deps: Vec<FuncDep>,
    ) -> CoreResult<Self> {
        let rel = Self {
            name: name.into(),
            attrs,
            func_deps,
        };
        rel.validate(&rel.func_deps)?;
        Ok(rel)
    }

    /// Name of the relation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute domain.
    pub fn attrs(&self) -> &AttrSet {
        &self.attrs
    }

    /// Declared dependencies, in declaration order.
    pub fn func_deps(&self) -> &[FuncDep] {
        &self.func_deps
    }

    /// Append a dependency.
    pub fn push(&mut self, fd: FuncDep) -> CoreResult<()> {
        self.validate(std::slice::from_ref(&fd))?;
        self.func_deps.push(fd);
        Ok(())
    }

    /// Replace the dependency at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, fd: FuncDep) -> CoreResult<FuncDep> {
        if index >= self.func_deps.len() {
            return Err(CoreError::DependencyIndex {
                relation: self.name.clone(),
                index,
            });
        }
        self.validate(std::slice::from_ref(&fd))?;
        Ok(std::mem::replace(&mut self.func_deps[index], fd))
    }

    /// Merge dependencies that share a left side into one, using the union
    /// rule. Keeps the position of the first dependency of each group.
    pub fn coalesce(&mut self) {
        let mut merged: Vec<FuncDep> = Vec::with_capacity(self.func_deps.len());
        let mut by_left: HashMap<AttrSet, usize> = HashMap::new();

        for fd in self.func_deps.drain(..) {
            match by_left.get(&fd.left) {
                // equal left sides: the union rule reduces to merging right sides
                Some(&idx) => merged[idx].right.add_all([&fd.right]),
                None => {
                    by_left.insert(fd.left.clone(), merged.len());
                    merged.push(fd);
                }
            }
        }

        log::debug!(
            "Coalesced dependencies of '{}' into {} by left side",
            self.name,
            merged.len()
        );
        self.func_deps = merged;
    }

    /// Closure of `fd` over this relation's dependencies: `fd.left` mapped
    /// to every attribute reachable from `fd.left ∪ fd.right`.
    pub fn closure(&self, fd: &FuncDep) -> FuncDep {
        let seed = fd.left.union([&fd.right]);
        FuncDep::new(fd.left.clone(), self.close(seed))
    }

    /// Closure of every declared dependency, in declaration order.
    pub fn closures(&self) -> Vec<FuncDep> {
        self.func_deps.iter().map(|fd| self.closure(fd)).collect()
    }

    /// Every attribute determined by `set` (written `set+`).
    pub fn attribute_closure(&self, set: &AttrSet) -> AttrSet {
        self.close(set.clone())
    }

    /// Whether `set` determines the whole attribute domain.
    pub fn is_superkey(&self, set: &AttrSet) -> bool {
        self.attribute_closure(set).contains(&self.attrs)
    }

    /// Whether `fd` follows from this relation's dependencies.
    pub fn implies(&self, fd: &FuncDep) -> bool {
        self.attribute_closure(&fd.left).contains(&fd.right)
    }

    /// Render the relation in its text form, joining attributes with
    /// `separator`.
    pub fn render(&self, separator: &str) -> String {
        let mut out = format!("{}({})\n\n", self.name, self.attrs.join(separator));
        for fd in &self.func_deps {
            out.push_str(&fd.render(separator));
            out.push('\n');
        }
        out.trim().to_string()
    }

    /// Fixpoint: keep adding right sides of dependencies whose left side is
    /// already covered until a full pass adds nothing.
    fn close(&self, mut right: AttrSet) -> AttrSet {
        loop {
            let before = right.len();
            for other in &self.func_deps {
                if right.contains(&other.left) {
                    right.add_all([&other.right]);
                }
            }
            if right.len() == before {
                return right;
            }
        }
    }

    fn validate(&self, fds: &[FuncDep]) -> CoreResult<()> {
        let mut problems = AttrSet::new();
        for fd in fds {
            problems.add_all([&fd.attrs().difference([&self.attrs])]);
        }
        if problems.is_empty() {
            return Ok(());
        }
        Err(CoreError::UnknownAttributes {
            relation: self.name.clone(),
            domain: self.attrs.to_string(),
            domain_len: self.attrs.len(),
            unknown: problems.to_string(),
            count: problems.len(),
        })
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_SEPARATOR))
    }
}

#[cfg(test)]
#[path = "relation_test.rs"]
mod tests;
