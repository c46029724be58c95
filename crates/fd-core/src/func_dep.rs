//! Functional dependencies.

use crate::attr_set::{AttrSet, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrow used when rendering a dependency.
pub const ARROW: &str = " --> ";

/// A functional dependency `left --> right`: the values of the `left`
/// attributes determine the values of the `right` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuncDep {
    /// Determinant attributes
    pub left: AttrSet,

    /// Dependent attributes
    pub right: AttrSet,
}

impl FuncDep {
    pub fn new(left: AttrSet, right: AttrSet) -> Self {
        Self { left, right }
    }

    /// Every attribute mentioned on either side.
    pub fn attrs(&self) -> AttrSet {
        self.left.union([&self.right])
    }

    /// A dependency is trivial when its right side is contained in its left.
    pub fn is_trivial(&self) -> bool {
        self.left.contains(&self.right)
    }

    /// Render both sides joined with `separator`.
    pub fn render(&self, separator: &str) -> String {
        format!(
            "{}{}{}",
            self.left.join(separator),
            ARROW,
            self.right.join(separator)
        )
    }
}

impl fmt::Display for FuncDep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_SEPARATOR))
    }
}
