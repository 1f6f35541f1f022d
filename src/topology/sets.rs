//! Named index subsets attached to a mesh.
//!
//! [`NodeSets`] map a name to an unordered set of vertex indices.
//! [`ElementSets`] map a name to an ordered list of element positions; these
//! positions must be remapped whenever the element order changes, which the
//! crate-private `remap` helper does from an old → new position table.
//!
//! The element set named [`ALL`] is reserved: it always holds
//! `0..nelements` and is regenerated after every mutation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Reserved element-set name covering every element position.
pub const ALL: &str = "all";

/// Named sets of vertex indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeSets {
    sets: BTreeMap<String, BTreeSet<usize>>,
}

impl NodeSets {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `vertices` under `name`, returning the previous set, if any.
    pub fn insert<I>(&mut self, name: &str, vertices: I) -> Option<BTreeSet<usize>>
    where
        I: IntoIterator<Item = usize>,
    {
        self.sets
            .insert(name.to_string(), vertices.into_iter().collect())
    }

    /// Returns the vertex set stored under `name`.
    pub fn get(&self, name: &str) -> Option<&BTreeSet<usize>> {
        self.sets.get(name)
    }

    /// Returns true when `vertex` belongs to the set `name`.
    pub fn contains(&self, name: &str, vertex: usize) -> bool {
        self.sets.get(name).is_some_and(|set| set.contains(&vertex))
    }

    /// Set names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sets.keys().map(String::as_str)
    }

    /// Iterate over `(name, vertices)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<usize>)> + '_ {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Number of named sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true when no set is stored.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl<S, I> FromIterator<(S, I)> for NodeSets
where
    S: Into<String>,
    I: IntoIterator<Item = usize>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        let sets = iter
            .into_iter()
            .map(|(name, vertices)| (name.into(), vertices.into_iter().collect()))
            .collect();
        Self { sets }
    }
}

/// Named, ordered lists of element positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementSets {
    sets: BTreeMap<String, Vec<usize>>,
}

impl ElementSets {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `positions` under `name`, returning the previous list, if any.
    ///
    /// Storing under [`ALL`] is accepted, but the mesh overwrites it with the
    /// full range on construction and after every mutation.
    pub fn insert<I>(&mut self, name: &str, positions: I) -> Option<Vec<usize>>
    where
        I: IntoIterator<Item = usize>,
    {
        self.sets
            .insert(name.to_string(), positions.into_iter().collect())
    }

    /// Returns the positions stored under `name`.
    pub fn get(&self, name: &str) -> Option<&[usize]> {
        self.sets.get(name).map(Vec::as_slice)
    }

    /// Returns true when element position `element` belongs to the set `name`.
    pub fn contains(&self, name: &str, element: usize) -> bool {
        self.sets.get(name).is_some_and(|set| set.contains(&element))
    }

    /// Set names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sets.keys().map(String::as_str)
    }

    /// Iterate over `(name, positions)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> + '_ {
        self.sets
            .iter()
            .map(|(name, set)| (name.as_str(), set.as_slice()))
    }

    /// Number of named sets, including [`ALL`].
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true when no set is stored.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Overwrite [`ALL`] with `0..nelements`.
    pub(crate) fn reset_all(&mut self, nelements: usize) {
        self.sets.insert(ALL.to_string(), (0..nelements).collect());
    }

    /// Rewrite every stored position through `old_to_new`.
    ///
    /// Entries mapping to `None` (or lying outside the table) are dropped.
    /// Survivors are stored ascending without duplicates so each set follows
    /// element order.
    pub(crate) fn remap(&mut self, old_to_new: &[Option<usize>]) {
        for (name, positions) in &mut self.sets {
            let before = positions.len();
            let mut dropped = 0usize;
            let mut remapped: Vec<usize> = Vec::with_capacity(before);
            for &old in positions.iter() {
                match old_to_new.get(old).copied().flatten() {
                    Some(new) => remapped.push(new),
                    None => dropped += 1,
                }
            }
            remapped.sort_unstable();
            remapped.dedup();
            let collapsed = before - dropped - remapped.len();
            if collapsed > 0 {
                log::warn!("elset `{name}`: collapsed {collapsed} duplicate entries while remapping");
            }
            *positions = remapped;
        }
    }
}

impl<S, I> FromIterator<(S, I)> for ElementSets
where
    S: Into<String>,
    I: IntoIterator<Item = usize>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        let sets = iter
            .into_iter()
            .map(|(name, positions)| (name.into(), positions.into_iter().collect()))
            .collect();
        Self { sets }
    }
}
