//! Link constraints and the point-to-link incidence index used for tearing.

use crate::float::Float;
use alloc::vec::Vec as AllocVec;
use hashbrown::{HashMap, HashSet};

/// Unordered pair of point ids. `Link::new(a, b) == Link::new(b, a)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link {
    a: usize,
    b: usize,
}

impl Link {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Link { a, b }
        } else {
            Link { a: b, b: a }
        }
    }

    /// Lower endpoint id.
    pub fn a(&self) -> usize { self.a }
    /// Higher endpoint id.
    pub fn b(&self) -> usize { self.b }

    pub fn contains(&self, id: usize) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint that isn't `id`, if `id` is an endpoint.
    pub fn other(&self, id: usize) -> Option<usize> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

/// A link plus the rest length captured when it was created.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkConstraint<F: Float> {
    pub link: Link,
    pub rest_length: F,
}

/// Link collection with a reverse index from point id to incident links.
///
/// Links are kept in a dense array for the relaxation pass. Removal is a
/// swap-remove, so iteration order is insertion order except that the last
/// link takes the slot of a removed one.
#[derive(Clone, Debug)]
pub struct LinkSet<F: Float> {
    links: AllocVec<LinkConstraint<F>>,
    slots: HashMap<Link, usize>,
    incident: HashMap<usize, HashSet<Link>>,
}

impl<F: Float> LinkSet<F> {
    pub fn new() -> Self {
        LinkSet {
            links: AllocVec::new(),
            slots: HashMap::new(),
            incident: HashMap::new(),
        }
    }

    /// Insert `link` with `rest_length`. Returns false, and keeps the
    /// original rest length, if the link already exists.
    pub fn insert(&mut self, link: Link, rest_length: F) -> bool {
        if self.slots.contains_key(&link) {
            return false;
        }
        self.slots.insert(link, self.links.len());
        self.links.push(LinkConstraint { link, rest_length });
        self.incident.entry(link.a).or_default().insert(link);
        self.incident.entry(link.b).or_default().insert(link);
        true
    }

    /// Remove one link from the collection and both incidence sets.
    pub fn remove(&mut self, link: Link) -> bool {
        let Some(slot) = self.slots.remove(&link) else {
            return false;
        };
        self.links.swap_remove(slot);
        if let Some(moved) = self.links.get(slot) {
            self.slots.insert(moved.link, slot);
        }
        self.unindex(link.a, link);
        self.unindex(link.b, link);
        true
    }

    /// Remove every link incident on `id`, returning how many were removed.
    pub fn remove_incident(&mut self, id: usize) -> usize {
        let Some(links) = self.incident.get(&id) else {
            return 0;
        };
        // Sorted so the swap-removals below are reproducible.
        let mut links: AllocVec<Link> = links.iter().copied().collect();
        links.sort_unstable();
        links.into_iter().filter(|link| self.remove(*link)).count()
    }

    fn unindex(&mut self, id: usize, link: Link) {
        if let Some(set) = self.incident.get_mut(&id) {
            set.remove(&link);
            if set.is_empty() {
                self.incident.remove(&id);
            }
        }
    }

    pub fn contains(&self, link: Link) -> bool {
        self.slots.contains_key(&link)
    }

    pub fn rest_length(&self, link: Link) -> Option<F> {
        self.slots.get(&link).map(|&slot| self.links[slot].rest_length)
    }

    /// Links incident on `id`, in ascending order.
    pub fn incident(&self, id: usize) -> AllocVec<Link> {
        let mut links: AllocVec<Link> = self
            .incident
            .get(&id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        links.sort_unstable();
        links
    }

    pub fn degree(&self, id: usize) -> usize {
        self.incident.get(&id).map_or(0, HashSet::len)
    }

    pub fn as_slice(&self) -> &[LinkConstraint<F>] {
        &self.links
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkConstraint<F>> {
        self.links.iter()
    }

    pub fn len(&self) -> usize { self.links.len() }
    pub fn is_empty(&self) -> bool { self.links.is_empty() }

    pub fn clear(&mut self) {
        self.links.clear();
        self.slots.clear();
        self.incident.clear();
    }
}

impl<F: Float> Default for LinkSet<F> {
    fn default() -> Self {
        Self::new()
    }
}
