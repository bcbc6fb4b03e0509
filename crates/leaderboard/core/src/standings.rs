//! The standings collection: records keyed by identity plus the derived
//! presentation order.
//!
//! # Ordering
//!
//! Identities are ordered by descending `money_made`. Ties are stable: the
//! sort starts from the previous presentation order (newcomers appended in
//! arrival order) and uses a stable sort, so rows with equal scores never
//! swap places because an unrelated record changed.

use std::collections::{HashMap, HashSet};

use crate::money::Money;
use crate::record::{Identity, Record};

/// Outcome of a transition, used by callers to emit one notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StandingsChange {
    /// The whole collection was rebuilt from a snapshot.
    Replaced { count: usize },
    /// A single record was inserted or overwritten.
    Changed { identity: Identity, inserted: bool },
}

/// Authoritative record collection with its derived order.
///
/// Invariant: `order` holds every key of `records` exactly once, sorted by the
/// rule described in the module docs. Both transitions re-derive `order`
/// before returning, so a `&Standings` is always consistent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standings {
    records: HashMap<Identity, Record>,
    order: Vec<Identity>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the current collection and rebuilds it from `records`.
    ///
    /// When an identity appears more than once the last occurrence wins.
    pub fn replace_all<I>(&mut self, records: I) -> StandingsChange
    where
        I: IntoIterator<Item = Record>,
    {
        let mut next: HashMap<Identity, Record> = HashMap::new();
        let mut arrivals = Vec::new();
        for record in records {
            let identity = record.identity().clone();
            if next.insert(identity.clone(), record).is_none() {
                arrivals.push(identity);
            }
        }

        let known: HashSet<&Identity> = self.order.iter().collect();
        let newcomers: Vec<Identity> = arrivals
            .into_iter()
            .filter(|identity| !known.contains(identity))
            .collect();

        let mut order: Vec<Identity> = self
            .order
            .iter()
            .filter(|identity| next.contains_key(*identity))
            .cloned()
            .collect();
        order.extend(newcomers);

        self.records = next;
        self.order = order;
        self.resort();

        StandingsChange::Replaced {
            count: self.records.len(),
        }
    }

    /// Inserts `record`, or overwrites the entry with the same identity.
    pub fn upsert(&mut self, record: Record) -> StandingsChange {
        let identity = record.identity().clone();
        let inserted = self.records.insert(identity.clone(), record).is_none();
        if inserted {
            self.order.push(identity.clone());
        }
        self.resort();

        StandingsChange::Changed { identity, inserted }
    }

    pub fn get(&self, identity: &str) -> Option<&Record> {
        self.records.get(identity)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.records.contains_key(identity)
    }

    /// Identities in presentation order.
    ///
    /// The iterator is cheap to clone and can be restarted by calling this
    /// again; it borrows the collection, so it always reflects one state.
    pub fn ordered_identities(&self) -> std::slice::Iter<'_, Identity> {
        self.order.iter()
    }

    /// Records in presentation order, paired with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &Record)> + '_ {
        self.order
            .iter()
            .filter_map(|identity| self.records.get(identity))
            .enumerate()
            .map(|(index, record)| (index + 1, record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn resort(&mut self) {
        let records = &self.records;
        let mut keyed: Vec<(Money, Identity)> = std::mem::take(&mut self.order)
            .into_iter()
            .filter_map(|identity| records.get(&identity).map(|r| (r.money_made(), identity)))
            .collect();

        // `sort_by` is stable; equal amounts keep their incoming order.
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        self.order = keyed.into_iter().map(|(_, identity)| identity).collect();
    }
}
