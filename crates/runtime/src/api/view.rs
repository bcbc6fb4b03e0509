//! Read-only snapshots of the standings for rendering layers.
use std::ops::Deref;
use std::slice;
use std::sync::Arc;

use leaderboard_core::{Identity, Standings};

/// Immutable snapshot of the standings at one point in time.
///
/// The sync worker publishes a fresh snapshot after every transition, so a
/// view never mixes the record map of one state with the order of another.
/// Cloning is cheap (reference counted).
#[derive(Clone, Debug, Default)]
pub struct StandingsView {
    standings: Arc<Standings>,
}

impl StandingsView {
    pub(crate) fn new(standings: Arc<Standings>) -> Self {
        Self { standings }
    }

    /// Owned, restartable sequence of identities in presentation order.
    pub fn ordered_identities(&self) -> OrderedIdentities {
        OrderedIdentities {
            standings: Arc::clone(&self.standings),
        }
    }
}

impl Deref for StandingsView {
    type Target = Standings;

    fn deref(&self) -> &Standings {
        &self.standings
    }
}

/// Presentation order captured from a single [`StandingsView`].
///
/// Iterate with [`OrderedIdentities::iter`] (or `for id in &ordered`) as many
/// times as needed; every pass yields the same identities.
#[derive(Clone, Debug)]
pub struct OrderedIdentities {
    standings: Arc<Standings>,
}

impl OrderedIdentities {
    pub fn iter(&self) -> slice::Iter<'_, Identity> {
        self.standings.ordered_identities()
    }

    pub fn len(&self) -> usize {
        self.standings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}

impl<'a> IntoIterator for &'a OrderedIdentities {
    type Item = &'a Identity;
    type IntoIter = slice::Iter<'a, Identity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
