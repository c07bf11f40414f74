use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Vote counts per party within a single district, keyed by party name
/// (e.g. "dem", "rep", or an election-specific column name).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyVotes(AHashMap<String, f64>);

impl PartyVotes {
    /// Create an empty vote mapping.
    #[inline] pub fn new() -> Self { Self(AHashMap::new()) }

    /// Get the number of parties with recorded votes.
    #[inline] pub fn len(&self) -> usize { self.0.len() }

    /// Check if no party has recorded votes.
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Get the votes recorded for `party`, if any.
    #[inline] pub fn get(&self, party: &str) -> Option<f64> { self.0.get(party).copied() }

    /// Record `votes` for `party`, returning the previous count if one existed.
    #[inline]
    pub fn insert(&mut self, party: impl Into<String>, votes: f64) -> Option<f64> {
        self.0.insert(party.into(), votes)
    }

    /// Iterate over `(party, votes)` pairs in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(party, &votes)| (party.as_str(), votes))
    }

    /// Sum of votes over all parties.
    #[inline] pub fn total(&self) -> f64 { self.0.values().sum() }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PartyVotes {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(party, votes)| (party.into(), votes)).collect())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for PartyVotes {
    fn from(pairs: [(K, f64); N]) -> Self { pairs.into_iter().collect() }
}
