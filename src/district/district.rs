use geo::MultiPolygon;

use crate::district::{DistrictId, PartyVotes};
use crate::geom::PlanarGeometry;

/// The field contract every metric consumes.
///
/// Partisan-symmetry metrics read `party_votes`, compactness metrics read
/// `geometry`. Any record type that can expose these fields is accepted, not
/// just [`District`].
pub trait DistrictRecord {
    /// Geometry handle answering the area, perimeter and hull queries.
    type Geometry: PlanarGeometry + ?Sized;

    /// Identifier of this district, if known.
    fn id(&self) -> Option<&DistrictId>;

    /// Votes per party, if election results are attached.
    fn party_votes(&self) -> Option<&PartyVotes>;

    /// Planar geometry, if a shape is attached.
    fn geometry(&self) -> Option<&Self::Geometry>;

    /// Human-readable label used in error messages and logs.
    fn label(&self) -> String {
        self.id().map_or_else(|| "<unnamed>".to_owned(), DistrictId::to_string)
    }
}

/// A single district: identity, population, vote totals and shape.
///
/// Every field is optional; metrics check for the fields they need. Build
/// one with [`District::new`] and the `with_*` methods.
#[derive(Debug, Clone, Default)]
pub struct District<G = MultiPolygon<f64>> {
    id: Option<DistrictId>,
    population: Option<u64>,
    votes: Option<f64>,
    party_votes: Option<PartyVotes>,
    geometry: Option<G>,
}

impl District {
    /// Create a district with no fields set.
    pub fn new() -> Self {
        Self { id: None, population: None, votes: None, party_votes: None, geometry: None }
    }
}

impl<G> District<G> {
    /// Set the district identifier.
    pub fn with_id(mut self, id: impl Into<DistrictId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the district population.
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    /// Set the total ballots cast in the district.
    pub fn with_votes(mut self, votes: f64) -> Self {
        self.votes = Some(votes);
        self
    }

    /// Set the per-party vote counts.
    pub fn with_party_votes(mut self, party_votes: impl Into<PartyVotes>) -> Self {
        self.party_votes = Some(party_votes.into());
        self
    }

    /// Attach a geometry, possibly of a different geometry type.
    pub fn with_geometry<H>(self, geometry: H) -> District<H> {
        District {
            id: self.id,
            population: self.population,
            votes: self.votes,
            party_votes: self.party_votes,
            geometry: Some(geometry),
        }
    }

    #[inline] pub fn id(&self) -> Option<&DistrictId> { self.id.as_ref() }

    #[inline] pub fn population(&self) -> Option<u64> { self.population }

    #[inline] pub fn votes(&self) -> Option<f64> { self.votes }

    #[inline] pub fn party_votes(&self) -> Option<&PartyVotes> { self.party_votes.as_ref() }

    #[inline] pub fn geometry(&self) -> Option<&G> { self.geometry.as_ref() }
}

impl<G: PlanarGeometry> DistrictRecord for District<G> {
    type Geometry = G;

    #[inline] fn id(&self) -> Option<&DistrictId> { self.id.as_ref() }

    #[inline] fn party_votes(&self) -> Option<&PartyVotes> { self.party_votes.as_ref() }

    #[inline] fn geometry(&self) -> Option<&G> { self.geometry.as_ref() }
}
