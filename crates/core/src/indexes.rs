//! Index descriptions for location-bearing collections.
//!
//! Client documents store their position as a GeoJSON point under
//! `location`; geographic proximity queries need a `2dsphere` index on it.

use std::fmt;

/// Collection holding the location-bearing client documents.
pub const LOCATED_CLIENTS_COLLECTION: &str = "mongoClient";

/// Field carrying the GeoJSON point.
pub const LOCATION_FIELD: &str = "location";

/// Geospatial index kinds understood by MongoDB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Spherical geometry over GeoJSON objects or legacy pairs.
    Sphere2d,
    /// Planar geometry over legacy coordinate pairs.
    Flat2d,
}

impl IndexKind {
    /// Value used in the index key document, e.g. `{ location: "2dsphere" }`.
    pub fn as_str(self) -> &'static str {
        match self {
            IndexKind::Sphere2d => "2dsphere",
            IndexKind::Flat2d => "2d",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-field index to create on a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub collection: String,
    pub field: String,
    pub kind: IndexKind,
}

impl IndexSpec {
    pub fn new(collection: impl Into<String>, field: impl Into<String>, kind: IndexKind) -> Self {
        Self {
            collection: collection.into(),
            field: field.into(),
            kind,
        }
    }

    /// The `2dsphere` index on `mongoClient.location`.
    pub fn location_2dsphere() -> Self {
        Self::new(
            LOCATED_CLIENTS_COLLECTION,
            LOCATION_FIELD,
            IndexKind::Sphere2d,
        )
    }
}
