//! Zoning assignments: the only mutable state in the model.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use landgrid_grid::ParcelId;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize, Serializer};

use crate::{PlotRegistry, ZoningError};

/// Zoning category layered on top of a parcel's fixed land use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoningCategory {
    Commercial,
    Agricultural,
    Residential,
}

impl ZoningCategory {
    pub const ALL: [ZoningCategory; 3] = [
        ZoningCategory::Commercial,
        ZoningCategory::Agricultural,
        ZoningCategory::Residential,
    ];

    /// Lowercase wire id (`"commercial"`, ...).
    pub fn id(self) -> &'static str {
        match self {
            ZoningCategory::Commercial => "commercial",
            ZoningCategory::Agricultural => "agricultural",
            ZoningCategory::Residential => "residential",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoningCategory::Commercial => "Commercial",
            ZoningCategory::Agricultural => "Agricultural",
            ZoningCategory::Residential => "Residential",
        }
    }

    /// Parse a wire id, case-insensitively.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for ZoningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable view of the whole zoning map at one point in time.
///
/// Cloning is cheap; later writes to the store never show through.
/// Serializes as a plain `{ id: category }` map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoningSnapshot(Arc<BTreeMap<ParcelId, ZoningCategory>>);

impl Serialize for ZoningSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

impl ZoningSnapshot {
    /// `None` means the parcel is unzoned.
    pub fn get(&self, id: &str) -> Option<ZoningCategory> {
        self.0.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParcelId, ZoningCategory)> {
        self.0.iter().map(|(id, category)| (id, *category))
    }

    pub fn as_map(&self) -> &BTreeMap<ParcelId, ZoningCategory> {
        &self.0
    }
}

/// Parcel id → zoning category, restricted to parcels in one registry.
///
/// Single writer. Use [`SharedZoningStore`] when several threads write.
#[derive(Clone, Debug)]
pub struct ZoningStore {
    known: Arc<FxHashSet<ParcelId>>,
    assignments: ZoningSnapshot,
}

impl ZoningStore {
    /// An empty store accepting the parcels of `registry`.
    pub fn new(registry: &PlotRegistry) -> Self {
        let known = registry.parcels().iter().map(|p| p.id().clone()).collect();
        Self {
            known: Arc::new(known),
            assignments: ZoningSnapshot::default(),
        }
    }

    /// A store seeded with default assignments.
    ///
    /// # Errors
    ///
    /// Returns [`ZoningError::UnknownParcel`] if a default names a parcel the
    /// registry does not contain.
    pub fn seeded(
        registry: &PlotRegistry,
        defaults: impl IntoIterator<Item = (ParcelId, ZoningCategory)>,
    ) -> Result<Self, ZoningError> {
        let mut store = Self::new(registry);
        let map = Arc::make_mut(&mut store.assignments.0);
        for (id, category) in defaults {
            if !store.known.contains(&id) {
                return Err(ZoningError::UnknownParcel(id));
            }
            map.insert(id, category);
        }
        Ok(store)
    }

    pub fn get(&self, id: &str) -> Option<ZoningCategory> {
        self.assignments.get(id)
    }

    /// Assign `category` to parcel `id`, replacing any previous entry, and
    /// return the full updated mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ZoningError::UnknownParcel`] and leaves the store unchanged
    /// if `id` is not in the registry.
    pub fn set(
        &mut self,
        id: &str,
        category: ZoningCategory,
    ) -> Result<ZoningSnapshot, ZoningError> {
        let Some(id) = self.known.get(id).cloned() else {
            return Err(ZoningError::UnknownParcel(ParcelId::from(id)));
        };
        let previous = Arc::make_mut(&mut self.assignments.0).insert(id.clone(), category);
        log::debug!("Zoning for {id}: {previous:?} -> {category}");
        Ok(self.snapshot())
    }

    pub fn snapshot(&self) -> ZoningSnapshot {
        self.assignments.clone()
    }
}

/// Thread-safe wrapper for concurrent clients.
///
/// Writes are serialized (last write wins); readers always observe a whole
/// map, never a partial update.
#[derive(Clone, Debug)]
pub struct SharedZoningStore {
    inner: Arc<RwLock<ZoningStore>>,
}

impl SharedZoningStore {
    pub fn new(store: ZoningStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn get(&self, id: &str) -> Option<ZoningCategory> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
    }

    /// See [`ZoningStore::set`].
    ///
    /// # Errors
    ///
    /// Returns [`ZoningError::UnknownParcel`] for ids outside the registry.
    pub fn set(&self, id: &str, category: ZoningCategory) -> Result<ZoningSnapshot, ZoningError> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(id, category)
    }

    pub fn snapshot(&self) -> ZoningSnapshot {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }

    /// Swap in a whole new store, e.g. after a catalog reload.
    pub fn replace(&self, store: ZoningStore) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = store;
    }
}
