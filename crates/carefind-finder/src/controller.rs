//! The finder controller: the single writer of aggregated state.
//!
//! Owns the location resolver, the candidate set, and its provenance, and
//! re-derives the ranked list on demand. Each refresh replaces the whole
//! candidate set rather than mutating it in place.

use carefind_core::{
    rank::rank_hospitals, DataSource, FilterState, HospitalRecord, RankedHospital,
    ResolvedLocation, SortMode,
};
use carefind_locator::{LocationProvider, LocationResolver};
use carefind_places::PlacesClient;

use crate::aggregate::aggregate_hospitals;
use crate::directory::HospitalDirectory;

pub struct FinderController<P: LocationProvider, D: HospitalDirectory> {
    resolver: LocationResolver<P>,
    directory: D,
    places: Option<PlacesClient>,
    radius_m: u32,
    hospitals: Vec<HospitalRecord>,
    source: DataSource,
    last_error: Option<String>,
}

impl<P: LocationProvider, D: HospitalDirectory> FinderController<P, D> {
    #[must_use]
    pub fn new(
        resolver: LocationResolver<P>,
        directory: D,
        places: Option<PlacesClient>,
        radius_m: u32,
    ) -> Self {
        Self {
            resolver,
            directory,
            places,
            radius_m,
            hospitals: Vec::new(),
            source: DataSource::None,
            last_error: None,
        }
    }

    /// First resolution plus first aggregation pass.
    ///
    /// Permission denial is absorbed into resolver state (the aggregation
    /// still runs against the directory); only a directory failure with no
    /// prior data leaves the controller in an error state.
    pub async fn initialize(&mut self) {
        if let Err(e) = self.resolver.initialize().await {
            tracing::info!(error = %e, "location unavailable at startup");
        }
        self.refresh_hospitals().await;
    }

    /// Re-resolves the location and re-aggregates the candidate set.
    pub async fn refresh(&mut self) {
        if let Err(e) = self.resolver.refresh().await {
            tracing::info!(error = %e, "location refresh failed");
        }
        self.refresh_hospitals().await;
    }

    /// Re-derives the ranked list from the current state. Pure with respect
    /// to the passed-in filters and sort mode; the controller never retains
    /// them.
    #[must_use]
    pub fn ranked(&self, filters: &FilterState, sort: SortMode) -> Vec<RankedHospital> {
        rank_hospitals(
            self.resolver.origin_or_default(),
            &self.hospitals,
            filters,
            sort,
        )
    }

    #[must_use]
    pub fn location(&self) -> Option<&ResolvedLocation> {
        self.resolver.location()
    }

    #[must_use]
    pub fn resolver(&self) -> &LocationResolver<P> {
        &self.resolver
    }

    /// Provenance of the active candidate set.
    #[must_use]
    pub fn source(&self) -> DataSource {
        self.source
    }

    /// The configured external places client, if any.
    #[must_use]
    pub fn places(&self) -> Option<&PlacesClient> {
        self.places.as_ref()
    }

    /// User-visible error, set only when a fetch failed and no prior result
    /// set exists. Zero matching hospitals is an empty state, not an error.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    async fn refresh_hospitals(&mut self) {
        let origin = self.resolver.location().map(|l| l.coordinate);
        match aggregate_hospitals(self.places.as_ref(), &self.directory, origin, self.radius_m)
            .await
        {
            Ok((records, source)) => {
                self.hospitals = records;
                self.source = source;
                self.last_error = None;
            }
            Err(e) => {
                if self.hospitals.is_empty() {
                    tracing::error!(error = %e, "hospital fetch failed with no prior data");
                    self.source = DataSource::None;
                    self.last_error = Some(e.to_string());
                } else {
                    // Keep serving the previous result set.
                    tracing::warn!(error = %e, "hospital refresh failed, keeping prior results");
                }
            }
        }
    }
}
