//! Tiered location resolution with permission tracking.

use std::time::Duration;

use carefind_core::{Coordinate, LocationSource, ResolvedLocation, DEFAULT_ORIGIN};

use crate::error::LocatorError;
use crate::provider::{LocationProvider, PermissionState};

/// Resolver lifecycle over one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    Uninitialized,
    CheckingPermission,
    PermissionDenied,
    Resolving,
    Resolved,
}

/// Drives the cached → live → default resolution strategy against an
/// injected [`LocationProvider`].
///
/// Each resolution attempt is tagged with a monotonically increasing
/// sequence number; a completed attempt only replaces the current
/// [`ResolvedLocation`] if no newer attempt has been applied since it
/// started, so a stale in-flight resolution can never clobber a fresher one.
pub struct LocationResolver<P: LocationProvider> {
    provider: P,
    live_timeout: Duration,
    state: ResolverState,
    permission: Option<PermissionState>,
    location: Option<ResolvedLocation>,
    last_error: Option<LocatorError>,
    next_seq: u64,
    applied_seq: u64,
}

impl<P: LocationProvider> LocationResolver<P> {
    #[must_use]
    pub fn new(provider: P, live_timeout: Duration) -> Self {
        Self {
            provider,
            live_timeout,
            state: ResolverState::Uninitialized,
            permission: None,
            location: None,
            last_error: None,
            next_seq: 0,
            applied_seq: 0,
        }
    }

    /// Checks permission and, when possible, runs the first resolution.
    ///
    /// An `Undetermined` permission triggers one automatic request; `Denied`
    /// parks the resolver in [`ResolverState::PermissionDenied`] until
    /// [`LocationResolver::request_permission`] is invoked.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::PermissionDenied`] when access is declined
    /// and [`LocatorError::Provider`] when the permission check itself
    /// fails. The resolver stays usable after either.
    pub async fn initialize(&mut self) -> Result<(), LocatorError> {
        self.state = ResolverState::CheckingPermission;
        let permission = self.check_permission().await?;

        match permission {
            PermissionState::Granted => {
                self.resolve_once().await;
                Ok(())
            }
            PermissionState::Undetermined => {
                tracing::debug!("permission undetermined, requesting once");
                if self.prompt_for_permission().await? {
                    self.resolve_once().await;
                    Ok(())
                } else {
                    Err(self.deny())
                }
            }
            PermissionState::Denied => Err(self.deny()),
        }
    }

    /// Re-prompts the user for permission. On grant, resolves immediately.
    ///
    /// Returns `true` when permission was granted.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Provider`] if the prompt itself fails.
    pub async fn request_permission(&mut self) -> Result<bool, LocatorError> {
        if self.prompt_for_permission().await? {
            self.resolve_once().await;
            Ok(true)
        } else {
            let _ = self.deny();
            Ok(false)
        }
    }

    /// Re-checks permission and re-runs the three-tier resolution,
    /// superseding the previous [`ResolvedLocation`].
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::PermissionDenied`] when permission is not
    /// currently granted; no resolution happens in that case.
    pub async fn refresh(&mut self) -> Result<(), LocatorError> {
        self.state = ResolverState::CheckingPermission;
        let permission = self.check_permission().await?;
        if permission != PermissionState::Granted {
            return Err(self.deny());
        }
        self.resolve_once().await;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> ResolverState {
        self.state
    }

    #[must_use]
    pub fn location(&self) -> Option<&ResolvedLocation> {
        self.location.as_ref()
    }

    /// Active origin for distance computations: the resolved coordinate, or
    /// the Kuala Lumpur default when nothing has resolved yet.
    #[must_use]
    pub fn origin_or_default(&self) -> Coordinate {
        self.location
            .as_ref()
            .map_or(DEFAULT_ORIGIN, |l| l.coordinate)
    }

    #[must_use]
    pub fn permission(&self) -> Option<PermissionState> {
        self.permission
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&LocatorError> {
        self.last_error.as_ref()
    }

    async fn check_permission(&mut self) -> Result<PermissionState, LocatorError> {
        match self.provider.permission_state().await {
            Ok(permission) => {
                self.permission = Some(permission);
                Ok(permission)
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                self.state = ResolverState::Uninitialized;
                Err(e)
            }
        }
    }

    async fn prompt_for_permission(&mut self) -> Result<bool, LocatorError> {
        match self.provider.request_permission().await {
            Ok(permission) => {
                self.permission = Some(permission);
                Ok(permission == PermissionState::Granted)
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn deny(&mut self) -> LocatorError {
        tracing::info!("location permission denied; resolver parked");
        self.state = ResolverState::PermissionDenied;
        self.last_error = Some(LocatorError::PermissionDenied);
        LocatorError::PermissionDenied
    }

    /// Runs one sequence-numbered resolution attempt through the tiers.
    async fn resolve_once(&mut self) {
        self.state = ResolverState::Resolving;
        self.next_seq += 1;
        let seq = self.next_seq;

        let resolved = resolve_tiers(&self.provider, self.live_timeout).await;
        self.apply_resolution(seq, resolved);
    }

    /// Applies a completed attempt unless a newer one already landed
    /// (last-resolution-wins).
    fn apply_resolution(&mut self, seq: u64, resolved: ResolvedLocation) {
        if seq <= self.applied_seq {
            tracing::debug!(seq, applied = self.applied_seq, "discarding stale resolution");
            return;
        }
        self.applied_seq = seq;
        self.location = Some(resolved);
        self.last_error = None;
        self.state = ResolverState::Resolved;
        tracing::info!(
            seq,
            source = ?resolved.source,
            latitude = resolved.coordinate.latitude,
            longitude = resolved.coordinate.longitude,
            "location resolved"
        );
    }
}

/// Executes the tiers in order, first success wins. Never fails: tier 3 is
/// the fixed default coordinate.
async fn resolve_tiers<P: LocationProvider>(provider: &P, live_timeout: Duration) -> ResolvedLocation {
    // Tier 1: cached fix, expected near-instant, no timeout.
    match provider.cached_coordinate().await {
        Ok(Some(fix)) => {
            tracing::debug!("using cached location fix");
            return ResolvedLocation {
                coordinate: fix.coordinate,
                accuracy: fix.accuracy,
                timestamp_ms: now_ms(),
                source: LocationSource::Cached,
            };
        }
        Ok(None) => tracing::debug!("no cached location available"),
        Err(e) => tracing::warn!(error = %e, "cached location lookup failed"),
    }

    // Tier 2: live fix, bounded by the timeout. The in-flight request is
    // abandoned on expiry; any late result is dropped with the future.
    match tokio::time::timeout(live_timeout, provider.live_coordinate()).await {
        Ok(Ok(fix)) => {
            tracing::debug!(accuracy = ?fix.accuracy, "live GPS fix acquired");
            return ResolvedLocation {
                coordinate: fix.coordinate,
                accuracy: fix.accuracy,
                timestamp_ms: now_ms(),
                source: LocationSource::Live,
            };
        }
        Ok(Err(e)) => tracing::warn!(error = %e, "live GPS fetch failed"),
        Err(_) => tracing::warn!(timeout_secs = live_timeout.as_secs(), "live GPS fetch timed out"),
    }

    // Tier 3: fixed fallback, never fails.
    tracing::info!("falling back to default Kuala Lumpur coordinate");
    ResolvedLocation {
        coordinate: DEFAULT_ORIGIN,
        accuracy: None,
        timestamp_ms: now_ms(),
        source: LocationSource::Default,
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
