//! A headless [`LocationProvider`] for CLI use.
//!
//! A server has no GPS, so the fix comes from `CAREFIND_FIXED_LAT` /
//! `CAREFIND_FIXED_LNG`. Without them the resolver walks its tiers and
//! lands on the default Kuala Lumpur coordinate.

use async_trait::async_trait;

use carefind_core::Coordinate;
use carefind_locator::{LocationProvider, LocatorError, PermissionState, PositionFix};

pub struct FixedProvider {
    fix: Option<PositionFix>,
}

impl FixedProvider {
    #[must_use]
    pub fn new(coordinate: Option<Coordinate>) -> Self {
        Self {
            fix: coordinate.map(|coordinate| PositionFix {
                coordinate,
                accuracy: None,
            }),
        }
    }

    /// Builds a provider from the fixed-coordinate env vars, ignoring
    /// unparsable or out-of-range values with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let lat = std::env::var("CAREFIND_FIXED_LAT").ok();
        let lng = std::env::var("CAREFIND_FIXED_LNG").ok();
        let coordinate = match (lat, lng) {
            (Some(lat), Some(lng)) => match (lat.parse::<f64>(), lng.parse::<f64>()) {
                (Ok(lat), Ok(lng)) => {
                    let c = Coordinate::new(lat, lng);
                    if c.is_valid() {
                        Some(c)
                    } else {
                        tracing::warn!(lat, lng, "fixed coordinate out of range, ignoring");
                        None
                    }
                }
                _ => {
                    tracing::warn!("fixed coordinate env vars are not numbers, ignoring");
                    None
                }
            },
            _ => None,
        };
        Self::new(coordinate)
    }
}

#[async_trait]
impl LocationProvider for FixedProvider {
    async fn permission_state(&self) -> Result<PermissionState, LocatorError> {
        Ok(PermissionState::Granted)
    }

    async fn request_permission(&self) -> Result<PermissionState, LocatorError> {
        Ok(PermissionState::Granted)
    }

    async fn cached_coordinate(&self) -> Result<Option<PositionFix>, LocatorError> {
        Ok(self.fix)
    }

    async fn live_coordinate(&self) -> Result<PositionFix, LocatorError> {
        self.fix
            .ok_or_else(|| LocatorError::Provider("no fixed coordinate configured".to_owned()))
    }
}
