//! Dual-source hospital aggregation with strict fallback order.

use carefind_core::{Coordinate, DataSource, HospitalRecord};
use carefind_places::PlacesClient;

use crate::directory::HospitalDirectory;
use crate::error::FinderError;

/// Fetches hospital candidates, preferring the external places source and
/// falling back to the internal directory. Results from the two sources are
/// never merged into one response.
///
/// The primary source runs only when both an origin coordinate and a
/// configured client are available. An empty or fully failed primary pass
/// is not an error; it just triggers the fallback. The returned
/// [`DataSource`] tags which source produced the records.
///
/// # Errors
///
/// Returns [`FinderError::Directory`] only when the fallback directory
/// fetch itself fails; whether that is user-visible depends on whether the
/// caller still holds a prior result set.
pub async fn aggregate_hospitals(
    places: Option<&PlacesClient>,
    directory: &dyn HospitalDirectory,
    origin: Option<Coordinate>,
    radius_m: u32,
) -> Result<(Vec<HospitalRecord>, DataSource), FinderError> {
    match (places, origin) {
        (Some(client), Some(origin)) => {
            let records = client.fetch_nearby_hospitals(origin, radius_m).await;
            if records.is_empty() {
                tracing::info!("external source returned nothing, falling back to directory");
            } else {
                return Ok((records, DataSource::External));
            }
        }
        (None, _) => {
            tracing::debug!("external source unconfigured, using directory");
        }
        (_, None) => {
            tracing::debug!("no origin coordinate yet, using directory");
        }
    }

    let records = directory.fetch_all().await?;
    tracing::info!(count = records.len(), "using internal directory records");
    Ok((records, DataSource::Internal))
}
