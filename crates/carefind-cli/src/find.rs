//! The `find` subcommand: resolve a location, aggregate hospitals, and
//! print the ranked list.

use std::time::Duration;

use anyhow::Context;

use carefind_core::geo::format_distance;
use carefind_core::rank::rank_hospitals;
use carefind_core::{AppConfig, FilterState, RankedHospital, SortMode, TypeFilter};
use carefind_finder::{FinderController, InMemoryDirectory};
use carefind_locator::LocationResolver;
use carefind_places::PlacesClient;

use crate::provider::FixedProvider;

pub struct FindArgs {
    pub hospital_type: TypeFilter,
    pub emergency_only: bool,
    pub search: String,
    pub sort: SortMode,
    pub keyword: Option<String>,
}

pub async fn run(config: &AppConfig, args: FindArgs) -> anyhow::Result<()> {
    let places = match config.places_api_key.as_deref() {
        Some(key) => Some(
            PlacesClient::with_base_url(key, config.http_timeout_secs, &config.places_base_url)
                .context("failed to construct places client")?,
        ),
        None => None,
    };

    let resolver = LocationResolver::new(
        FixedProvider::from_env(),
        Duration::from_secs(config.location_timeout_secs),
    );
    let mut controller = FinderController::new(
        resolver,
        InMemoryDirectory::seeded(),
        places,
        config.search_radius_meters,
    );
    controller.initialize().await;

    if let Some(err) = controller.last_error() {
        anyhow::bail!("hospital lookup failed: {err}");
    }

    let filters = FilterState {
        type_filter: args.hospital_type,
        emergency_only: args.emergency_only,
        search_query: args.search,
    };

    // A keyword goes straight to the external keyword search when it is
    // configured; otherwise the regular candidate set is filtered locally.
    let ranked = match (&args.keyword, controller.places()) {
        (Some(keyword), Some(client)) => {
            let origin = controller.resolver().origin_or_default();
            let records = client
                .search_nearby(origin, keyword, config.search_radius_meters)
                .await
                .context("keyword search failed")?;
            rank_hospitals(origin, &records, &filters, args.sort)
        }
        _ => controller.ranked(&filters, args.sort),
    };

    if let Some(location) = controller.location() {
        println!(
            "Origin: {:.6}, {:.6} ({:?})",
            location.coordinate.latitude, location.coordinate.longitude, location.source
        );
    }
    println!("Source: {}", controller.source());
    println!();

    if ranked.is_empty() {
        println!("No hospitals match the current filters.");
        return Ok(());
    }

    print_table(&ranked);
    Ok(())
}

fn print_table(ranked: &[RankedHospital]) {
    println!(
        "{:<42} {:<12} {:>9}  {:<18} {}",
        "Name", "Type", "Distance", "City", "Emergency"
    );
    for h in ranked {
        println!(
            "{:<42} {:<12} {:>9}  {:<18} {}",
            truncate(&h.record.name, 42),
            h.record.hospital_type.label(),
            format_distance(h.distance_km),
            truncate(&h.record.city, 18),
            if h.record.has_emergency { "yes" } else { "no" }
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_owned()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate("Hospital", 42), "Hospital");
    }

    #[test]
    fn truncate_shortens_long_strings_with_ellipsis() {
        let long = "A very long hospital name that exceeds the column";
        let out = truncate(long, 20);
        assert_eq!(out.chars().count(), 20);
        assert!(out.ends_with('…'));
    }
}
