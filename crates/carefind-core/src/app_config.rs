#[derive(Clone)]
pub struct AppConfig {
    /// External places API key. `None` means the primary source is
    /// unconfigured and the internal directory is used exclusively.
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    /// Search radius for nearby lookups, in meters.
    pub search_radius_meters: u32,
    /// Budget for the live-GPS resolution tier, in seconds.
    pub location_timeout_secs: u64,
    pub http_timeout_secs: u64,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("search_radius_meters", &self.search_radius_meters)
            .field("location_timeout_secs", &self.location_timeout_secs)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}
