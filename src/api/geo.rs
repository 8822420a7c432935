//! Geo (places) service.

use std::sync::Arc;

use crate::api::{DataEnvelope, TWITTER_PREFIX};
use crate::client::{ClientInner, Request};
use crate::models::{Place, PlaceGranularity, PlaceId};
use crate::{Error, Result};

/// Service for geo place lookup and search.
#[derive(Clone)]
pub struct GeoService {
    inner: Arc<ClientInner>,
}

/// Options for [`GeoService::search`]. At least one of `query`, the
/// coordinates, or `ip` must be set.
#[derive(Debug, Clone, Default)]
pub struct GeoSearchOptions {
    /// Free-text place name
    pub query: Option<String>,
    /// Latitude
    pub lat: Option<f64>,
    /// Longitude
    pub long: Option<f64>,
    /// IP address to geolocate
    pub ip: Option<String>,
    /// Result resolution
    pub granularity: Option<PlaceGranularity>,
    /// Maximum number of places
    pub max_results: Option<u32>,
}

impl GeoSearchOptions {
    /// Search by name.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Search around coordinates.
    pub fn coordinates(lat: f64, long: f64) -> Self {
        Self {
            lat: Some(lat),
            long: Some(long),
            ..Default::default()
        }
    }

    /// Search by IP address.
    pub fn ip(ip: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
            ..Default::default()
        }
    }

    /// Set the granularity.
    pub fn granularity(mut self, granularity: PlaceGranularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// Limit the number of places.
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.lat.is_some() != self.long.is_some() {
            return Err(Error::InvalidInput(
                "lat and long must be given together".to_string(),
            ));
        }
        if self.query.is_none() && self.lat.is_none() && self.ip.is_none() {
            return Err(Error::InvalidInput(
                "geo search needs a query, coordinates or an IP address".to_string(),
            ));
        }
        Ok(())
    }
}

impl GeoService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a place by ID.
    pub async fn get(&self, id: &PlaceId) -> Result<Place> {
        let request = Request::get(format!("{TWITTER_PREFIX}/geo/places")).segment(id.as_str());
        self.inner.execute(request).await
    }

    /// Search places.
    pub async fn search(&self, options: GeoSearchOptions) -> Result<Vec<Place>> {
        options.validate()?;

        let request = Request::get(format!("{TWITTER_PREFIX}/geo/search"))
            .query_opt("query", options.query)
            .query_opt("lat", options.lat)
            .query_opt("long", options.long)
            .query_opt("ip", options.ip)
            .query_opt("granularity", options.granularity.map(|g| g.as_str()))
            .query_opt("max_results", options.max_results);

        let response: DataEnvelope<Place> = self.inner.execute(request).await?;
        Ok(response.data)
    }
}
