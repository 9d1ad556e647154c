use async_trait::async_trait;
use livemap_application::ports::LocationResolver;
use livemap_domain::location::STATUS_SUCCESS;
use livemap_domain::{DomainError, LocationRecord};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Body returned by `GET {endpoint}/{address}` on ip-api.com
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    country: String,
    #[serde(default)]
    country_code: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    region_name: String,
    #[serde(default, rename = "zip")]
    postal_code: String,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    isp: String,
    #[serde(default, rename = "org")]
    organization: String,
}

/// Resolves addresses through an ip-api.com compatible JSON endpoint.
///
/// Quota enforcement lives in the refresh engine; this client issues exactly
/// one request per call.
pub struct IpApiLocationResolver {
    endpoint: String,
    http_client: reqwest::Client,
}

impl IpApiLocationResolver {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent("Livemap/0.3 (location-refresh)")
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::HttpClientError(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn lookup_url(&self, address: &str) -> String {
        format!("{}/{}", self.endpoint, address)
    }

    fn transport_error(address: &str, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::LookupTimeout(address.to_string())
        } else {
            DomainError::LookupFailed {
                address: address.to_string(),
                reason: e.to_string(),
            }
        }
    }

    fn into_record(address: &str, body: IpApiResponse) -> Result<LocationRecord, DomainError> {
        if body.status != STATUS_SUCCESS {
            return Err(DomainError::LookupRejected {
                address: address.to_string(),
                message: body.message.unwrap_or(body.status),
            });
        }

        let (latitude, longitude) = match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Err(DomainError::InvalidResponse {
                    address: address.to_string(),
                    reason: "missing coordinates".to_string(),
                })
            }
        };

        Ok(LocationRecord {
            address: address.into(),
            status: body.status,
            country: body.country,
            country_code: body.country_code,
            region: body.region,
            region_name: body.region_name,
            postal_code: body.postal_code,
            latitude,
            longitude,
            isp: body.isp,
            organization: body.organization,
        })
    }
}

#[async_trait]
impl LocationResolver for IpApiLocationResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, address: &str) -> Result<LocationRecord, DomainError> {
        let response = self
            .http_client
            .get(self.lookup_url(address))
            .send()
            .await
            .map_err(|e| Self::transport_error(address, e))?;

        if !response.status().is_success() {
            return Err(DomainError::LookupFailed {
                address: address.to_string(),
                reason: format!("HTTP {}", response.status().as_u16()),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(address, e))?;

        let body: IpApiResponse =
            serde_json::from_slice(&bytes).map_err(|e| DomainError::InvalidResponse {
                address: address.to_string(),
                reason: e.to_string(),
            })?;

        let record = Self::into_record(address, body)?;
        debug!(
            address,
            country = %record.country_code,
            latitude = record.latitude,
            longitude = record.longitude,
            "Location resolved"
        );
        Ok(record)
    }
}
