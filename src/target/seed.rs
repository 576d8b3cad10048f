use crate::calendar::parse_date_key;
use crate::target::errors::TargetResolutionError;
use crate::target::responses::NumberOfTheDayResponse;
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::Sha256;
use url::Url;

/// Maps a date key to the day's seed number. The range of the number is
/// unspecified; callers reduce it modulo the city count.
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn number_of_the_day(&self, date_key: &str) -> Result<i64, TargetResolutionError>;
}

/// Asks another service: `GET <url>?ds=<date key>`.
pub struct RemoteSeedSource {
    http_client: Client,
    url: Url,
}

impl RemoteSeedSource {
    pub fn new(url: Url) -> Self {
        Self {
            http_client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl SeedSource for RemoteSeedSource {
    async fn number_of_the_day(&self, date_key: &str) -> Result<i64, TargetResolutionError> {
        let response = self
            .http_client
            .get(self.url.clone())
            .query(&[("ds", date_key)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(TargetResolutionError::UnexpectedStatus(
                response.status().as_u16(),
            ));
        }
        let body: NumberOfTheDayResponse = response.json().await?;
        body.number_of_the_day
            .ok_or(TargetResolutionError::MissingNumber)
    }
}

/// Derives the seed locally from an HMAC-SHA256 of the date key, so every
/// instance sharing the secret agrees on the city of the day.
#[derive(Clone)]
pub struct SignedSeedSource {
    key: Hmac<Sha256>,
}

impl SignedSeedSource {
    pub fn new(secret: &str) -> Result<Self, hmac::digest::InvalidLength> {
        Ok(Self {
            key: Hmac::new_from_slice(secret.as_bytes())?,
        })
    }

    pub fn number_for(&self, date_key: &str) -> Result<i64, TargetResolutionError> {
        if parse_date_key(date_key).is_none() {
            return Err(TargetResolutionError::InvalidDateKey(date_key.to_string()));
        }
        let mut mac = self.key.clone();
        mac.update(date_key.as_bytes());
        let digest = mac.finalize().into_bytes();
        let number = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        Ok(i64::from(number))
    }
}

#[async_trait]
impl SeedSource for SignedSeedSource {
    async fn number_of_the_day(&self, date_key: &str) -> Result<i64, TargetResolutionError> {
        self.number_for(date_key)
    }
}
