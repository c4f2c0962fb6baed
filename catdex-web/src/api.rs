use crate::config::ApiConfig;
use crate::error::ApiError;
use catdex_ui::display_types::{Breed, BreedSummary, CatImage};
use catdex_ui::stores::{FetchOutcome, FetchTicket};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// The Cat API image record
#[derive(Deserialize)]
struct ApiImage {
    id: String,
    url: String,
    width: Option<u32>,
    height: Option<u32>,
    #[serde(default)]
    breeds: Vec<ApiBreed>,
}

#[derive(Deserialize)]
struct ApiBreed {
    id: String,
    name: Option<String>,
    origin: Option<String>,
    temperament: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct ApiBreedSummary {
    id: String,
    name: String,
}

impl From<ApiImage> for CatImage {
    fn from(image: ApiImage) -> Self {
        CatImage {
            id: image.id,
            url: image.url,
            width: image.width,
            height: image.height,
            breeds: image.breeds.into_iter().map(Breed::from).collect(),
        }
    }
}

impl From<ApiBreed> for Breed {
    fn from(breed: ApiBreed) -> Self {
        Breed {
            id: breed.id,
            name: breed.name,
            origin: breed.origin,
            temperament: breed.temperament,
            description: breed.description,
        }
    }
}

/// Source of single cat records for the detail page.
///
/// `Ok(None)` means the cat does not exist.
#[allow(async_fn_in_trait)]
pub trait CatSource {
    async fn fetch_cat(&self, cat_id: &str) -> Result<Option<CatImage>, ApiError>;
}

/// HTTP client for The Cat API
#[derive(Clone, Debug)]
pub struct CatApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl CatApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build `{base_url}/{segments...}`, escaping each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.config.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.config.api_key {
            Some(key) => request.header("x-api-key", key),
            None => request,
        }
    }

    /// Fetch all breeds for the home page selector
    pub async fn fetch_breeds(&self) -> Result<Vec<BreedSummary>, ApiError> {
        let url = self.endpoint(&["breeds"])?;
        debug!("Fetching breeds from {}", url);

        let resp = self.get(url).send().await.map_err(ApiError::Network)?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }

        let breeds: Vec<ApiBreedSummary> = resp.json().await.map_err(ApiError::Decode)?;
        info!("Loaded {} breeds", breeds.len());

        Ok(breeds
            .into_iter()
            .map(|b| BreedSummary {
                id: b.id,
                name: b.name,
            })
            .collect())
    }

    /// Fetch up to `limit` images of one breed
    pub async fn fetch_breed_images(
        &self,
        breed_id: &str,
        limit: u32,
    ) -> Result<Vec<CatImage>, ApiError> {
        let url = self.endpoint(&["images", "search"])?;
        debug!("Searching {} images of breed {}", limit, breed_id);

        let limit = limit.to_string();
        let resp = self
            .get(url)
            .query(&[("breed_ids", breed_id), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(ApiError::Network)?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }

        let images: Vec<ApiImage> = resp.json().await.map_err(ApiError::Decode)?;
        Ok(images.into_iter().map(CatImage::from).collect())
    }
}

impl CatSource for CatApi {
    async fn fetch_cat(&self, cat_id: &str) -> Result<Option<CatImage>, ApiError> {
        let url = self.endpoint(&["images", cat_id])?;
        debug!("Fetching cat {} from {}", cat_id, url);

        let resp = self.get(url).send().await.map_err(ApiError::Network)?;
        let status = resp.status();
        if is_not_found(status) {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let image: ApiImage = resp.json().await.map_err(ApiError::Decode)?;
        Ok(Some(image.into()))
    }
}

/// The Cat API answers unknown image ids with 400 rather than 404
fn is_not_found(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST
}

/// Run the fetch for one detail-page cycle.
///
/// Not-found and failures are both reported as `Unavailable`; only the log
/// tells them apart.
pub async fn load_cat_detail(source: &impl CatSource, ticket: &FetchTicket) -> FetchOutcome {
    match source.fetch_cat(&ticket.cat_id).await {
        Ok(Some(cat)) => {
            info!("🐱 Loaded cat {}", ticket.cat_id);
            FetchOutcome::Found(cat)
        }
        Ok(None) => {
            warn!("Cat {} not found", ticket.cat_id);
            FetchOutcome::Unavailable
        }
        Err(e) => {
            warn!("Failed to load cat {}: {}", ticket.cat_id, e);
            FetchOutcome::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    const BENGAL_JSON: &str = r#"{
        "id": "beng-img",
        "url": "http://img/1.jpg",
        "width": 1200,
        "height": 800,
        "breeds": [{
            "id": "beng",
            "name": "Bengal",
            "origin": "United States",
            "temperament": "Alert, Agile",
            "description": "Wild-looking breed.",
            "life_span": "12 - 15",
            "wikipedia_url": "https://en.wikipedia.org/wiki/Bengal_cat",
            "weight": { "imperial": "6 - 12", "metric": "3 - 7" }
        }]
    }"#;

    fn bengal() -> CatImage {
        serde_json::from_str::<ApiImage>(BENGAL_JSON).unwrap().into()
    }

    /// In-memory source; ids missing from the map fail with a server error
    struct FakeSource {
        cats: HashMap<String, Option<CatImage>>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(entries: Vec<(&str, Option<CatImage>)>) -> Self {
            Self {
                cats: entries
                    .into_iter()
                    .map(|(id, cat)| (id.to_string(), cat))
                    .collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl CatSource for FakeSource {
        async fn fetch_cat(&self, cat_id: &str) -> Result<Option<CatImage>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.cats
                .get(cat_id)
                .cloned()
                .ok_or(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }

    fn ticket(cat_id: &str) -> FetchTicket {
        FetchTicket {
            generation: 1,
            cat_id: cat_id.to_string(),
        }
    }

    #[test]
    fn test_decode_image_with_breed() {
        let cat = bengal();
        assert_eq!(cat.id, "beng-img");
        assert_eq!(cat.url, "http://img/1.jpg");
        assert_eq!(cat.width, Some(1200));
        let breed = cat.primary_breed().unwrap();
        assert_eq!(breed.id, "beng");
        assert_eq!(breed.name.as_deref(), Some("Bengal"));

        // Extra API fields never reach the details panel
        let lines: Vec<String> = breed.detail_lines().iter().map(|l| l.text()).collect();
        assert_eq!(
            lines,
            vec![
                "Name: Bengal",
                "Origin: United States",
                "Temperament: Alert, Agile",
                "Description: Wild-looking breed.",
            ]
        );
    }

    #[test]
    fn test_decode_image_without_breeds() {
        let json = r#"{ "id": "abc", "url": "http://img/2.jpg" }"#;
        let cat: CatImage = serde_json::from_str::<ApiImage>(json).unwrap().into();
        assert!(cat.breeds.is_empty());
        assert_eq!(cat.width, None);
        assert_eq!(cat.alt_text(), "Cat");
    }

    #[test]
    fn test_not_found_statuses() {
        assert!(is_not_found(StatusCode::NOT_FOUND));
        assert!(is_not_found(StatusCode::BAD_REQUEST));
        assert!(!is_not_found(StatusCode::OK));
        assert!(!is_not_found(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_endpoint_escapes_segments() {
        let api = CatApi::new(ApiConfig::default());
        assert_eq!(
            api.endpoint(&["images", "beng"]).unwrap().as_str(),
            "https://api.thecatapi.com/v1/images/beng"
        );
        assert_eq!(
            api.endpoint(&["images", "a/b c"]).unwrap().as_str(),
            "https://api.thecatapi.com/v1/images/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_found_cat() {
        let source = FakeSource::new(vec![("beng", Some(bengal()))]);
        let outcome = load_cat_detail(&source, &ticket("beng")).await;
        assert_eq!(outcome, FetchOutcome::Found(bengal()));
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_missing_cat_is_unavailable() {
        let source = FakeSource::new(vec![("xx00", None)]);
        let outcome = load_cat_detail(&source, &ticket("xx00")).await;
        assert_eq!(outcome, FetchOutcome::Unavailable);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_unavailable() {
        let source = FakeSource::new(vec![]);
        let outcome = load_cat_detail(&source, &ticket("beng")).await;
        assert_eq!(outcome, FetchOutcome::Unavailable);
    }
}
