use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::app::{NoorError, Result};
use crate::domain::chapter::CHAPTER_COUNT;
use crate::domain::{ChapterRecord, Verse};
use crate::fetcher::ChapterSource;

pub const DEFAULT_API_BASE: &str = "https://api.alquran.cloud/v1/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Response wrapper used by every endpoint of the metadata API.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: u16,
    status: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ChapterBody {
    ayahs: Vec<Verse>,
}

pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent("noor/0.1.0")
            .build()?;

        Ok(Self {
            client,
            base: with_trailing_slash(base),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        let base = Url::parse(DEFAULT_API_BASE)?;
        Self::new(base, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        let body = response.bytes().await?;
        parse_envelope(&body)
    }
}

#[async_trait]
impl ChapterSource for HttpFetcher {
    async fn fetch_chapters(&self) -> Result<Vec<ChapterRecord>> {
        let url = self.endpoint("surah")?;
        let chapters: Vec<ChapterRecord> = self.get(url).await?;
        tracing::info!("Fetched {} chapters", chapters.len());
        Ok(chapters)
    }

    async fn fetch_verses(&self, chapter: u16) -> Result<Vec<Verse>> {
        if chapter == 0 || chapter > CHAPTER_COUNT {
            return Err(NoorError::ChapterNotFound(chapter));
        }
        let url = self.endpoint(&format!("surah/{}", chapter))?;
        let body: ChapterBody = self.get(url).await?;
        tracing::info!("Fetched {} verses of chapter {}", body.ayahs.len(), chapter);
        Ok(body.ayahs)
    }
}

/// Decode an API response, surfacing non-200 envelope codes as errors.
fn parse_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_slice(body)?;
    match envelope.data {
        Some(data) if envelope.code == 200 => Ok(data),
        _ => Err(NoorError::Api {
            code: envelope.code,
            status: envelope.status,
        }),
    }
}

// `Url::join` replaces the last path segment unless the base ends in '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chapter_list() {
        let body = br#"{
            "code": 200,
            "status": "OK",
            "data": [
                {"number": 1, "name": "a", "englishName": "Al-Faatiha",
                 "englishNameTranslation": "The Opening", "numberOfAyahs": 7,
                 "revelationType": "Meccan"},
                {"number": 2, "name": "b", "englishName": "Al-Baqara",
                 "englishNameTranslation": "The Cow", "numberOfAyahs": 286,
                 "revelationType": "Medinan"}
            ]
        }"#;
        let chapters: Vec<ChapterRecord> = parse_envelope(body).unwrap();
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1].english_name, "Al-Baqara");
    }

    #[test]
    fn test_parse_chapter_body() {
        let body = br#"{
            "code": 200,
            "status": "OK",
            "data": {"number": 1, "ayahs": [
                {"number": 1, "text": "first", "numberInSurah": 1},
                {"number": 2, "text": "second", "numberInSurah": 2}
            ]}
        }"#;
        let chapter: ChapterBody = parse_envelope(body).unwrap();
        assert_eq!(chapter.ayahs.len(), 2);
        assert_eq!(chapter.ayahs[1].text, "second");
    }

    #[test]
    fn test_parse_api_error() {
        let body = br#"{"code": 404, "status": "Not Found", "data": "Surah not found"}"#;
        let err = parse_envelope::<ChapterBody>(body);
        assert!(err.is_err());

        let body = br#"{"code": 429, "status": "Too Many Requests"}"#;
        match parse_envelope::<Vec<ChapterRecord>>(body) {
            Err(NoorError::Api { code, status }) => {
                assert_eq!(code, 429);
                assert_eq!(status, "Too Many Requests");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_envelope::<Vec<ChapterRecord>>(b"<html>"),
            Err(NoorError::Json(_))
        ));
    }

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let base = Url::parse("https://example.com/v1").unwrap();
        let fetcher = HttpFetcher::new(base, Duration::from_secs(1)).unwrap();
        assert_eq!(
            fetcher.endpoint("surah/2").unwrap().as_str(),
            "https://example.com/v1/surah/2"
        );
    }

    #[tokio::test]
    async fn test_out_of_range_chapter_is_rejected_locally() {
        let fetcher = HttpFetcher::with_defaults().unwrap();
        assert!(matches!(
            fetcher.fetch_verses(0).await,
            Err(NoorError::ChapterNotFound(0))
        ));
        assert!(matches!(
            fetcher.fetch_verses(115).await,
            Err(NoorError::ChapterNotFound(115))
        ));
    }
}
