//! Fetches the question bank once at startup and fixes its order for the
//! lifetime of the process.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::model::{validate_all, InvalidQuestion, Question, QuestionBank};
use crate::shuffle::shuffle;

pub const DEFAULT_SOURCE: &str = "questions.json";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("cannot parse question bank: {0}")]
    ParseError(String),
    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_location(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Format::Yaml
        } else {
            Format::Json
        }
    }
}

/// Where raw question data comes from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;

    fn format(&self) -> Format;

    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn format(&self) -> Format {
        Format::from_location(&self.path.to_string_lossy())
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            LoadError::SourceUnavailable(format!("cannot read {}: {}", self.path.display(), e))
        })
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn format(&self) -> Format {
        // Ignore any query string when sniffing the extension.
        let path = self.url.split(['?', '#']).next().unwrap_or(&self.url);
        Format::from_location(path)
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::SourceUnavailable(format!("{}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::SourceUnavailable(format!(
                "{} returned HTTP {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::SourceUnavailable(format!("{}: {}", self.url, e)))?;
        Ok(body.to_vec())
    }
}

pub fn is_http_url(s: &str) -> bool {
    s.starts_with("https://") || s.starts_with("http://")
}

/// Picks the source implementation for a CLI location string.
pub fn source_for(location: &str) -> Box<dyn QuestionSource> {
    if is_http_url(location) {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    #[default]
    Random,
    Seeded(u64),
    Off,
}

pub struct Loader {
    source: Box<dyn QuestionSource>,
    shuffle: ShuffleMode,
}

impl Loader {
    pub fn new(source: Box<dyn QuestionSource>) -> Self {
        Self {
            source,
            shuffle: ShuffleMode::default(),
        }
    }

    pub fn with_shuffle(mut self, mode: ShuffleMode) -> Self {
        self.shuffle = mode;
        self
    }

    pub fn source(&self) -> &dyn QuestionSource {
        self.source.as_ref()
    }

    /// Fetches, decodes, validates and orders the bank. No retries.
    pub async fn load(&self) -> Result<QuestionBank, LoadError> {
        let location = self.source.describe();
        log::debug!("fetching question bank from {}", location);

        let raw = self.source.fetch().await?;
        let mut questions = parse_questions(&raw, self.source.format())?;
        apply_order(&mut questions, self.shuffle);

        log::info!("loaded {} questions from {}", questions.len(), location);
        Ok(QuestionBank::new(questions)?)
    }
}

/// Decodes a payload into questions and checks every record's invariants.
pub fn parse_questions(raw: &[u8], format: Format) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = match format {
        Format::Json => {
            serde_json::from_slice(raw).map_err(|e| LoadError::ParseError(e.to_string()))?
        }
        Format::Yaml => {
            serde_yaml::from_slice(raw).map_err(|e| LoadError::ParseError(e.to_string()))?
        }
    };

    validate_all(&questions)?;
    Ok(questions)
}

impl From<InvalidQuestion> for LoadError {
    fn from(e: InvalidQuestion) -> Self {
        LoadError::InvalidQuestion {
            index: e.index,
            reason: e.reason,
        }
    }
}

fn apply_order(questions: &mut [Question], mode: ShuffleMode) {
    match mode {
        ShuffleMode::Random => shuffle(questions, &mut rand::thread_rng()),
        ShuffleMode::Seeded(seed) => shuffle(questions, &mut StdRng::seed_from_u64(seed)),
        ShuffleMode::Off => {}
    }
}
