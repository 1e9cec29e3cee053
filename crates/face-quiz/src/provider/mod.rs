//! Face provider: turns people-data API records into faces.
//!
//! The transport sits behind [`PersonFetcher`] so the retry and validation
//! rules run the same against the browser's HTTP stack and a scripted
//! fetcher in tests.

pub mod names;
pub mod person;

use thiserror::Error;

use crate::config::{NameSource, QuizConfig};
use crate::core::rng::Rng;
use crate::face::Face;
use names::{generate_name, is_roman_name};
use person::PersonRecord;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed person record: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("response contained no person record")]
    MissingRecord,
    #[error("name {0:?} is not made of Roman letters")]
    InvalidName(String),
    #[error("gave up after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Fetches one raw person record (the response body) from `url`.
#[allow(async_fn_in_trait)]
pub trait PersonFetcher {
    async fn fetch_person(&self, url: &str) -> Result<String, ProviderError>;
}

/// Produces faces one at a time with bounded retries.
pub struct FaceProvider<F: PersonFetcher> {
    fetcher: F,
    url: String,
    name_source: NameSource,
    validate_names: bool,
    max_attempts: u32,
    rng: Rng,
}

impl<F: PersonFetcher> FaceProvider<F> {
    pub fn new(fetcher: F, config: &QuizConfig, seed: u64) -> Self {
        Self {
            fetcher,
            url: config.api_url.clone(),
            name_source: config.name_source,
            validate_names: config.validate_names,
            max_attempts: config.max_attempts.max(1),
            rng: Rng::new(seed),
        }
    }

    /// Fetch a single face, retrying failed or rejected records up to the attempt bound.
    pub async fn fetch_face(&mut self) -> Result<Face, ProviderError> {
        for attempt in 1..=self.max_attempts {
            match self.try_fetch().await {
                Ok(face) => return Ok(face),
                Err(err) => {
                    log::warn!("face attempt {}/{} failed: {}", attempt, self.max_attempts, err);
                }
            }
        }
        Err(ProviderError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Fetch `count` faces one after another. The first slot that cannot
    /// be filled aborts the whole load.
    pub async fn load_round(&mut self, count: usize) -> Result<Vec<Face>, ProviderError> {
        let mut faces = Vec::with_capacity(count);
        for slot in 0..count {
            let face = self.fetch_face().await.map_err(|err| {
                log::error!("loading face {} of {} failed: {}", slot + 1, count, err);
                err
            })?;
            log::debug!("loaded face {} of {}: {}", slot + 1, count, face.name());
            faces.push(face);
        }
        log::info!("loaded {} faces", faces.len());
        Ok(faces)
    }

    async fn try_fetch(&mut self) -> Result<Face, ProviderError> {
        let body = self.fetcher.fetch_person(&self.url).await?;
        let record = PersonRecord::from_json(&body)?;
        let name = match self.name_source {
            NameSource::Syllables => generate_name(&mut self.rng),
            NameSource::Person => record.full_name(),
        };
        if self.validate_names && !is_roman_name(&name) {
            return Err(ProviderError::InvalidName(name));
        }
        Ok(Face::new(record.image_url(), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    fn record(first: &str, last: &str, picture: &str) -> Result<String, ProviderError> {
        Ok(format!(
            r#"{{ "results": [{{ "name": {{ "first": "{}", "last": "{}" }}, "picture": {{ "large": "{}" }} }}] }}"#,
            first, last, picture
        ))
    }

    /// Replays scripted responses in order; answers 503 once the script runs out.
    struct ScriptedFetcher {
        script: RefCell<VecDeque<Result<String, ProviderError>>>,
        calls: Cell<u32>,
    }

    impl ScriptedFetcher {
        fn new(script: Vec<Result<String, ProviderError>>) -> Self {
            Self {
                script: RefCell::new(script.into()),
                calls: Cell::new(0),
            }
        }
    }

    impl PersonFetcher for &ScriptedFetcher {
        async fn fetch_person(&self, _url: &str) -> Result<String, ProviderError> {
            self.calls.set(self.calls.get() + 1);
            self.script
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ProviderError::Status(503)))
        }
    }

    fn config(name_source: NameSource, validate_names: bool) -> QuizConfig {
        QuizConfig {
            name_source,
            validate_names,
            ..QuizConfig::default()
        }
    }

    #[test]
    fn person_names_come_from_record() {
        let fetcher = ScriptedFetcher::new(vec![record("Ana", "Silva", "a.jpg")]);
        let mut provider = FaceProvider::new(&fetcher, &config(NameSource::Person, false), 1);
        let face = pollster::block_on(provider.fetch_face()).unwrap();
        assert_eq!(face.name(), "Ana Silva");
        assert_eq!(face.image_url(), "a.jpg");
    }

    #[test]
    fn syllable_names_use_record_picture_only() {
        let fetcher = ScriptedFetcher::new(vec![record("Ana", "Silva", "a.jpg")]);
        let mut provider = FaceProvider::new(&fetcher, &config(NameSource::Syllables, false), 1);
        let face = pollster::block_on(provider.fetch_face()).unwrap();
        assert_ne!(face.name(), "Ana Silva");
        assert_eq!(face.name().len(), 3);
        assert_eq!(face.image_url(), "a.jpg");
    }

    #[test]
    fn validation_skips_non_roman_names() {
        let fetcher = ScriptedFetcher::new(vec![
            record("Zoë", "Müller", "z.jpg"),
            record("Ли", "Вэй", "l.jpg"),
            record("Ana", "Silva", "a.jpg"),
        ]);
        let mut provider = FaceProvider::new(&fetcher, &config(NameSource::Person, true), 1);
        let face = pollster::block_on(provider.fetch_face()).unwrap();
        assert_eq!(face.name(), "Ana Silva");
        assert_eq!(fetcher.calls.get(), 3);
    }

    #[test]
    fn network_and_parse_errors_are_retried() {
        let fetcher = ScriptedFetcher::new(vec![
            Err(ProviderError::Http("offline".into())),
            Ok("not json".into()),
            record("Ana", "Silva", "a.jpg"),
        ]);
        let mut provider = FaceProvider::new(&fetcher, &config(NameSource::Person, false), 1);
        assert!(pollster::block_on(provider.fetch_face()).is_ok());
        assert_eq!(fetcher.calls.get(), 3);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let script = (0..20).map(|_| record("Zoë", "Müller", "z.jpg")).collect();
        let fetcher = ScriptedFetcher::new(script);
        let mut provider = FaceProvider::new(&fetcher, &config(NameSource::Person, true), 1);
        let err = pollster::block_on(provider.fetch_face()).unwrap_err();
        assert!(matches!(err, ProviderError::Exhausted { attempts: 10 }));
        assert_eq!(fetcher.calls.get(), 10);
    }

    #[test]
    fn load_round_fills_every_slot_in_order() {
        let script = (0..5)
            .map(|i| record("P", &format!("N{}", i), &format!("{}.jpg", i)))
            .collect();
        let fetcher = ScriptedFetcher::new(script);
        let mut provider = FaceProvider::new(&fetcher, &config(NameSource::Syllables, false), 3);
        let faces = pollster::block_on(provider.load_round(5)).unwrap();
        assert_eq!(faces.len(), 5);
        let urls: Vec<&str> = faces.iter().map(|f| f.image_url()).collect();
        assert_eq!(urls, ["0.jpg", "1.jpg", "2.jpg", "3.jpg", "4.jpg"]);
    }

    #[test]
    fn load_round_aborts_when_a_slot_fails() {
        // Two good records, then nothing but errors.
        let fetcher = ScriptedFetcher::new(vec![record("A", "B", "1.jpg"), record("C", "D", "2.jpg")]);
        let mut provider = FaceProvider::new(&fetcher, &config(NameSource::Person, false), 1);
        let err = pollster::block_on(provider.load_round(5)).unwrap_err();
        assert!(matches!(err, ProviderError::Exhausted { .. }));
        assert_eq!(fetcher.calls.get(), 2 + 10);
    }
}
