use crate::scoring::is_match;

/// A face to memorize: a picture, the name that goes with it, and the
/// player's recorded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    image_url: String,
    name: String,
    /// Trimmed answer typed during recall. Empty until recorded.
    pub answer: String,
}

impl Face {
    pub fn new(image_url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            name: name.into(),
            answer: String::new(),
        }
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record an answer, trimming surrounding whitespace.
    pub fn record_answer(&mut self, raw: &str) {
        self.answer = raw.trim().to_string();
    }

    pub fn is_correct(&self) -> bool {
        is_match(&self.answer, &self.name)
    }
}
