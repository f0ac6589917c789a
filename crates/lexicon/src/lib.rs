use datamuse_api::Relation;

mod datamuse_api;
mod dictionary_api;
mod word;

pub use word::{PartOfSpeech, Word, WordDefinition, WordMeaning};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to decode the dictionary response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error(transparent)]
    NotFound(NotFoundError),
}

#[derive(Debug, thiserror::Error)]
#[error("no dictionary entry for \"{word}\"")]
pub struct NotFoundError {
    word: String,
}

impl NotFoundError {
    pub(crate) fn new(word: &str) -> Self {
        Self {
            word: word.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelationsError {
    #[error("failed to reach the relations service: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to decode the relations response: {0}")]
    Deserialize(#[source] reqwest::Error),
}

pub struct Dictionary {
    client: reqwest::Client,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        dictionary_api::get_definition(&self.client, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Relations {
    client: reqwest::Client,
}

impl Relations {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn synonyms(&self, word: &str, max: usize) -> Result<Vec<String>, RelationsError> {
        datamuse_api::get_related(&self.client, Relation::Synonym, word, max).await
    }

    pub async fn antonyms(&self, word: &str, max: usize) -> Result<Vec<String>, RelationsError> {
        datamuse_api::get_related(&self.client, Relation::Antonym, word, max).await
    }

    pub async fn rhymes(&self, word: &str, max: usize) -> Result<Vec<String>, RelationsError> {
        datamuse_api::get_related(&self.client, Relation::Rhyme, word, max).await
    }
}

impl Default for Relations {
    fn default() -> Self {
        Self::new()
    }
}
