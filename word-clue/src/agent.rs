use async_trait::async_trait;
use lexicon::{Dictionary, Relations, Word};

/// The dictionary service had no usable entry, or could not be reached.
/// The composer treats every cause the same way, so the cause is only a message.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct LookupFailure(pub String);

/// The relations service failed; absorbed inside the synonym template.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct RelationsFailure(pub String);

#[async_trait]
pub trait WordLookup {
    async fn lookup(&self, word: &str) -> Result<Word, LookupFailure>;
}

#[async_trait]
pub trait SynonymLookup {
    async fn synonyms_of(&self, word: &str, limit: usize) -> Result<Vec<String>, RelationsFailure>;
}

#[async_trait]
impl WordLookup for Dictionary {
    async fn lookup(&self, word: &str) -> Result<Word, LookupFailure> {
        self.get_definition(word)
            .await
            .map_err(|error| LookupFailure(error.to_string()))
    }
}

#[async_trait]
impl SynonymLookup for Relations {
    async fn synonyms_of(&self, word: &str, limit: usize) -> Result<Vec<String>, RelationsFailure> {
        self.synonyms(word, limit)
            .await
            .map_err(|error| RelationsFailure(error.to_string()))
    }
}
