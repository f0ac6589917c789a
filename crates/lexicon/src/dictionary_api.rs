use serde::Deserialize;

use crate::word::{PartOfSpeech, Word, WordDefinition, WordMeaning};
use crate::{DictionaryError, NotFoundError};

const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
struct ApiEntry {
    word: String,
    phonetic: Option<String>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    example: Option<String>,
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    word: &str,
) -> Result<Word, DictionaryError> {
    let res = client
        .get(format!("{DICTIONARY_API_URL}/{word}"))
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    // the service answers 404 with an error document for unknown words
    if !res.status().is_success() {
        return Err(DictionaryError::NotFound(NotFoundError::new(word)));
    }
    let entries: Vec<ApiEntry> = res.json().await.map_err(DictionaryError::Deserialize)?;
    match entries.into_iter().next() {
        Some(entry) if !entry.meanings.is_empty() => Ok(convert_entry(entry)),
        // an entry without meanings is as useless as no entry at all
        _ => Err(DictionaryError::NotFound(NotFoundError::new(word))),
    }
}

fn convert_entry(entry: ApiEntry) -> Word {
    Word {
        word: entry.word,
        phonetic: entry.phonetic,
        meanings: entry
            .meanings
            .into_iter()
            .map(|meaning| WordMeaning {
                part_of_speech: PartOfSpeech::parse(&meaning.part_of_speech),
                definitions: meaning
                    .definitions
                    .into_iter()
                    .map(|definition| WordDefinition {
                        definition: definition.definition,
                        example: definition.example,
                    })
                    .collect(),
            })
            .collect(),
    }
}
