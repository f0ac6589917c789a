use serde::Deserialize;

use crate::RelationsError;

const DATAMUSE_API_URL: &str = "https://api.datamuse.com/words";

#[derive(Debug, Clone, Copy)]
pub(crate) enum Relation {
    Synonym,
    Antonym,
    Rhyme,
}

impl Relation {
    fn query_key(self) -> &'static str {
        match self {
            Relation::Synonym => "rel_syn",
            Relation::Antonym => "rel_ant",
            Relation::Rhyme => "rel_rhy",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelatedWord {
    word: String,
}

pub(crate) async fn get_related(
    client: &reqwest::Client,
    relation: Relation,
    word: &str,
    max: usize,
) -> Result<Vec<String>, RelationsError> {
    let res = client
        .get(DATAMUSE_API_URL)
        .query(&[(relation.query_key(), word)])
        .query(&[("max", max)])
        .send()
        .await
        .map_err(RelationsError::Fetch)?;
    let words: Vec<RelatedWord> = res.json().await.map_err(RelationsError::Deserialize)?;
    Ok(words.into_iter().map(|related| related.word).collect())
}
