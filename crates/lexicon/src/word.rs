#[derive(Debug, Clone)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub meanings: Vec<WordMeaning>,
}


#[derive(Debug, Clone)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
}


#[derive(Debug, Clone)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    // the dictionary service also reports pronouns, interjections and so on
    Other,
}

impl PartOfSpeech {
    pub fn parse(label: &str) -> Self {
        match label {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            _ => PartOfSpeech::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Other => "word",
        }
    }
}
