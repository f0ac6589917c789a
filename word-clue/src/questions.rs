use lexicon::{PartOfSpeech, Word, WordDefinition};
use rand::seq::SliceRandom;

use crate::agent::SynonymLookup;

pub const OPTION_COUNT: usize = 4;

const SYNONYM_FETCH_LIMIT: usize = 10;

const SYNONYM_DISTRACTOR_POOL: [&str; 8] = [
    "happy",
    "computer",
    "mountain",
    "quick",
    "bright",
    "small",
    "difficult",
    "ancient",
];

const NOUN_CONTEXTS: [&str; 4] = [
    "When describing a physical object or concept",
    "In a formal scientific research paper",
    "During casual everyday conversation",
    "In a professional business letter",
];

const VERB_CONTEXTS: [&str; 4] = [
    "When describing an action or process",
    "In a detailed cooking recipe",
    "During live sports commentary",
    "In a formal legal document",
];

const ADJECTIVE_CONTEXTS: [&str; 4] = [
    "When describing a quality or characteristic",
    "In a detailed product review",
    "In a weather forecast report",
    "In creative poetry or literature",
];

const BLANK_SENTENCE: &str = "The _____ was quite remarkable in that particular situation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Definition,
    Usage,
    Synonym,
    Context,
    Blank,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Definition,
        TemplateKind::Usage,
        TemplateKind::Synonym,
        TemplateKind::Context,
        TemplateKind::Blank,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::Definition => "definition",
            TemplateKind::Usage => "usage",
            TemplateKind::Synonym => "synonym",
            TemplateKind::Context => "context",
            TemplateKind::Blank => "blank",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub kind: TemplateKind,
}

/// Generates one question of the given kind. Only the synonym template does
/// any I/O; the rest derive everything from the fetched word data.
pub async fn generate<S: SynonymLookup>(
    kind: TemplateKind,
    word: &Word,
    synonyms: &S,
) -> Question {
    match kind {
        TemplateKind::Definition => definition_question(word),
        TemplateKind::Usage => usage_question(word),
        TemplateKind::Synonym => synonym_question(word, synonyms).await,
        TemplateKind::Context => context_question(word),
        TemplateKind::Blank => blank_question(word),
    }
}

// the composer checks for at least one meaning with one definition before dispatching
fn primary_definition(word: &Word) -> &WordDefinition {
    &word.meanings[0].definitions[0]
}

fn definition_question(word: &Word) -> Question {
    let correct = primary_definition(word).definition.clone();
    let part_of_speech = word.meanings[0].part_of_speech.label();
    let prefix = word.word.chars().take(3).collect::<String>();
    let distractors = [
        format!("A type of {part_of_speech} that is rarely used in modern language"),
        format!("Something related to ancient {prefix} terminology"),
        String::from("An old-fashioned term for everyday objects or concepts"),
    ];

    let mut options = vec![correct.clone()];
    for distractor in distractors {
        if options.len() < OPTION_COUNT {
            options.push(distractor);
        }
    }

    Question {
        prompt: format!("What is the best definition of \"{}\"?", word.word),
        options: shuffled(options),
        correct_answer: correct,
        kind: TemplateKind::Definition,
    }
}

fn usage_question(word: &Word) -> Question {
    let example = primary_definition(word)
        .example
        .clone()
        .unwrap_or_else(|| format!("The {} was quite impressive to observe.", word.word));

    let options = vec![
        example.clone(),
        format!("I went to the store yesterday to buy some {}.", word.word),
        format!("The color of the {} is blue and green today.", word.word),
        format!("Yesterday, I {}ed for several hours straight.", word.word),
    ];

    Question {
        prompt: format!("Which sentence correctly uses \"{}\"?", word.word),
        options: shuffled(options),
        correct_answer: example,
        kind: TemplateKind::Usage,
    }
}

async fn synonym_question<S: SynonymLookup>(word: &Word, synonyms: &S) -> Question {
    match synonyms.synonyms_of(&word.word, SYNONYM_FETCH_LIMIT).await {
        Ok(mut candidates) if !candidates.is_empty() => {
            let correct = candidates.swap_remove(0);
            let pool = SYNONYM_DISTRACTOR_POOL
                .iter()
                .copied()
                .filter(|&candidate| candidate != correct && candidate != word.word)
                .collect::<Vec<&str>>();
            let mut options = vec![correct.clone()];
            options.extend(
                pool.choose_multiple(&mut rand::thread_rng(), OPTION_COUNT - 1)
                    .map(|distractor| distractor.to_string()),
            );
            Question {
                prompt: format!("Which word is a synonym of \"{}\"?", word.word),
                options: shuffled(options),
                correct_answer: correct,
                kind: TemplateKind::Synonym,
            }
        }
        Ok(_) => synonym_fallback_question(word),
        Err(error) => {
            log::debug!("synonym lookup failed for \"{}\": {error}", word.word);
            synonym_fallback_question(word)
        }
    }
}

// asked when the relations service yields nothing useful
fn synonym_fallback_question(word: &Word) -> Question {
    let options = vec![
        String::from("similar"),
        String::from("different"),
        String::from("opposite"),
        String::from("unrelated"),
    ];
    Question {
        prompt: format!("Which word is closest in meaning to \"{}\"?", word.word),
        options: shuffled(options),
        correct_answer: String::from("similar"),
        kind: TemplateKind::Synonym,
    }
}

fn context_question(word: &Word) -> Question {
    let contexts = match word.meanings[0].part_of_speech {
        PartOfSpeech::Verb => &VERB_CONTEXTS,
        PartOfSpeech::Adjective => &ADJECTIVE_CONTEXTS,
        // adverbs and unrecognized parts of speech read from the noun list
        _ => &NOUN_CONTEXTS,
    };
    let correct = contexts[0].to_owned();
    let options = contexts.iter().map(|context| context.to_string()).collect();

    Question {
        prompt: format!("In which context would \"{}\" be most appropriate?", word.word),
        options: shuffled(options),
        correct_answer: correct,
        kind: TemplateKind::Context,
    }
}

fn blank_question(word: &Word) -> Question {
    let options = vec![
        word.word.clone(),
        format!("{}s", word.word),
        String::from("situation"),
        String::from("moment"),
    ];
    Question {
        // the blank is rendered as an ellipsis, not the placeholder token
        prompt: format!("Fill in the blank: \"{}\"", BLANK_SENTENCE.replace("_____", "...")),
        options: shuffled(options),
        correct_answer: word.word.clone(),
        kind: TemplateKind::Blank,
    }
}

fn shuffled(mut options: Vec<String>) -> Vec<String> {
    options.shuffle(&mut rand::thread_rng());
    options
}
