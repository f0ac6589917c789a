use std::collections::HashSet;

use lexicon::Word;
use rand::Rng;

use crate::agent::{SynonymLookup, WordLookup};
use crate::questions::{self, Question, TemplateKind};

pub const QUIZ_LENGTH: usize = 5;

// draws per slot before a duplicate template type is accepted
const TEMPLATE_DRAW_ATTEMPTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub word: String,
    pub questions: Vec<Question>,
}

/// Builds a five-question quiz for a word. Total from the caller's point of
/// view: a failed or unusable dictionary lookup degrades to the canned
/// fallback quiz instead of an error.
pub async fn generate_quiz<D, S>(dictionary: &D, relations: &S, word: &str) -> Quiz
where
    D: WordLookup,
    S: SynonymLookup,
{
    match dictionary.lookup(word).await {
        Ok(data) if has_usable_definition(&data) => compose_quiz(&data, relations).await,
        Ok(_) => {
            log::warn!("dictionary entry for \"{word}\" has no definitions, using the fallback quiz");
            fallback_quiz(word)
        }
        Err(error) => {
            log::warn!("dictionary lookup failed for \"{word}\": {error}, using the fallback quiz");
            fallback_quiz(word)
        }
    }
}

fn has_usable_definition(word: &Word) -> bool {
    word.meanings
        .first()
        .is_some_and(|meaning| !meaning.definitions.is_empty())
}

async fn compose_quiz<S: SynonymLookup>(word: &Word, relations: &S) -> Quiz {
    let kinds = pick_template_kinds(&mut rand::thread_rng());
    Quiz {
        word: word.word.clone(),
        questions: compose_questions(word, relations, kinds).await,
    }
}

async fn compose_questions<S: SynonymLookup>(
    word: &Word,
    relations: &S,
    kinds: [TemplateKind; QUIZ_LENGTH],
) -> Vec<Question> {
    let mut questions = Vec::with_capacity(QUIZ_LENGTH);
    for kind in kinds {
        log::debug!("generating a {} question for \"{}\"", kind.label(), word.word);
        let mut question = questions::generate(kind, word, relations).await;
        // the composer's tag wins over whatever the generator set
        question.kind = kind;
        questions.push(question);
    }
    questions
}

/// Best-effort variety: each slot re-rolls while the drawn type was already
/// used, and accepts the duplicate after ten draws rather than failing.
fn pick_template_kinds(rng: &mut impl Rng) -> [TemplateKind; QUIZ_LENGTH] {
    let mut used = HashSet::new();
    let mut kinds = [TemplateKind::Definition; QUIZ_LENGTH];
    for slot in kinds.iter_mut() {
        let mut kind;
        let mut attempts = 0;
        loop {
            kind = TemplateKind::ALL[rng.gen_range(0..TemplateKind::ALL.len())];
            attempts += 1;
            if !used.contains(&kind) || attempts >= TEMPLATE_DRAW_ATTEMPTS {
                break;
            }
        }
        used.insert(kind);
        *slot = kind;
    }
    kinds
}

/// The data-independent quiz served when no word data could be fetched.
pub fn fallback_quiz(word: &str) -> Quiz {
    let questions = vec![
        Question {
            prompt: format!("What type of word is \"{word}\"?"),
            options: fixed_options(["Noun", "Verb", "Adjective", "Adverb"]),
            correct_answer: String::from("Noun"),
            kind: TemplateKind::Definition,
        },
        Question {
            prompt: format!("How would you use \"{word}\" in a sentence?"),
            options: vec![
                format!("The {word} was impressive"),
                format!("I {word} every day"),
                format!("Very {word} indeed"),
                format!("{word}ly speaking"),
            ],
            correct_answer: format!("The {word} was impressive"),
            kind: TemplateKind::Usage,
        },
        Question {
            prompt: format!("Which context best suits \"{word}\"?"),
            options: fixed_options([
                "Formal writing",
                "Casual conversation",
                "Technical documentation",
                "Poetic expression",
            ]),
            correct_answer: String::from("Formal writing"),
            kind: TemplateKind::Context,
        },
        Question {
            prompt: format!("\"{word}\" is most commonly used as a:"),
            options: fixed_options(["Descriptor", "Action word", "Object or thing", "Connector"]),
            correct_answer: String::from("Object or thing"),
            kind: TemplateKind::Blank,
        },
        Question {
            prompt: format!("The word \"{word}\" is best described as:"),
            options: fixed_options([
                "Common everyday word",
                "Rare or uncommon",
                "Technical jargon",
                "Archaic or old-fashioned",
            ]),
            correct_answer: String::from("Common everyday word"),
            kind: TemplateKind::Synonym,
        },
    ];
    Quiz {
        word: word.to_owned(),
        questions,
    }
}

fn fixed_options<const N: usize>(options: [&str; N]) -> Vec<String> {
    options.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use lexicon::PartOfSpeech;

    use super::*;
    use crate::agent::LookupFailure;
    use crate::questions::tests::{sample_word, FixedSynonyms, NoRelations};

    struct StubDictionary(Option<Word>);

    #[async_trait]
    impl WordLookup for StubDictionary {
        async fn lookup(&self, word: &str) -> Result<Word, LookupFailure> {
            match &self.0 {
                Some(data) => Ok(data.clone()),
                None => Err(LookupFailure(format!("no dictionary entry for \"{word}\""))),
            }
        }
    }

    #[tokio::test]
    async fn generated_quizzes_have_five_well_formed_questions() {
        let word = sample_word(
            "happy",
            PartOfSpeech::Adjective,
            "feeling or showing pleasure",
            Some("she was a happy child"),
        );
        let dictionary = StubDictionary(Some(word));
        let synonyms = FixedSynonyms(vec!["cheerful", "joyful"]);

        let quiz = generate_quiz(&dictionary, &synonyms, "happy").await;
        assert_eq!(quiz.word, "happy");
        assert_eq!(quiz.questions.len(), QUIZ_LENGTH);
        for question in &quiz.questions {
            assert!(
                question.options.contains(&question.correct_answer),
                "correct answer missing from options of {:?}",
                question.prompt
            );
        }
    }

    #[tokio::test]
    async fn quiz_word_is_the_canonical_form_from_the_lookup() {
        // the service may return different casing than the query
        let word = sample_word("Happy", PartOfSpeech::Adjective, "pleased", None);
        let dictionary = StubDictionary(Some(word));
        let quiz = generate_quiz(&dictionary, &NoRelations, "happy").await;
        assert_eq!(quiz.word, "Happy");
    }

    #[tokio::test]
    async fn failed_lookup_degrades_to_the_fallback_quiz() {
        let dictionary = StubDictionary(None);
        let quiz = generate_quiz(&dictionary, &NoRelations, "qqzzpp").await;

        assert_eq!(quiz, fallback_quiz("qqzzpp"));
        assert!(quiz.questions[0].prompt.contains("qqzzpp"));
        assert_eq!(quiz.questions[0].correct_answer, "Noun");
    }

    #[tokio::test]
    async fn entry_without_definitions_degrades_to_the_fallback_quiz() {
        let mut word = sample_word("hollow", PartOfSpeech::Noun, "unused", None);
        word.meanings[0].definitions.clear();
        let dictionary = StubDictionary(Some(word));

        let quiz = generate_quiz(&dictionary, &NoRelations, "hollow").await;
        assert_eq!(quiz, fallback_quiz("hollow"));
    }

    #[test]
    fn fallback_quiz_is_deterministic_and_well_formed() {
        let quiz = fallback_quiz("qqzzpp");
        assert_eq!(quiz.questions.len(), QUIZ_LENGTH);
        assert_eq!(quiz, fallback_quiz("qqzzpp"));
        for question in &quiz.questions {
            assert_eq!(question.options.len(), 4);
            assert!(question.options.contains(&question.correct_answer));
        }
    }

    #[test]
    fn template_selection_is_mostly_distinct_but_accepts_rare_duplicates() {
        let mut rng = rand::thread_rng();
        let trials = 2000;
        let mut with_duplicates = 0;
        for _ in 0..trials {
            let kinds = pick_template_kinds(&mut rng);
            let distinct = kinds.iter().collect::<HashSet<_>>();
            // one give-up per selection is expected noise, two is all but
            // impossible, so a selection never loses more than one kind
            assert!(distinct.len() >= QUIZ_LENGTH - 2);
            if distinct.len() < QUIZ_LENGTH {
                with_duplicates += 1;
            }
        }
        // the fifth slot gives up after ten draws that all land on a used
        // kind, probability (4/5)^10, so roughly one selection in nine
        // carries a duplicate; zero duplicates or more than a fifth would
        // both mean the policy changed
        assert!(with_duplicates > 0);
        assert!(with_duplicates < trials / 5);
    }

    #[tokio::test]
    async fn composer_tags_questions_with_the_drawn_kind() {
        let word = sample_word("happy", PartOfSpeech::Adjective, "pleased", None);
        // a duplicated slot keeps its own drawn tag too
        let kinds = [
            TemplateKind::Definition,
            TemplateKind::Usage,
            TemplateKind::Synonym,
            TemplateKind::Blank,
            TemplateKind::Synonym,
        ];
        let questions = compose_questions(&word, &FixedSynonyms(vec!["cheerful"]), kinds).await;

        assert_eq!(questions.len(), QUIZ_LENGTH);
        for (question, kind) in questions.iter().zip(kinds) {
            assert_eq!(question.kind, kind);
            assert!(question.options.contains(&question.correct_answer));
        }
    }
}
