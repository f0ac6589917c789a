use lexicon::{Dictionary, Relations, RelationsError, Word};

use crate::questions::Question;
use crate::quiz::{generate_quiz, Quiz};
use crate::session::{QuizSession, SessionPhase};
use crate::utilities::{input, str_to_bool};

mod agent;
mod questions;
mod quiz;
mod session;
mod utilities;

const RELATION_LIMIT: usize = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dictionary = Dictionary::new();
    let relations = Relations::new();
    loop {
        let line = input(">> ")?;
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            let argument = command_parts.collect::<Vec<&str>>().join(" ");
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                "quiz" => {
                    if argument.is_empty() {
                        println!("Usage: quiz <word>");
                    } else {
                        let quiz = generate_quiz(&dictionary, &relations, &argument).await;
                        run_quiz(quiz)?;
                    }
                }
                "define" | "find" => {
                    define_word(&dictionary, &argument).await;
                }
                "relations" | "related" => {
                    show_relations(&relations, &argument).await;
                }
                _ => {
                    println!("Unknown command {command}.");
                }
            }
        }
    }
    Ok(())
}

fn run_quiz(quiz: Quiz) -> anyhow::Result<()> {
    println!("Quiz for '{}':", quiz.word);
    let mut session = QuizSession::new(quiz);
    loop {
        match session.phase() {
            SessionPhase::AwaitingAnswer { index } => {
                let question = &session.quiz().questions[index];
                println!("----------------------------------------");
                println!(
                    "Question {} of {} | Score: {}/{}",
                    index + 1,
                    session.total(),
                    session.score(),
                    session.total()
                );
                println!("{}", question.prompt);
                for (position, option) in question.options.iter().enumerate() {
                    println!("[{}]: {option}", position + 1);
                }
                let answer = read_answer(question)?;
                session = session.submit_answer(&answer);
            }
            SessionPhase::Feedback { index, correct } => {
                if correct {
                    println!("The answer is correct. Well done!");
                } else {
                    println!(
                        "The answer is incorrect. The right answer is: {}",
                        session.quiz().questions[index].correct_answer
                    );
                }
                if index + 1 < session.total() {
                    input("Press enter for the next question... ")?;
                } else {
                    input("Press enter to see your results... ")?;
                }
                session = session.advance();
            }
            SessionPhase::Complete => {
                let tier = session.tier();
                let percentage = session.score() * 100 / session.total();
                println!("{} {}", tier.emoji(), tier.message());
                println!(
                    "Final score: {}/{} ({percentage}%)",
                    session.score(),
                    session.total()
                );
                let again = input("Retake this quiz? (y/N): ")?;
                if str_to_bool(again).unwrap_or(false) {
                    session = session.restart();
                } else {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn read_answer(question: &Question) -> anyhow::Result<String> {
    loop {
        let chosen = input("Enter your answer: ")?;
        let chosen = chosen.trim();
        match chosen.parse::<usize>() {
            Ok(position) => {
                if let Some(option) = question.options.get(position.wrapping_sub(1)) {
                    return Ok(option.clone());
                }
            }
            Err(_) => {
                if let Some(option) = match_option(question, chosen) {
                    return Ok(option.clone());
                }
            }
        }
        println!("Couldn't understand your answer, please try again.");
    }
}

/// Matches free-text input against the option strings, accepting only a
/// clear winner so a typo never silently picks the wrong option.
fn match_option<'a>(question: &'a Question, answer: &str) -> Option<&'a String> {
    let answer = answer.to_lowercase();
    let mut scored = question
        .options
        .iter()
        .map(|option| (option, strsim::jaro(&option.to_lowercase(), &answer)))
        .collect::<Vec<(&String, f64)>>();
    // most similar at the start
    scored.sort_unstable_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let difference = f64::abs(scored[0].1 - scored[1].1);
    if (scored[0].1 > 0.9 && difference > 0.25) || scored[0].1 == 1.0 {
        Some(scored[0].0)
    } else {
        None
    }
}

async fn define_word(dictionary: &Dictionary, word: &str) {
    if word.is_empty() {
        println!("Usage: define <word>");
        return;
    }
    match dictionary.get_definition(word).await {
        Ok(word) => print_definition(&word),
        Err(lexicon::DictionaryError::NotFound(_)) => {
            println!("Couldn't find the word you were looking for.");
        }
        Err(other) => {
            println!("Encountered an error while searching for the word definition: {other}");
        }
    }
}

fn print_definition(word: &Word) {
    println!("Showing definition for '{}':", word.word);
    if let Some(phonetic) = &word.phonetic {
        println!("    {phonetic}");
    }
    for meaning in &word.meanings {
        println!("    {}:", meaning.part_of_speech.label());
        for definition in &meaning.definitions {
            println!("        {}", definition.definition);
            if let Some(example) = &definition.example {
                println!("          example: {example}");
            }
        }
    }
}

async fn show_relations(relations: &Relations, word: &str) {
    if word.is_empty() {
        println!("Usage: relations <word>");
        return;
    }
    let (synonyms, antonyms, rhymes) = futures::join!(
        relations.synonyms(word, RELATION_LIMIT),
        relations.antonyms(word, RELATION_LIMIT),
        relations.rhymes(word, RELATION_LIMIT),
    );
    println!("Relations for '{word}':");
    print_relation_group("synonyms", synonyms);
    print_relation_group("antonyms", antonyms);
    print_relation_group("rhymes", rhymes);
}

fn print_relation_group(label: &str, words: Result<Vec<String>, RelationsError>) {
    match words {
        Ok(words) if !words.is_empty() => println!("    {label}: {}", words.join(", ")),
        Ok(_) => println!("    {label}: none found"),
        Err(error) => {
            log::debug!("{label} lookup failed: {error}");
            println!("    {label}: unavailable");
        }
    }
}
