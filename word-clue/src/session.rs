use crate::questions::Question;
use crate::quiz::Quiz;

/// Where a playthrough currently stands. `Feedback` remembers whether the
/// submitted answer was right so the display can show it before advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingAnswer { index: usize },
    Feedback { index: usize, correct: bool },
    Complete,
}

/// Progress state for one playthrough of a quiz. Transitions consume the
/// session and return the next one; the display layer owns the single
/// current value and replaces it wholesale. Events outside the expected
/// phase are ignored.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    phase: SessionPhase,
    score: usize,
}

impl QuizSession {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            phase: SessionPhase::AwaitingAnswer { index: 0 },
            score: 0,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            SessionPhase::AwaitingAnswer { index } | SessionPhase::Feedback { index, .. } => {
                self.quiz.questions.get(index)
            }
            SessionPhase::Complete => None,
        }
    }

    pub fn submit_answer(mut self, option: &str) -> Self {
        if let SessionPhase::AwaitingAnswer { index } = self.phase {
            let correct = self.quiz.questions[index].correct_answer == option;
            if correct {
                self.score += 1;
            }
            self.phase = SessionPhase::Feedback { index, correct };
        }
        self
    }

    pub fn advance(mut self) -> Self {
        if let SessionPhase::Feedback { index, .. } = self.phase {
            self.phase = if index + 1 < self.quiz.questions.len() {
                SessionPhase::AwaitingAnswer { index: index + 1 }
            } else {
                SessionPhase::Complete
            };
        }
        self
    }

    /// Back to the first question with a zeroed score, on the same quiz.
    pub fn restart(mut self) -> Self {
        self.phase = SessionPhase::AwaitingAnswer { index: 0 };
        self.score = 0;
        self
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.score, self.total())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Perfect,
    High,
    Mid,
    Low,
}

impl ScoreTier {
    pub fn for_score(score: usize, total: usize) -> Self {
        let percentage = score * 100 / total;
        if score == total {
            ScoreTier::Perfect
        } else if percentage >= 80 {
            ScoreTier::High
        } else if percentage >= 60 {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Perfect => "Perfect! You're a word master!",
            ScoreTier::High => "Excellent work!",
            ScoreTier::Mid => "Good job! Keep practicing!",
            ScoreTier::Low => "Keep learning and try again!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ScoreTier::Perfect => "🏆",
            ScoreTier::High => "🌟",
            ScoreTier::Mid => "👍",
            ScoreTier::Low => "📚",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::fallback_quiz;

    fn answer_current(session: QuizSession, correctly: bool) -> QuizSession {
        let question = session.current_question().unwrap();
        let answer = if correctly {
            question.correct_answer.clone()
        } else {
            question
                .options
                .iter()
                .find(|option| **option != question.correct_answer)
                .unwrap()
                .clone()
        };
        session.submit_answer(&answer).advance()
    }

    fn play_through(mut session: QuizSession, correct_answers: usize) -> QuizSession {
        for round in 0..session.total() {
            session = answer_current(session, round < correct_answers);
        }
        session
    }

    #[test]
    fn fresh_sessions_start_at_question_zero_with_no_score() {
        let session = QuizSession::new(fallback_quiz("ember"));
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer { index: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(session.total(), 5);
    }

    #[test]
    fn score_counts_correct_submissions() {
        let session = play_through(QuizSession::new(fallback_quiz("ember")), 3);
        assert_eq!(session.phase(), SessionPhase::Complete);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn correct_answers_are_judged_by_exact_string_equality() {
        let session = QuizSession::new(fallback_quiz("ember"));
        let session = session.submit_answer("noun");
        assert_eq!(
            session.phase(),
            SessionPhase::Feedback {
                index: 0,
                correct: false
            }
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn answering_during_feedback_is_ignored() {
        let session = QuizSession::new(fallback_quiz("ember")).submit_answer("Noun");
        let score = session.score();
        let session = session.submit_answer("Noun");
        assert_eq!(session.score(), score);
        assert_eq!(
            session.phase(),
            SessionPhase::Feedback {
                index: 0,
                correct: true
            }
        );
    }

    #[test]
    fn advancing_past_the_last_question_completes_the_session() {
        let session = play_through(QuizSession::new(fallback_quiz("ember")), 0);
        assert_eq!(session.phase(), SessionPhase::Complete);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn restart_resets_progress_but_keeps_the_questions() {
        let session = play_through(QuizSession::new(fallback_quiz("ember")), 5);
        let questions_before = session.quiz().questions.clone();

        let session = session.restart();
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer { index: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(session.quiz().questions, questions_before);
    }

    #[test]
    fn tier_thresholds_match_the_score_bands() {
        assert_eq!(ScoreTier::for_score(5, 5), ScoreTier::Perfect);
        assert_eq!(ScoreTier::for_score(4, 5), ScoreTier::High);
        assert_eq!(ScoreTier::for_score(3, 5), ScoreTier::Mid);
        assert_eq!(ScoreTier::for_score(2, 5), ScoreTier::Low);
        assert_eq!(ScoreTier::for_score(0, 5), ScoreTier::Low);
    }

    #[test]
    fn tier_messages_are_paired_with_their_decorations() {
        assert_eq!(ScoreTier::Perfect.message(), "Perfect! You're a word master!");
        assert_eq!(ScoreTier::Perfect.emoji(), "🏆");
        assert_eq!(ScoreTier::Low.emoji(), "📚");
    }
}
