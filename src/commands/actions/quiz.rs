//! Quiz command handler.
//!
//! Fetches the questions matching a validated [`QuestionQuery`] and turns them
//! into the timed sequence sent to the room:
//!
//! ```text
//! question ──answer_wait──▶ answer ──next_question_wait──▶ question ──answer_wait──▶ answer
//! ```
//!
//! There is no wait after the last answer.

use log::{debug, error, info};

use crate::{
    commands::markdown_response::{
        format_answer, format_fetch_error, format_no_questions, format_question,
    },
    sequencer::{Step, Timings},
    trivia::{QuestionQuery, Requester, TriviaQuestion},
};

/// Requests the questions and returns the quiz sequence.
///
/// A failed request is logged and reported to the room with a single step;
/// an empty result is reported the same way.
pub async fn handle_quiz<R: Requester>(
    requester: &R,
    query: &QuestionQuery,
    timings: &Timings,
) -> Vec<Step> {
    debug!("handling quiz command {}", query);

    match requester.get_questions(query).await {
        Ok(questions) if questions.is_empty() => {
            info!("no questions found for {}", query);
            vec![Step::now(format_no_questions())]
        }
        Ok(questions) => {
            info!("starting a quiz of {} questions", questions.len());
            plan_quiz(&questions, timings)
        }
        Err(e) => {
            error!("failed to fetch questions for {}: {}", query, e);
            vec![Step::now(format_fetch_error())]
        }
    }
}

/// Builds the question and answer steps for `questions`, in order.
fn plan_quiz(questions: &[TriviaQuestion], timings: &Timings) -> Vec<Step> {
    questions
        .iter()
        .enumerate()
        .flat_map(|(index, question)| {
            let question_step = match index {
                0 => Step::now(format_question(question)),
                _ => Step::after(timings.next_question_wait, format_question(question)),
            };
            let answer_step = Step::after(timings.answer_wait, format_answer(&question.answer));

            [question_step, answer_step]
        })
        .collect()
}
