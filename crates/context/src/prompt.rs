//! Per-turn prompt composition.
//!
//! Each turn is stateless with respect to model context: the prompt is the
//! persona instruction, the serialized record, and the current question,
//! never any earlier turns, even though the UI shows a running transcript.

/// Fixed role instruction sent with every request.
pub const PERSONA: &str = "You are a helpful and experienced Business Intelligence Analyst \
for a large construction company. Your task is to analyze project data and provide clear, \
concise, and professional summaries or answers to questions.";

const ANSWER_RULES: &str = "Based on the data provided, answer the following question in a \
friendly and professional tone. If you don't know the answer based on the data, state that \
you cannot find the information. Avoid making up details.";

/// Compose the full prompt for one user question.
///
/// The context block always precedes the question.
pub fn compose(context: &str, question: &str) -> String {
    format!(
        "{PERSONA}\n\n\
         Here is the project data you must use:\n\
         ---\n\
         {context}\n\
         ---\n\n\
         {ANSWER_RULES}\n\n\
         User Question: {question}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_precedes_question() {
        let context = "Budget  $500,000,000";
        let question = "What is the project budget?";
        let prompt = compose(context, question);

        let ctx_at = prompt.find(context).unwrap();
        let q_at = prompt.find(question).unwrap();
        assert!(ctx_at < q_at);
        assert!(prompt.contains(PERSONA));
    }

    #[test]
    fn context_and_question_are_contiguous_substrings() {
        let context = "line one\nline two\nline three";
        let prompt = compose(context, "Anything new?");
        assert!(prompt.contains(context));
        assert!(prompt.contains("User Question: Anything new?"));
    }

    #[test]
    fn composition_is_deterministic() {
        let a = compose("ctx", "q");
        let b = compose("ctx", "q");
        assert_eq!(a, b);
    }
}
