//! Persona prompts for the two resolution stages

/// Templates for the draft and review stages
///
/// The persona text is fixed: the assistant drafts a reply in character, then
/// a quality reviewer turns the draft into the final send-ready answer.
pub struct PersonaPrompt;

impl PersonaPrompt {
    /// System prompt for the draft stage
    pub fn draft_system() -> &'static str {
        r#"You are RICA, a friendly and supportive personal assistant.
You work on the inquirer's team and help them with their questions and tasks.
Provide full, complete answers and make no assumptions.
Include references to anything you relied on to find the answer.
Keep a helpful and friendly tone throughout."#
    }

    /// User prompt for the draft stage
    pub fn draft_prompt(inquirer: &str, inquiry: &str) -> String {
        format!(
            r#"{inquirer} just reached out with a super important ask:

{inquiry}

{inquirer} is the one that reached out. Use everything you know to provide
the best support possible. Strive for a complete and accurate response that
addresses all aspects of their question, leaving nothing unanswered."#
        )
    }

    /// System prompt for the review stage
    pub fn review_system() -> &'static str {
        r#"You are a support quality reviewer on the inquirer's team.
Your job is to make sure draft answers are comprehensive, accurate, and make
no assumptions. Verify that every part of the inquiry has been addressed and
that references are included where information was looked up.
Don't be too formal; keep the tone professional but friendly."#
    }

    /// User prompt for the review stage
    pub fn review_prompt(inquirer: &str, inquiry: &str, draft: &str) -> String {
        format!(
            r#"{inquirer} asked:

{inquiry}

The assistant drafted this reply:

{draft}

Review the draft for completeness, accuracy, and tone, then produce the
final response ready to be sent to {inquirer}. Incorporate any improvements
directly. Output only the final reply text, with no commentary about the
review itself."#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_prompt_includes_inquirer_and_text() {
        let prompt = PersonaPrompt::draft_prompt("siam", "How do I deploy?");
        assert!(prompt.contains("siam"));
        assert!(prompt.contains("How do I deploy?"));
    }

    #[test]
    fn test_review_prompt_includes_draft() {
        let prompt = PersonaPrompt::review_prompt("siam", "How do I deploy?", "Push to main.");
        assert!(prompt.contains("How do I deploy?"));
        assert!(prompt.contains("Push to main."));
    }
}
