/// Builds the instruction sent to the model for `content`.
///
/// The content is interpolated verbatim, without escaping.
pub fn build_prompt(content: &str) -> String {
    format!(
        r#"
    You are 'TalkingBuddy', a supportive and insightful AI companion for poets and creative writers.
    Analyze this text: "{content}"

    IMPORTANT: Respond ONLY with a valid JSON object. No markdown, no code fences, no extra text.
    {{
        "sentiment": "One word (choose from: Melancholic, Joyful, Dark, Energetic, Peaceful, Thoughtful, Romantic, Mysterious)",
        "suggestions": "Two warm, encouraging sentences of constructive feedback",
        "pacing": "One sentence about the rhythm and flow of the piece",
        "wordChoice": "One sentence about the vocabulary and imagery used",
        "tone": "One sentence describing the overall emotional tone"
    }}
    "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_content_verbatim() {
        let content = "The \"moon\" {hums} low";
        let prompt = build_prompt(content);
        assert!(prompt.contains(r#"Analyze this text: "The "moon" {hums} low""#));
    }

    #[test]
    fn demands_bare_json_with_all_fields() {
        let prompt = build_prompt("verse");
        assert!(prompt.contains("Respond ONLY with a valid JSON object"));
        assert!(prompt.contains("No markdown, no code fences"));
        for field in ["\"sentiment\"", "\"suggestions\"", "\"pacing\"", "\"wordChoice\"", "\"tone\""] {
            assert!(prompt.contains(field), "missing {}", field);
        }
    }
}
