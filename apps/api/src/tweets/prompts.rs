// Prompt template for tweet generation and the renderer that fills it.

use crate::tweets::models::TweetFormData;

/// Tweet generation prompt template.
/// Placeholders: {topic}, {tone}, {content_type}, {target_audience}, {sentiment},
///               {call_to_action}, {include_emojis}, {keywords}, {max_length},
///               {conditional_guidelines}
pub const TWEET_PROMPT_TEMPLATE: &str = r#"Generate 3 highly engaging, viral-worthy Twitter posts about {topic}.
Tone: {tone}
Content Type: {content_type}
Target Audience: {target_audience}
Sentiment: {sentiment}
Include Call to Action: {call_to_action}
Include Emojis: {include_emojis}
Keywords: {keywords}
Max Length: {max_length} characters

Guidelines for viral potential:
- Use attention-grabbing openings
- Create FOMO (Fear of Missing Out)
- Include relatable content
- Use powerful emotional triggers
- Add curiosity gaps
- Make it easily shareable
{conditional_guidelines}

Format each tweet as a JSON object with:
- content (the tweet text)
- hashtags (array of relevant hashtags)
- engagementScore (1-10)
- characterCount

Return only the JSON array."#;

pub const CALL_TO_ACTION_GUIDELINE: &str = "- Include compelling call-to-action";
pub const USE_EMOJIS_GUIDELINE: &str = "- Use relevant emojis strategically";
pub const NO_EMOJIS_GUIDELINE: &str = "- Do not use any emojis";

/// Renders the generation prompt for one form snapshot.
pub fn build_tweet_prompt(form: &TweetFormData) -> String {
    let mut conditional = Vec::with_capacity(2);
    if form.call_to_action {
        conditional.push(CALL_TO_ACTION_GUIDELINE);
    }
    conditional.push(if form.include_emojis {
        USE_EMOJIS_GUIDELINE
    } else {
        NO_EMOJIS_GUIDELINE
    });

    let call_to_action = form.call_to_action.to_string();
    let include_emojis = form.include_emojis.to_string();
    let keywords = form.keywords.join(", ");
    let max_length = form.max_length.to_string();
    let conditional_guidelines = conditional.join("\n");

    render_template(
        TWEET_PROMPT_TEMPLATE,
        &[
            ("topic", form.topic.as_str()),
            ("tone", form.tone.as_str()),
            ("content_type", form.content_type.as_str()),
            ("target_audience", form.target_audience.as_str()),
            ("sentiment", form.sentiment.as_str()),
            ("call_to_action", call_to_action.as_str()),
            ("include_emojis", include_emojis.as_str()),
            ("keywords", keywords.as_str()),
            ("max_length", max_length.as_str()),
            ("conditional_guidelines", conditional_guidelines.as_str()),
        ],
    )
}

/// Substitutes `{name}` placeholders in one pass over the template.
///
/// Substituted values are never rescanned, so user text that happens to
/// contain `{tone}` stays literal. Unknown placeholders are left untouched.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
