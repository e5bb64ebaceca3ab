//! Prompt construction for record extraction.
//!
//! The schema is textual only: every field is listed with a one-line hint and
//! the model is told to answer with a bare JSON object. Page content is cut
//! at a fixed character count with no regard for markup, so a tag may be
//! split at the end.

use records::RecordKind;

const EVENT_INTRO: &str = "You are extracting event information from a webpage. \
Analyze the following HTML and extract:";

const OPPORTUNITY_INTRO: &str = "You are extracting opportunity information \
(job or volunteer position) from a webpage. Analyze the following HTML and extract:";

const OUTPUT_RULES: &str = "Return ONLY a valid JSON object with these fields. \
Use null for any missing fields. Do not include any explanatory text.";

/// First `limit` characters of `content`, cut on a char boundary.
pub fn truncate_chars(content: &str, limit: usize) -> &str {
    match content.char_indices().nth(limit) {
        Some((end, _)) => &content[..end],
        None => content,
    }
}

/// Build the extraction prompt for `kind`, embedding at most `char_limit`
/// characters of `page`.
pub fn build_prompt(kind: RecordKind, url: &str, page: &str, char_limit: usize) -> String {
    let intro = match kind {
        RecordKind::Event => EVENT_INTRO,
        RecordKind::Opportunity => OPPORTUNITY_INTRO,
    };

    let field_lines = kind
        .fields()
        .iter()
        .map(|field| {
            if field.name == "source_url" {
                format!("- source_url: Use \"{}\" as the source", url)
            } else {
                format!("- {}: {}", field.name, field.description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n{}\n\n{}\n\nHTML Content:\n{}",
        intro,
        field_lines,
        OUTPUT_RULES,
        truncate_chars(page, char_limit)
    )
}
