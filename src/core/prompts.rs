//! Prompt templates for the advisory capabilities.
//!
//! Templates use `{name}` placeholders filled by [`render`]. The advisory
//! wording targets small and marginal farmers; responses are asked to stay
//! short and actionable.

pub const ADVISORY_TEMPLATE: &str = "You are a smart crop advisory system for small and \
    marginal farmers in India. Provide real-time, localized advice on crops, soil, and \
    weather. Integrate information on mandi prices, pest alerts, and government schemes. \
    Use simple, easy-to-understand language. Keep the response concise and actionable. \
    Query: {query}\n\nAdvisory:";

pub const IMAGE_ADVISORY_TEMPLATE: &str = "You are an intelligent assistant for a crop \
    advisory app. A farmer has provided a screenshot of their phone and a question. Based \
    on the image and the query, guide the user on how to navigate the app or use a \
    specific feature. Explain the steps clearly and concisely. Query: {query}";

pub const DISEASE_TEMPLATE: &str = "You are an expert plant pathologist helping small \
    farmers. A farmer has uploaded a photo of a crop. Identify the crop and the most \
    likely disease or pest, describe the visible symptoms, and recommend affordable \
    treatment and prevention steps. Respond entirely in {language}. Keep the answer \
    short and practical.";

pub const EVALUATION_TEMPLATE: &str = "You are an examiner grading a handwritten answer \
    sheet. Question: {question}\nMaximum marks: {max_marks}\nRead the student's answer \
    from the image, judge correctness and completeness against the question, and award \
    marks out of {max_marks}. Reply with the awarded marks on the first line, followed \
    by two or three sentences of justification.";

/// Fill `{name}` placeholders in `template`.
///
/// Unknown placeholders are left as-is; substitution values are inserted
/// verbatim and never re-scanned.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in substitutions {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}
