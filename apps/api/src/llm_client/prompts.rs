// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Instruction appended to prompts whose answer is decoded as JSON.
/// The model may still ignore it; callers must tolerate fenced or invalid output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Respond with valid JSON only. \
Do NOT include any text outside the JSON value. \
Do NOT use markdown code fences. \
Do NOT include explanations or apologies.";

/// Joins a system preamble and a task prompt into the single prompt string
/// sent to the generator.
pub fn with_preamble(preamble: &str, prompt: &str) -> String {
    format!("{preamble}\n\n{prompt}")
}

/// Substitutes `{key}` placeholders in a single left-to-right pass.
/// Inserted values are never rescanned, so user text containing `{...}` is
/// interpolated verbatim. Unknown placeholders are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values.iter().find(|(key, _)| {
            tail.strip_prefix(key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
