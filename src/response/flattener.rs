//! Flattens a response document into the inline-markup text blob the
//! chat renderer consumes: `## ` heading per section, section bodies
//! verbatim, a bare `---` line between sections.

use super::schema::StructuredResponse;

pub fn flatten(response: &StructuredResponse) -> String {
    let mut out = String::new();

    for (i, section) in response.sections.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n---\n\n");
        }
        out.push_str("## ");
        out.push_str(&section.title);
        out.push_str("\n\n");
        out.push_str(&section.content);
    }

    out
}
