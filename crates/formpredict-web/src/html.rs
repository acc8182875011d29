//! Server-side HTML rendering.
//!
//! Pages are plain strings built from the schema. Every user-controlled
//! value passes through [`escape`].

use std::fmt::Write;

use formpredict_core::{AnswerSet, FieldKind, FieldSpec, Rendered, Variant, VariantRegistry};

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:.75rem}input,select{width:100%;padding:.3rem}\
button{margin-top:1rem;padding:.5rem 1.5rem}.result{margin-top:1.5rem;font-size:1.25rem}\
.error{color:#c0392b}";

/// Escapes text for HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

/// Lists every registered variant.
pub fn index_page(registry: &VariantRegistry) -> String {
    let mut body = String::from("<h1>FormPredict</h1>\n<ul>\n");
    for variant in registry.iter() {
        let _ = writeln!(
            body,
            "<li><a href=\"/{}\">{}</a></li>",
            escape(variant.id()),
            escape(variant.title())
        );
    }
    body.push_str("</ul>\n");
    page("FormPredict", &body)
}

/// Renders a variant's form, the previous answers and the outcome, if any.
pub fn form_page(
    variant: &Variant,
    answers: Option<&AnswerSet>,
    outcome: Option<&Result<Rendered, String>>,
) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(variant.title()));
    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"/{}/predict\">",
        escape(variant.id())
    );
    for field in variant.schema().fields() {
        let previous = answers
            .and_then(|a| a.get(&field.name))
            .map(|value| value.to_string());
        body.push_str(&field_widget(field, previous.as_deref()));
    }
    body.push_str("<button type=\"submit\">Predict</button>\n</form>\n");

    match outcome {
        Some(Ok(rendered)) => body.push_str(&result_block(rendered)),
        Some(Err(message)) => {
            let _ = writeln!(
                body,
                "<p class=\"result error\">{}</p>",
                escape(message)
            );
        }
        None => {}
    }
    page(variant.title(), &body)
}

/// Renders a styled prediction.
pub fn result_block(rendered: &Rendered) -> String {
    match &rendered.color {
        Some(color) => format!(
            "<p class=\"result\" style=\"color:{}\">{}</p>\n",
            escape(color),
            escape(&rendered.text)
        ),
        None => format!("<p class=\"result\">{}</p>\n", escape(&rendered.text)),
    }
}

fn field_widget(field: &FieldSpec, previous: Option<&str>) -> String {
    let name = escape(&field.name);
    let mut html = format!(
        "<label for=\"{}\">{}</label>\n",
        name,
        escape(field.display_label())
    );
    match &field.kind {
        FieldKind::Categorical { options } => {
            let _ = writeln!(html, "<select id=\"{}\" name=\"{}\" required>", name, name);
            for option in options {
                let selected = if previous == Some(option.label.as_str()) {
                    " selected"
                } else {
                    ""
                };
                let label = escape(&option.label);
                let _ = writeln!(
                    html,
                    "<option value=\"{}\"{}>{}</option>",
                    label, selected, label
                );
            }
            html.push_str("</select>\n");
        }
        FieldKind::Numeric { min, max, step } => {
            let _ = write!(
                html,
                "<input type=\"number\" id=\"{}\" name=\"{}\" step=\"{}\"",
                name,
                name,
                step.map_or_else(|| "any".to_string(), |s| s.to_string())
            );
            if let Some(min) = min {
                let _ = write!(html, " min=\"{}\"", min);
            }
            if let Some(max) = max {
                let _ = write!(html, " max=\"{}\"", max);
            }
            if let Some(value) = previous {
                let _ = write!(html, " value=\"{}\"", escape(value));
            }
            html.push_str(" required>\n");
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use formpredict_core::Prediction;
    use formpredict_test::{fixture_registry, obesity_answers};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b onclick="x">Tom & 'Jerry'</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_index_links_every_variant() {
        let html = index_page(&fixture_registry());
        assert!(html.contains("<a href=\"/insurance\">Medical Insurance Cost</a>"));
        assert!(html.contains("<a href=\"/obesity\">Obesity Level Check</a>"));
    }

    #[test]
    fn test_form_widgets() {
        let registry = fixture_registry();
        let variant = registry.get("obesity").unwrap();
        let html = form_page(variant, None, None);
        assert!(html.contains("<select id=\"Gender\" name=\"Gender\" required>"));
        assert!(html.contains("<option value=\"Public_Transportation\">"));
        assert!(html.contains("name=\"Height\" step=\"0.01\" min=\"1\" max=\"2.5\""));
        assert!(!html.contains("class=\"result"));
    }

    #[test]
    fn test_form_keeps_answers() {
        let registry = fixture_registry();
        let variant = registry.get("obesity").unwrap();
        let answers = obesity_answers();
        let html = form_page(variant, Some(&answers), None);
        assert!(html.contains("<option value=\"Male\" selected>"));
        assert!(html.contains("value=\"70\""));
    }

    #[test]
    fn test_error_outcome_is_escaped() {
        let registry = fixture_registry();
        let variant = registry.get("obesity").unwrap();
        let outcome = Err("Error: <script>".to_string());
        let html = form_page(variant, None, Some(&outcome));
        assert!(html.contains("<p class=\"result error\">Error: &lt;script&gt;</p>"));
    }

    #[test]
    fn test_result_block_color() {
        let rendered = Rendered {
            text: "Predicted Obesity Level: Obesity_Type_I".to_string(),
            color: Some("#c0392b".to_string()),
            prediction: Prediction::Class("Obesity_Type_I".to_string()),
        };
        assert_eq!(
            result_block(&rendered),
            "<p class=\"result\" style=\"color:#c0392b\">Predicted Obesity Level: Obesity_Type_I</p>\n"
        );
    }
}
