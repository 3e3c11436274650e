//! Document shell

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Full HTML document around `content`.
///
/// When `client_module` is set, the wasm-bindgen module is imported and
/// initialized after the content; it adds the `motion` class to `<html>`
/// and takes over the decoration. Without it the page is plain static HTML.
pub fn layout(title: &str, description: &str, client_module: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                link rel="stylesheet" href="/site.css";
            }
            body {
                (content)
                @if let Some(module) = client_module {
                    script type="module" {
                        (PreEscaped(client_bootstrap(module)))
                    }
                }
            }
        }
    }
}

fn client_bootstrap(module: &str) -> String {
    // JSON string literals are valid JS string literals.
    let specifier = serde_json::Value::from(module).to_string().replace("</", "<\\/");
    format!("import init from {specifier};\ninit();")
}
