//! HTML document that loads the client-side bundle.

use wedding_core::Config;

/// Everything the shell needs to point at the built bundle.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Document title shown before the app sets its own.
    pub title: String,

    /// Meta description for link previews.
    pub description: String,

    /// Site-root relative directory holding the bundle.
    pub pkg_dir: String,

    /// Base name of the `.js`, `.wasm` and `.css` files.
    pub output_name: String,
}

impl Shell {
    /// Shell with title and description taken from the invitation.
    pub fn from_config(config: &Config, pkg_dir: impl Into<String>, output_name: impl Into<String>) -> Self {
        Self {
            title: config.site.title.clone(),
            description: config.site.description.clone().unwrap_or_default(),
            pkg_dir: pkg_dir.into(),
            output_name: output_name.into(),
        }
    }

    /// Render the document.
    pub fn render(&self) -> String {
        let pkg = format!("/{}/{}", self.pkg_dir.trim_matches('/'), self.output_name);
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <meta name="description" content="{description}" />
  <link rel="stylesheet" href="{pkg}.css" />
  <link rel="modulepreload" href="{pkg}.js" />
</head>
<body>
  <script type="module">
    import init from '{pkg}.js';
    init({{ module_or_path: '{pkg}.wasm' }});
  </script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            description = escape_html(&self.description),
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
