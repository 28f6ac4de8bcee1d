//! Built-in templates.
//!
//! Both names end in `.html` so auto-escaping is on.

pub(crate) const ELEMENT_NAME: &str = "element.html";

pub(crate) const ELEMENT: &str = r#"{%- for node in [root] recursive -%}
{%- if node is string -%}{{ node }}
{%- else -%}<{{ node.tag }}{% for attr in node.attrs %} {{ attr[0] }}{% if attr[1] is not none %}="{{ attr[1] }}"{% endif %}{% endfor %}>{{ loop(node.children) }}</{{ node.tag }}>
{%- endif -%}
{%- endfor -%}"#;

pub(crate) const PAGE_NAME: &str = "page.html";

pub(crate) const PAGE: &str = r#"<!DOCTYPE html>
<html lang="{{ lang }}"{% if color_scheme %} style="color-scheme: {{ color_scheme }}"{% endif %}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title }}</title>
</head>
<body>
{% for block in body %}{{ block }}
{% endfor %}</body>
</html>
"#;
