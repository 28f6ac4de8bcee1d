//! Navigation bar built from the site's page list.
//!
//! Links are resolved against the site root: `"projects/"` becomes
//! `"/projects/"`. Absolute paths, URLs with a scheme (`https:`, `mailto:`)
//! and protocol-relative URLs (`//cdn.example/x`) are kept verbatim. The
//! link for the page being rendered is marked current. Links that are not
//! `http(s)` on the site's own origin open in a new tab.

use serde::{Deserialize, Serialize};

use crate::document::Element;

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub url: String,
    pub title: String,
}

impl NavLink {
    pub fn new(url: &str, title: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
        }
    }
}

/// The site navigation bar.
///
/// # Example
///
/// ```rust
/// use colorscheme::{NavBar, NavLink};
///
/// let nav = NavBar::new(vec![
///     NavLink::new("", "Home"),
///     NavLink::new("projects/", "Projects"),
///     NavLink::new("https://github.com/someone", "GitHub"),
/// ]);
///
/// let el = nav.to_element("/projects/", "https://someone.dev");
/// let links = el.find_all("a");
/// assert_eq!(links[1].attr_value("aria-current"), Some("page"));
/// assert_eq!(links[2].attr_value("target"), Some("_blank"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBar {
    links: Vec<NavLink>,
}

impl NavBar {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Builds the `<nav>` element for the page at `current_path` on `origin`.
    pub fn to_element(&self, current_path: &str, origin: &str) -> Element {
        let origin = origin.trim_end_matches('/');
        let site_scheme = origin.find("://").map_or("https", |end| &origin[..end]);
        let current = normalize_path(current_path);

        self.links.iter().fold(Element::new("nav"), |nav, link| {
            let target = Target::resolve(&link.url, site_scheme);
            let mut a = Element::new("a").attr("href", target.href()).text(&link.title);

            let (same_origin, path) = match &target {
                Target::Local(path) => (true, Some(path.as_str())),
                Target::Web { origin: o, path, .. } => {
                    (o.eq_ignore_ascii_case(origin), Some(path.as_str()))
                }
                Target::Other(_) => (false, None),
            };
            if same_origin && path.map(normalize_path) == Some(current) {
                a = a.attr("class", "current").attr("aria-current", "page");
            }
            if !same_origin {
                a = a.attr("target", "_blank").attr("rel", "noopener");
            }
            nav.child(a)
        })
    }
}

/// Where a link points.
enum Target<'a> {
    /// A path on this site, rooted at `/`.
    Local(String),
    /// An `http(s)` or protocol-relative URL, kept verbatim as `href`.
    Web {
        origin: String,
        path: String,
        href: &'a str,
    },
    /// Any other scheme (`mailto:`, `tel:`, ...), kept verbatim.
    Other(&'a str),
}

impl<'a> Target<'a> {
    fn resolve(url: &'a str, site_scheme: &str) -> Self {
        if let Some(rest) = url.strip_prefix("//") {
            let (host, path) = split_authority(rest);
            return Target::Web {
                origin: format!("{}://{host}", site_scheme.to_ascii_lowercase()),
                path: rooted(path),
                href: url,
            };
        }

        if let Some(scheme) = url_scheme(url) {
            let rest = &url[scheme.len() + 1..];
            let is_web = scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https");
            return match rest.strip_prefix("//") {
                Some(authority) if is_web => {
                    let (host, path) = split_authority(authority);
                    Target::Web {
                        origin: format!("{}://{host}", scheme.to_ascii_lowercase()),
                        path: rooted(path),
                        href: url,
                    }
                }
                _ => Target::Other(url),
            };
        }

        Target::Local(rooted(url))
    }

    fn href(&self) -> &str {
        match self {
            Target::Local(path) => path.as_str(),
            Target::Web { href, .. } | Target::Other(href) => *href,
        }
    }
}

/// Returns the scheme of `url` if it starts with
/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn url_scheme(url: &str) -> Option<&str> {
    let scheme = &url[..url.find(':')?];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

/// Splits `host[:port]<rest>` where the host ends at `/`, `?` or `#`.
fn split_authority(rest: &str) -> (&str, &str) {
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    rest.split_at(end)
}

fn rooted(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = path.strip_suffix("index.html").unwrap_or(path);
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_nav() -> NavBar {
        NavBar::new(vec![
            NavLink::new("", "Home"),
            NavLink::new("projects/", "Projects"),
            NavLink::new("/contact/", "Contact"),
            NavLink::new("https://github.com/someone", "GitHub"),
        ])
    }

    #[test]
    fn test_relative_links_resolve_to_root() {
        let el = site_nav().to_element("/", "https://someone.dev");
        let hrefs: Vec<_> = el
            .find_all("a")
            .into_iter()
            .map(|a| a.attr_value("href"))
            .collect();
        assert_eq!(
            hrefs,
            [
                Some("/"),
                Some("/projects/"),
                Some("/contact/"),
                Some("https://github.com/someone")
            ]
        );
    }

    #[test]
    fn test_current_page_marked() {
        let el = site_nav().to_element("/projects/", "https://someone.dev");
        let current: Vec<_> = el
            .find_all("a")
            .into_iter()
            .filter(|a| a.attr_value("aria-current") == Some("page"))
            .map(|a| a.text_content())
            .collect();
        assert_eq!(current, ["Projects"]);
    }

    #[test]
    fn test_index_html_matches_directory() {
        let el = site_nav().to_element("/projects/index.html", "https://someone.dev");
        let links = el.find_all("a");
        assert_eq!(links[1].attr_value("class"), Some("current"));
        assert_eq!(links[0].attr_value("class"), None);
    }

    #[test]
    fn test_home_matches_root_index() {
        let el = site_nav().to_element("/index.html", "https://someone.dev");
        assert_eq!(el.find_all("a")[0].attr_value("class"), Some("current"));
    }

    #[test]
    fn test_external_links_open_new_tab() {
        let el = site_nav().to_element("/", "https://someone.dev");
        let links = el.find_all("a");
        assert_eq!(links[3].attr_value("target"), Some("_blank"));
        assert_eq!(links[3].attr_value("rel"), Some("noopener"));
        assert!(!links[1].has_attr("target"));
    }

    #[test]
    fn test_absolute_same_origin_link_is_internal() {
        let nav = NavBar::new(vec![NavLink::new("https://someone.dev/blog/", "Blog")]);
        let el = nav.to_element("/blog/", "https://someone.dev/");
        let links = el.find_all("a");
        let a = links[0];
        assert!(!a.has_attr("target"));
        assert_eq!(a.attr_value("aria-current"), Some("page"));
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        let el = site_nav().to_element("/contact/?ref=nav#form", "https://someone.dev");
        assert_eq!(el.find_all("a")[2].attr_value("class"), Some("current"));
    }

    #[test]
    fn test_query_only_absolute_url_kept_verbatim() {
        let nav = NavBar::new(vec![
            NavLink::new("https://a.dev?ref=nav", "A"),
            NavLink::new("https://someone.dev#top", "Top"),
        ]);
        let el = nav.to_element("/", "https://someone.dev");
        let links = el.find_all("a");
        assert_eq!(links[0].attr_value("href"), Some("https://a.dev?ref=nav"));
        assert_eq!(links[0].attr_value("target"), Some("_blank"));
        assert_eq!(links[1].attr_value("href"), Some("https://someone.dev#top"));
        assert_eq!(links[1].attr_value("aria-current"), Some("page"));
        assert!(!links[1].has_attr("target"));
    }

    #[test]
    fn test_mailto_link_kept_and_external() {
        let nav = NavBar::new(vec![NavLink::new("mailto:me@someone.dev", "Mail")]);
        let el = nav.to_element("/", "https://someone.dev");
        let links = el.find_all("a");
        assert_eq!(links[0].attr_value("href"), Some("mailto:me@someone.dev"));
        assert_eq!(links[0].attr_value("target"), Some("_blank"));
        assert!(!links[0].has_attr("aria-current"));
    }

    #[test]
    fn test_protocol_relative_links() {
        let nav = NavBar::new(vec![
            NavLink::new("//cdn.example/x", "CDN"),
            NavLink::new("//someone.dev/blog/", "Blog"),
        ]);
        let el = nav.to_element("/blog/", "https://someone.dev");
        let links = el.find_all("a");
        assert_eq!(links[0].attr_value("href"), Some("//cdn.example/x"));
        assert_eq!(links[0].attr_value("target"), Some("_blank"));
        assert_eq!(links[1].attr_value("href"), Some("//someone.dev/blog/"));
        assert_eq!(links[1].attr_value("aria-current"), Some("page"));
        assert!(!links[1].has_attr("target"));
    }

    #[test]
    fn test_url_scheme() {
        assert_eq!(url_scheme("https://a.dev"), Some("https"));
        assert_eq!(url_scheme("mailto:me@a.dev"), Some("mailto"));
        assert_eq!(url_scheme("git+ssh://host/repo"), Some("git+ssh"));
        assert_eq!(url_scheme("projects/"), None);
        assert_eq!(url_scheme("1abc:x"), None);
        assert_eq!(url_scheme(":x"), None);
    }

    #[test]
    fn test_split_authority() {
        assert_eq!(split_authority("a.dev:8080/x/y"), ("a.dev:8080", "/x/y"));
        assert_eq!(split_authority("a.dev?ref=nav"), ("a.dev", "?ref=nav"));
        assert_eq!(split_authority("a.dev#top"), ("a.dev", "#top"));
        assert_eq!(split_authority("a.dev"), ("a.dev", ""));
    }
}
