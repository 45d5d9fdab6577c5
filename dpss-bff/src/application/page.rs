//! Shared page skeleton

use crate::domain::components::{Footer, Navbar};
use crate::domain::{Component, Components, Event, Link};

use super::frontend;

pub const SITE_NAME: &str = "DPSS UI";

const CLIENT_GITHUB_URL: &str = "https://github.com/pydantic/FastUI";
const CLIENT_PYPI_URL: &str = "https://pypi.org/project/fastui/";
const CLIENT_NPM_URL: &str = "https://www.npmjs.com/org/pydantic/";

pub fn navbar() -> Navbar {
    Navbar {
        title: SITE_NAME.to_string(),
        title_event: Event::go_to(frontend::INDEX),
        start_links: vec![
            Link::go_to("Reports", frontend::REPORTS),
            Link::go_to("Scan Configurations", frontend::SCAN_CONFIGS),
            Link::go_to("Vulnerability Database", frontend::VULNERS),
        ],
        end_links: vec![Link::back("Login"), Link::back("Help")],
    }
}

pub fn footer() -> Footer {
    Footer {
        links: vec![
            Link::go_to("GitHub", CLIENT_GITHUB_URL),
            Link::go_to("PyPI", CLIENT_PYPI_URL),
            Link::go_to("NPM", CLIENT_NPM_URL),
        ],
        extra_text: Some(SITE_NAME.to_string()),
    }
}

/// Wrap a view's components in the page title, navbar, heading, back link
/// and footer every page shares.
pub fn base_page(components: Vec<Component>, title: Option<&str>) -> Components {
    let (page_title, heading) = match title {
        Some(title) => (format!("{SITE_NAME} — {title}"), title.to_string()),
        None => (SITE_NAME.to_string(), SITE_NAME.to_string()),
    };

    let mut body = Vec::with_capacity(components.len() + 2);
    body.push(Component::heading(heading, 1));
    body.push(Link::back("Go back").into());
    body.extend(components);

    vec![
        Component::page_title(page_title),
        Component::Navbar(navbar()),
        Component::Page { components: body },
        Component::Footer(footer()),
    ]
}
