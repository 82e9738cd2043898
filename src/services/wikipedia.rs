use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::services::encyclopedia::Source;

/// en.wikipedia.org. Disambiguation pages carry a dmbox; on regular
/// articles the content of interest starts after the page title element.
pub struct Wikipedia {
    base_url: Url,
    dmbox: Selector,
    content: Selector,
    title_span: Selector,
    title_heading: Selector,
}

impl Wikipedia {
    pub fn new(base_url: Url) -> Self {
        Wikipedia {
            base_url,
            dmbox: Selector::parse("div.dmbox-body").unwrap(),
            content: Selector::parse(
                r#"div.mw-content-ltr.mw-parser-output[lang="en"][dir="ltr"]"#,
            )
            .unwrap(),
            title_span: Selector::parse("span.mw-page-title-main").unwrap(),
            title_heading: Selector::parse("h1#firstHeading.firstHeading.mw-first-heading")
                .unwrap(),
        }
    }
}

impl Source for Wikipedia {
    fn name(&self) -> &'static str {
        "Wikipedia"
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn is_disambiguation(&self, doc: &Html) -> bool {
        doc.select(&self.dmbox).next().is_some()
    }

    fn top_marker<'a>(&self, doc: &'a Html, disambiguated: bool) -> Option<ElementRef<'a>> {
        match disambiguated {
            true => doc.select(&self.content).next(),
            false => doc
                .select(&self.title_span)
                .next()
                .or_else(|| doc.select(&self.title_heading).next()),
        }
    }
}
