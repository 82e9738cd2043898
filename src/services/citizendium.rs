use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::services::encyclopedia::Source;

/// citizendium.org. Articles carry a grey intro box with a fixed inline
/// style; a page without that box is a disambiguation page, whose marker
/// falls back to the generic content container.
pub struct Citizendium {
    base_url: Url,
    article_box: Selector,
    content: Selector,
}

impl Citizendium {
    pub fn new(base_url: Url) -> Self {
        Citizendium {
            base_url,
            article_box: Selector::parse(
                r#"div[align="left"][style="background-color: #cccccc; margin:0.5em;position:relative;"]"#,
            )
            .unwrap(),
            content: Selector::parse("div.mw-parser-output").unwrap(),
        }
    }
}

impl Source for Citizendium {
    fn name(&self) -> &'static str {
        "Citizendium"
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn is_disambiguation(&self, doc: &Html) -> bool {
        doc.select(&self.article_box).next().is_none()
    }

    fn top_marker<'a>(&self, doc: &'a Html, disambiguated: bool) -> Option<ElementRef<'a>> {
        match disambiguated {
            true => doc.select(&self.content).next(),
            false => doc.select(&self.article_box).next(),
        }
    }
}
