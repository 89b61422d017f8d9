//! One-time lookup of every element the behaviors bind to.

use web_sys::{Document, HtmlElement};

use super::{query_document, query_first};
use crate::config::Selectors;
use crate::error::PageError;

/// One video strip with its arrow controls.
#[derive(Clone, Debug)]
pub struct CarouselElements {
    pub track: HtmlElement,
    pub left_arrow: HtmlElement,
    pub right_arrow: HtmlElement,
    /// First item in the track, used to size the arrow step.
    pub first_item: Option<HtmlElement>,
}

/// Element handles queried when the controller mounts.
///
/// Optional fields are `None` when the markup lacks them; the behaviors that
/// need them stay unbound.
#[derive(Clone, Debug)]
pub struct PageElements {
    pub document: Document,
    pub body: HtmlElement,
    pub theme_switcher: Option<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub main_nav: Option<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    pub hamburger: Option<HtmlElement>,
    pub copy_message: Option<HtmlElement>,
    pub copy_items: Vec<HtmlElement>,
    pub stat_numbers: Vec<HtmlElement>,
    pub skill_ticker: Option<HtmlElement>,
    pub carousels: Vec<CarouselElements>,
}

impl PageElements {
    /// # Errors
    ///
    /// Returns [`PageError::NoBody`] if the document has no `<body>`.
    pub fn query(document: &Document, selectors: &Selectors) -> Result<Self, PageError> {
        let body = document.body().ok_or(PageError::NoBody)?;
        let first = |selector: &str| query_first(&body, selector);

        let carousels = query_document(document, &selectors.video_section)
            .iter()
            .filter_map(|section| {
                let carousel = CarouselElements {
                    track: query_first(section, &selectors.video_track)?,
                    left_arrow: query_first(section, &selectors.left_arrow)?,
                    right_arrow: query_first(section, &selectors.right_arrow)?,
                    first_item: None,
                };
                let first_item = query_first(&carousel.track, &selectors.video_item);
                Some(CarouselElements { first_item, ..carousel })
            })
            .collect();

        Ok(Self {
            document: document.clone(),
            theme_switcher: first(&selectors.theme_switcher),
            sections: query_document(document, &selectors.sections),
            main_nav: first(&selectors.main_nav),
            nav_links: query_document(document, &selectors.nav_links),
            hamburger: first(&selectors.hamburger),
            copy_message: first(&selectors.copy_message),
            copy_items: query_document(document, &selectors.copy_items),
            stat_numbers: query_document(document, &selectors.stat_numbers),
            skill_ticker: first(&selectors.skill_ticker),
            carousels,
            body,
        })
    }
}
