use folio_core::FolioConfig;
use folio_core::model::SectionDescriptor;
use folio_core::motion::anchor_hash;
use folio_protocol::{Point, Rect, ScrollBehavior, StyleOp, Target, UiCommand};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub const TILT_CARDS: &str = ".expertise-card, .project-card, .education-card, .contact-card";
pub const MAGNETIC: &str = ".btn, .social-link";

/// First element matching `selector`. Invalid selectors count as no match.
pub fn select(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn select_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn pointer(event: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn apply_op(el: &HtmlElement, op: &StyleOp) -> Result<(), JsValue> {
    match op {
        StyleOp::SetClass { class, enabled } => {
            let list = el.class_list();
            if *enabled {
                list.add_1(class)
            } else {
                list.remove_1(class)
            }
        }
        StyleOp::SetStyle { property, value } => el.style().set_property(property, value),
    }
}

/// The page elements this script works with, resolved once at startup.
///
/// Anything missing is `None` or an empty list and every command addressed
/// to it is dropped.
pub struct Page {
    document: Document,
    navbar: Option<HtmlElement>,
    nav_menu: Option<HtmlElement>,
    body: Option<HtmlElement>,
    pub mobile_toggle: Option<HtmlElement>,
    toggle_icon: Option<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    back_to_top: Option<HtmlElement>,
    hero: Option<HtmlElement>,
    decorative_grid: Option<HtmlElement>,
    pub scroll_indicator: Option<HtmlElement>,
    pub filter_buttons: Vec<HtmlElement>,
    pub project_cards: Vec<HtmlElement>,
    pub revealables: Vec<HtmlElement>,
    hero_parts: Vec<Option<HtmlElement>>,
}

impl Page {
    pub fn resolve(document: Document, config: &FolioConfig) -> Self {
        let mobile_toggle = select(&document, ".mobile-nav-toggle");
        let toggle_icon = mobile_toggle
            .as_ref()
            .and_then(|toggle| toggle.query_selector("i").ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let hero_parts = config
            .entrance
            .hero_parts
            .iter()
            .map(|selector| select(&document, selector))
            .collect();

        Self {
            navbar: select(&document, "#navbar"),
            nav_menu: select(&document, ".nav-menu"),
            body: document.body(),
            mobile_toggle,
            toggle_icon,
            nav_links: select_all(&document, ".nav-link"),
            back_to_top: select(&document, ".back-to-top"),
            hero: select(&document, "#hero"),
            decorative_grid: select(&document, ".hero-decorative-grid"),
            scroll_indicator: select(&document, ".scroll-indicator"),
            filter_buttons: select_all(&document, ".filter-btn"),
            project_cards: select_all(&document, ".project-card"),
            revealables: Vec::new(),
            hero_parts,
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn has_hero(&self) -> bool {
        self.hero.is_some()
    }

    pub fn hero_parts_present(&self) -> Vec<bool> {
        self.hero_parts.iter().map(Option::is_some).collect()
    }

    /// Collect the `[data-aos]` elements. Done at load so late markup counts.
    pub fn resolve_revealables(&mut self) {
        self.revealables = select_all(&self.document, "[data-aos]");
    }

    /// Live geometry of every section a nav link points at.
    pub fn sections(&self) -> Vec<SectionDescriptor> {
        self.nav_links
            .iter()
            .enumerate()
            .filter_map(|(link, el)| {
                let href = el.get_attribute("href");
                let hash = anchor_hash(href.as_deref())?;
                let section = select(&self.document, hash)?;
                Some(SectionDescriptor::new(
                    hash,
                    link,
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                ))
            })
            .collect()
    }

    /// Class lists of the project cards, read at click time.
    pub fn card_classes(&self) -> Vec<Vec<String>> {
        self.project_cards
            .iter()
            .map(|card| {
                card.class_name()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    pub fn element(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::Navbar => self.navbar.as_ref(),
            Target::NavMenu => self.nav_menu.as_ref(),
            Target::Body => self.body.as_ref(),
            Target::MobileToggleIcon => self.toggle_icon.as_ref(),
            Target::NavLink(i) => self.nav_links.get(i),
            Target::BackToTop => self.back_to_top.as_ref(),
            Target::DecorativeGrid => self.decorative_grid.as_ref(),
            Target::ScrollIndicator => self.scroll_indicator.as_ref(),
            Target::FilterButton(i) => self.filter_buttons.get(i),
            Target::ProjectCard(i) => self.project_cards.get(i),
            Target::Revealable(i) => self.revealables.get(i),
            Target::HeroPart(i) => self.hero_parts.get(i).and_then(Option::as_ref),
        }
    }

    pub fn apply(&self, window: &Window, commands: &[UiCommand]) {
        for command in commands {
            let result = match command {
                UiCommand::Style { target, op } => match self.element(*target) {
                    Some(el) => apply_op(el, op),
                    None => Ok(()),
                },
                UiCommand::ScrollTo { top, behavior } => scroll_window(window, *top, *behavior),
            };
            if let Err(e) = result {
                warn!("failed to apply {command:?}: {e:?}");
            }
        }
    }
}

fn scroll_window(window: &Window, top: f64, behavior: ScrollBehavior) -> Result<(), JsValue> {
    match behavior {
        ScrollBehavior::Instant => window.scroll_to_with_x_and_y(0.0, top),
        ScrollBehavior::Smooth => {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    Ok(())
}
