//! Turns a [`ShowList`] into HTML.
//!
//! Rendering is split in two steps: [`rows`] builds a plain view model (title,
//! optional badge, indicator marks) and the bundled minijinja templates turn it
//! into markup with HTML auto-escaping. Both are pure, so rendering the same
//! list twice yields identical output.
use crate::models::{Show, ShowList};
use serde::Serialize;

mod indicator;
mod templates;

pub use indicator::{indicator, IndicatorStyle, Mark};
pub use templates::RenderError;

pub const WATCHING_BADGE: &str = "watching";

/// One rendered line of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<'a> {
    pub title: &'a str,
    pub badge: Option<&'static str>,
    pub marks: Vec<Mark>,
}

/// Heading plus the shows shown under it.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub heading: &'a str,
    pub shows: &'a ShowList,
}

pub fn row(show: &Show, style: IndicatorStyle) -> Row<'_> {
    Row {
        title: show.title(),
        badge: show.is_watching().then_some(WATCHING_BADGE),
        marks: indicator(show.score(), style),
    }
}

pub fn rows(shows: &ShowList, style: IndicatorStyle) -> Vec<Row<'_>> {
    shows.iter().map(|show| row(show, style)).collect()
}

pub fn render_list(shows: &ShowList, style: IndicatorStyle) -> Result<String, RenderError> {
    templates::list(&rows(shows, style), style)
}

pub fn render_page(page: Page<'_>, style: IndicatorStyle) -> Result<String, RenderError> {
    templates::page(page.heading, &rows(page.shows, style), style)
}
