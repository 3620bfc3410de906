//! Configuration commands for dashboard list panels.
//!
//! Every built-in option is a [`DashListOption`] value: plain data that can be
//! compared, logged and read from definition files. Anything else that can
//! mutate a descriptor goes through [`Configure`], usually via [`custom`].

use std::fmt;

use dashctl_core::{DashError, DashlistDescriptor, Result};
use serde::{Deserialize, Serialize};

/// Smallest accepted span, in grid units.
pub const MIN_SPAN: i64 = 1;
/// Largest accepted span; a dashboard row is twelve units wide.
pub const MAX_SPAN: i64 = 12;

/// A unit of configuration applied to a descriptor during a build.
pub trait Configure<P: ?Sized> {
    fn apply(&self, panel: &mut P) -> Result<()>;
}

impl<P: ?Sized, T: Configure<P> + ?Sized> Configure<P> for Box<T> {
    fn apply(&self, panel: &mut P) -> Result<()> {
        (**self).apply(panel)
    }
}

impl<P: ?Sized, T: Configure<P> + ?Sized> Configure<P> for &T {
    fn apply(&self, panel: &mut P) -> Result<()> {
        (**self).apply(panel)
    }
}

/// Built-in dashboard list options.
///
/// In definition files unit variants are bare names (`show_recent`) and the
/// rest are single-key maps (`span: 6`, `tags: [ops, db]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashListOption {
    /// Clear the title.
    NoTitle,
    /// Grid width, 1..=12.
    Span(i64),
    Height(String),
    Description(String),
    Transparent,
    ShowHeadings,
    ShowSearch,
    ShowStarred,
    ShowRecent,
    /// Maximum number of dashboards listed. Not range checked.
    MaxItems(i64),
    Query(String),
    /// Folder to list dashboards from. Not range checked.
    Folder(i64),
    Tags(Vec<String>),
}

impl DashListOption {
    /// Every option name with a short description of its argument.
    pub const CATALOG: &'static [(&'static str, &'static str)] = &[
        ("no_title", "-"),
        ("span", "integer 1..=12"),
        ("height", "string, e.g. \"300px\""),
        ("description", "string"),
        ("transparent", "-"),
        ("show_headings", "-"),
        ("show_search", "-"),
        ("show_starred", "-"),
        ("show_recent", "-"),
        ("max_items", "integer"),
        ("query", "string"),
        ("folder", "integer folder id"),
        ("tags", "list of strings"),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DashListOption::NoTitle => "no_title",
            DashListOption::Span(_) => "span",
            DashListOption::Height(_) => "height",
            DashListOption::Description(_) => "description",
            DashListOption::Transparent => "transparent",
            DashListOption::ShowHeadings => "show_headings",
            DashListOption::ShowSearch => "show_search",
            DashListOption::ShowStarred => "show_starred",
            DashListOption::ShowRecent => "show_recent",
            DashListOption::MaxItems(_) => "max_items",
            DashListOption::Query(_) => "query",
            DashListOption::Folder(_) => "folder",
            DashListOption::Tags(_) => "tags",
        }
    }
}

impl fmt::Display for DashListOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashListOption::Span(n) | DashListOption::MaxItems(n) | DashListOption::Folder(n) => {
                write!(f, "{}({})", self.name(), n)
            }
            DashListOption::Height(s) | DashListOption::Description(s) | DashListOption::Query(s) => {
                write!(f, "{}({:?})", self.name(), s)
            }
            DashListOption::Tags(tags) => write!(f, "{}({:?})", self.name(), tags),
            _ => f.write_str(self.name()),
        }
    }
}

impl<P: DashlistDescriptor + ?Sized> Configure<P> for DashListOption {
    fn apply(&self, panel: &mut P) -> Result<()> {
        match self {
            DashListOption::NoTitle => panel.set_title(String::new()),
            DashListOption::Span(span) => panel.set_span(checked_span(*span)?),
            DashListOption::Height(height) => panel.set_height(height.clone()),
            DashListOption::Description(text) => panel.set_description(text.clone()),
            DashListOption::Transparent => panel.set_transparent(true),
            DashListOption::ShowHeadings => panel.set_headings(true),
            DashListOption::ShowSearch => panel.set_search(true),
            DashListOption::ShowStarred => panel.set_starred(true),
            DashListOption::ShowRecent => panel.set_recent(true),
            DashListOption::MaxItems(limit) => panel.set_limit(*limit),
            DashListOption::Query(query) => panel.set_query(query.clone()),
            DashListOption::Folder(id) => panel.set_folder_id(*id),
            DashListOption::Tags(tags) => panel.set_tags(tags.clone()),
        }
        Ok(())
    }
}

fn checked_span(span: i64) -> Result<u8> {
    if !(MIN_SPAN..=MAX_SPAN).contains(&span) {
        return Err(DashError::invalid_argument(
            "span",
            format!("must be between {MIN_SPAN} and {MAX_SPAN}, got {span}"),
        ));
    }
    // in range, fits in u8
    Ok(span as u8)
}

/// Caller-supplied option wrapping a function.
pub struct Custom<F>(F);

impl<F> fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Custom(..)")
    }
}

impl<P: ?Sized, F> Configure<P> for Custom<F>
where
    F: Fn(&mut P) -> anyhow::Result<()>,
{
    fn apply(&self, panel: &mut P) -> Result<()> {
        (self.0)(panel).map_err(DashError::option)
    }
}

/// Wrap a function as an option. Its errors are reported as [`dashctl_core::ErrorKind::Option`]
/// unless they already carry a dashctl error.
pub fn custom<P: ?Sized, F>(f: F) -> Custom<F>
where
    F: Fn(&mut P) -> anyhow::Result<()>,
{
    Custom(f)
}

pub fn no_title() -> DashListOption {
    DashListOption::NoTitle
}

pub fn span(span: i64) -> DashListOption {
    DashListOption::Span(span)
}

pub fn height(height: impl Into<String>) -> DashListOption {
    DashListOption::Height(height.into())
}

pub fn description(text: impl Into<String>) -> DashListOption {
    DashListOption::Description(text.into())
}

pub fn transparent() -> DashListOption {
    DashListOption::Transparent
}

pub fn show_headings() -> DashListOption {
    DashListOption::ShowHeadings
}

pub fn show_search() -> DashListOption {
    DashListOption::ShowSearch
}

pub fn show_starred() -> DashListOption {
    DashListOption::ShowStarred
}

pub fn show_recent() -> DashListOption {
    DashListOption::ShowRecent
}

pub fn max_items(limit: i64) -> DashListOption {
    DashListOption::MaxItems(limit)
}

pub fn query(query: impl Into<String>) -> DashListOption {
    DashListOption::Query(query.into())
}

pub fn folder(id: i64) -> DashListOption {
    DashListOption::Folder(id)
}

pub fn tags<I, S>(tags: I) -> DashListOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DashListOption::Tags(tags.into_iter().map(Into::into).collect())
}
