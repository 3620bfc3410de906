use dashctl_core::{DashlistDescriptor, DescriptorFactory, Panel, Result};
use serde::{Deserialize, Serialize};

use crate::option::DashListOption;
use crate::DashList;

/// Chained alternative to passing an option list.
///
/// Each setter records a [`DashListOption`]; nothing is validated until
/// [`build`](Self::build), which runs the same pipeline as [`DashList::new`].
/// The recorded list serializes, so a builder can be saved as a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashListBuilder {
    pub title: String,
    #[serde(default)]
    pub options: Vec<DashListOption>,
}

impl DashListBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn option(mut self, option: DashListOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn no_title(self) -> Self {
        self.option(DashListOption::NoTitle)
    }

    #[must_use]
    pub fn span(self, span: i64) -> Self {
        self.option(DashListOption::Span(span))
    }

    #[must_use]
    pub fn height(self, height: impl Into<String>) -> Self {
        self.option(DashListOption::Height(height.into()))
    }

    #[must_use]
    pub fn description(self, text: impl Into<String>) -> Self {
        self.option(DashListOption::Description(text.into()))
    }

    #[must_use]
    pub fn transparent(self) -> Self {
        self.option(DashListOption::Transparent)
    }

    #[must_use]
    pub fn show_headings(self) -> Self {
        self.option(DashListOption::ShowHeadings)
    }

    #[must_use]
    pub fn show_search(self) -> Self {
        self.option(DashListOption::ShowSearch)
    }

    #[must_use]
    pub fn show_starred(self) -> Self {
        self.option(DashListOption::ShowStarred)
    }

    #[must_use]
    pub fn show_recent(self) -> Self {
        self.option(DashListOption::ShowRecent)
    }

    #[must_use]
    pub fn max_items(self, limit: i64) -> Self {
        self.option(DashListOption::MaxItems(limit))
    }

    #[must_use]
    pub fn query(self, query: impl Into<String>) -> Self {
        self.option(DashListOption::Query(query.into()))
    }

    #[must_use]
    pub fn folder(self, id: i64) -> Self {
        self.option(DashListOption::Folder(id))
    }

    #[must_use]
    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option(crate::option::tags(tags))
    }

    /// Options recorded so far, in application order.
    pub fn options(&self) -> &[DashListOption] {
        &self.options
    }

    pub fn build(&self) -> Result<DashList<Panel>> {
        DashList::new(&self.title, &self.options)
    }

    pub fn build_with<F, P>(&self, factory: &F) -> Result<DashList<P>>
    where
        F: DescriptorFactory<Descriptor = P>,
        P: DashlistDescriptor,
    {
        DashList::with_factory(factory, &self.title, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{max_items, show_recent, span, tags};

    #[test]
    fn test_builder_matches_option_list() {
        let built = DashListBuilder::new("Recent dashboards")
            .show_recent()
            .max_items(5)
            .span(6)
            .build()
            .unwrap();
        let listed = DashList::new("Recent dashboards", [show_recent(), max_items(5), span(6)]).unwrap();
        assert_eq!(built, listed);
    }

    #[test]
    fn test_builder_records_in_order() {
        let builder = DashListBuilder::new("Tagged").tags(["b", "a"]).no_title().folder(9);
        assert_eq!(
            builder.options(),
            &[tags(["b", "a"]), DashListOption::NoTitle, DashListOption::Folder(9)]
        );
    }

    #[test]
    fn test_builder_reports_invalid_span() {
        let err = DashListBuilder::new("Wide").span(13).build().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_builder_is_reusable() {
        let builder = DashListBuilder::new("Again").show_search().query("env:prod");
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.panel().dashlist.query, "env:prod");
    }

    struct TeamPanels;

    impl DescriptorFactory for TeamPanels {
        type Descriptor = Panel;

        fn new_dashlist(&self, title: &str) -> Panel {
            Panel::new_dashlist(&format!("team / {}", title))
        }
    }

    #[test]
    fn test_build_with_factory() {
        let built = DashListBuilder::new("Starred")
            .show_starred()
            .span(4)
            .build_with(&TeamPanels)
            .unwrap();
        let panel = built.panel();
        assert_eq!(panel.common.title, "team / Starred");
        assert_eq!(panel.common.span, Some(4));
        assert!(!panel.common.is_new);
        assert!(panel.dashlist.starred);
        assert_eq!(panel.dashlist.limit, 10);

        let err = DashListBuilder::new("Wide").span(13).build_with(&TeamPanels).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
