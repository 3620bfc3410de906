//! Interface between panel builders and the dashboard model they feed.
//!
//! Builders only ever talk to a descriptor through [`DashlistDescriptor`], and
//! obtain fresh ones from a [`DescriptorFactory`]. [`crate::Panel`] is the
//! stock implementation; dashboard libraries with their own panel types
//! implement these traits instead.

/// Mutable view of a dashboard list panel.
pub trait DashlistDescriptor {
    fn set_title(&mut self, title: String);
    /// Whether the dashboard should treat the panel as freshly added.
    fn set_new(&mut self, is_new: bool);
    /// Grid width; callers validate the 1..=12 range before calling.
    fn set_span(&mut self, span: u8);
    fn set_height(&mut self, height: String);
    fn set_description(&mut self, description: String);
    fn set_transparent(&mut self, transparent: bool);

    fn set_headings(&mut self, headings: bool);
    fn set_search(&mut self, search: bool);
    fn set_starred(&mut self, starred: bool);
    fn set_recent(&mut self, recent: bool);
    fn set_limit(&mut self, limit: i64);
    fn set_query(&mut self, query: String);
    fn set_folder_id(&mut self, folder_id: i64);
    fn set_tags(&mut self, tags: Vec<String>);
}

/// Source of fresh descriptors, one per build.
pub trait DescriptorFactory {
    type Descriptor: DashlistDescriptor;

    fn new_dashlist(&self, title: &str) -> Self::Descriptor;
}
