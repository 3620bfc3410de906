use serde::{Deserialize, Serialize};

use crate::descriptor::{DashlistDescriptor, DescriptorFactory};

/// Panel type tag used by the dashboard JSON model.
pub const DASHLIST_TYPE: &str = "dashlist";

/// Title given to panels created without one.
pub const DEFAULT_TITLE: &str = "Panel Title";

const DEFAULT_RENDERER: &str = "flot";

/// Fields every dashboard panel carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonPanel {
    #[serde(rename = "type")]
    pub panel_type: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,
}

/// Settings specific to the dashboard list panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashlistPanel {
    #[serde(default)]
    pub headings: bool,
    #[serde(default)]
    pub search: bool,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub recent: bool,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub folder_id: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A dashboard panel as embedded in a dashboard document.
///
/// Serializes flat: common and dashlist fields share one JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    #[serde(flatten)]
    pub common: CommonPanel,
    #[serde(flatten)]
    pub dashlist: DashlistPanel,
}

impl Panel {
    /// Fresh dashboard list panel, flagged as new and with zeroed list settings.
    pub fn new_dashlist(title: &str) -> Self {
        let title = if title.is_empty() { DEFAULT_TITLE } else { title };

        Self {
            common: CommonPanel {
                panel_type: DASHLIST_TYPE.to_string(),
                title: title.to_string(),
                span: None,
                height: None,
                description: None,
                transparent: false,
                is_new: true,
                renderer: Some(DEFAULT_RENDERER.to_string()),
            },
            dashlist: DashlistPanel::default(),
        }
    }
}

impl DashlistDescriptor for Panel {
    fn set_title(&mut self, title: String) {
        self.common.title = title;
    }

    fn set_new(&mut self, is_new: bool) {
        self.common.is_new = is_new;
    }

    fn set_span(&mut self, span: u8) {
        self.common.span = Some(span);
    }

    fn set_height(&mut self, height: String) {
        self.common.height = Some(height);
    }

    fn set_description(&mut self, description: String) {
        self.common.description = Some(description);
    }

    fn set_transparent(&mut self, transparent: bool) {
        self.common.transparent = transparent;
    }

    fn set_headings(&mut self, headings: bool) {
        self.dashlist.headings = headings;
    }

    fn set_search(&mut self, search: bool) {
        self.dashlist.search = search;
    }

    fn set_starred(&mut self, starred: bool) {
        self.dashlist.starred = starred;
    }

    fn set_recent(&mut self, recent: bool) {
        self.dashlist.recent = recent;
    }

    fn set_limit(&mut self, limit: i64) {
        self.dashlist.limit = limit;
    }

    fn set_query(&mut self, query: String) {
        self.dashlist.query = query;
    }

    fn set_folder_id(&mut self, folder_id: i64) {
        self.dashlist.folder_id = folder_id;
    }

    fn set_tags(&mut self, tags: Vec<String>) {
        self.dashlist.tags = tags;
    }
}

/// Factory producing [`Panel`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelFactory;

impl DescriptorFactory for PanelFactory {
    type Descriptor = Panel;

    fn new_dashlist(&self, title: &str) -> Panel {
        Panel::new_dashlist(title)
    }
}
