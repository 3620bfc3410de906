pub mod descriptor;
pub mod error;
pub mod panel;
pub mod render;

pub use descriptor::{DashlistDescriptor, DescriptorFactory};
pub use error::{DashError, ErrorKind, Result};
pub use panel::{CommonPanel, DashlistPanel, Panel, PanelFactory, DASHLIST_TYPE, DEFAULT_TITLE};
pub use render::{to_json, to_yaml, write_json};
