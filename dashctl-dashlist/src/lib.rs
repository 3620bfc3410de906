//! Dashboard list panel builder.
//!
//! A dashboard list panel shows dashboards matching search, starred, recent
//! or tag criteria. [`DashList::new`] takes a title and an ordered list of
//! options, applies the built-in defaults followed by every option in order,
//! and stops at the first one that fails.
//!
//! ```
//! use dashctl_dashlist::{max_items, show_recent, span, DashList};
//!
//! let list = DashList::new("Recent dashboards", [show_recent(), max_items(5), span(6)]).unwrap();
//! assert!(list.panel().dashlist.recent);
//! assert_eq!(list.panel().common.span, Some(6));
//! ```

pub mod builder;
pub mod option;

use dashctl_core::{DashlistDescriptor, DescriptorFactory, Panel, PanelFactory, Result};
use tracing::{debug, trace};

pub use builder::DashListBuilder;
pub use option::{
    custom, description, folder, height, max_items, no_title, query, show_headings, show_recent,
    show_search, show_starred, span, tags, transparent, Configure, Custom, DashListOption,
    MAX_SPAN, MIN_SPAN,
};

/// Number of dashboards listed when no `max_items` option is given.
pub const DEFAULT_LIMIT: i64 = 10;

/// Options applied to every panel before the caller's.
pub fn defaults() -> Vec<DashListOption> {
    Vec::new()
}

/// A built dashboard list panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashList<P = Panel> {
    builder: P,
}

impl DashList<Panel> {
    /// Build a [`Panel`] from a title and options.
    pub fn new<I>(title: &str, options: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Configure<Panel>,
    {
        Self::with_factory(&PanelFactory, title, options)
    }
}

impl<P: DashlistDescriptor> DashList<P> {
    /// Build with descriptors produced by `factory`.
    ///
    /// On error the partially configured descriptor is dropped.
    pub fn with_factory<F, I>(factory: &F, title: &str, options: I) -> Result<Self>
    where
        F: DescriptorFactory<Descriptor = P>,
        I: IntoIterator,
        I::Item: Configure<P>,
    {
        let mut panel = factory.new_dashlist(title);
        panel.set_new(false);
        panel.set_limit(DEFAULT_LIMIT);

        for opt in defaults() {
            trace!(option = %opt, "applying default option");
            opt.apply(&mut panel)?;
        }

        let mut applied = 0usize;
        for opt in options {
            opt.apply(&mut panel)?;
            applied += 1;
        }

        debug!(title, applied, "built dashlist panel");
        Ok(Self { builder: panel })
    }

    pub fn panel(&self) -> &P {
        &self.builder
    }

    /// Hand the descriptor over to the dashboard being assembled.
    pub fn into_panel(self) -> P {
        self.builder
    }
}
