//! Tabs: `registry` maps a tab key to its page, `tab_labels` to its title.

pub mod bar;
pub mod page;
pub mod registry;
pub mod tab_labels;

pub use bar::TabBar;
pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
