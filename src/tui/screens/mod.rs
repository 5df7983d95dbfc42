//! TUI screens for interactive workflows.

mod reading;
mod select;
mod wizard;

pub use reading::ReadingBrowser;
pub use select::{select_from_list, select_from_list_with_header};
pub use wizard::{ReadingWizard, WizardStep};
