//! TUI widgets for interactive components.

mod facet_panel;
mod multi_select;
mod select_list;
mod text_input;

pub use facet_panel::{Facet, FacetPanel};
pub use multi_select::{MultiSelect, MultiSelectAction};
pub use select_list::{SelectAction, SelectList};
pub use text_input::TextInput;
