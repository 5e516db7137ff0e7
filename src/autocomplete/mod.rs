mod autocomplete_render;
mod autocomplete_state;
mod dismissal;
mod highlight;

pub use autocomplete_render::{dropdown_area, render_dropdown};
pub use autocomplete_state::{AutocompleteController, EnterAction, SuggestionRow};
pub use dismissal::DismissalRegistry;
pub use highlight::split_emphasis;
