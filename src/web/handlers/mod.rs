//! HTML handlers: full pages and the fragments the demos exchange.

mod contacts;
mod errors;
mod fallback;
mod pages;
mod search;
mod survey;
mod wizard;

pub use contacts::{item_delete_handler, list_items_handler};
pub use errors::{error_page_handler, simulate_error_handler};
pub use fallback::{Fallback, fallback_handler};
pub use pages::{demo_handler, index_handler, test_handler};
pub use search::{demo1_search_handler, demo2_search_handler};
pub use survey::survey_step_handler;
pub use wizard::{wizard_next_handler, wizard_prev_handler};
