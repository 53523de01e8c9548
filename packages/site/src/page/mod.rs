//! HTML output for the listing page.

mod render;
mod writer;

pub use render::{escape_html, render_listing};
pub use writer::save_page;
