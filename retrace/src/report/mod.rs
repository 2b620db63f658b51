//! bar chart rendering of ranked tap counts.
pub mod layout;
pub mod palette;

mod network_line;
mod render_row;
mod renderer;
mod report_assets;
mod report_error;
mod report_options;
mod text_table;
mod truncate;
mod typeface;

pub use network_line::NetworkLine;
pub use render_row::{Badge, RenderRow};
pub use renderer::{encode_png, summary_line, ReportInput, ReportRenderer};
pub use report_assets::ReportAssets;
pub use report_error::ReportError;
pub use report_options::{ReportKind, ReportOptions};
pub use text_table::render_text_table;
pub use truncate::{truncate_label, ELLIPSIS};
pub use typeface::Typeface;
