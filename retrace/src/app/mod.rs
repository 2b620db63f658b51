mod operation;
mod retrace_app;

pub use operation::{CountFormat, CountRow, RetraceOperation};
pub use retrace_app::RetraceApp;
