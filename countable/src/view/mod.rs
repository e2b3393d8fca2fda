// The view is an owned builder: every element-space operation consumes it
// and hands it back, so a chain of operations is one expression and nothing
// else can observe it halfway. The operations are spread over the files
// below by what they do.
mod editing;
mod filtering;
mod indices;
mod ordering;
mod set_ops;
mod splitting;
mod view_core;

pub use indices::{Categorized, Indices};
pub use splitting::SplitBoundary;
pub use view_core::View;
