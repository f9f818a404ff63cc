//! New tool skeletons.
//!
//! ```text
//! my_tool/
//!   README.md
//!   _version
//!   source/
//!     otls/
//!     python_libs/my_tool/__init__.py
//!     toolbar/my_tool.shelf
//! ```

mod assets;
pub mod engine;
pub mod shelf;
pub mod spec;

pub use engine::{TemplateEngine, TemplateReport};
pub use shelf::render_shelf;
pub use spec::{DEFAULT_TOOL_NAME, DEFAULT_VERSION, TemplateSpec};
