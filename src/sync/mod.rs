//! The two top-level flows.
//!
//! - `extract`: scan local files, then create missing remote assets and tags
//! - `import`: download exports and write them to their local paths
//!
//! Both run sequentially and stop at the first error.

mod extract;
mod hooks;
mod import;

pub use extract::{ExtractSummary, collect_messages, extract, remove_stale_files, validate_sources};
pub use hooks::{HookEvent, run_hooks};
pub use import::{ImportSummary, import};
