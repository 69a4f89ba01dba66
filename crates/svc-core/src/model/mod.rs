//! Modelos del contexto de ejecución (InputStore, ErrorBag, OutputBag,...)

pub mod args;
pub mod error_bag;
pub mod input_store;
pub mod key;
pub mod merge;
pub mod output_bag;

pub use args::Args;
pub use error_bag::{ErrorBag, IntoCodes};
pub use input_store::{InputStore, Snapshot};
pub use key::{canonicalize, canonicalize_value, Key};
pub use merge::{merge_object, slice_object};
pub use output_bag::OutputBag;
