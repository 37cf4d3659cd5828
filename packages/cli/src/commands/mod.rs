pub mod apply;
pub mod export;
pub mod import;
pub mod init;
pub mod library;
pub mod show;
pub mod templates;

pub use apply::{apply, ApplyArgs};
pub use export::{export, ExportArgs};
pub use import::{import, ImportArgs};
pub use init::{init, InitArgs};
pub use library::library;
pub use show::{show, ShowArgs};
pub use templates::{templates, TemplatesCommand};
