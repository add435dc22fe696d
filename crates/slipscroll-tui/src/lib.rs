pub mod app;
pub mod document;
pub mod event;
pub mod input;
pub mod ui;

pub use app::App;
pub use document::TermDocument;
