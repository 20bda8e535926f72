pub mod export;
pub mod history;

pub use export::ExportCommands;
pub use history::HistoryCommands;
