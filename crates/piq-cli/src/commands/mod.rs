pub mod dispatch;
pub mod export;
pub mod history;
pub mod leads;
pub mod research;
pub mod sample;
pub mod shared;
