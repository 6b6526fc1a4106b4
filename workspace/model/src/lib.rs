pub mod entities;
pub mod history;
