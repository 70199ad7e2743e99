pub mod example;
pub mod minimized;
pub mod version;
pub mod word;
