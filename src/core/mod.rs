//! Core functionality for ytthumb

pub mod downloader;
pub mod fetcher;
pub mod thumbnail;

pub use downloader::*;
pub use fetcher::*;
pub use thumbnail::*;
