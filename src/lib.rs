pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod feed;
pub mod input;
