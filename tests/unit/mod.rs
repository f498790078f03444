mod application;
mod common;
mod utils;
