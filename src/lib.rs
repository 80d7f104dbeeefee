pub mod fs;
pub mod termio;

mod account;
mod client;
mod media;
mod models;
mod profile;

pub use account::Account;
pub use client::Client;
pub use media::{Media, Photo};
pub use profile::Profile;
