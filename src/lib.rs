pub mod config;
pub mod contact;
pub mod error;
pub mod modal;
pub mod profile;
pub mod scroll;
pub mod state;
pub mod subscription;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
