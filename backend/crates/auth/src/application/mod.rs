//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod delete_me;
pub mod login;
pub mod register;
pub mod resolve_current_user;
pub mod update_me;

// Re-exports
pub use config::AuthConfig;
pub use delete_me::DeleteMeUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use resolve_current_user::ResolveCurrentUserUseCase;
pub use update_me::{UpdateMeInput, UpdateMeUseCase};
