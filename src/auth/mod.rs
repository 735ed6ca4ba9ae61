//! Authentication: register, login, JWT.

mod handlers;
mod jwt;
mod password;
mod service;

pub use handlers::{login, me, register, LoginRequest, LoginResponse, RegistrationRequest};
pub use jwt::{Claims, JwtSecret};
pub use password::{hash_password, verify_password};
pub use service::UserService;
