pub mod jwt_middleware;
pub mod password;
pub mod token;
