//! backend/src/io/rest/mappers/user_mapper.rs

use crate::domain::commands::users::{LoginCommand, RegisterUserCommand};
use shared::{LoginRequest, RegisterUserRequest};

/// Mapper from user DTOs to domain commands.
pub struct UserMapper;

impl UserMapper {
    pub fn to_register_command(request: RegisterUserRequest) -> RegisterUserCommand {
        RegisterUserCommand {
            fullname: request.fullname,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
            blood_group: request.blood_group,
            phone: request.phone,
            address: request.address,
        }
    }

    pub fn to_login_command(request: LoginRequest) -> LoginCommand {
        LoginCommand {
            email: request.email,
            password: request.password,
        }
    }

    /// The registration form as echoed back after a validation failure, passwords cleared
    pub fn redacted_registration(request: &RegisterUserRequest) -> RegisterUserRequest {
        RegisterUserRequest {
            password: String::new(),
            confirm_password: String::new(),
            ..request.clone()
        }
    }
}
