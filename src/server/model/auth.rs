//! Authentication parameters and results.

use crate::{
    model::auth::{
        AuthResponseDto, FirstAccessDto, FirstAccessResponseDto, LoginDto, NewUserDto,
        RegisterDto,
    },
    server::model::{
        clinic::CreateClinicParams,
        professional::{Professional, ProfessionalFields},
        user::{User, UserRole},
    },
};

/// Login account requested at registration, before its password is hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl NewAccount {
    pub fn from_dto(dto: NewUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: UserRole::from_dto(dto.role),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub clinic_name: String,
    pub account: NewAccount,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            clinic_name: dto.clinic_name,
            account: NewAccount::from_dto(dto.user),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Onboarding of a clinic together with its first user and professional.
#[derive(Debug, Clone)]
pub struct FirstAccessParams {
    pub clinic: CreateClinicParams,
    pub account: NewAccount,
    pub professional: ProfessionalFields,
}

impl FirstAccessParams {
    pub fn from_dto(dto: FirstAccessDto) -> Self {
        let account = NewAccount::from_dto(dto.user);
        Self {
            clinic: CreateClinicParams::from_dto(dto.clinic, account.email.clone()),
            account,
            professional: ProfessionalFields::from_dto(dto.professional),
        }
    }
}

/// Authenticated user and the bearer token issued for it.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

impl AuthSession {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            user: self.user.into_dto(),
            token: self.token,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FirstAccessSession {
    pub user: User,
    pub professional: Professional,
    pub token: String,
}

impl FirstAccessSession {
    pub fn into_dto(self) -> FirstAccessResponseDto {
        FirstAccessResponseDto {
            user: self.user.into_dto(),
            professional: self.professional.into_summary_dto(),
            token: self.token,
        }
    }
}
