use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UserRole},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod set_active;
