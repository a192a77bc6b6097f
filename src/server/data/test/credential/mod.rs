use crate::server::data::credential::CredentialRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active;
