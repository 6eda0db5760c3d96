use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::app_user::AppUserFactory};

mod admin_exists;
mod find_by_email;
mod get_all;
