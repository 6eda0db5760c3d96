use crate::server::data::unit_of_work::UnitOfWork;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod complete;
