use crate::server::{
    data::repository::Repository,
    model::params::{PageSize, TasksSpecificationParams, VesselsSpecificationParams},
    specification::{
        task::tasks_with_pagination_specification, vessel::vessels_specification,
        Specification,
    },
};
use sea_orm::{ActiveValue, DbErr, EntityTrait, IntoActiveModel};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod get_by_id;
mod list_with_spec;
mod write;
