//! Vessel search.

use entity::vessel;
use sea_orm::{sea_query::LikeExpr, ColumnTrait, Condition};

use crate::server::model::params::VesselsSpecificationParams;

use super::Specification;

const LIKE_ESCAPE: char = '!';

/// Escapes `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// Vessels whose name contains the search term, case-insensitively, ordered by name.
///
/// Matches against the stored `name_search` key rather than `LOWER(name)`, which
/// SQLite only applies to ASCII letters.
pub fn vessels_specification(params: &VesselsSpecificationParams) -> Specification<vessel::Entity> {
    let criteria = params.name_search().map(|term| {
        let pattern = format!("%{}%", escape_like(term));
        Condition::all()
            .add(vessel::Column::NameSearch.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)))
    });

    Specification::new()
        .with_criteria(criteria)
        .order_by(vessel::Column::Name)
}
