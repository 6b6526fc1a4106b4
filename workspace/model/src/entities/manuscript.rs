use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// One submitted piece of writing together with the analysis it received.
/// Rows are append-only: nothing updates or deletes a manuscript.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "manuscript")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Derived from the first 60 characters of `content`.
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Insert time in UTC. History is ordered by this column.
    pub created_at: NaiveDateTime,
    pub user_id: i32,
    /// Mood label taken from the structured feedback, when the model produced one.
    pub sentiment: Option<String>,
    /// Raw model output, stored exactly as received.
    #[sea_orm(column_type = "Text", nullable)]
    pub ai_feedback: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
