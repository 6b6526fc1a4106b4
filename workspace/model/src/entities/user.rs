use sea_orm::entity::prelude::*;

/// Username given to the implicit account every manuscript is attached to.
pub const DEFAULT_USERNAME: &str = "Smile Artist";

/// Represents a user of the system.
/// There is no authentication yet, so in practice a single default user owns
/// every manuscript.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // A user can own multiple manuscripts.
    #[sea_orm(has_many = "super::manuscript::Entity")]
    Manuscript,
}

impl Related<super::manuscript::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manuscript.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
