//! SeaORM entity modules for the manuscript history store.
//! Two tables: `user`, which owns manuscripts, and `manuscript`, which
//! keeps every analyzed submission.

pub mod manuscript;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::manuscript::Entity as Manuscript;
    pub use super::user::Entity as User;
}
