//! Persistence operations behind the analysis history feed.

use chrono::Utc;
use common::derive_title;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
};
use tracing::{debug, info, instrument, trace};

use crate::entities::prelude::*;
use crate::entities::{manuscript, user};

/// Maximum number of manuscripts returned by the history feed.
pub const HISTORY_LIMIT: u64 = 10;

/// A manuscript about to be stored.
#[derive(Debug, Clone)]
pub struct NewManuscript {
    /// Submitted content, already trimmed.
    pub content: String,
    /// Raw model output.
    pub ai_feedback: String,
    /// Mood label from the parsed feedback, if any.
    pub sentiment: Option<String>,
}

/// Returns the user manuscripts are attached to, creating the default user on
/// first use.
///
/// The first existing user (lowest id) wins. When the table is empty the
/// default user is inserted with `ON CONFLICT (username) DO NOTHING` and read
/// back, so concurrent first calls all converge on the same single row instead
/// of failing on the unique constraint.
#[instrument(skip(db))]
pub async fn ensure_default_user(db: &DatabaseConnection) -> Result<user::Model, DbErr> {
    trace!("Entering ensure_default_user function");

    if let Some(existing) = first_user(db).await? {
        debug!("Using existing user {} ({})", existing.id, existing.username);
        return Ok(existing);
    }

    debug!("No users found, creating default user '{}'", user::DEFAULT_USERNAME);
    let candidate = user::ActiveModel {
        username: Set(user::DEFAULT_USERNAME.to_string()),
        ..Default::default()
    };
    let inserted = User::insert(candidate)
        .on_conflict(
            OnConflict::column(user::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    if inserted > 0 {
        info!("Created default user '{}'", user::DEFAULT_USERNAME);
    } else {
        debug!("Default user was created concurrently, reusing it");
    }

    first_user(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("default user".to_string()))
}

/// Stores an analyzed manuscript under the default user.
///
/// The title is derived from the content and `created_at` is stamped here.
#[instrument(skip(db, submission), fields(content_chars = submission.content.chars().count()))]
pub async fn record_manuscript(
    db: &DatabaseConnection,
    submission: NewManuscript,
) -> Result<manuscript::Model, DbErr> {
    trace!("Entering record_manuscript function");
    let owner = ensure_default_user(db).await?;

    let title = derive_title(&submission.content);
    debug!("Derived manuscript title: {}", title);

    let entry = manuscript::ActiveModel {
        title: Set(title),
        content: Set(submission.content),
        created_at: Set(Utc::now().naive_utc()),
        user_id: Set(owner.id),
        sentiment: Set(submission.sentiment),
        ai_feedback: Set(Some(submission.ai_feedback)),
        ..Default::default()
    };

    let stored = entry.insert(db).await?;
    info!("Stored manuscript {} for user {}", stored.id, owner.id);
    Ok(stored)
}

/// Returns up to `limit` manuscripts, newest first.
///
/// Rows stored within the same clock tick are ordered by id so insertion order
/// is preserved.
#[instrument(skip(db))]
pub async fn recent_manuscripts(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<manuscript::Model>, DbErr> {
    trace!("Entering recent_manuscripts function");
    let manuscripts = Manuscript::find()
        .order_by_desc(manuscript::Column::CreatedAt)
        .order_by_desc(manuscript::Column::Id)
        .limit(limit)
        .all(db)
        .await?;
    debug!("Retrieved {} manuscripts", manuscripts.len());
    Ok(manuscripts)
}

async fn first_user(db: &DatabaseConnection) -> Result<Option<user::Model>, DbErr> {
    User::find().order_by_asc(user::Column::Id).one(db).await
}
