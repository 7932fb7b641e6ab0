//! Profile repository.
//!
//! Profiles come into being lazily: the first read or write for a user
//! upserts the row, so callers never need existence checks of their own.
//! Every mutating operation runs in a single transaction and is rolled
//! back whole on failure.

use crate::{DbError, Result as DbErrorResult};

use prok_core::{Profile, ProfileUpdate};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query(
            r#"
                SELECT id, user_id, full_name, bio, location, headline,
                    experience, education, skills, website, image_url
                FROM profiles
                WHERE user_id = ?
            "#,
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| profile_from_row(&r)).transpose()
    }

    /// Idempotent get-or-create: the first call creates the row with the
    /// given display name, repeated calls return the same single row.
    pub async fn get_or_create(
        &self,
        user_id: Uuid,
        default_full_name: &str,
    ) -> DbErrorResult<Profile> {
        let mut tx = self.pool.begin().await?;

        insert_missing(&mut tx, user_id, default_full_name).await?;
        let profile = fetch_required(&mut tx, user_id).await?;

        tx.commit().await?;

        Ok(profile)
    }

    /// Apply a partial field update atomically and return the new state.
    ///
    /// A missing profile is created first (empty display-name
    /// placeholder) before the transforms apply.
    pub async fn update_fields(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> DbErrorResult<Profile> {
        let mut tx = self.pool.begin().await?;

        insert_missing(&mut tx, user_id, "").await?;
        let mut profile = fetch_required(&mut tx, user_id).await?;
        profile.apply(update);
        persist(&mut tx, &profile).await?;

        tx.commit().await?;

        Ok(profile)
    }

    /// Commit an image reference, creating the profile if absent.
    pub async fn set_image_url(
        &self,
        user_id: Uuid,
        default_full_name: &str,
        image_url: &str,
    ) -> DbErrorResult<Profile> {
        let mut tx = self.pool.begin().await?;

        insert_missing(&mut tx, user_id, default_full_name).await?;
        sqlx::query("UPDATE profiles SET image_url = ? WHERE user_id = ?")
            .bind(image_url)
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await?;
        let profile = fetch_required(&mut tx, user_id).await?;

        tx.commit().await?;

        Ok(profile)
    }
}

async fn insert_missing(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: Uuid,
    full_name: &str,
) -> DbErrorResult<()> {
    sqlx::query("INSERT OR IGNORE INTO profiles (id, user_id, full_name) VALUES (?, ?, ?)")
        .bind(Uuid::new_v4().to_string())
        .bind(user_id.to_string())
        .bind(full_name)
        .execute(&mut **tx)
        .await?;

    Ok(())
}

async fn fetch_required(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: Uuid,
) -> DbErrorResult<Profile> {
    let row = sqlx::query(
        r#"
            SELECT id, user_id, full_name, bio, location, headline,
                experience, education, skills, website, image_url
            FROM profiles
            WHERE user_id = ?
        "#,
    )
    .bind(user_id.to_string())
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| DbError::Corrupt {
        message: format!("profile row missing after upsert for user {user_id}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    profile_from_row(&row)
}

async fn persist(tx: &mut Transaction<'_, Sqlite>, profile: &Profile) -> DbErrorResult<()> {
    sqlx::query(
        r#"
            UPDATE profiles
            SET full_name = ?, bio = ?, location = ?, headline = ?,
                experience = ?, education = ?, skills = ?, website = ?,
                image_url = ?
            WHERE user_id = ?
        "#,
    )
    .bind(&profile.full_name)
    .bind(&profile.bio)
    .bind(&profile.location)
    .bind(&profile.headline)
    .bind(&profile.experience)
    .bind(&profile.education)
    .bind(&profile.skills)
    .bind(&profile.website)
    .bind(&profile.image_url)
    .bind(profile.user_id.to_string())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

fn profile_from_row(row: &SqliteRow) -> DbErrorResult<Profile> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;

    Ok(Profile {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Corrupt {
            message: format!("Invalid UUID in profiles.id: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?,
        user_id: Uuid::parse_str(&user_id).map_err(|e| DbError::Corrupt {
            message: format!("Invalid UUID in profiles.user_id: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?,
        full_name: row.try_get("full_name")?,
        bio: row.try_get("bio")?,
        location: row.try_get("location")?,
        headline: row.try_get("headline")?,
        experience: row.try_get("experience")?,
        education: row.try_get("education")?,
        skills: row.try_get("skills")?,
        website: row.try_get("website")?,
        image_url: row.try_get("image_url")?,
    })
}
