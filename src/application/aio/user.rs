use crate::application::ports::{AsyncCursor, CursorError, Record};
use crate::application::rows::{field, flag, returning_id};
use crate::domain::errors::DomainError;
use crate::infrastructure::query::user;

pub async fn by_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    user_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&user::by_id(user_id)?).await
}

pub async fn by_sso_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    sso_id: &str,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&user::by_sso_id(sso_id)?).await
}

pub async fn by_email(
    cursor: &mut (impl AsyncCursor + ?Sized),
    email: &str,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&user::by_email(email)?).await
}

pub async fn by_sso_id_and_email(
    cursor: &mut (impl AsyncCursor + ?Sized),
    sso_id: &str,
    email: &str,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&user::by_sso_id_and_email(sso_id, email)?).await
}

pub async fn by_api_key(
    cursor: &mut (impl AsyncCursor + ?Sized),
    api_key: &str,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&user::by_api_key(api_key)?).await
}

pub async fn email_exists(
    cursor: &mut (impl AsyncCursor + ?Sized),
    email: &str,
) -> Result<bool, CursorError> {
    flag(cursor.fetch_one(&user::email_exists(email)?).await?, "found")
}

pub async fn sso_id_exists(
    cursor: &mut (impl AsyncCursor + ?Sized),
    sso_id: &str,
) -> Result<bool, CursorError> {
    flag(cursor.fetch_one(&user::sso_id_exists(sso_id)?).await?, "found")
}

pub async fn is_curator_or_higher(
    cursor: &mut (impl AsyncCursor + ?Sized),
    user_id: i64,
) -> Result<bool, CursorError> {
    flag(cursor.fetch_one(&user::is_curator_or_higher(user_id)?).await?, "found")
}

pub async fn is_assigned_curation(
    cursor: &mut (impl AsyncCursor + ?Sized),
    user_id: i64,
    geneset_id: i64,
) -> Result<bool, CursorError> {
    flag(
        cursor.fetch_one(&user::is_assigned_curation(user_id, geneset_id)?).await?,
        "found",
    )
}

pub async fn user_id_from_api_key(
    cursor: &mut (impl AsyncCursor + ?Sized),
    api_key: &str,
) -> Result<Option<i64>, CursorError> {
    let record = cursor.fetch_one(&user::user_id_from_api_key(api_key)?).await?;
    field(record.as_ref(), "usr_id")
}

pub async fn user_id_from_sso_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    sso_id: &str,
) -> Result<Option<i64>, CursorError> {
    let record = cursor.fetch_one(&user::user_id_from_sso_id(sso_id)?).await?;
    field(record.as_ref(), "usr_id")
}

/// Links `sso_id` to an existing user. Fails if another user already holds it;
/// returns `None` if `user_id` does not exist.
pub async fn link_user_id_with_sso_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    user_id: i64,
    sso_id: &str,
) -> Result<Option<i64>, CursorError> {
    if sso_id_exists(cursor, sso_id).await? {
        tracing::warn!(user_id, "SSO id already linked, refusing to relink");
        return Err(DomainError::SsoIdAlreadyLinked(sso_id.to_string()).into());
    }
    let record = cursor.fetch_one(&user::link_user_id_with_sso_id(user_id, sso_id)?).await?;
    field(record.as_ref(), "usr_id")
}

pub async fn create_sso_user(
    cursor: &mut (impl AsyncCursor + ?Sized),
    name: &str,
    email: &str,
    sso_id: &str,
) -> Result<i64, CursorError> {
    returning_id(
        cursor.fetch_one(&user::create_sso_user(name, email, sso_id)?).await?,
        "usr_id",
    )
}
