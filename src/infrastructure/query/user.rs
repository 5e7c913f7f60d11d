//! Queries against the `usr` table.

use once_cell::sync::Lazy;

use super::error::QueryError;
use super::fields::USER_FIELDS;
use super::select::SelectQuery;
use super::statement::{Params, Statement};

pub(crate) const CURATOR_OR_HIGHER_CLAUSE: &str =
    "EXISTS(SELECT 1 FROM usr WHERE usr_id = %(user_id)s AND usr_admin > 0)";

pub(crate) const ASSIGNED_CURATION_CLAUSE: &str = "EXISTS(SELECT 1 FROM curation_assignments \
    WHERE curator = %(user_id)s AND gs_id = %(geneset_id)s AND curation_state = 2)";

const CREATE_SSO_USER: &str = "INSERT INTO usr \
    (usr_first_name, usr_last_name, usr_email, usr_admin, usr_sso_id, \
    usr_last_seen, usr_created, is_guest) \
    VALUES (%(first_name)s, %(last_name)s, %(email)s, 0, %(sso_id)s, NOW(), NOW(), FALSE) \
    RETURNING usr_id";

static USER_QUERY: Lazy<String> = Lazy::new(|| {
    SelectQuery::from_table("usr")
        .columns(USER_FIELDS.iter().cloned())
        .render()
});

fn user_where(condition: &str, params: Params) -> Result<Statement, QueryError> {
    Statement::new(format!("{} WHERE {}", *USER_QUERY, condition), params)
}

pub fn by_id(user_id: i64) -> Result<Statement, QueryError> {
    user_where("usr_id = %(user_id)s", Params::new().with("user_id", user_id)?)
}

pub fn by_sso_id(sso_id: &str) -> Result<Statement, QueryError> {
    user_where("usr_sso_id = %(sso_id)s", Params::new().with("sso_id", sso_id)?)
}

pub fn by_email(email: &str) -> Result<Statement, QueryError> {
    user_where("usr_email = %(email)s", Params::new().with("email", email)?)
}

pub fn by_sso_id_and_email(sso_id: &str, email: &str) -> Result<Statement, QueryError> {
    user_where(
        "usr_sso_id = %(sso_id)s AND usr_email = %(email)s",
        Params::new().with("sso_id", sso_id)?.with("email", email)?,
    )
}

pub fn by_api_key(api_key: &str) -> Result<Statement, QueryError> {
    user_where("apikey = %(api_key)s", Params::new().with("api_key", api_key)?)
}

pub fn email_exists(email: &str) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT EXISTS(SELECT 1 FROM usr WHERE usr_email = %(email)s) AS found",
        Params::new().with("email", email)?,
    )
}

pub fn sso_id_exists(sso_id: &str) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT EXISTS(SELECT 1 FROM usr WHERE usr_sso_id = %(sso_id)s) AS found",
        Params::new().with("sso_id", sso_id)?,
    )
}

pub fn is_curator_or_higher(user_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        format!("SELECT {} AS found", CURATOR_OR_HIGHER_CLAUSE),
        Params::new().with("user_id", user_id)?,
    )
}

pub fn is_assigned_curation(user_id: i64, geneset_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        format!("SELECT {} AS found", ASSIGNED_CURATION_CLAUSE),
        Params::new()
            .with("user_id", user_id)?
            .with("geneset_id", geneset_id)?,
    )
}

pub fn user_id_from_api_key(api_key: &str) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT usr_id FROM production.usr WHERE apikey = %(api_key)s",
        Params::new().with("api_key", api_key)?,
    )
}

pub fn user_id_from_sso_id(sso_id: &str) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT usr_id FROM production.usr WHERE usr_sso_id = %(sso_id)s",
        Params::new().with("sso_id", sso_id)?,
    )
}

pub fn link_user_id_with_sso_id(user_id: i64, sso_id: &str) -> Result<Statement, QueryError> {
    Statement::new(
        "UPDATE usr SET usr_sso_id = %(sso_id)s WHERE usr_id = %(user_id)s RETURNING usr_id",
        Params::new()
            .with("sso_id", sso_id)?
            .with("user_id", user_id)?,
    )
}

/// Inserts a non-admin, non-guest user. The first word of `name` becomes the
/// first name, the rest the last name; the email is stored lowercased.
pub fn create_sso_user(name: &str, email: &str, sso_id: &str) -> Result<Statement, QueryError> {
    let (first_name, last_name) = name.split_once(' ').unwrap_or((name, ""));
    let params = Params::new()
        .with("first_name", first_name)?
        .with("last_name", last_name)?
        .with("email", email.to_lowercase())?
        .with("sso_id", sso_id)?;
    Statement::new(CREATE_SSO_USER, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::query::statement::SqlValue;

    #[test]
    fn test_by_sso_id_uses_matching_placeholder() {
        let statement = by_sso_id("auth0|123").unwrap();
        assert!(statement.sql().ends_with("WHERE usr_sso_id = %(sso_id)s"));
        assert!(statement.sql().starts_with("SELECT usr.usr_id AS id"));
        assert!(statement.sql().contains("FROM usr"));
    }

    #[test]
    fn test_create_sso_user_splits_name() {
        let statement = create_sso_user("Ada King Lovelace", "Ada@Example.org", "sso").unwrap();
        let params = statement.params();
        assert_eq!(
            params.get("first_name"),
            Some(&SqlValue::Text("Ada".into()))
        );
        assert_eq!(
            params.get("last_name"),
            Some(&SqlValue::Text("King Lovelace".into()))
        );
        assert_eq!(
            params.get("email"),
            Some(&SqlValue::Text("ada@example.org".into()))
        );
    }

    #[test]
    fn test_create_sso_user_single_word_name() {
        let statement = create_sso_user("Cher", "cher@example.org", "sso").unwrap();
        assert_eq!(
            statement.params().get("last_name"),
            Some(&SqlValue::Text(String::new()))
        );
    }

    #[test]
    fn test_exists_queries() {
        assert!(email_exists("a@b.c").unwrap().sql().starts_with("SELECT EXISTS("));
        assert_eq!(is_assigned_curation(1, 2).unwrap().params().len(), 2);
        assert_eq!(is_curator_or_higher(1).unwrap().params().len(), 1);
    }
}
