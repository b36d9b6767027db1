use contracts::system::auth::{GoogleAuthRecord, JwtAuthRecord, GOOGLE_AUTH_KEY, JWT_AUTH_KEY};

use super::storage::AuthRecordSource;
use crate::domain::orders::error::OrderHistoryError;

/// Whichever sign-in provider left a record behind
#[derive(Debug, Clone, PartialEq)]
pub enum AuthRecord {
    Google(GoogleAuthRecord),
    Jwt(JwtAuthRecord),
}

impl AuthRecord {
    pub fn bearer(&self) -> &str {
        match self {
            AuthRecord::Google(record) => &record.token,
            AuthRecord::Jwt(record) => record.token.bearer(),
        }
    }
}

/// Look up the persisted auth record.
///
/// A Google record takes precedence; the JWT record is only consulted when
/// there is no Google record at all, even if the Google one is unreadable.
/// An empty stored value counts as no record.
pub fn load_auth_record<S>(source: &S) -> Result<AuthRecord, OrderHistoryError>
where
    S: AuthRecordSource + ?Sized,
{
    if let Some(raw) = source.read(GOOGLE_AUTH_KEY).filter(|raw| !raw.is_empty()) {
        return serde_json::from_str::<GoogleAuthRecord>(&raw)
            .map(AuthRecord::Google)
            .map_err(|e| {
                log::warn!("Unreadable '{}' auth record: {}", GOOGLE_AUTH_KEY, e);
                OrderHistoryError::AuthenticationRequired
            });
    }

    if let Some(raw) = source.read(JWT_AUTH_KEY).filter(|raw| !raw.is_empty()) {
        return serde_json::from_str::<JwtAuthRecord>(&raw)
            .map(AuthRecord::Jwt)
            .map_err(|e| {
                log::warn!("Unreadable '{}' auth record: {}", JWT_AUTH_KEY, e);
                OrderHistoryError::AuthenticationRequired
            });
    }

    Err(OrderHistoryError::AuthenticationRequired)
}

/// Resolve the value for the `Authorization` header
pub fn resolve_token<S>(source: &S) -> Result<String, OrderHistoryError>
where
    S: AuthRecordSource + ?Sized,
{
    let record = load_auth_record(source)?;
    let token = record.bearer().trim();
    if token.is_empty() {
        return Err(OrderHistoryError::AuthenticationRequired);
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::memory::MemoryStorage;

    #[test]
    fn test_google_token() {
        let storage = MemoryStorage::default().with("google", r#"{"token":"g-1"}"#);
        assert_eq!(resolve_token(&storage).unwrap(), "g-1");
    }

    #[test]
    fn test_jwt_nested_token() {
        let storage = MemoryStorage::default().with("jwt", r#"{"token":{"token":"abc"}}"#);
        assert_eq!(resolve_token(&storage).unwrap(), "abc");
    }

    #[test]
    fn test_jwt_direct_token() {
        let storage = MemoryStorage::default().with("jwt", r#"{"token":"abc"}"#);
        assert_eq!(resolve_token(&storage).unwrap(), "abc");
    }

    #[test]
    fn test_google_wins_over_jwt() {
        let storage = MemoryStorage::default()
            .with("google", r#"{"token":"g-1"}"#)
            .with("jwt", r#"{"token":"abc"}"#);
        assert_eq!(resolve_token(&storage).unwrap(), "g-1");
        assert!(matches!(
            load_auth_record(&storage).unwrap(),
            AuthRecord::Google(_)
        ));
    }

    #[test]
    fn test_broken_google_record_does_not_fall_through() {
        let storage = MemoryStorage::default()
            .with("google", "not json")
            .with("jwt", r#"{"token":"abc"}"#);
        assert_eq!(
            resolve_token(&storage),
            Err(OrderHistoryError::AuthenticationRequired)
        );
    }

    #[test]
    fn test_empty_google_record_falls_through_to_jwt() {
        let storage = MemoryStorage::default()
            .with("google", "")
            .with("jwt", r#"{"token":"abc"}"#);
        assert_eq!(resolve_token(&storage).unwrap(), "abc");
    }

    #[test]
    fn test_empty_records() {
        let storage = MemoryStorage::default().with("google", "").with("jwt", "");
        assert_eq!(
            resolve_token(&storage),
            Err(OrderHistoryError::AuthenticationRequired)
        );
    }

    #[test]
    fn test_no_records() {
        assert_eq!(
            resolve_token(&MemoryStorage::default()),
            Err(OrderHistoryError::AuthenticationRequired)
        );
    }

    #[test]
    fn test_blank_token() {
        let storage = MemoryStorage::default().with("jwt", r#"{"token":{"token":""}}"#);
        assert_eq!(
            resolve_token(&storage),
            Err(OrderHistoryError::AuthenticationRequired)
        );
    }
}
