use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwtClaims {
    pub sub: String, // user or service identifier
    pub exp: i64,    // expiration timestamp
    pub iat: i64,    // issued at timestamp
}

/// Who is making the request, resolved once per request by the identification middleware
/// and stored in request extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        subject: String,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn subject(&self) -> Option<&str> {
        match self {
            Session::Authenticated { subject } => Some(subject),
            Session::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.subject(), None);
    }

    #[test]
    fn test_authenticated_session_exposes_subject() {
        let session = Session::Authenticated {
            subject: "reviewer-7".to_string(),
        };
        assert!(session.is_authenticated());
        assert_eq!(session.subject(), Some("reviewer-7"));
    }
}
