/// Explicit auth context for an API client: set on login, cleared on
/// logout, read once per request.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_in(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn log_out(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` header value for the next request, if any.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_set_read_clear() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);

        session.log_in("abc.def.ghi");
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc.def.ghi"));

        session.log_out();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn logging_in_again_replaces_the_token() {
        let mut session = Session::new();
        session.log_in("first");
        session.log_in("second");
        assert_eq!(session.bearer().as_deref(), Some("Bearer second"));
    }
}
