use std::collections::HashMap;

/// Gates access to the session with a static credential table, injected at
/// construction. One check at startup; a failed check ends the session.
pub struct Authenticator {
    credentials: HashMap<String, String>,
}

impl Authenticator {
    pub fn new(credentials: HashMap<String, String>) -> Self {
        Authenticator { credentials }
    }

    /// True iff the table holds `account_number` and its stored PIN equals
    /// `pin` exactly. Case-sensitive, no normalization, no lockout.
    pub fn authenticate(&self, account_number: &str, pin: &str) -> bool {
        self.credentials
            .get(account_number)
            .is_some_and(|stored| stored == pin)
    }
}
