use serde::Serialize;

/// Local user profile row.
/// Either flag set exempts the user from weekly generation quotas.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub premium: bool,
    pub tester: bool,
}

impl UserProfile {
    pub fn is_exempt(&self) -> bool {
        self.premium || self.tester
    }
}
