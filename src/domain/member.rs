use std::fmt;

/// A registered shop member.
#[derive(Clone, PartialEq)]
pub struct Member {
    pub id: String,
    /// Login name, unique across members.
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Set once the member's basket has been opened during join.
    pub basket_id: Option<String>,
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("basket_id", &self.basket_id)
            .finish()
    }
}

/// Payload for the join form.
#[derive(Clone)]
pub struct MemberJoin {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl fmt::Debug for MemberJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberJoin")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Payload for updating an existing member.
#[derive(Clone, Default)]
pub struct MemberPatch {
    pub password: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub basket_id: Option<String>,
}

impl fmt::Debug for MemberPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberPatch")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("basket_id", &self.basket_id)
            .finish()
    }
}

impl MemberJoin {
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}
