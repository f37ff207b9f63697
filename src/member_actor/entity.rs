use crate::actor_framework::Entity;
use crate::domain::{Member, MemberJoin, MemberPatch};
use super::error::MemberError;

fn require(field: &str, value: &str) -> Result<(), MemberError> {
    if value.trim().is_empty() {
        return Err(MemberError::ValidationError(format!("{field} required")));
    }
    Ok(())
}

impl Entity for Member {
    const KIND: &'static str = "member";

    type Id = String;
    type CreateParams = MemberJoin;
    type Patch = MemberPatch;
    type Action = ();
    type ActionResult = ();
    type Error = MemberError;

    /// Creates a new Member from the join form.
    ///
    /// # Notes
    /// The basket is opened by the member client right after the member exists.
    fn from_create_params(id: String, params: MemberJoin) -> Result<Self, MemberError> {
        require("user id", &params.user_id)?;
        require("password", &params.password)?;
        require("name", &params.name)?;
        Ok(Self {
            id,
            user_id: params.user_id,
            password: params.password,
            name: params.name,
            phone: params.phone,
            email: params.email,
            basket_id: None,
        })
    }

    /// Updates credentials, contact details or the basket link.
    fn on_update(&mut self, patch: MemberPatch) -> Result<(), MemberError> {
        if let Some(password) = patch.password {
            require("password", &password)?;
            self.password = password;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(basket_id) = patch.basket_id {
            self.basket_id = Some(basket_id);
        }
        Ok(())
    }

    /// Login names are unique.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), MemberError> {
        Ok(())
    }
}
