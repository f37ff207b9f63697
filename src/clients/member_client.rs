use tracing::{debug, error, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::BasketClient;
use crate::domain::{Member, MemberJoin, MemberPatch};
use crate::member_actor::MemberError;

/// Client for interacting with the Member actor.
///
/// Owns the join flow, which also opens the member's basket.
#[derive(Clone)]
pub struct MemberClient {
    inner: ResourceClient<Member>,
    basket_client: BasketClient,
}

impl_client_methods!(MemberClient, Member, MemberError, member, members);

impl MemberClient {
    pub fn new(inner: ResourceClient<Member>, basket_client: BasketClient) -> Self {
        Self { inner, basket_client }
    }

    /// Registers a member and opens their basket.
    ///
    /// # Errors
    /// `AlreadyExists` when the user id is taken, `Basket` when the basket cannot be
    /// opened. Nothing is kept in either case.
    #[instrument(skip(self, params), fields(user_id = %params.user_id))]
    pub async fn join(&self, params: MemberJoin) -> Result<Member, MemberError> {
        debug!("Sending request");
        let member_id = self.inner.create(params).await.map_err(|e| {
            warn!(error = %e, "Join rejected");
            MemberError::from(e)
        })?;

        let basket_id = match self.basket_client.create_basket(member_id.clone()).await {
            Ok(basket_id) => basket_id,
            Err(e) => {
                error!(member_id = %member_id, error = %e, "Basket creation failed, removing member");
                if let Err(delete_err) = self.inner.delete(member_id.clone()).await {
                    error!(member_id = %member_id, error = %delete_err, "Member rollback failed");
                }
                return Err(MemberError::Basket(e.to_string()));
            }
        };

        let patch = MemberPatch { basket_id: Some(basket_id), ..Default::default() };
        let member = self.inner.update(member_id, patch).await?;
        info!(member_id = %member.id, basket_id = ?member.basket_id, "Member joined");
        Ok(member)
    }

    /// Returns the member when the credentials match, `None` otherwise.
    #[instrument(skip(self, password))]
    pub async fn login(&self, user_id: String, password: String) -> Result<Option<Member>, MemberError> {
        debug!("Sending request");
        let found = self
            .inner
            .find(move |member: &Member| member.user_id == user_id && member.password == password)
            .await?;
        match found.into_iter().next() {
            Some(member) => {
                info!(member_id = %member.id, "Login accepted");
                Ok(Some(member))
            }
            None => {
                warn!("Login rejected");
                Ok(None)
            }
        }
    }

    /// Finds the member a forgotten user id belongs to.
    #[instrument(skip(self))]
    pub async fn find_id(&self, name: String, email: String) -> Result<Option<Member>, MemberError> {
        debug!("Sending request");
        let found = self
            .inner
            .find(move |member: &Member| member.name == name && member.email == email)
            .await?;
        Ok(found.into_iter().next())
    }

    /// Confirms who is resetting a password before the change form is shown.
    #[instrument(skip(self))]
    pub async fn find_for_password_reset(&self, user_id: String, name: String) -> Result<Option<Member>, MemberError> {
        debug!("Sending request");
        self.find_by_user_id_and_name(user_id, name).await
    }

    /// Replaces the password of the member identified by user id and name.
    ///
    /// # Errors
    /// `PasswordMismatch` when the confirmation differs, `NotFound` when no member matches.
    #[instrument(skip(self, password, check_password))]
    pub async fn change_password(
        &self,
        user_id: String,
        name: String,
        password: String,
        check_password: String,
    ) -> Result<Member, MemberError> {
        debug!("Sending request");
        if password != check_password {
            warn!("Password confirmation mismatch");
            return Err(MemberError::PasswordMismatch);
        }
        let member = self
            .find_by_user_id_and_name(user_id.clone(), name)
            .await?
            .ok_or(MemberError::NotFound(user_id))?;

        let patch = MemberPatch { password: Some(password), ..Default::default() };
        let member = self.inner.update(member.id, patch).await?;
        info!(member_id = %member.id, "Password changed");
        Ok(member)
    }

    async fn find_by_user_id_and_name(&self, user_id: String, name: String) -> Result<Option<Member>, MemberError> {
        let found = self
            .inner
            .find(move |member: &Member| member.user_id == user_id && member.name == name)
            .await?;
        Ok(found.into_iter().next())
    }
}
