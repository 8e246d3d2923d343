use super::Api;
use crate::common::auth::{authorize, Operation, Role};
use crate::common::UserId;
use crate::domains::users::actions::{self, EditProfileInput};
use crate::domains::users::errors::UserError;
use crate::domains::users::models::User;

impl Api {
    pub async fn create_account(
        &self,
        token: Option<&str>,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User, UserError> {
        let _ctx = authorize(Operation::CreateAccount, token, &self.resolver).await?;
        actions::create_account(email, password, role, &self.deps).await
    }

    pub async fn login(
        &self,
        token: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<String, UserError> {
        let _ctx = authorize(Operation::Login, token, &self.resolver).await?;
        actions::login(email, password, &self.deps).await
    }

    pub async fn me(&self, token: Option<&str>) -> Result<User, UserError> {
        let ctx = authorize(Operation::Me, token, &self.resolver).await?;
        actions::me(&ctx, &self.deps).await
    }

    pub async fn user_profile(
        &self,
        token: Option<&str>,
        user_id: UserId,
    ) -> Result<User, UserError> {
        let _ctx = authorize(Operation::UserProfile, token, &self.resolver).await?;
        actions::user_profile(user_id, &self.deps).await
    }

    pub async fn edit_profile(
        &self,
        token: Option<&str>,
        input: EditProfileInput,
    ) -> Result<User, UserError> {
        let ctx = authorize(Operation::EditProfile, token, &self.resolver).await?;
        actions::edit_profile(&ctx, input, &self.deps).await
    }

    pub async fn verify_email(&self, token: Option<&str>, code: &str) -> Result<(), UserError> {
        let _ctx = authorize(Operation::VerifyEmail, token, &self.resolver).await?;
        actions::verify_email(code, &self.deps).await
    }
}
