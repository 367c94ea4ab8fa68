use serde::de::IgnoredAny;
use serde::Serialize;

use super::{id_path, EasyPostClient};
use crate::context::RequestContext;
use crate::error::Result;
use crate::types::{Brand, User, UserOptions};

#[derive(Serialize)]
struct UserRequest<'a> {
    user: &'a UserOptions,
}

#[derive(Serialize)]
struct BrandRequest<'a> {
    brand: &'a Brand,
}

impl EasyPostClient {
    /// POST /users - Create a child user under the authenticated account.
    pub async fn create_user(&self, ctx: &RequestContext, options: &UserOptions) -> Result<User> {
        self.post(ctx, "users", &UserRequest { user: options }).await
    }

    /// GET /users/{id}
    pub async fn get_user(&self, ctx: &RequestContext, user_id: &str) -> Result<User> {
        self.get(ctx, &id_path("users", user_id, None)?, &[]).await
    }

    /// GET /users - The authenticated user, with its children.
    pub async fn retrieve_me(&self, ctx: &RequestContext) -> Result<User> {
        self.get(ctx, "users", &[]).await
    }

    /// PUT /users/{id} - Change the set fields of `options`.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        user_id: &str,
        options: &UserOptions,
    ) -> Result<User> {
        self.put(ctx, &id_path("users", user_id, None)?, &UserRequest { user: options })
            .await
    }

    /// PATCH /users/{id}/brand
    pub async fn update_brand(
        &self,
        ctx: &RequestContext,
        user_id: &str,
        brand: &Brand,
    ) -> Result<Brand> {
        self.patch(ctx, &id_path("users", user_id, Some("brand"))?, &BrandRequest { brand })
            .await
    }

    /// DELETE /users/{id} - Remove a child user.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: &str) -> Result<()> {
        let _: IgnoredAny = self.delete(ctx, &id_path("users", user_id, None)?).await?;
        Ok(())
    }
}
