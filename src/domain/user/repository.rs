use async_trait::async_trait;

use super::{CreateUserDto, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Validate, hash the password and insert
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn count_users(&self) -> DomainResult<u64>;
}
