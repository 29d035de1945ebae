use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, Set, SqlErr,
};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, User, UserRepositoryInterface, UserRole,
};
use crate::infrastructure::crypto::password::{hash_password, hash_password_with_cost};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
    /// `None` hashes at the bcrypt default cost
    hash_cost: Option<u32>,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            hash_cost: None,
        }
    }

    /// Override the bcrypt work factor
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = Some(cost);
        self
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Employee => UserRole::Employee,
        user::UserRole::Manager => UserRole::Manager,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Employee => user::UserRole::Employee,
        UserRole::Manager => user::UserRole::Manager,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for SeaOrmUserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        dto.check()?;

        let hashed = match self.hash_cost {
            Some(cost) => hash_password_with_cost(&dto.password, cost),
            None => hash_password(&dto.password),
        };
        let password_hash = hashed
            .map_err(|e| DomainError::Database(format!("Failed to hash password: {}", e)))?;

        let now = Utc::now();
        let new_user = user::ActiveModel {
            id: NotSet,
            username: Set(dto.username),
            email: Set(dto.email),
            password_hash: Set(password_hash),
            role: Set(domain_role_to_entity(dto.role)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_user.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::Database(format!("Username or email already exists: {}", e))
            } else {
                db_err(e)
            }
        })?;

        Ok(user_model_to_domain(model))
    }

    async fn count_users(&self) -> DomainResult<u64> {
        user::Entity::find().count(&self.db).await.map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::password::verify_password;
    use crate::infrastructure::database::test_support::memory_db;

    fn dto(username: &str, email: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.to_string(),
            email: email.to_string(),
            password: "s3cret-pass".to_string(),
            role: UserRole::Manager,
        }
    }

    async fn repo() -> SeaOrmUserRepository {
        SeaOrmUserRepository::new(memory_db().await).with_hash_cost(4)
    }

    #[tokio::test]
    async fn create_hashes_password_and_assigns_id() {
        let repo = repo().await;

        let user = repo.create_user(dto("alice", "alice@example.com")).await.unwrap();

        assert!(user.id > 0);
        assert_eq!(user.role, UserRole::Manager);
        assert_ne!(user.password_hash, "s3cret-pass");
        assert!(verify_password("s3cret-pass", &user.password_hash).unwrap());
        assert_eq!(user.username, "alice");
        assert_eq!(repo.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn default_cost_hash_verifies() {
        let repo = SeaOrmUserRepository::new(memory_db().await);

        let user = repo.create_user(dto("carol", "carol@example.com")).await.unwrap();

        assert!(user.password_hash.starts_with(&format!("$2b${}$", bcrypt::DEFAULT_COST)));
        assert!(verify_password("s3cret-pass", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn invalid_user_is_not_persisted() {
        let repo = repo().await;

        let err = repo.create_user(dto("al", "nope")).await.unwrap_err();

        match err {
            DomainError::Validation(v) => {
                assert!(v.has_field("username"));
                assert!(v.has_field("email"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(repo.count_users().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_database_error() {
        let repo = repo().await;
        repo.create_user(dto("alice", "alice@example.com")).await.unwrap();

        let err = repo
            .create_user(dto("alice", "other@example.com"))
            .await
            .unwrap_err();

        match err {
            DomainError::Database(detail) => assert!(detail.contains("already exists"), "{detail}"),
            other => panic!("expected database error, got {other:?}"),
        }
        assert_eq!(repo.count_users().await.unwrap(), 1);
    }
}
