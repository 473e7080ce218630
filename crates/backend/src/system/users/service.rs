use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{CreateUserDto, User};

use super::repository;
use crate::system::auth::password;

/// Create a new user
pub async fn create(dto: CreateUserDto) -> Result<String> {
    if dto.username.trim().is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::get_by_username_with_hash(&dto.username)
        .await?
        .is_some()
    {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    password::validate_password_strength(&dto.password)?;
    let password_hash = password::hash_password(&dto.password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        username: dto.username,
        full_name: dto.full_name,
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&user, &password_hash).await?;

    Ok(user_id)
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

/// Verify credentials for login
///
/// Returns the user only for an active account with a matching password.
pub async fn verify_credentials(username: &str, password_input: &str) -> Result<Option<User>> {
    let found = repository::get_by_username_with_hash(username).await?;

    let (user, hash) = match found {
        Some(pair) => pair,
        None => return Ok(None),
    };

    if !user.is_active {
        return Ok(None);
    }

    if !password::verify_password(password_input, &hash)? {
        return Ok(None);
    }

    repository::touch_last_login(&user.id, &Utc::now().to_rfc3339()).await?;

    Ok(Some(user))
}
