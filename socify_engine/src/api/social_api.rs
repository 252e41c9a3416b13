use std::{collections::HashMap, fmt::Debug};

use log::*;

use crate::{
    api::{errors::SocialApiError, user_objects::AddUserRequest},
    db_types::{NewUser, User, UserSummary},
    helpers::{hash_password, is_valid_email, normalize_email, ValidationErrors},
    traits::{SocialGraphManagement, UserProfile},
};

/// `SocialApi` manages user accounts and the follow relation between them.
///
/// Users are addressed by email. Emails are trimmed and lower-cased before every lookup.
pub struct SocialApi<B> {
    db: B,
}

impl<B> Debug for SocialApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SocialApi")
    }
}

impl<B> SocialApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> SocialApi<B>
where B: SocialGraphManagement
{
    /// Creates a new user with no followers. The password is stored as an Argon2 hash.
    pub async fn add_user(&self, request: AddUserRequest) -> Result<User, SocialApiError> {
        let valid = request.validate()?;
        if self.db.fetch_user_by_username_or_email(&valid.username, &valid.email).await?.is_some() {
            debug!("💻️ User {} or {} already exists", valid.username, valid.email);
            return Err(SocialApiError::UserAlreadyExists);
        }
        let password_hash = hash_password(&valid.password)?;
        let user = self.db.insert_user(NewUser::new(valid.username, valid.email, password_hash)).await?;
        info!("🔄️👤️ New user #{} ({})", user.id, user.username);
        Ok(user)
    }

    /// Every user, along with the ids of their followers and of the users they follow.
    pub async fn all_users(&self) -> Result<Vec<UserProfile>, SocialApiError> {
        let users = self.db.fetch_users().await?;
        let follows = self.db.fetch_follows().await?;
        let mut followers = HashMap::<i64, Vec<i64>>::new();
        let mut following = HashMap::<i64, Vec<i64>>::new();
        for f in follows {
            followers.entry(f.followed_id).or_default().push(f.follower_id);
            following.entry(f.follower_id).or_default().push(f.followed_id);
        }
        let profiles = users
            .into_iter()
            .map(|u| UserProfile {
                followers: followers.remove(&u.id).unwrap_or_default(),
                following: following.remove(&u.id).unwrap_or_default(),
                id: u.id,
                username: u.username,
                email: u.email,
            })
            .collect();
        Ok(profiles)
    }

    /// `follower_email` starts following `followed_email`.
    ///
    /// Returns [`SocialApiError::AlreadyFollowing`] if the relation already exists, and a validation error if a user
    /// tries to follow themselves.
    pub async fn follow(&self, follower_email: &str, followed_email: &str) -> Result<(), SocialApiError> {
        let (follower, followed) = self.resolve_pair(follower_email, followed_email).await?;
        if !self.db.insert_follow(follower.id, followed.id).await? {
            return Err(SocialApiError::AlreadyFollowing);
        }
        info!("🔄️👤️ {} now follows {}", follower.username, followed.username);
        Ok(())
    }

    /// `follower_email` stops following `followed_email`. Unfollowing a user that is not followed is not an error.
    ///
    /// Returns whether a relation was actually removed.
    pub async fn unfollow(&self, follower_email: &str, followed_email: &str) -> Result<bool, SocialApiError> {
        let (follower, followed) = self.resolve_pair(follower_email, followed_email).await?;
        let removed = self.db.remove_follow(follower.id, followed.id).await?;
        if removed {
            info!("🔄️👤️ {} no longer follows {}", follower.username, followed.username);
        } else {
            debug!("🔄️👤️ {} did not follow {}. Nothing to do.", follower.username, followed.username);
        }
        Ok(removed)
    }

    /// The users that follow the user with the given email.
    pub async fn followers(&self, email: &str) -> Result<Vec<UserSummary>, SocialApiError> {
        let user = self.user_by_email(email).await?;
        let users = self.db.fetch_followers(user.id).await?;
        Ok(users)
    }

    /// The users that the user with the given email follows.
    pub async fn following(&self, email: &str) -> Result<Vec<UserSummary>, SocialApiError> {
        let user = self.user_by_email(email).await?;
        let users = self.db.fetch_following(user.id).await?;
        Ok(users)
    }

    async fn user_by_email(&self, email: &str) -> Result<User, SocialApiError> {
        let email = normalize_email(email);
        self.db.fetch_user_by_email(&email).await?.ok_or(SocialApiError::UserNotFound(email))
    }

    async fn resolve_pair(&self, follower_email: &str, followed_email: &str) -> Result<(User, User), SocialApiError> {
        let follower_email = normalize_email(follower_email);
        let followed_email = normalize_email(followed_email);
        let mut errors = ValidationErrors::new();
        errors.check(is_valid_email(&follower_email), "followerEmail", "Invalid email");
        errors.check(follower_email != followed_email, "followerEmail", "You cannot follow yourself");
        errors.into_result()?;
        let follower = self.user_by_email(&follower_email).await?;
        let followed = self.user_by_email(&followed_email).await?;
        Ok((follower, followed))
    }
}
