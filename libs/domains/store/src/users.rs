//! User registration policy on top of the generic collection service.

use tracing::instrument;

use crate::error::{StoreError, StoreResult};
use crate::models::{Registration, User};
use crate::repository::DocumentStore;
use crate::service::{CollectionConfig, CollectionService};

/// User-collection service: the generic access contract plus the
/// at-most-one-user-per-email registration rule.
pub struct UserService<S: DocumentStore<User>> {
    collection: CollectionService<User, S>,
}

impl<S: DocumentStore<User>> UserService<S> {
    pub fn new(store: S, config: CollectionConfig) -> Self {
        Self {
            collection: CollectionService::new(store, config),
        }
    }

    /// Every registered user.
    pub async fn list_all(&self) -> StoreResult<Vec<User>> {
        self.collection.list_all().await
    }

    /// Register a user, at most once per email address.
    ///
    /// Insert-first: uniqueness is enforced by the store's unique email
    /// index, so concurrent registrations cannot both win. A rejected
    /// insert resolves to the document that already holds the address,
    /// reported as a normal outcome rather than an error.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn register(&self, user: User) -> StoreResult<Registration> {
        let email = user.email.clone();

        match self.collection.insert(user).await {
            Ok(outcome) => {
                tracing::info!(inserted_id = %outcome.inserted_id, "User registered");
                Ok(Registration::Created(outcome))
            }
            Err(StoreError::Duplicate(_)) => {
                let existing = self
                    .collection
                    .find_by_field("email", Some(&email))
                    .await?
                    .into_iter()
                    .next();

                match existing {
                    Some(user) => {
                        tracing::info!("Registration matched existing user");
                        Ok(Registration::Existing(user))
                    }
                    // The winning document was deleted between our insert
                    // and the lookup; surface it as a store inconsistency.
                    None => Err(StoreError::Database(format!(
                        "duplicate reported for '{}' but no document found",
                        email
                    ))),
                }
            }
            Err(err) => Err(err),
        }
    }
}

impl<S: DocumentStore<User>> Clone for UserService<S> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
        }
    }
}
