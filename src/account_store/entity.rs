//! [`ActorEntity`] implementation for [`Account`].

use super::AccountError;
use crate::model::{Account, AccountCreate};
use actor_store::ActorEntity;

impl ActorEntity for Account {
    type Id = String;
    type Create = AccountCreate;
    type Filter = ();
    type Error = AccountError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Rejects blank names. Surrounding whitespace is trimmed.
    fn from_create_params(id: String, params: AccountCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(AccountError::InvalidParameter(
                "name must not be blank".to_string(),
            ));
        }
        Ok(Account::new(id, name))
    }
}
