//! [`Record`] implementation for the [`User`] domain type.
//!
//! Registration payloads ([`Credentials`]) become users verbatim; there is
//! nothing to validate beyond the JSON shape.

use crate::model::{Credentials, User, UserId};
use record_store::Record;
use std::convert::Infallible;

impl Record for User {
    type Id = UserId;
    type Create = Credentials;
    type Error = Infallible;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_create_params(id: UserId, params: Credentials) -> Result<Self, Infallible> {
        Ok(Self {
            id,
            username: params.username,
            password: params.password,
        })
    }
}
