//! Auth service - credential checks

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::Client;
use crate::ports::ClientRepository;

use super::client::ClientService;
use super::password::verify_password;

/// Authenticates clients by email address and password
pub struct AuthService {
    clients: ClientService,
}

impl AuthService {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self {
            clients: ClientService::new(repository),
        }
    }

    /// Return the client when the password matches its stored hash
    ///
    /// Unknown emails and wrong passwords both give `Ok(None)`.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<Client>> {
        let Some(client) = self.clients.get_by_email(email)? else {
            tracing::debug!("login rejected");
            return Ok(None);
        };

        if verify_password(password, &client.password) {
            tracing::debug!(client_id = client.model.id, "login accepted");
            Ok(Some(client))
        } else {
            tracing::debug!("login rejected");
            Ok(None)
        }
    }
}
