//! Client service - client lookups

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::Client;
use crate::ports::ClientRepository;

/// Client service for lookups by id or email address
pub struct ClientService {
    repository: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub fn get(&self, id: i32) -> Result<Option<Client>> {
        self.repository.get(id)
    }

    pub fn get_all(&self) -> Result<Vec<Client>> {
        self.repository.get_all()
    }

    /// Find a client by email address, ignoring case and surrounding whitespace
    pub fn get_by_email(&self, email: &str) -> Result<Option<Client>> {
        let wanted = email.trim();
        Ok(self
            .repository
            .get_all()?
            .into_iter()
            .find(|c| c.email_address.trim().eq_ignore_ascii_case(wanted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockClientRepository;

    fn clients() -> Vec<Client> {
        vec![
            Client::new(1, "user1", "user1@mail.com", "a.b"),
            Client::new(2, "user2", "User2@Mail.com", "c.d"),
        ]
    }

    #[test]
    fn test_get_by_email_ignores_case() {
        let mut repo = MockClientRepository::new();
        repo.expect_get_all().returning(|| Ok(clients()));
        let service = ClientService::new(Arc::new(repo));

        let found = service.get_by_email(" user2@mail.COM").unwrap().unwrap();
        assert_eq!(found.model.id, 2);
    }

    #[test]
    fn test_get_by_email_unknown() {
        let mut repo = MockClientRepository::new();
        repo.expect_get_all().returning(|| Ok(clients()));
        let service = ClientService::new(Arc::new(repo));

        assert!(service.get_by_email("nobody@mail.com").unwrap().is_none());
    }
}
