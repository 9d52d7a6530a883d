//! Product service

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::Product;
use crate::ports::ProductRepository;

pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub fn get(&self, id: i32) -> Result<Option<Product>> {
        self.repository.get(id)
    }

    pub fn get_all(&self) -> Result<Vec<Product>> {
        self.repository.get_all()
    }

    /// Products with no units left on hand
    pub fn get_out_of_stock(&self) -> Result<Vec<Product>> {
        Ok(self
            .repository
            .get_all()?
            .into_iter()
            .filter(|p| p.stock <= 0)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::ports::MockProductRepository;

    #[test]
    fn test_get_out_of_stock() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_all().returning(|| {
            Ok(vec![
                Product::new(1, "Melk", Decimal::new(95, 2)).with_stock(300),
                Product::new(4, "Cornflakes", Decimal::new(349, 2)),
            ])
        });
        let service = ProductService::new(Arc::new(repo));

        let empty = service.get_out_of_stock().unwrap();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].model.name, "Cornflakes");
    }
}
