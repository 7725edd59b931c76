use crate::product::{Product, ProductDraft, ProductFilter, ProductPatch};

/// The in-memory product collection. Insertion order is preserved; ids are
/// unique and assigned by the catalog itself.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(u64),
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self { products: Vec::new() }
    }

    /// The demo catalog the service boots with, mirroring the reference data set.
    pub fn with_demo_products() -> Self {
        Self {
            products: vec![
                Product {
                    id: 1,
                    name: "Croquetas para perro".to_string(),
                    price: 25.0,
                    category: "alimento".to_string(),
                    stock: 50,
                },
                Product {
                    id: 2,
                    name: "Pelota con sonido".to_string(),
                    price: 10.5,
                    category: "juguetes".to_string(),
                    stock: 30,
                },
                Product {
                    id: 3,
                    name: "Collar de cuero".to_string(),
                    price: 15.0,
                    category: "accesorios".to_string(),
                    stock: 20,
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// List products matching the filter, in insertion order. An empty result
    /// is not an error.
    pub fn list(&self, filter: &ProductFilter) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    /// Fetch a product by id.
    pub fn get(&self, id: u64) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    /// Create a product from a draft. The new id is one past the current
    /// maximum (1 when the catalog is empty); freed ids below the maximum are
    /// never handed out again.
    pub fn create(&mut self, draft: ProductDraft) -> Product {
        let id = self.next_id();
        let product = Product {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
            stock: draft.stock,
        };
        self.products.push(product.clone());
        tracing::debug!(id, total = self.products.len(), "product created");
        product
    }

    /// Overwrite every mutable field of an existing product.
    pub fn replace(&mut self, id: u64, draft: ProductDraft) -> Result<Product, CatalogError> {
        let product = self.get_mut(id)?;
        product.name = draft.name;
        product.price = draft.price;
        product.category = draft.category;
        product.stock = draft.stock;
        Ok(product.clone())
    }

    /// Overwrite only the fields present in the patch.
    pub fn apply_patch(&mut self, id: u64, patch: ProductPatch) -> Result<Product, CatalogError> {
        let product = self.get_mut(id)?;
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        Ok(product.clone())
    }

    /// Remove a product by id.
    pub fn remove(&mut self, id: u64) -> Result<(), CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        self.products.remove(index);
        tracing::debug!(id, total = self.products.len(), "product removed");
        Ok(())
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Product, CatalogError> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    fn next_id(&self) -> u64 {
        self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}
