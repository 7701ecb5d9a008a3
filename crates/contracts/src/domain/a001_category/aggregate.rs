use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::RecordStatus;
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Unique identifier of a product category
    CategoryId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product category. `base.description` holds the category name and
/// `base.comment` its free-text description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,

    /// Number of products filed under the category. Maintained by the
    /// inventory side, never edited from the form.
    pub product_count: i32,
    pub status: RecordStatus,
}

impl Category {
    /// New category for insertion: no products yet, status from the form.
    pub fn new_for_insert(code: String, dto: &CategoryDto) -> Self {
        let mut base = BaseAggregate::new(CategoryId::new_v4(), code, dto.name.trim().to_string());
        base.comment = validation::optional_text(&dto.description);

        Self {
            base,
            product_count: 0,
            status: dto.status,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply the editable fields of the form. `product_count` is kept.
    pub fn update(&mut self, dto: &CategoryDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.name.trim().to_string();
        self.base.comment = validation::optional_text(&dto.description);
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.base.code, "Código")?;
        if self.product_count < 0 {
            return Err("La cantidad de productos no puede ser negativa".into());
        }
        CategoryDto::from(self).validate()
    }

    /// A category can only be removed once it has no products left.
    pub fn ensure_can_delete(&self) -> Result<(), String> {
        if self.product_count > 0 {
            return Err(format!(
                "No se puede eliminar la categoría \"{}\": tiene {} producto(s) asociado(s)",
                self.base.description, self.product_count
            ));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Categoría"
    }

    fn list_name() -> &'static str {
        "Categorías"
    }

    fn code_prefix() -> &'static str {
        "CAT"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update form of a category
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.name, "Nombre")
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: Some(c.to_string_id()),
            code: Some(c.base.code.clone()),
            name: c.base.description.clone(),
            description: c.base.comment.clone(),
            status: c.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{remove_by_id, upsert_by_id};

    fn dto(name: &str) -> CategoryDto {
        CategoryDto {
            name: name.to_string(),
            description: Some("Refrescos y jugos".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_category_has_defaults() {
        let a = Category::new_for_insert("CAT-0001".into(), &dto("Bebidas"));
        let b = Category::new_for_insert("CAT-0002".into(), &dto("Lácteos"));
        assert_eq!(a.product_count, 0);
        assert_eq!(a.status, RecordStatus::Active);
        assert_eq!(a.base.description, "Bebidas");
        assert_ne!(a.id(), b.id());
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(dto("").validate().is_err());
        assert!(dto("   ").validate().is_err());
        let mut c = Category::new_for_insert("CAT-0001".into(), &dto("Bebidas"));
        c.base.description.clear();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_update_keeps_product_count() {
        let mut c = Category::new_for_insert("CAT-0001".into(), &dto("Bebidas"));
        c.product_count = 12;
        let mut form = CategoryDto::from(&c);
        form.name = "Bebidas frías".into();
        form.status = RecordStatus::Inactive;
        c.update(&form);
        assert_eq!(c.product_count, 12);
        assert_eq!(c.base.description, "Bebidas frías");
        assert_eq!(c.status, RecordStatus::Inactive);
        assert_eq!(c.base.code, "CAT-0001");
    }

    #[test]
    fn test_delete_guard() {
        let mut c = Category::new_for_insert("CAT-0001".into(), &dto("Bebidas"));
        assert!(c.ensure_can_delete().is_ok());
        c.product_count = 3;
        let err = c.ensure_can_delete().unwrap_err();
        assert!(err.contains("3 producto(s)"));
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let first = Category::new_for_insert("CAT-0001".into(), &dto("Bebidas"));
        let second = Category::new_for_insert("CAT-0002".into(), &dto("Lácteos"));
        let mut items = vec![first.clone(), second.clone()];

        let mut edited = first.clone();
        edited.base.description = "Bebidas y jugos".into();
        assert!(upsert_by_id(&mut items, edited));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].base.description, "Bebidas y jugos");
        assert_eq!(items[1].base.description, "Lácteos");

        let third = Category::new_for_insert("CAT-0003".into(), &dto("Panadería"));
        assert!(!upsert_by_id(&mut items, third));
        assert_eq!(items.len(), 3);

        assert!(remove_by_id(&mut items, &second.id()));
        assert!(!remove_by_id(&mut items, &second.id()));
        assert_eq!(items.len(), 2);
    }
}
