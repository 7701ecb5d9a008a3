use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::RecordStatus;
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Unique identifier of a supplier
    SupplierId
);

/// Merchandise supplier. `base.description` holds the company name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(flatten)]
    pub base: BaseAggregate<SupplierId>,

    pub tax_id: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Free text, e.g. "Bebidas"
    pub supplied_category: Option<String>,
    pub status: RecordStatus,
}

impl Supplier {
    pub fn new_for_insert(code: String, dto: &SupplierDto) -> Self {
        let base = BaseAggregate::new(
            SupplierId::new_v4(),
            code,
            dto.company_name.trim().to_string(),
        );

        let mut supplier = Self {
            base,
            tax_id: String::new(),
            contact_name: String::new(),
            email: String::new(),
            phone: None,
            address: None,
            supplied_category: None,
            status: RecordStatus::default(),
        };
        supplier.update(dto);
        supplier
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &SupplierDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.company_name.trim().to_string();
        self.base.comment = validation::optional_text(&dto.comment);
        self.tax_id = dto.tax_id.trim().to_string();
        self.contact_name = dto.contact_name.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.phone = validation::optional_text(&dto.phone);
        self.address = validation::optional_text(&dto.address);
        self.supplied_category = validation::optional_text(&dto.supplied_category);
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.base.code, "Código")?;
        SupplierDto::from(self).validate()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }

    fn code_prefix() -> &'static str {
        "PRV"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SupplierDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub company_name: String,
    pub tax_id: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub supplied_category: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    pub comment: Option<String>,
}

impl SupplierDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.company_name, "Empresa")?;
        validation::required(&self.tax_id, "NIT / RUC")?;
        validation::required(&self.contact_name, "Contacto")?;
        validation::email(&self.email, "Correo")
    }
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        Self {
            id: Some(s.to_string_id()),
            code: Some(s.base.code.clone()),
            company_name: s.base.description.clone(),
            tax_id: s.tax_id.clone(),
            contact_name: s.contact_name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            address: s.address.clone(),
            supplied_category: s.supplied_category.clone(),
            status: s.status,
            comment: s.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SupplierDto {
        SupplierDto {
            company_name: "Distribuidora Andina".into(),
            tax_id: "900123456-7".into(),
            contact_name: "Carlos Pérez".into(),
            email: "ventas@andina.com".into(),
            supplied_category: Some("Bebidas".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields_in_order() {
        assert_eq!(
            SupplierDto::default().validate().unwrap_err(),
            "El campo \"Empresa\" es obligatorio"
        );
        let mut f = form();
        f.contact_name = " ".into();
        assert_eq!(
            f.validate().unwrap_err(),
            "El campo \"Contacto\" es obligatorio"
        );
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_new_supplier() {
        let s = Supplier::new_for_insert("PRV-0001".into(), &form());
        assert_eq!(s.status, RecordStatus::Active);
        assert_eq!(s.base.description, "Distribuidora Andina");
        assert_eq!(s.base.metadata.version, 0);
        assert!(s.validate().is_ok());
    }
}
