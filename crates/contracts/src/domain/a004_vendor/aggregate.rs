use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::RecordStatus;
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Unique identifier of a vendor (salesperson)
    VendorId
);

pub const DEFAULT_COMMISSION_RATE: f64 = 5.0;

/// Salesperson. `base.description` holds the vendor name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(flatten)]
    pub base: BaseAggregate<VendorId>,

    pub document_id: String,
    pub email: String,
    pub phone: Option<String>,
    /// Percent of each sale, 0..=100
    pub commission_rate: f64,
    /// YYYY-MM-DD
    pub hire_date: String,
    pub total_sales: f64,
    pub status: RecordStatus,
}

impl Vendor {
    /// New vendor: no sales yet, hired today unless the form says otherwise.
    pub fn new_for_insert(code: String, dto: &VendorDto) -> Self {
        let base = BaseAggregate::new(VendorId::new_v4(), code, dto.name.trim().to_string());

        let mut vendor = Self {
            base,
            document_id: String::new(),
            email: String::new(),
            phone: None,
            commission_rate: DEFAULT_COMMISSION_RATE,
            hire_date: today(),
            total_sales: 0.0,
            status: RecordStatus::default(),
        };
        vendor.update(dto);
        vendor
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply the editable fields of the form. `total_sales` is kept, a blank
    /// hire date keeps the stored one.
    pub fn update(&mut self, dto: &VendorDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.name.trim().to_string();
        self.base.comment = validation::optional_text(&dto.comment);
        self.document_id = dto.document_id.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.phone = validation::optional_text(&dto.phone);
        self.commission_rate = dto.commission_rate;
        if let Some(date) = validation::optional_text(&dto.hire_date) {
            self.hire_date = date;
        }
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.base.code, "Código")?;
        validation::iso_date(&self.hire_date, "Fecha de ingreso")?;
        VendorDto::from(self).validate()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for Vendor {
    type Id = VendorId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "vendor"
    }

    fn element_name() -> &'static str {
        "Vendedor"
    }

    fn list_name() -> &'static str {
        "Vendedores"
    }

    fn code_prefix() -> &'static str {
        "VEN"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub document_id: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default = "default_commission_rate")]
    pub commission_rate: f64,
    /// Blank means "today" on create
    pub hire_date: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    pub comment: Option<String>,
}

fn default_commission_rate() -> f64 {
    DEFAULT_COMMISSION_RATE
}

impl Default for VendorDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            name: String::new(),
            document_id: String::new(),
            email: String::new(),
            phone: None,
            commission_rate: DEFAULT_COMMISSION_RATE,
            hire_date: None,
            status: RecordStatus::default(),
            comment: None,
        }
    }
}

impl VendorDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.name, "Nombre")?;
        validation::required(&self.document_id, "Documento")?;
        validation::email(&self.email, "Correo")?;
        validation::percent(self.commission_rate, "Comisión (%)")?;
        if let Some(date) = validation::optional_text(&self.hire_date) {
            validation::iso_date(&date, "Fecha de ingreso")?;
        }
        Ok(())
    }
}

impl From<&Vendor> for VendorDto {
    fn from(v: &Vendor) -> Self {
        Self {
            id: Some(v.to_string_id()),
            code: Some(v.base.code.clone()),
            name: v.base.description.clone(),
            document_id: v.document_id.clone(),
            email: v.email.clone(),
            phone: v.phone.clone(),
            commission_rate: v.commission_rate,
            hire_date: Some(v.hire_date.clone()),
            status: v.status,
            comment: v.base.comment.clone(),
        }
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> VendorDto {
        VendorDto {
            name: "Laura Martínez".into(),
            document_id: "1020304050".into(),
            email: "laura@tienda.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_vendor_defaults() {
        let v = Vendor::new_for_insert("VEN-0001".into(), &form());
        assert_eq!(v.total_sales, 0.0);
        assert_eq!(v.commission_rate, DEFAULT_COMMISSION_RATE);
        assert_eq!(v.hire_date, today());
        assert_eq!(v.status, RecordStatus::Active);
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_commission_out_of_range() {
        let mut f = form();
        f.commission_rate = 120.0;
        assert!(f.validate().unwrap_err().contains("entre 0 y 100"));
    }

    #[test]
    fn test_bad_hire_date() {
        let mut f = form();
        f.hire_date = Some("15/03/2024".into());
        assert!(f.validate().is_err());
        f.hire_date = Some("2024-03-15".into());
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_missing_commission_uses_default() {
        let json = r#"{"id":null,"code":null,"name":"Ana","document_id":"1","email":"a@b.co","phone":null,"hire_date":null,"comment":null}"#;
        let dto: VendorDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.commission_rate, DEFAULT_COMMISSION_RATE);
        assert_eq!(dto.status, RecordStatus::Active);
    }

    #[test]
    fn test_update_keeps_total_sales_and_hire_date() {
        let mut v = Vendor::new_for_insert("VEN-0001".into(), &form());
        v.total_sales = 2_500_000.0;
        v.hire_date = "2022-01-10".into();

        let mut f = VendorDto::from(&v);
        f.hire_date = None;
        f.commission_rate = 7.5;
        v.update(&f);

        assert_eq!(v.total_sales, 2_500_000.0);
        assert_eq!(v.hire_date, "2022-01-10");
        assert_eq!(v.commission_rate, 7.5);
    }
}
