use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{PaymentMethod, SaleStatus};
use crate::shared::validation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

crate::uuid_id!(
    /// Unique identifier of a sale
    SaleId
);

/// Registered sale. `base.description` holds the sold items summary.
///
/// Client and vendor are kept by name: the sales screens only ever show
/// and filter them as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    #[serde(flatten)]
    pub base: BaseAggregate<SaleId>,

    /// YYYY-MM-DD
    pub sale_date: String,
    pub client_name: String,
    pub vendor_name: String,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub status: SaleStatus,
}

impl Sale {
    pub fn new_for_insert(code: String, dto: &SaleDto) -> Self {
        let base = BaseAggregate::new(SaleId::new_v4(), code, String::new());

        let mut sale = Self {
            base,
            sale_date: String::new(),
            client_name: String::new(),
            vendor_name: String::new(),
            total: 0.0,
            payment_method: PaymentMethod::default(),
            status: SaleStatus::default(),
        };
        sale.update(dto);
        sale
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &SaleDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.items_description.trim().to_string();
        self.base.comment = validation::optional_text(&dto.comment);
        self.sale_date = dto.sale_date.trim().to_string();
        self.client_name = dto.client_name.trim().to_string();
        self.vendor_name = dto.vendor_name.trim().to_string();
        self.total = dto.total;
        self.payment_method = dto.payment_method;
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.base.code, "Código")?;
        SaleDto::from(self).validate()
    }

    /// Only completed sales count towards client and vendor totals
    pub fn counts_towards_totals(&self) -> bool {
        self.status == SaleStatus::Completed && !self.base.metadata.is_deleted
    }

    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for Sale {
    type Id = SaleId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "sale"
    }

    fn element_name() -> &'static str {
        "Venta"
    }

    fn list_name() -> &'static str {
        "Ventas"
    }

    fn code_prefix() -> &'static str {
        "VTA"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SaleDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub sale_date: String,
    pub client_name: String,
    pub vendor_name: String,
    #[serde(default)]
    pub items_description: String,
    pub total: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: SaleStatus,
    pub comment: Option<String>,
}

impl SaleDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::iso_date(&self.sale_date, "Fecha")?;
        validation::required(&self.client_name, "Cliente")?;
        validation::required(&self.vendor_name, "Vendedor")?;
        validation::positive_amount(self.total, "Total")
    }
}

impl From<&Sale> for SaleDto {
    fn from(s: &Sale) -> Self {
        Self {
            id: Some(s.to_string_id()),
            code: Some(s.base.code.clone()),
            sale_date: s.sale_date.clone(),
            client_name: s.client_name.clone(),
            vendor_name: s.vendor_name.clone(),
            items_description: s.base.description.clone(),
            total: s.total,
            payment_method: s.payment_method,
            status: s.status,
            comment: s.base.comment.clone(),
        }
    }
}

/// Key used to match sales against client and vendor names
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Sum of completed sales per name, keyed by [`name_key`]
pub fn completed_totals<'a, F>(
    sales: impl IntoIterator<Item = &'a Sale>,
    name_of: F,
) -> HashMap<String, f64>
where
    F: Fn(&Sale) -> &str,
{
    let mut totals = HashMap::new();
    for sale in sales.into_iter().filter(|s| s.counts_towards_totals()) {
        *totals.entry(name_key(name_of(sale))).or_insert(0.0) += sale.total;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SaleDto {
        SaleDto {
            sale_date: "2024-03-15".into(),
            client_name: "María González".into(),
            vendor_name: "Laura Martínez".into(),
            items_description: "2x Arroz 1kg, 1x Aceite".into(),
            total: 45_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_sale_is_pending() {
        let s = Sale::new_for_insert("VTA-0001".into(), &form());
        assert_eq!(s.status, SaleStatus::Pending);
        assert_eq!(s.payment_method, PaymentMethod::Cash);
        assert!(!s.counts_towards_totals());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_total_must_be_positive() {
        let mut f = form();
        f.total = 0.0;
        assert_eq!(
            f.validate().unwrap_err(),
            "El campo \"Total\" debe ser mayor que cero"
        );
    }

    #[test]
    fn test_empty_submission_rejected() {
        assert!(SaleDto::default().validate().is_err());
        let mut f = form();
        f.vendor_name.clear();
        assert!(f.validate().unwrap_err().contains("Vendedor"));
    }

    #[test]
    fn test_completed_sale_counts() {
        let mut f = form();
        f.status = SaleStatus::Completed;
        let mut s = Sale::new_for_insert("VTA-0002".into(), &f);
        assert!(s.counts_towards_totals());
        s.base.metadata.is_deleted = true;
        assert!(!s.counts_towards_totals());
    }

    #[test]
    fn test_completed_totals_per_vendor() {
        let mut a = form();
        a.status = SaleStatus::Completed;
        let mut b = a.clone();
        b.vendor_name = " laura martínez ".into();
        b.total = 5_000.0;
        let mut c = a.clone();
        c.status = SaleStatus::Cancelled;

        let sales: Vec<Sale> = [a, b, c]
            .iter()
            .map(|f| Sale::new_for_insert("VTA-0000".into(), f))
            .collect();
        let totals = completed_totals(&sales, |s| s.vendor_name.as_str());
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&name_key("Laura Martínez")], 50_000.0);
    }
}
