use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{ExpenseCategory, PaymentMethod};
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Unique identifier of an expense (money going out of the store)
    ExpenseId
);

/// Expense entry. `base.description` holds the concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(flatten)]
    pub base: BaseAggregate<ExpenseId>,

    /// YYYY-MM-DD
    pub expense_date: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub responsible: String,
}

impl Expense {
    pub fn new_for_insert(code: String, dto: &ExpenseDto) -> Self {
        let base = BaseAggregate::new(ExpenseId::new_v4(), code, dto.concept.trim().to_string());

        let mut expense = Self {
            base,
            expense_date: String::new(),
            category: ExpenseCategory::default(),
            amount: 0.0,
            payment_method: PaymentMethod::default(),
            responsible: String::new(),
        };
        expense.update(dto);
        expense
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ExpenseDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.concept.trim().to_string();
        self.base.comment = validation::optional_text(&dto.comment);
        self.expense_date = dto.expense_date.trim().to_string();
        self.category = dto.category;
        self.amount = dto.amount;
        self.payment_method = dto.payment_method;
        self.responsible = dto.responsible.trim().to_string();
    }

    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.base.code, "Código")?;
        ExpenseDto::from(self).validate()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for Expense {
    type Id = ExpenseId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "expense"
    }

    fn element_name() -> &'static str {
        "Salida"
    }

    fn list_name() -> &'static str {
        "Salidas"
    }

    fn code_prefix() -> &'static str {
        "SAL"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExpenseDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub expense_date: String,
    pub concept: String,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub amount: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    pub responsible: String,
    pub comment: Option<String>,
}

impl ExpenseDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::iso_date(&self.expense_date, "Fecha")?;
        validation::required(&self.concept, "Concepto")?;
        validation::positive_amount(self.amount, "Monto")?;
        validation::required(&self.responsible, "Responsable")
    }
}

impl From<&Expense> for ExpenseDto {
    fn from(e: &Expense) -> Self {
        Self {
            id: Some(e.to_string_id()),
            code: Some(e.base.code.clone()),
            expense_date: e.expense_date.clone(),
            concept: e.base.description.clone(),
            category: e.category,
            amount: e.amount,
            payment_method: e.payment_method,
            responsible: e.responsible.clone(),
            comment: e.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ExpenseDto {
        ExpenseDto {
            expense_date: "2024-03-01".into(),
            concept: "Pago de energía".into(),
            category: ExpenseCategory::Services,
            amount: 320_000.0,
            payment_method: PaymentMethod::Transfer,
            responsible: "Administración".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_expense() {
        let e = Expense::new_for_insert("SAL-0001".into(), &form());
        assert_eq!(e.base.description, "Pago de energía");
        assert_eq!(e.category, ExpenseCategory::Services);
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        assert!(ExpenseDto::default().validate().is_err());

        let mut f = form();
        f.responsible = String::new();
        assert_eq!(
            f.validate().unwrap_err(),
            "El campo \"Responsable\" es obligatorio"
        );

        let mut f = form();
        f.amount = -10.0;
        assert!(f.validate().unwrap_err().contains("Monto"));
    }

    #[test]
    fn test_edit_keeps_identity() {
        let mut e = Expense::new_for_insert("SAL-0001".into(), &form());
        let id = e.id();
        let mut f = ExpenseDto::from(&e);
        f.amount = 350_000.0;
        e.update(&f);
        assert_eq!(e.id(), id);
        assert_eq!(e.amount, 350_000.0);
        assert_eq!(e.base.code, "SAL-0001");
    }
}
