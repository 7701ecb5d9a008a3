use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{ClientType, RecordStatus};
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Unique identifier of a client
    ClientId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Store client. `base.description` holds the client name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseAggregate<ClientId>,

    pub document_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub client_type: ClientType,
    pub status: RecordStatus,

    /// Accumulated amount of completed sales
    pub total_purchases: f64,
}

impl Client {
    pub fn new_for_insert(code: String, dto: &ClientDto) -> Self {
        let base = BaseAggregate::new(ClientId::new_v4(), code, dto.name.trim().to_string());

        let mut client = Self {
            base,
            document_id: String::new(),
            email: String::new(),
            phone: None,
            address: None,
            client_type: ClientType::default(),
            status: RecordStatus::default(),
            total_purchases: 0.0,
        };
        client.update(dto);
        client
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply the editable fields of the form. `total_purchases` is kept.
    pub fn update(&mut self, dto: &ClientDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.name.trim().to_string();
        self.base.comment = validation::optional_text(&dto.comment);
        self.document_id = dto.document_id.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.phone = validation::optional_text(&dto.phone);
        self.address = validation::optional_text(&dto.address);
        self.client_type = dto.client_type;
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.base.code, "Código")?;
        ClientDto::from(self).validate()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }

    fn code_prefix() -> &'static str {
        "CLI"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub document_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub client_type: ClientType,
    #[serde(default)]
    pub status: RecordStatus,
    pub comment: Option<String>,
}

impl ClientDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.name, "Nombre")?;
        validation::required(&self.document_id, "Documento")?;
        validation::email(&self.email, "Correo")
    }
}

impl From<&Client> for ClientDto {
    fn from(c: &Client) -> Self {
        Self {
            id: Some(c.to_string_id()),
            code: Some(c.base.code.clone()),
            name: c.base.description.clone(),
            document_id: c.document_id.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
            client_type: c.client_type,
            status: c.status,
            comment: c.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ClientDto {
        ClientDto {
            name: "María González".into(),
            document_id: "12345678".into(),
            email: "maria@correo.com".into(),
            phone: Some("  ".into()),
            client_type: ClientType::Person,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_client_defaults() {
        let c = Client::new_for_insert("CLI-0001".into(), &form());
        assert_eq!(c.total_purchases, 0.0);
        assert_eq!(c.status, RecordStatus::Active);
        assert_eq!(c.phone, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut f = form();
        f.document_id = String::new();
        assert_eq!(
            f.validate().unwrap_err(),
            "El campo \"Documento\" es obligatorio"
        );

        let mut f = form();
        f.email = "maria-correo.com".into();
        assert!(f.validate().is_err());

        assert!(ClientDto::default().validate().is_err());
    }

    #[test]
    fn test_update_keeps_purchases() {
        let mut c = Client::new_for_insert("CLI-0001".into(), &form());
        c.total_purchases = 1500.0;
        let id = c.id();

        let mut f = ClientDto::from(&c);
        f.client_type = ClientType::Company;
        f.name = "González SAS".into();
        c.update(&f);

        assert_eq!(c.id(), id);
        assert_eq!(c.total_purchases, 1500.0);
        assert_eq!(c.client_type, ClientType::Company);
        assert_eq!(c.base.description, "González SAS");
    }
}
