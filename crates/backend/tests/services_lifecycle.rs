//! End-to-end run of the services against a throwaway SQLite file.
//!
//! The connection is a process-wide singleton, so everything lives in one test.

use backend::domain::{a001_category, a002_client, a004_vendor, a005_sale};
use backend::projections::{p900_sales_report, p901_expense_report};
use backend::shared::config::parse_config;
use backend::shared::data::db::initialize_database;
use backend::shared::error::ServiceError;
use backend::system::initialization;
use backend::system::users::service as user_service;
use contracts::domain::a001_category::aggregate::CategoryDto;
use contracts::domain::a002_client::aggregate::ClientDto;
use contracts::domain::a004_vendor::aggregate::VendorDto;
use contracts::domain::a005_sale::aggregate::SaleDto;
use contracts::enums::{ExpenseCategory, PaymentMethod, SaleStatus};
use contracts::projections::p900_sales_report::dto::SalesReportRequest;
use contracts::projections::p901_expense_report::dto::ExpenseReportRequest;

async fn vendor_total(name: &str) -> f64 {
    a004_vendor::service::list_all()
        .await
        .unwrap()
        .into_iter()
        .find(|v| v.base.description == name)
        .map(|v| v.total_sales)
        .unwrap()
}

#[tokio::test]
async fn test_dashboard_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    initialize_database(&dir.path().join("tienda.db")).await.unwrap();
    assert!(initialize_database(&dir.path().join("otra.db")).await.is_err());

    // accounts
    initialization::apply_auth_migration().await.unwrap();
    initialization::apply_auth_migration().await.unwrap();
    initialization::ensure_default_users().await.unwrap();
    initialization::ensure_default_users().await.unwrap();

    let admin = user_service::verify_credentials("admin", "admin")
        .await
        .unwrap()
        .unwrap();
    assert!(admin.is_admin);
    let clerk = user_service::verify_credentials("vendedor", "vendedor")
        .await
        .unwrap()
        .unwrap();
    assert!(!clerk.is_admin);
    assert!(user_service::verify_credentials("admin", "wrong")
        .await
        .unwrap()
        .is_none());
    assert!(user_service::verify_credentials("nadie", "admin")
        .await
        .unwrap()
        .is_none());

    // sample data
    let config = parse_config("[database]\npath = \"unused.db\"\n").unwrap();
    initialization::seed_mock_data(&config).await.unwrap();
    initialization::seed_mock_data(&config).await.unwrap();

    // categories: delete guard
    let categories = a001_category::service::list_all().await.unwrap();
    assert_eq!(categories.len(), 5);
    let drinks = categories
        .iter()
        .find(|c| c.base.description == "Bebidas")
        .unwrap();
    assert_eq!(drinks.product_count, 45);
    match a001_category::service::delete(drinks.base.id.value()).await {
        Err(ServiceError::Conflict(msg)) => assert!(msg.contains("Bebidas")),
        other => panic!("expected conflict, got {:?}", other.map(|_| ())),
    }
    assert!(a001_category::service::get_by_id(drinks.base.id.value())
        .await
        .unwrap()
        .is_some());

    let empty = categories.iter().find(|c| c.product_count == 0).unwrap();
    a001_category::service::delete(empty.base.id.value())
        .await
        .unwrap();
    assert_eq!(a001_category::service::list_all().await.unwrap().len(), 4);

    // categories: new record defaults
    let created = a001_category::service::save(CategoryDto {
        name: "  Congelados ".into(),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(created.base.description, "Congelados");
    assert_eq!(created.product_count, 0);
    assert_eq!(created.base.code, "CAT-0006");
    assert!(categories.iter().all(|c| c.base.id != created.base.id));
    a001_category::service::delete(created.base.id.value())
        .await
        .unwrap();
    assert!(matches!(
        a001_category::service::delete(created.base.id.value()).await,
        Err(ServiceError::NotFound(_))
    ));

    // empty submissions
    assert!(matches!(
        a001_category::service::save(CategoryDto::default()).await,
        Err(ServiceError::Validation(_))
    ));
    assert!(matches!(
        a002_client::service::save(ClientDto {
            name: "Sin documento".into(),
            email: "x@y.com".into(),
            ..Default::default()
        })
        .await,
        Err(ServiceError::Validation(_))
    ));

    // edit replaces by id
    let clients = a002_client::service::list_all().await.unwrap();
    let original = clients[0].clone();
    let mut form = ClientDto::from(&original);
    form.phone = Some("300 000 0000".into());
    form.name = format!("{} (editado)", original.base.description);
    let edited = a002_client::service::save(form).await.unwrap();
    assert_eq!(edited.base.id, original.base.id);
    assert_eq!(edited.base.code, original.base.code);
    // no sales under the new name yet
    assert_eq!(edited.total_purchases, 0.0);
    assert_eq!(edited.base.metadata.version, original.base.metadata.version + 1);
    let after = a002_client::service::list_all().await.unwrap();
    assert_eq!(after.len(), clients.len());
    let stored = after.iter().find(|c| c.base.id == original.base.id).unwrap();
    assert!(stored.base.description.ends_with("(editado)"));
    assert_eq!(stored.phone.as_deref(), Some("300 000 0000"));

    let mut back = ClientDto::from(stored);
    back.name = original.base.description.clone();
    let restored = a002_client::service::save(back).await.unwrap();
    assert_eq!(restored.total_purchases, original.total_purchases);

    // codes are never handed out twice
    let taken = a002_client::service::save(ClientDto {
        code: Some(original.base.code.clone()),
        name: "Otro cliente".into(),
        document_id: "123".into(),
        email: "otro@correo.com".into(),
        ..Default::default()
    })
    .await;
    assert!(matches!(taken, Err(ServiceError::Conflict(_))));
    let other = after.iter().find(|c| c.base.id != original.base.id).unwrap();
    let mut steal = ClientDto::from(other);
    steal.code = Some(original.base.code.clone());
    assert!(matches!(
        a002_client::service::save(steal).await,
        Err(ServiceError::Conflict(_))
    ));

    // reports over the sample data
    let sales = p900_sales_report::service::build_report(&SalesReportRequest {
        date_from: Some("2024-03-01".into()),
        date_to: Some("2024-03-05".into()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(sales.items.len(), 3);
    assert_eq!(sales.summary.sales_count, 3);
    assert_eq!(sales.summary.total_amount, 1_333_500.0);

    let expenses = p901_expense_report::service::build_report(&ExpenseReportRequest {
        category: Some(ExpenseCategory::Services),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(expenses.summary.expense_count, 2);
    assert_eq!(expenses.summary.total_amount, 430_000.0);

    // completed sales feed the vendor totals
    assert_eq!(vendor_total("Laura Martínez").await, 1_295_000.0);
    assert_eq!(vendor_total("Diana López").await, 0.0);

    let sale = a005_sale::service::save(SaleDto {
        sale_date: "2024-04-02".into(),
        client_name: "Ana Torres".into(),
        vendor_name: " diana lópez ".into(),
        items_description: "Canasta familiar".into(),
        total: 100_000.0,
        payment_method: PaymentMethod::Card,
        status: SaleStatus::Completed,
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(vendor_total("Diana López").await, 100_000.0);

    let mut cancel = SaleDto::from(&sale);
    cancel.status = SaleStatus::Cancelled;
    a005_sale::service::save(cancel).await.unwrap();
    assert_eq!(vendor_total("Diana López").await, 0.0);

    a005_sale::service::delete(sale.base.id.value()).await.unwrap();
    assert!(a005_sale::service::get_by_id(sale.base.id.value())
        .await
        .unwrap()
        .is_none());

    // people registered after their sales pick up the totals
    a005_sale::service::save(SaleDto {
        sale_date: "2024-04-05".into(),
        client_name: "Tienda La Esquina".into(),
        vendor_name: "Pedro Ruiz".into(),
        items_description: "Pedido de prueba".into(),
        total: 500.0,
        payment_method: PaymentMethod::Cash,
        status: SaleStatus::Completed,
        ..Default::default()
    })
    .await
    .unwrap();

    let vendor = a004_vendor::service::save(VendorDto {
        name: "Pedro Ruiz".into(),
        document_id: "80.123.456".into(),
        email: "pedro.ruiz@tienda.com".into(),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(vendor.total_sales, 500.0);
    assert_eq!(vendor_total("Pedro Ruiz").await, 500.0);

    let client = a002_client::service::save(ClientDto {
        name: "tienda la esquina".into(),
        document_id: "900.111.222-3".into(),
        email: "compras@esquina.com".into(),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(client.total_purchases, 500.0);

    let mut renamed = VendorDto::from(&vendor);
    renamed.name = "Pedro A. Ruiz".into();
    let renamed = a004_vendor::service::save(renamed).await.unwrap();
    assert_eq!(renamed.total_sales, 0.0);
}
