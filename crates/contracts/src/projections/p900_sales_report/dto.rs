use crate::domain::a005_sale::aggregate::Sale;
use crate::enums::{PaymentMethod, SaleStatus};
use crate::projections::{contains_ci, date_in_range};
use serde::{Deserialize, Serialize};

/// Filters of the sales report (query string of `GET /api/reports/sales`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SalesReportRequest {
    #[serde(default)]
    pub date_from: Option<String>, // "YYYY-MM-DD"
    #[serde(default)]
    pub date_to: Option<String>,
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub status: Option<SaleStatus>,
}

impl SalesReportRequest {
    pub fn matches(&self, sale: &Sale) -> bool {
        !sale.base.metadata.is_deleted
            && date_in_range(
                &sale.sale_date,
                self.date_from.as_deref(),
                self.date_to.as_deref(),
            )
            && contains_ci(&sale.vendor_name, self.vendor_name.as_deref())
            && contains_ci(&sale.client_name, self.client_name.as_deref())
            && self.status.map_or(true, |s| sale.status == s)
    }

    /// Linear filter keeping the input order
    pub fn apply<'a>(&self, sales: &'a [Sale]) -> Vec<&'a Sale> {
        sales.iter().filter(|s| self.matches(s)).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethodTotal {
    pub payment_method: PaymentMethod,
    pub sales_count: i32,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorTotal {
    pub vendor_name: String,
    pub sales_count: i32,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SalesReportSummary {
    /// Every listed sale, cancelled ones included
    pub sales_count: i32,
    pub cancelled_count: i32,
    pub total_amount: f64,
    pub average_ticket: f64,
    /// Every payment method, zero rows included
    pub by_payment_method: Vec<PaymentMethodTotal>,
    /// Sorted by amount, highest first
    pub by_vendor: Vec<VendorTotal>,
}

impl SalesReportSummary {
    /// Cancelled sales are listed by the report but left out of the amounts
    pub fn build<'a>(sales: impl IntoIterator<Item = &'a Sale>) -> Self {
        let mut summary = Self {
            by_payment_method: PaymentMethod::all()
                .into_iter()
                .map(|payment_method| PaymentMethodTotal {
                    payment_method,
                    sales_count: 0,
                    total_amount: 0.0,
                })
                .collect(),
            ..Default::default()
        };

        for sale in sales {
            summary.sales_count += 1;
            if sale.status == SaleStatus::Cancelled {
                summary.cancelled_count += 1;
                continue;
            }
            summary.total_amount += sale.total;

            if let Some(row) = summary
                .by_payment_method
                .iter_mut()
                .find(|r| r.payment_method == sale.payment_method)
            {
                row.sales_count += 1;
                row.total_amount += sale.total;
            }

            match summary
                .by_vendor
                .iter_mut()
                .find(|r| r.vendor_name == sale.vendor_name)
            {
                Some(row) => {
                    row.sales_count += 1;
                    row.total_amount += sale.total;
                }
                None => summary.by_vendor.push(VendorTotal {
                    vendor_name: sale.vendor_name.clone(),
                    sales_count: 1,
                    total_amount: sale.total,
                }),
            }
        }

        let effective = summary.sales_count - summary.cancelled_count;
        if effective > 0 {
            summary.average_ticket = summary.total_amount / effective as f64;
        }
        summary.by_vendor.sort_by(|a, b| {
            b.total_amount
                .partial_cmp(&a.total_amount)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        summary
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReportResponse {
    pub items: Vec<Sale>,
    pub summary: SalesReportSummary,
}

impl SalesReportResponse {
    pub fn build(request: &SalesReportRequest, sales: &[Sale]) -> Self {
        let items: Vec<Sale> = request.apply(sales).into_iter().cloned().collect();
        let summary = SalesReportSummary::build(&items);
        Self { items, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_sale::aggregate::SaleDto;

    fn sale(date: &str, client: &str, vendor: &str, total: f64, pm: PaymentMethod, st: SaleStatus) -> Sale {
        Sale::new_for_insert(
            "VTA-0000".into(),
            &SaleDto {
                sale_date: date.into(),
                client_name: client.into(),
                vendor_name: vendor.into(),
                items_description: "varios".into(),
                total,
                payment_method: pm,
                status: st,
                ..Default::default()
            },
        )
    }

    fn sample() -> Vec<Sale> {
        vec![
            sale("2024-03-01", "María González", "Laura Martínez", 100.0, PaymentMethod::Cash, SaleStatus::Completed),
            sale("2024-03-10", "Juan Pérez", "Laura Martínez", 300.0, PaymentMethod::Card, SaleStatus::Completed),
            sale("2024-03-15", "María González", "Andrés Gómez", 50.0, PaymentMethod::Cash, SaleStatus::Pending),
            sale("2024-03-20", "Juan Pérez", "Andrés Gómez", 999.0, PaymentMethod::Transfer, SaleStatus::Cancelled),
            sale("2024-04-02", "Comercial Ruiz", "Laura Martínez", 200.0, PaymentMethod::Transfer, SaleStatus::Completed),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let sales = sample();
        assert_eq!(SalesReportRequest::default().apply(&sales).len(), 5);
    }

    #[test]
    fn test_date_range_and_names() {
        let sales = sample();
        let req = SalesReportRequest {
            date_from: Some("2024-03-01".into()),
            date_to: Some("2024-03-15".into()),
            client_name: Some("maría".into()),
            ..Default::default()
        };
        let found = req.apply(&sales);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|s| s.client_name == "María González"));

        let req = SalesReportRequest {
            vendor_name: Some("GÓMEZ".into()),
            status: Some(SaleStatus::Pending),
            ..Default::default()
        };
        assert_eq!(req.apply(&sales).len(), 1);
    }

    #[test]
    fn test_summary_adds_up() {
        let sales = sample();
        let s = SalesReportSummary::build(&sales);
        assert_eq!(s.sales_count, sales.len() as i32);
        assert_eq!(s.cancelled_count, 1);
        assert_eq!(s.total_amount, 650.0);
        assert_eq!(s.average_ticket, 162.5);

        let per_method: f64 = s.by_payment_method.iter().map(|r| r.total_amount).sum();
        assert_eq!(per_method, s.total_amount);
        assert_eq!(s.by_payment_method.len(), PaymentMethod::all().len());

        assert_eq!(s.by_vendor[0].vendor_name, "Laura Martínez");
        assert_eq!(s.by_vendor[0].total_amount, 600.0);
        assert_eq!(s.by_vendor[0].sales_count, 3);
    }

    #[test]
    fn test_count_matches_listed_rows() {
        let sales = sample();
        let req = SalesReportRequest {
            vendor_name: Some("andrés".into()),
            ..Default::default()
        };
        let resp = SalesReportResponse::build(&req, &sales);
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.summary.sales_count, 2);
        assert_eq!(resp.summary.cancelled_count, 1);
        assert_eq!(resp.summary.total_amount, 50.0);
        assert_eq!(resp.summary.average_ticket, 50.0);
    }

    #[test]
    fn test_summary_of_nothing() {
        let s = SalesReportSummary::build(&Vec::<Sale>::new());
        assert_eq!(s.sales_count, 0);
        assert_eq!(s.average_ticket, 0.0);
        assert!(s.by_vendor.is_empty());
    }

    #[test]
    fn test_response_only_summarizes_filtered_rows() {
        let sales = sample();
        let req = SalesReportRequest {
            date_from: Some("2024-04-01".into()),
            ..Default::default()
        };
        let resp = SalesReportResponse::build(&req, &sales);
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.summary.total_amount, 200.0);
    }
}
