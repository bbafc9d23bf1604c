use std::cmp::Ordering;

use contracts::domain::a104_freelancer_payment::aggregate::{
    FreelancerPayment, STATUS_CANCELLED, STATUS_OVERDUE, STATUS_PAID, STATUS_PENDING,
};

use crate::shared::date_utils::format_date;
use crate::shared::export::ExportColumn;
use crate::shared::list_pipeline::{
    count_where, sum_by, FilterContext, Filterable, StatisticsSummary, Summarize,
};
use crate::shared::list_utils::{compare_number, compare_text, Sortable};

pub const FILTER_THIS_MONTH: &str = "thisMonth";

pub const FILTERS: [&str; 5] = [
    FILTER_THIS_MONTH,
    STATUS_PAID,
    STATUS_PENDING,
    STATUS_OVERDUE,
    STATUS_CANCELLED,
];

/// Sum of every invoice, whatever its status.
pub const TOTAL_AMOUNT: &str = "totalAmount";
/// Sum of paid invoices.
pub const TOTAL_REVENUE: &str = "totalRevenue";
pub const THIS_MONTH_REVENUE: &str = "thisMonthRevenue";
pub const PENDING_COUNT: &str = "pendingCount";
pub const OVERDUE_COUNT: &str = "overdueCount";

impl Filterable for FreelancerPayment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_name.as_str(),
            self.invoice_number.as_str(),
            self.description.as_str(),
        ]
    }

    fn filter_value(&self) -> &str {
        &self.status
    }

    fn scoped_match(&self, key: &str, ctx: &FilterContext) -> Option<bool> {
        (key == FILTER_THIS_MONTH).then(|| ctx.in_selected_month(&self.date))
    }
}

impl Summarize for FreelancerPayment {
    fn summarize(items: &[Self], ctx: &FilterContext) -> StatisticsSummary {
        let paid = |p: &FreelancerPayment| p.status == STATUS_PAID;
        StatisticsSummary::new(items.len())
            .with(TOTAL_AMOUNT, sum_by(items, |p| p.amount))
            .with(
                TOTAL_REVENUE,
                sum_by(items, |p| if paid(p) { p.amount } else { 0.0 }),
            )
            .with(
                THIS_MONTH_REVENUE,
                sum_by(items, |p| {
                    if paid(p) && ctx.in_selected_month(&p.date) {
                        p.amount
                    } else {
                        0.0
                    }
                }),
            )
            .with_count(PENDING_COUNT, count_where(items, |p| p.status == STATUS_PENDING))
            .with_count(OVERDUE_COUNT, count_where(items, |p| p.status == STATUS_OVERDUE))
    }
}

impl Sortable for FreelancerPayment {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => self.date.cmp(&other.date),
            "amount" => compare_number(self.amount, other.amount),
            "client" => compare_text(&self.client_name, &other.client_name),
            _ => Ordering::Equal,
        }
    }
}

/// Reminders only make sense for invoices still awaiting payment.
pub fn can_remind(payment: &FreelancerPayment) -> bool {
    payment.status == STATUS_PENDING || payment.status == STATUS_OVERDUE
}

/// Columns of the CSV export, headers in the current language.
pub fn export_columns(headers: [String; 7]) -> Vec<ExportColumn<FreelancerPayment>> {
    let [invoice, client, date, description, amount, method, status] = headers;
    vec![
        ExportColumn::new(invoice, |p| p.invoice_number.clone()),
        ExportColumn::new(client, |p| p.client_name.clone()),
        ExportColumn::new(date, |p| format_date(&p.date)),
        ExportColumn::new(description, |p| p.description.clone()),
        ExportColumn::new(amount, |p| format!("{:.0}", p.amount)),
        ExportColumn::new(method, |p| p.method.clone()),
        ExportColumn::new(status, |p| p.status.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::to_csv;
    use crate::shared::list_pipeline::{filter_entities, FilterState};
    use chrono::NaiveDate;

    fn payment(id: i64, status: &str, amount: f64, date: &str) -> FreelancerPayment {
        FreelancerPayment {
            id,
            amount,
            status: status.into(),
            date: date.into(),
            client_name: format!("Famille {id}"),
            invoice_number: format!("INV-2024-{id:03}"),
            ..Default::default()
        }
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap())
    }

    #[test]
    fn test_pending_filter_and_totals() {
        let list = vec![
            payment(1, STATUS_PENDING, 1000.0, "2024-03-02"),
            payment(2, STATUS_PAID, 2000.0, "2024-03-05"),
        ];
        let pending = filter_entities(&list, &FilterState::new("", STATUS_PENDING), &ctx());
        assert_eq!(pending, vec![list[0].clone()]);

        let summary = FreelancerPayment::summarize(&list, &ctx());
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.get(PENDING_COUNT), 1.0);
        assert_eq!(summary.get(TOTAL_AMOUNT), 3000.0);
        assert_eq!(summary.get(TOTAL_REVENUE), 2000.0);
    }

    #[test]
    fn test_month_scope_follows_the_selected_month() {
        let list = vec![
            payment(1, STATUS_PAID, 500.0, "2024-02-28"),
            payment(2, STATUS_PAID, 700.0, "2024-03-01"),
            payment(3, STATUS_OVERDUE, 900.0, "2024-03-09"),
        ];
        let march = ctx();
        let summary = FreelancerPayment::summarize(&list, &march);
        assert_eq!(summary.get(THIS_MONTH_REVENUE), 700.0);
        assert_eq!(summary.get(OVERDUE_COUNT), 1.0);

        let february = ctx().with_month("2024-02");
        let visible = filter_entities(&list, &FilterState::new("", FILTER_THIS_MONTH), &february);
        assert_eq!(visible.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(
            FreelancerPayment::summarize(&list, &february).get(THIS_MONTH_REVENUE),
            500.0
        );
    }

    #[test]
    fn test_empty_list_summary() {
        let summary = FreelancerPayment::summarize(&[], &ctx());
        assert!(summary.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_search_by_invoice_number() {
        let list = vec![
            payment(1, STATUS_PAID, 500.0, "2024-03-01"),
            payment(12, STATUS_PAID, 700.0, "2024-03-01"),
        ];
        let found = filter_entities(&list, &FilterState::new("inv-2024-012", "all"), &ctx());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 12);
    }

    #[test]
    fn test_export_rows() {
        let headers = ["N°", "Client", "Date", "Objet", "Montant", "Moyen", "Statut"].map(String::from);
        let csv = to_csv(&[payment(3, STATUS_PENDING, 15000.0, "2024-03-04")], &export_columns(headers));
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("INV-2024-003;Famille 3;04/03/2024;"));
        assert!(row.ends_with(";15000;;pending"));
    }

    #[test]
    fn test_reminders_only_for_unpaid() {
        assert!(can_remind(&payment(1, STATUS_PENDING, 1.0, "2024-03-01")));
        assert!(can_remind(&payment(1, STATUS_OVERDUE, 1.0, "2024-03-01")));
        assert!(!can_remind(&payment(1, STATUS_PAID, 1.0, "2024-03-01")));
    }
}
