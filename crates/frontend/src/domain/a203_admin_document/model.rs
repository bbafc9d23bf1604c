use contracts::domain::a203_admin_document::aggregate::{AdminDocument, CATEGORIES};

use crate::shared::date_utils::format_date;
use crate::shared::export::ExportColumn;
use crate::shared::list_pipeline::{
    count_where, sum_by, FilterContext, Filterable, StatisticsSummary, Summarize,
};

pub const TOTAL_DOWNLOADS: &str = "totalDownloads";

impl Filterable for AdminDocument {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }

    fn filter_value(&self) -> &str {
        &self.category
    }
}

/// Totals plus one count per entry of `CATEGORIES`, keyed by the category name.
impl Summarize for AdminDocument {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        CATEGORIES.iter().fold(
            StatisticsSummary::new(items.len())
                .with(TOTAL_DOWNLOADS, sum_by(items, |d| d.downloads as f64)),
            |summary, category| {
                summary.with_count(*category, count_where(items, |d| d.category == *category))
            },
        )
    }
}

/// Upload form fields besides the file itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentUploadDraft {
    pub category: String,
    pub description: String,
}

impl Default for DocumentUploadDraft {
    fn default() -> Self {
        Self {
            category: CATEGORIES[0].to_string(),
            description: String::new(),
        }
    }
}

impl DocumentUploadDraft {
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("category", self.category.clone()),
            ("description", self.description.trim().to_string()),
        ]
    }
}

pub fn export_columns(headers: [String; 6]) -> Vec<ExportColumn<AdminDocument>> {
    let [name, kind, category, size, uploaded_by, updated] = headers;
    vec![
        ExportColumn::new(name, |d| d.name.clone()),
        ExportColumn::new(kind, |d| d.kind.clone()),
        ExportColumn::new(category, |d| d.category.clone()),
        ExportColumn::new(size, |d| d.size.clone()),
        ExportColumn::new(uploaded_by, |d| d.uploaded_by.clone()),
        ExportColumn::new(updated, |d| format_date(&d.updated_at)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::to_csv;
    use crate::shared::list_pipeline::{filter_entities, FilterState};
    use chrono::NaiveDate;

    fn document(id: i64, name: &str, category: &str, downloads: u64) -> AdminDocument {
        AdminDocument {
            id,
            name: name.into(),
            kind: "PDF".into(),
            category: category.into(),
            size: "2.4 MB".into(),
            uploaded_by: "Marie Ngono".into(),
            updated_at: "2024-01-20T14:30:00Z".into(),
            downloads,
            ..Default::default()
        }
    }

    fn documents() -> Vec<AdminDocument> {
        vec![
            document(1, "Contrat de service EDUCAFRIC", "Contrats", 45),
            document(2, "Rapport financier Q4 2024", "Finances", 23),
            document(3, "Politique de confidentialité", "Légal", 67),
            document(4, "Avenant contrat Douala", "Contrats", 5),
        ]
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
    }

    #[test]
    fn test_search_matches_category_text() {
        let found = filter_entities(&documents(), &FilterState::new("finan", "all"), &ctx());
        assert_eq!(found.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_category_filter() {
        let found = filter_entities(&documents(), &FilterState::new("", "Contrats"), &ctx());
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_per_category_counts() {
        let summary = AdminDocument::summarize(&documents(), &ctx());
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.get(TOTAL_DOWNLOADS), 140.0);
        assert_eq!(summary.get("Contrats"), 2.0);
        assert_eq!(summary.get("Légal"), 1.0);
        assert_eq!(summary.get("Divers"), 0.0);
    }

    #[test]
    fn test_export_row() {
        let headers = ["Nom", "Type", "Catégorie", "Taille", "Auteur", "Modifié"].map(String::from);
        let csv = to_csv(&documents()[..1], &export_columns(headers));
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "Contrat de service EDUCAFRIC;PDF;Contrats;2.4 MB;Marie Ngono;20/01/2024");
    }
}
