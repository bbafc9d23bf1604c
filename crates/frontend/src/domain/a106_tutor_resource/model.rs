use contracts::domain::a106_tutor_resource::aggregate::TutorResource;

use crate::shared::errors::AppError;
use crate::shared::i18n::{tr, Language};
use crate::shared::list_pipeline::{
    count_where, sum_by, FilterContext, Filterable, StatisticsSummary, Summarize,
};
use crate::shared::validation;

pub const FILTER_PUBLIC: &str = "public";
pub const FILTER_PRIVATE: &str = "private";

pub const KINDS: [&str; 4] = ["document", "video", "exercise", "exam"];

/// Filter dropdown values: resource types, then visibility.
pub const FILTERS: [&str; 6] = [
    "document",
    "video",
    "exercise",
    "exam",
    FILTER_PUBLIC,
    FILTER_PRIVATE,
];

pub const PUBLIC: &str = "public";
pub const TOTAL_DOWNLOADS: &str = "totalDownloads";
/// Uploaded during the selected month.
pub const THIS_MONTH: &str = "thisMonth";

impl Filterable for TutorResource {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.subject.as_str()]
    }

    fn filter_value(&self) -> &str {
        &self.kind
    }

    fn scoped_match(&self, key: &str, _ctx: &FilterContext) -> Option<bool> {
        match key {
            FILTER_PUBLIC => Some(self.is_public),
            FILTER_PRIVATE => Some(!self.is_public),
            _ => None,
        }
    }
}

impl Summarize for TutorResource {
    fn summarize(items: &[Self], ctx: &FilterContext) -> StatisticsSummary {
        StatisticsSummary::new(items.len())
            .with_count(PUBLIC, count_where(items, |r| r.is_public))
            .with(TOTAL_DOWNLOADS, sum_by(items, |r| r.downloads as f64))
            .with_count(
                THIS_MONTH,
                count_where(items, |r| ctx.in_selected_month(&r.uploaded_at)),
            )
    }
}

/// Metadata typed next to the file before it is uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceUploadDraft {
    pub title: String,
    pub subject: String,
    pub kind: String,
    pub is_public: bool,
}

impl Default for ResourceUploadDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            subject: String::new(),
            kind: KINDS[0].to_string(),
            is_public: false,
        }
    }
}

impl ResourceUploadDraft {
    /// Multipart fields sent with the file.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.trim().to_string()),
            ("subject", self.subject.trim().to_string()),
            ("type", self.kind.clone()),
            ("isPublic", self.is_public.to_string()),
        ]
    }

    pub fn validate(&self, lang: Language) -> Result<(), AppError> {
        validation::required(&self.title, &tr("resources", "resource_title", lang), lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{filter_entities, FilterState};
    use chrono::NaiveDate;

    fn resource(id: i64, kind: &str, public: bool, downloads: u64, uploaded: &str) -> TutorResource {
        TutorResource {
            id,
            title: format!("Fiche {id}"),
            kind: kind.into(),
            subject: "Français".into(),
            is_public: public,
            downloads,
            uploaded_at: uploaded.into(),
            ..Default::default()
        }
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap())
    }

    fn resources() -> Vec<TutorResource> {
        vec![
            resource(1, "document", true, 12, "2024-03-02T10:00:00Z"),
            resource(2, "video", false, 3, "2024-02-20T10:00:00Z"),
            resource(3, "document", false, 0, "2024-03-10T08:30:00Z"),
        ]
    }

    #[test]
    fn test_visibility_filters() {
        let list = resources();
        let public = filter_entities(&list, &FilterState::new("", FILTER_PUBLIC), &ctx());
        assert_eq!(public.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
        let private = filter_entities(&list, &FilterState::new("", FILTER_PRIVATE), &ctx());
        assert_eq!(private.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3]);
        let documents = filter_entities(&list, &FilterState::new("", "document"), &ctx());
        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn test_summary() {
        let summary = TutorResource::summarize(&resources(), &ctx());
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.get(PUBLIC), 1.0);
        assert_eq!(summary.get(TOTAL_DOWNLOADS), 15.0);
        assert_eq!(summary.get(THIS_MONTH), 2.0);
    }

    #[test]
    fn test_upload_fields() {
        let draft = ResourceUploadDraft {
            title: " Conjugaison ".into(),
            is_public: true,
            ..Default::default()
        };
        assert!(draft.validate(Language::Fr).is_ok());
        let fields = draft.fields();
        assert_eq!(fields[0], ("title", "Conjugaison".to_string()));
        assert_eq!(fields[3], ("isPublic", "true".to_string()));
        assert!(ResourceUploadDraft::default().validate(Language::En).is_err());
    }
}
