use crate::shared::query::MutationRequest;

pub const DOCUMENTS: &str = "admin/documents";

pub fn delete_document(id: i64) -> MutationRequest {
    MutationRequest::delete(DOCUMENTS, id)
}
