use contracts::domain::a205_admin_message::aggregate::SendMessageDto;

use crate::shared::query::MutationRequest;

pub const COMMUNICATIONS: &str = "admin/communications";
pub const CONVERSATIONS: &str = "admin/communications/conversations";

/// `POST admin/communications/send`; refreshes everything under communications.
pub fn send_message(dto: &SendMessageDto) -> MutationRequest {
    MutationRequest::action(COMMUNICATIONS, None, "send").with_payload(dto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::QueryKey;

    #[test]
    fn test_sending_refreshes_conversations() {
        let dto = SendMessageDto {
            audience: "teachers".into(),
            message: "Bonjour".into(),
            priority: "normal".into(),
            timestamp: "2024-05-02T08:00:00+00:00".into(),
        };
        let request = send_message(&dto);
        assert_eq!(request.path(), "admin/communications/send");
        let invalidated = request.invalidated_resources();
        assert!(QueryKey::bare(CONVERSATIONS).belongs_to(&invalidated[0]));
    }
}
