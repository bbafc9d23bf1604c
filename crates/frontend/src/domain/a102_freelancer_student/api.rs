use contracts::domain::a102_freelancer_student::aggregate::CreateStudentDto;

use crate::shared::query::MutationRequest;

pub const STUDENTS: &str = "freelancer/students";

pub fn create_student(dto: &CreateStudentDto) -> MutationRequest {
    MutationRequest::create(STUDENTS, dto)
}

pub fn delete_student(id: i64) -> MutationRequest {
    MutationRequest::delete(STUDENTS, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_delete_does_not_block_create_form() {
        let blank = create_student(&CreateStudentDto::default());
        let filled = create_student(&CreateStudentDto {
            first_name: "Awa".into(),
            ..Default::default()
        });
        assert_eq!(blank.pending_token(), filled.pending_token());
        assert_ne!(blank.pending_token(), delete_student(1).pending_token());
    }
}
