#[cfg(test)]
mod tests {
    use super::super::submission::*;
    use rstest::rstest;

    fn draft() -> StorySubmission {
        StorySubmission {
            title: "Solar lights on Ngong Road".to_string(),
            description: "A ward-level retrofit and what it cost.".to_string(),
            category: "Community Impact".to_string(),
            author_name: "P. Kamau".to_string(),
            author_email: "p.kamau@example.com".to_string(),
            transcript: String::new(),
            media: None,
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[rstest]
    #[case("title")]
    #[case("description")]
    #[case("author name")]
    fn test_required_fields(#[case] field: &'static str) {
        let mut submission = draft();
        match field {
            "title" => submission.title = "  ".to_string(),
            "description" => submission.description.clear(),
            _ => submission.author_name.clear(),
        }
        assert_eq!(
            submission.validate(),
            Err(SubmissionError::MissingField { field })
        );
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("@leading.example")]
    #[case("trailing@")]
    fn test_rejects_implausible_emails(#[case] email: &str) {
        let mut submission = draft();
        submission.author_email = email.to_string();
        assert_eq!(submission.validate(), Err(SubmissionError::InvalidEmail));
    }

    #[test]
    fn test_missing_email_reports_missing_not_invalid() {
        let mut submission = draft();
        submission.author_email = "   ".to_string();
        assert_eq!(
            submission.validate(),
            Err(SubmissionError::MissingField { field: "author e-mail" })
        );
    }

    #[rstest]
    #[case("story.mp4", true)]
    #[case("voice-note.M4A", true)]
    #[case("notes.docx", true)]
    #[case("archive.zip", false)]
    #[case("no-extension", false)]
    fn test_media_extension_allow_list(#[case] file_name: &str, #[case] allowed: bool) {
        assert_eq!(is_allowed_media(file_name), allowed);
    }

    #[test]
    fn test_unsupported_media_fails_validation() {
        let mut submission = draft();
        submission.media = Some(MediaAttachment {
            file_name: "malware.exe".to_string(),
            bytes: vec![0; 4],
        });
        assert_eq!(
            submission.validate(),
            Err(SubmissionError::UnsupportedMedia {
                file_name: "malware.exe".to_string()
            })
        );
    }

    #[test]
    fn test_transcript_is_optional() {
        let mut submission = draft();
        submission.transcript = String::new();
        assert_eq!(submission.validate(), Ok(()));
    }
}
