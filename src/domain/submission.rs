use thiserror::Error;

/// File extensions the backend accepts for story media.
pub const ALLOWED_MEDIA_EXTENSIONS: [&str; 6] = ["mp4", "mp3", "wav", "m4a", "pdf", "docx"];

/// A story draft as built by the submission form. The server assigns the
/// id and owns the record afterwards; create-only from the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorySubmission {
    pub title: String,
    pub description: String,
    pub category: String,
    pub author_name: String,
    pub author_email: String,
    pub transcript: String,
    pub media: Option<MediaAttachment>,
}

/// A media file selected in the form, already read into memory.
#[derive(Clone, Default, PartialEq)]
pub struct MediaAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for MediaAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaAttachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("author e-mail does not look like an e-mail address")]
    InvalidEmail,
    #[error("unsupported media file: {file_name}")]
    UnsupportedMedia { file_name: String },
}

impl StorySubmission {
    /// Client-side checks mirroring what the backend rejects, so the
    /// form can flag problems before the round trip.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("author name", &self.author_name),
        ] {
            if value.trim().is_empty() {
                return Err(SubmissionError::MissingField { field });
            }
        }
        let email = self.author_email.trim();
        if email.is_empty() {
            return Err(SubmissionError::MissingField {
                field: "author e-mail",
            });
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(SubmissionError::InvalidEmail);
        }
        if let Some(media) = &self.media {
            if !is_allowed_media(&media.file_name) {
                return Err(SubmissionError::UnsupportedMedia {
                    file_name: media.file_name.clone(),
                });
            }
        }
        Ok(())
    }
}

pub fn is_allowed_media(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_MEDIA_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
