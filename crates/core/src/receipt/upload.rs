//! Receipt upload checks.

use bytes::Bytes;

use super::error::ReceiptError;

/// Receipt image about to be sent to `/upload-ricevuta`.
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    file_name: String,
    content_type: &'static str,
    bytes: Bytes,
}

impl ReceiptUpload {
    /// Largest upload the API accepts (10 MiB).
    pub const MAX_SIZE: u64 = 10 * 1024 * 1024;

    /// Checks the file and infers its content type from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, the content is empty or over
    /// [`Self::MAX_SIZE`], or the extension is not an image type.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Result<Self, ReceiptError> {
        let file_name = file_name.into();
        let bytes = bytes.into();

        if file_name.trim().is_empty() {
            return Err(ReceiptError::MissingFileName);
        }
        if bytes.is_empty() {
            return Err(ReceiptError::EmptyImage);
        }
        let size = bytes.len() as u64;
        if size > Self::MAX_SIZE {
            return Err(ReceiptError::FileTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        let content_type = content_type_for(&file_name)
            .ok_or_else(|| ReceiptError::UnsupportedType(file_name.clone()))?;

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type sent with the multipart part.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Image content.
    #[must_use]
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }
}

fn content_type_for(file_name: &str) -> Option<&'static str> {
    let (_, extension) = file_name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("scontrino.jpg", "image/jpeg")]
    #[case("SCONTRINO.JPEG", "image/jpeg")]
    #[case("receipt.png", "image/png")]
    #[case("photo.heic", "image/heic")]
    fn test_content_type_from_extension(#[case] name: &str, #[case] expected: &str) {
        let upload = ReceiptUpload::new(name, vec![1u8, 2, 3]).unwrap();
        assert_eq!(upload.content_type(), expected);
        assert_eq!(upload.file_name(), name);
    }

    #[test]
    fn test_rejects_blank_name() {
        let err = ReceiptUpload::new("  ", vec![1u8]).unwrap_err();
        assert!(matches!(err, ReceiptError::MissingFileName));
    }

    #[test]
    fn test_rejects_empty_image() {
        let err = ReceiptUpload::new("a.jpg", Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ReceiptError::EmptyImage));
    }

    #[test]
    fn test_rejects_non_image() {
        let err = ReceiptUpload::new("fattura.pdf", vec![1u8]).unwrap_err();
        assert_eq!(err.to_string(), "unsupported file type: fattura.pdf");
    }

    #[test]
    fn test_rejects_oversized() {
        let bytes = vec![0u8; 10 * 1024 * 1024 + 1];
        let err = ReceiptUpload::new("big.png", bytes).unwrap_err();
        assert!(matches!(err, ReceiptError::FileTooLarge { .. }));
    }
}
