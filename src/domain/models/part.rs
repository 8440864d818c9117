use bytes::Bytes;

/// One named field or uploaded file from a multipart body.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub data: Bytes,
    pub filename: Option<String>,
    pub mime_type: Option<String>,
}

impl Part {
    pub fn field(name: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: value.into(),
            filename: None,
            mime_type: None,
        }
    }

    pub fn file(
        name: impl Into<String>,
        data: impl Into<Bytes>,
        filename: Option<String>,
        mime_type: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            filename,
            mime_type,
        }
    }

    /// Field value as text, lossy for non UTF-8 input.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}
