use sha2::{Digest, Sha256};

/// Key for the generative backend. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Returns `None` for blank keys
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short stable identifier safe to put in logs
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        let hash = hasher.finalize();
        hex::encode(&hash[..4])
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiCredential({})", self.fingerprint())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImagePart {
    pub const DEFAULT_MIME_TYPE: &'static str = "image/jpeg";

    pub fn new(data: Vec<u8>, mime_type: Option<String>) -> Self {
        let mime_type = mime_type
            .filter(|m| m.starts_with("image/"))
            .unwrap_or_else(|| Self::DEFAULT_MIME_TYPE.to_string());
        Self { data, mime_type }
    }
}
