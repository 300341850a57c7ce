use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("GET {path} returned an unexpected body: {source}")]
    Shape {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn transport(path: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            path: path.to_string(),
            source,
        }
    }

    pub fn status(path: &str, status: u16) -> Self {
        Self::Status {
            path: path.to_string(),
            status,
        }
    }

    pub fn shape(path: &str, source: reqwest::Error) -> Self {
        Self::Shape {
            path: path.to_string(),
            source,
        }
    }
}
