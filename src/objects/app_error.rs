use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, PartialEq)]
pub struct AppError {
    pub description: String,
}

impl Error for AppError {}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.description))
    }
}

impl From<wasm_bindgen::JsValue> for AppError {
    fn from(val: wasm_bindgen::JsValue) -> Self {
        Self {
            description: val.as_string().unwrap_or_else(|| format!("{:?}", val)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            description: format!("malformed ticket feed: {}", err),
        }
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl From<num_format::Error> for AppError {
    fn from(err: num_format::Error) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl From<&str> for AppError {
    fn from(str: &str) -> Self {
        Self {
            description: String::from(str),
        }
    }
}

impl From<String> for AppError {
    fn from(description: String) -> Self {
        Self { description }
    }
}
