use std::fmt;

pub type InfoResult<T> = Result<T, InfoError>;

#[derive(Debug)]
pub struct InfoError {
    pub msg: String,
    pub code: u8,
}

impl InfoError {
    pub fn new<M: Into<String>>(m: M, code: u8) -> Self {
        Self {
            msg: m.into(),
            code,
        }
    }
}

impl fmt::Display for InfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.msg, self.code)
    }
}

impl From<std::io::Error> for InfoError {
    fn from(err: std::io::Error) -> Self {
        InfoError::new(format!("IO error: {}", err), 1)
    }
}
