use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename {} -> {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn messages_leave_os_error_to_source() {
        let err = Error::ReadDir {
            path: PathBuf::from("docs/notes"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to read directory docs/notes");
        assert_eq!(err.source().map(|s| s.to_string()), Some("denied".to_string()));

        let err = Error::Rename {
            from: PathBuf::from("a .md"),
            to: PathBuf::from("a.md"),
            source: io::Error::new(io::ErrorKind::Other, "busy"),
        };
        assert_eq!(err.to_string(), "Failed to rename a .md -> a.md");
    }
}
