use crate::ContentKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot append {attempted:?} content to <{tag}> which holds {existing:?} content")]
    ContentTypeConflict {
        tag: String,
        existing: ContentKind,
        attempted: ContentKind,
    },

    #[error("cannot write {}: {source}", .path.display())]
    MissingResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
