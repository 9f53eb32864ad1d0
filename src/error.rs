use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("list index {index} out of range for a board of {len} lists")]
    ListIndexOutOfRange { index: usize, len: usize },

    #[error("card index {index} out of range for list {list} holding {len} cards")]
    CardIndexOutOfRange {
        list: usize,
        index: usize,
        len: usize,
    },

    #[error("card move requires two different lists, got list {0} twice")]
    SameContainerMove(usize),

    #[error("card reorder must stay within one list, got lists {source_list} and {destination_list}")]
    ContainerMismatch {
        source_list: usize,
        destination_list: usize,
    },

    #[error("unknown drag kind '{0}' (expected 'list' or 'card')")]
    InvalidDragKind(String),

    #[error("invalid identifier '{0}'")]
    InvalidId(String),

    #[error("dragged item {0} is no longer on the board")]
    DraggedItemMissing(String),

    #[error("script step {step} failed: {source}")]
    ScriptStep {
        step: usize,
        #[source]
        source: Box<BoardError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
