use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Tip pool is empty")]
    EmptyTipPool,

    #[error("Option list '{0}' is missing the その他 option")]
    MissingOtherOption(String),

    #[error("Duplicate arrangement category: {0}")]
    DuplicateArrangement(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComposeError {
    /// The tip selector has no fallback value, so an empty pool is fatal.
    #[error("Tip pool is empty; the catalog is misconfigured")]
    EmptyTipPool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("At most {max} vegetables may be selected, got {count}")]
    TooManyVegetables { count: usize, max: usize },

    #[error("Vegetable selected more than once: {0}")]
    DuplicateVegetable(String),
}
