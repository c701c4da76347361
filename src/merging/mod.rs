pub mod merger;
pub mod walker;

pub use merger::Merger;
pub use walker::ChunkWalker;

/// Extension of the merged documents.
pub const MERGED_EXTENSION: &str = "md";

/// Separator placed between the prompt and the chunk contents.
pub const PROMPT_SEPARATOR: &str = "\n\n";
