//! Directory listing collaborator
//!
//! LIST delegates entry enumeration to a `DirectoryLister`; the protocol
//! core only ever asks for the next entry or end-of-sequence. Real
//! filesystem traversal lives behind this seam, out of the core's scope.

/// Produces directory entries for LIST to render.
pub trait DirectoryLister: Send + Sync {
    /// Lazily enumerate entries under the given root label.
    fn entries<'a>(&'a self, root_label: &str) -> Box<dyn Iterator<Item = String> + 'a>;
}

/// Lister that stands in for real filesystem enumeration: yields a single
/// placeholder line.
pub struct PlaceholderLister;

impl DirectoryLister for PlaceholderLister {
    fn entries<'a>(&'a self, _root_label: &str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(std::iter::once("This would be the file list".to_string()))
    }
}
