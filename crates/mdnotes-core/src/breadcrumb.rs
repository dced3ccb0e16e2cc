//! Navigation breadcrumbs derived from a logical path.

/// One step of the navigation trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    /// Cumulative path up to and including this segment, with a trailing `/`.
    pub link: String,
}

/// Build the trail for the given path segments, left to right.
///
/// An empty slice is the root and yields no breadcrumbs.
pub fn build_breadcrumbs<S: AsRef<str>>(segments: &[S]) -> Vec<Breadcrumb> {
    let mut link = String::from("/");
    segments
        .iter()
        .map(|segment| {
            let name = segment.as_ref();
            link.push_str(name);
            link.push('/');
            Breadcrumb {
                name: name.to_string(),
                link: link.clone(),
            }
        })
        .collect()
}
