use std::fmt;

/// Position of a snapshot in the usage tree: format, year, month, day.
///
/// Segments are positional, so a year can only follow a format and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UsagePath {
    segments: Vec<String>,
}

impl UsagePath {
    pub const MAX_DEPTH: usize = 4;

    /// The root of the tree, whose subsections are the formats
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from leading segments, `None` when there are more than four
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        (segments.len() <= Self::MAX_DEPTH).then_some(Self { segments })
    }

    /// Extend the path by one level, `None` below the day level
    pub fn child(&self, segment: impl Into<String>) -> Option<Self> {
        if self.segments.len() >= Self::MAX_DEPTH {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Some(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn format(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Location of the snapshot relative to the host root.
    ///
    /// The root path keeps its empty segment: `usage//index.json`.
    pub fn to_resource_path(&self) -> String {
        format!("usage/{}/index.json", self.segments.join("/"))
    }
}

impl fmt::Display for UsagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "/")
        } else {
            write!(f, "/{}", self.segments.join("/"))
        }
    }
}
