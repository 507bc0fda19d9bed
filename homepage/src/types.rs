//! Homepage data types.
//!
//! These types are the whole data model of the page:
//!
//! - **Serializable** - content can be loaded from or dumped to JSON
//! - **Read-only** - built once at startup, then only borrowed by the builders
//!
//! # Example
//!
//! ```rust
//! use homepage::types::{RoadmapStep, SiteMeta};
//!
//! let site = SiteMeta::new("Learn OOP", "Master it");
//! assert_eq!(site.resolve("/blog"), "/blog");
//!
//! let step = RoadmapStep::new(5, "Input / Output", "Membaca dan menulis data.");
//! assert_eq!(step.index, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Destination of the "start learning" actions.
pub const DOCS_START_PATH: &str = "/docs/pertemuan-1";

/// Destination of the "blog" actions.
pub const BLOG_PATH: &str = "/blog";

/// Opaque reference to an icon asset (a site-relative path).
///
/// The renderer only emits the reference; the asset itself is never read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    /// Wrap an asset path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The raw asset path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One homepage feature card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Card heading
    pub title: String,
    /// Illustration shown above the heading
    pub icon: IconRef,
    /// Card body text
    pub description: String,
}

impl FeatureRecord {
    /// Build a record from its three parts.
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            icon: IconRef::new(icon),
            description: description.into(),
        }
    }
}

/// One numbered step of the learning roadmap.
///
/// `index` is 1-based and must equal the step's position in the sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    /// Displayed step number
    pub index: u32,
    /// Step heading
    pub title: String,
    /// Step summary
    pub description: String,
}

impl RoadmapStep {
    /// Build a step.
    pub fn new(index: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Site-wide settings the page reads: title and tagline.
///
/// Passed explicitly into every builder that needs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Site title, shown as the hero heading and in `<title>`
    pub title: String,
    /// Tagline shown under the hero heading
    pub tagline: String,
    /// Prefix for navigation targets (defaults to `/`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "/".into()
}

impl SiteMeta {
    /// Settings with the default `/` base URL.
    pub fn new(title: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: tagline.into(),
            base_url: default_base_url(),
        }
    }

    /// Replace the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join a site-absolute path onto the base URL.
    ///
    /// `"/"` + `"/blog"` is `"/blog"`; `"/pbo/"` + `"/blog"` is `"/pbo/blog"`.
    pub fn resolve(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

/// Where a navigation action points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// First lesson of the course material
    StartLearning,
    /// Blog index
    Blog,
}

impl NavTarget {
    /// Site-absolute path of the destination.
    pub fn path(self) -> &'static str {
        match self {
            NavTarget::StartLearning => DOCS_START_PATH,
            NavTarget::Blog => BLOG_PATH,
        }
    }
}
