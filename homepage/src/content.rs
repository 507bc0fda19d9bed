//! Homepage content: the feature cards, the roadmap, and the page copy.
//!
//! [`HomepageContent::builtin`] is the shipped course content. A replacement
//! can be loaded from JSON with [`HomepageContent::from_json`]; both go
//! through [`HomepageContent::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{FeatureRecord, RoadmapStep};

/// Number of feature cards the feature row is laid out for.
pub const FEATURE_COUNT: usize = 3;

/// Number of steps in the learning roadmap.
pub const ROADMAP_STEP_COUNT: usize = 10;

/// Errors raised while loading or checking content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file is not valid JSON for [`HomepageContent`]
    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Wrong number of feature cards
    #[error("expected {expected} feature cards, found {found}")]
    FeatureCount {
        /// Required count
        expected: usize,
        /// Count in the content
        found: usize,
    },

    /// Wrong number of roadmap steps
    #[error("expected {expected} roadmap steps, found {found}")]
    StepCount {
        /// Required count
        expected: usize,
        /// Count in the content
        found: usize,
    },

    /// A step index does not match its 1-based position
    #[error("roadmap step at position {position} has index {found}")]
    StepIndex {
        /// 1-based position in the sequence
        position: usize,
        /// Index carried by the step
        found: u32,
    },

    /// A title, description or icon is blank
    #[error("{section} entry {position} has an empty {field}")]
    EmptyField {
        /// `"feature"` or `"step"`
        section: &'static str,
        /// 1-based position in the sequence
        position: usize,
        /// Name of the blank field
        field: &'static str,
    },
}

/// Static page text around the two record sequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCopy {
    /// Welcome paragraph under the hero tagline
    pub hero_description: String,
    /// Hero button leading to the first lesson
    pub hero_start_label: String,
    /// Hero button leading to the blog
    pub hero_blog_label: String,
    /// Heading of the feature section
    pub features_title: String,
    /// Text under the feature section heading
    pub features_subtitle: String,
    /// Heading of the roadmap section
    pub roadmap_title: String,
    /// Text under the roadmap heading
    pub roadmap_subtitle: String,
    /// Heading of the closing call to action
    pub cta_title: String,
    /// Call-to-action button leading to the first lesson
    pub cta_start_label: String,
    /// Call-to-action button leading to the blog
    pub cta_blog_label: String,
    /// Suffix appended to the site title in `<title>`
    pub document_title_suffix: String,
    /// `<meta name="description">` content
    pub meta_description: String,
}

impl Default for PageCopy {
    fn default() -> Self {
        Self {
            hero_description: "Selamat datang di platform pembelajaran PBO! Jelajahi materi untuk menguasai pemrograman berorientasi objek.".into(),
            hero_start_label: "🚀 Mulai Belajar Sekarang".into(),
            hero_blog_label: "📚 Lihat Blog".into(),
            features_title: "Fitur Pembelajaran Unggulan".into(),
            features_subtitle: "Platform pembelajaran PBO yang dirancang khusus untuk membantu Anda menguasai pemrograman berorientasi objek".into(),
            roadmap_title: "Rencana Pembelajaran".into(),
            roadmap_subtitle: "Ikuti roadmap yang untuk menguasai PBO".into(),
            cta_title: "Siap Memulai Perjalanan Belajar PBO?".into(),
            cta_start_label: "Mulai Sekarang".into(),
            cta_blog_label: "Lihat Blog".into(),
            document_title_suffix: "Platform Pembelajaran PBO Terbaik".into(),
            meta_description: "Platform pembelajaran Pemrograman Berorientasi Objek terbaik dengan materi interaktif, tutorial praktis, dan studi kasus nyata.".into(),
        }
    }
}

/// Everything the homepage renders besides the site settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageContent {
    /// Feature cards, in display order
    pub features: Vec<FeatureRecord>,
    /// Roadmap steps, in display order
    pub steps: Vec<RoadmapStep>,
    /// Surrounding page text
    #[serde(default)]
    pub copy: PageCopy,
}

impl HomepageContent {
    /// The shipped course content.
    pub fn builtin() -> Self {
        let features = vec![
            FeatureRecord::new(
                "Konsep Dasar OOP",
                "img/undraw_docusaurus_mountain.svg",
                "Pelajari prinsip-prinsip fundamental pemrograman berorientasi objek seperti encapsulation, inheritance, polymorphism, dan abstraction dengan pendekatan yang mudah dipahami.",
            ),
            FeatureRecord::new(
                "Implementasi Praktis",
                "img/undraw_docusaurus_tree.svg",
                "Praktikkan konsep PBO melalui contoh-contoh nyata dan studi kasus yang relevan dengan pengembangan aplikasi modern menggunakan Java.",
            ),
            FeatureRecord::new(
                "Proyek Real-World",
                "img/undraw_docusaurus_react.svg",
                "Bangun aplikasi lengkap menggunakan konsep PBO yang telah dipelajari, dari perencanaan hingga implementasi dan testing.",
            ),
        ];

        let steps = [
            (
                "Class, Object, Method, Package, Constructor, Variabel",
                "Mempelajari dasar-dasar pemrograman berorientasi objek di Java melalui konsep kelas, objek, metode, paket, konstruktor, dan variabel.",
            ),
            (
                "Konstanta Primitive, Reference Types, Kondisional, Looping",
                "Memahami tipe data primitif, tipe referensi, serta struktur kontrol seperti percabangan dan perulangan.",
            ),
            (
                "Exception, Assertion, Character, dan String",
                "Mempelajari penanganan error menggunakan exception, penggunaan assertion, serta manipulasi data karakter dan string.",
            ),
            (
                "Array dan Collection",
                "Mengenal struktur data array dan koleksi untuk mengelola data dengan lebih fleksibel.",
            ),
            (
                "Input / Output",
                "Mempelajari cara membaca dan menulis data menggunakan fitur I/O di Java.",
            ),
            (
                "Enkapsulasi dan Inheritance",
                "Memahami prinsip OOP berupa penyembunyian data (enkapsulasi) serta pewarisan (inheritance).",
            ),
            (
                "Polimorfisme dan Abstract Class Interface",
                "Mempelajari konsep polimorfisme dalam OOP serta penggunaan class abstrak dan interface.",
            ),
            (
                "Multithreading",
                "Mengenal cara membuat program yang dapat menjalankan beberapa proses secara bersamaan menggunakan thread.",
            ),
            (
                "GUI Programming",
                "Mempelajari pembuatan aplikasi dengan antarmuka grafis (Graphical User Interface).",
            ),
            (
                "Testing dan Dokumentasi",
                "Mempelajari cara menguji program untuk memastikan kualitas serta menulis dokumentasi yang baik.",
            ),
        ]
        .into_iter()
        .zip(1u32..)
        .map(|((title, description), index)| RoadmapStep::new(index, title, description))
        .collect();

        Self {
            features,
            steps,
            copy: PageCopy::default(),
        }
    }

    /// Parse content from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Check the sequence invariants.
    ///
    /// Exactly [`FEATURE_COUNT`] features and [`ROADMAP_STEP_COUNT`] steps,
    /// step `N` (1-based position) carries index `N`, and no title or
    /// description is blank.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.features.len() != FEATURE_COUNT {
            return Err(ContentError::FeatureCount {
                expected: FEATURE_COUNT,
                found: self.features.len(),
            });
        }
        if self.steps.len() != ROADMAP_STEP_COUNT {
            return Err(ContentError::StepCount {
                expected: ROADMAP_STEP_COUNT,
                found: self.steps.len(),
            });
        }

        for (i, feature) in self.features.iter().enumerate() {
            check_filled("feature", i + 1, "title", &feature.title)?;
            check_filled("feature", i + 1, "description", &feature.description)?;
            check_filled("feature", i + 1, "icon", feature.icon.as_str())?;
        }

        for (i, step) in self.steps.iter().enumerate() {
            let position = i + 1;
            if step.index as usize != position {
                return Err(ContentError::StepIndex {
                    position,
                    found: step.index,
                });
            }
            check_filled("step", position, "title", &step.title)?;
            check_filled("step", position, "description", &step.description)?;
        }

        Ok(())
    }
}

fn check_filled(
    section: &'static str,
    position: usize,
    field: &'static str,
    value: &str,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField {
            section,
            position,
            field,
        });
    }
    Ok(())
}
