//! Card faces and the pools they are dealt from.
//!
//! A `CardFace` is the opaque identifier that makes two cards a pair. The
//! engine never looks inside it beyond equality; the renderer decides what a
//! stock icon or an image reference looks like.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Built-in icons for standard games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockIcon {
    Face,
    Flower,
    Gift,
    Heart,
    Home,
    Lightning,
    Moon,
    Plane,
    School,
    Send,
    Star,
    Work,
}

impl StockIcon {
    /// Every stock icon, in drawable order.
    pub const ALL: [StockIcon; 12] = [
        StockIcon::Face,
        StockIcon::Flower,
        StockIcon::Gift,
        StockIcon::Heart,
        StockIcon::Home,
        StockIcon::Lightning,
        StockIcon::Moon,
        StockIcon::Plane,
        StockIcon::School,
        StockIcon::Send,
        StockIcon::Star,
        StockIcon::Work,
    ];

    /// Drawable resource name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StockIcon::Face => "ic_face",
            StockIcon::Flower => "ic_flower",
            StockIcon::Gift => "ic_gift",
            StockIcon::Heart => "ic_heart",
            StockIcon::Home => "ic_home",
            StockIcon::Lightning => "ic_lightning",
            StockIcon::Moon => "ic_moon",
            StockIcon::Plane => "ic_plane",
            StockIcon::School => "ic_school",
            StockIcon::Send => "ic_send",
            StockIcon::Star => "ic_star",
            StockIcon::Work => "ic_work",
        }
    }
}

/// Reference to a user-supplied image (URI, path, storage key).
///
/// Loading and scaling the image is the renderer's job.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier shared by exactly two cards in a deal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    Stock(StockIcon),
    Custom(ImageRef),
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Stock(icon) => f.write_str(icon.name()),
            CardFace::Custom(image) => write!(f, "{}", image),
        }
    }
}

impl From<StockIcon> for CardFace {
    fn from(icon: StockIcon) -> Self {
        CardFace::Stock(icon)
    }
}

impl From<ImageRef> for CardFace {
    fn from(image: ImageRef) -> Self {
        CardFace::Custom(image)
    }
}

/// Distinct faces available for dealing.
///
/// Passed to the engine explicitly so tests can deal from fixed pools.
/// Duplicates are dropped on construction, first occurrence wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPool {
    faces: Vec<CardFace>,
}

impl IconPool {
    /// Build a pool from arbitrary faces.
    pub fn new(faces: impl IntoIterator<Item = CardFace>) -> Self {
        let mut seen = FxHashSet::default();
        let faces = faces
            .into_iter()
            .filter(|face| seen.insert(face.clone()))
            .collect();
        Self { faces }
    }

    /// The built-in icon set, large enough for every board size.
    #[must_use]
    pub fn stock() -> Self {
        Self::new(StockIcon::ALL.into_iter().map(CardFace::Stock))
    }

    /// A pool of user images.
    pub fn custom<S: Into<String>>(references: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            references
                .into_iter()
                .map(|r| CardFace::Custom(ImageRef::new(r))),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardFace> {
        self.faces.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardFace] {
        &self.faces
    }
}

impl Default for IconPool {
    fn default() -> Self {
        Self::stock()
    }
}
