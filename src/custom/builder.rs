//! Assembling a custom photo board.
//!
//! The player picks exactly one image per pair and names the game. The
//! builder tracks progress for the picker screen and validates before
//! handing the images to the engine as an `IconPool`.

use log::{debug, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{IconPool, ImageRef};
use crate::core::{BoardSize, CustomBoardError};

/// Shortest accepted game name, in characters.
pub const MIN_GAME_NAME_LENGTH: usize = 3;
/// Longest accepted game name, in characters.
pub const MAX_GAME_NAME_LENGTH: usize = 14;

/// A validated custom board, ready to deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBoard {
    pub name: String,
    pub board_size: BoardSize,
    pub pool: IconPool,
}

/// Collects images and a name for a custom board.
#[derive(Clone, Debug)]
pub struct CustomBoardBuilder {
    board_size: BoardSize,
    images: Vec<ImageRef>,
    seen: FxHashSet<ImageRef>,
    name: String,
}

impl CustomBoardBuilder {
    #[must_use]
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            images: Vec::with_capacity(board_size.num_pairs()),
            seen: FxHashSet::default(),
            name: String::new(),
        }
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    #[must_use]
    pub fn images_required(&self) -> usize {
        self.board_size.num_pairs()
    }

    #[must_use]
    pub fn images_chosen(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Add a single picked image.
    pub fn add_image(&mut self, reference: impl Into<String>) -> Result<(), CustomBoardError> {
        let image = ImageRef::new(reference);
        if self.seen.contains(&image) {
            return Err(CustomBoardError::DuplicateImage(image.0));
        }
        if self.images.len() >= self.images_required() {
            return Err(CustomBoardError::WrongImageCount {
                required: self.images_required(),
                chosen: self.images.len() + 1,
            });
        }
        self.seen.insert(image.clone());
        self.images.push(image);
        Ok(())
    }

    /// Add a multi-select batch. Extra images beyond the required count and
    /// images already chosen are skipped. Returns how many were accepted.
    pub fn add_images<S: Into<String>>(
        &mut self,
        references: impl IntoIterator<Item = S>,
    ) -> usize {
        let mut accepted = 0;
        for reference in references {
            if self.images.len() >= self.images_required() {
                break;
            }
            match self.add_image(reference) {
                Ok(()) => accepted += 1,
                Err(err) => debug!("skipping picked image: {}", err),
            }
        }
        accepted
    }

    /// Remove a chosen image by position.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageRef> {
        if index >= self.images.len() {
            return None;
        }
        let image = self.images.remove(index);
        self.seen.remove(&image);
        Some(image)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Picker screen title.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "Choose pics ({} / {})",
            self.images_chosen(),
            self.images_required()
        )
    }

    fn validate(&self) -> Result<(), CustomBoardError> {
        if self.images.len() != self.images_required() {
            return Err(CustomBoardError::WrongImageCount {
                required: self.images_required(),
                chosen: self.images.len(),
            });
        }
        let length = self.name.chars().count();
        if self.name.trim().is_empty() || length < MIN_GAME_NAME_LENGTH {
            return Err(CustomBoardError::NameTooShort {
                min: MIN_GAME_NAME_LENGTH,
            });
        }
        if length > MAX_GAME_NAME_LENGTH {
            return Err(CustomBoardError::NameTooLong {
                max: MAX_GAME_NAME_LENGTH,
            });
        }
        Ok(())
    }

    /// Whether the save action should be enabled.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn build(self) -> Result<CustomBoard, CustomBoardError> {
        if let Err(err) = self.validate() {
            warn!("custom board '{}' not ready: {}", self.name, err);
            return Err(err);
        }
        Ok(CustomBoard {
            name: self.name,
            board_size: self.board_size,
            pool: IconPool::custom(self.images.into_iter().map(|image| image.0)),
        })
    }
}
