//! Headless editing session.
//!
//! Holds the untouched original, the current [`EditParams`], and the latest
//! rendered preview. Every parameter change re-renders from the original;
//! the original itself is never modified.

use std::path::Path;
use std::sync::Arc;

use crate::adjust::filter::ColorFilter;
use crate::codec;
use crate::error::SessionError;
use crate::image::ImageBuffer;
use crate::pipeline::params::EditParams;
use crate::pipeline::render::render;

/// A change requested by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    SetBrightness(i32),
    SetContrast(i32),
    SetFilter { filter: ColorFilter, enabled: bool },
    ToggleFilter(ColorFilter),
    SetParams(EditParams),
    /// Restore identity params.
    Reset,
}

#[derive(Debug, Default)]
pub struct EditorSession {
    original: Option<Arc<ImageBuffer>>,
    params: EditParams,
    preview: Option<ImageBuffer>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with `params` already set.
    pub fn with_params(params: EditParams) -> Result<Self, SessionError> {
        params.validate()?;
        Ok(Self {
            params,
            ..Self::default()
        })
    }

    pub fn params(&self) -> &EditParams {
        &self.params
    }

    pub fn original(&self) -> Option<&Arc<ImageBuffer>> {
        self.original.as_ref()
    }

    /// The latest rendered image, if an image is loaded.
    pub fn preview(&self) -> Option<&ImageBuffer> {
        self.preview.as_ref()
    }

    /// Replace the original and render it with the current params.
    pub fn load(&mut self, image: impl Into<Arc<ImageBuffer>>) -> Result<(), SessionError> {
        let image = image.into();
        let preview = render(&image, &self.params)?;
        self.original = Some(image);
        self.preview = Some(preview);
        Ok(())
    }

    /// Decode `path` and load it.
    pub fn open(&mut self, path: &Path) -> Result<(), SessionError> {
        let image = codec::load_image(path)?;
        self.load(image)
    }

    /// Apply `command`. Returns whether the params changed.
    ///
    /// Invalid values leave the session untouched. Without a loaded image the
    /// params are stored and rendering waits until [`load`](Self::load).
    pub fn apply(&mut self, command: EditCommand) -> Result<bool, SessionError> {
        let mut next = self.params;
        match command {
            EditCommand::SetBrightness(value) => next.tone.brightness = value,
            EditCommand::SetContrast(value) => next.tone.contrast = value,
            EditCommand::SetFilter { filter, enabled } => {
                next.filters.set(filter, enabled);
            }
            EditCommand::ToggleFilter(filter) => {
                next.filters.toggle(filter);
            }
            EditCommand::SetParams(params) => next = params,
            EditCommand::Reset => next = EditParams::default(),
        }

        if next == self.params {
            return Ok(false);
        }
        next.validate()?;

        if let Some(original) = &self.original {
            self.preview = Some(render(original, &next)?);
        } else {
            tracing::debug!("params changed with no image loaded, skipping render");
        }
        self.params = next;
        Ok(true)
    }

    /// Encode the preview to `path`.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let Some(preview) = &self.preview else {
            tracing::warn!("save requested with no image loaded");
            return Err(SessionError::NoImage);
        };
        codec::save_image(preview, path)?;
        Ok(())
    }
}
