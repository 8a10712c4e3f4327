//! Icon and cursor loaders
//!
//! Both loaders validate the source image, convert it to RGBA8 through the
//! shared [`PixelConverter`] and keep the result in a [`ResourceCache`]. Icons
//! stay as converted pixel buffers (the native layer copies them when they
//! are assigned); cursors become native cursor objects that must be destroyed
//! explicitly once unreferenced.

use super::cache::ResourceCache;
use super::converter::PixelConverter;
use super::cursor::{Cursor, CursorId};
use super::image::{Image, ImageId, NativeImage, PixelFormat};
use crate::error::{WindowError, WindowResult};
use crate::native::{NativeBinding, NativeCursor};
use std::rc::Rc;

fn prepare(converter: &dyn PixelConverter, image: &Image) -> WindowResult<NativeImage> {
    image.ensure_uncompressed()?;

    let converted = converter.convert(image, PixelFormat::R8G8B8A8)?;

    Ok(NativeImage {
        width: converted.width,
        height: converted.height,
        pixels: converted.contents,
    })
}

/// Cache of converted window icons
pub struct ImageLoader {
    cache: ResourceCache<ImageId, NativeImage>,
    converter: Rc<dyn PixelConverter>,
}

impl ImageLoader {
    /// Create an empty loader using `converter`
    pub fn new(converter: Rc<dyn PixelConverter>) -> Self {
        Self {
            cache: ResourceCache::new("icon"),
            converter,
        }
    }

    /// Acquire the native form of `image`, converting it on first use
    pub fn load(&mut self, image: &Image) -> WindowResult<ImageId> {
        let id = image.id();
        let converter = Rc::clone(&self.converter);
        self.cache
            .acquire_with(&id, || prepare(converter.as_ref(), image))?;
        Ok(id)
    }

    /// Acquire several images; on failure nothing stays acquired
    pub fn load_all(&mut self, images: &[Image]) -> WindowResult<Vec<ImageId>> {
        let mut ids = Vec::with_capacity(images.len());

        for image in images {
            match self.load(image) {
                Ok(id) => ids.push(id),
                Err(err) => {
                    self.release_all(&ids);
                    return Err(err);
                }
            }
        }

        Ok(ids)
    }

    /// Converted pixels for a loaded image
    pub fn get(&self, id: &ImageId) -> Option<&NativeImage> {
        self.cache.get(id)
    }

    /// Drop one reference to `id`
    pub fn release(&mut self, id: &ImageId) {
        if let Some(image) = self.cache.release(id) {
            log::debug!("Released icon pixels ({} bytes)", image.size_bytes());
        }
    }

    /// Drop one reference to each id
    pub fn release_all(&mut self, ids: &[ImageId]) {
        for id in ids {
            self.release(id);
        }
    }

    /// References currently held on `id`
    pub fn ref_count(&self, id: &ImageId) -> usize {
        self.cache.ref_count(id)
    }

    /// Number of distinct icons alive
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no icon is alive
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Release every icon (teardown)
    pub fn clear(&mut self) {
        let released = self.cache.drain().len();
        if released > 0 {
            log::debug!("Released {} cached icons", released);
        }
    }
}

/// Cache of native cursor objects
pub struct CursorLoader {
    cache: ResourceCache<CursorId, NativeCursor>,
    converter: Rc<dyn PixelConverter>,
}

impl CursorLoader {
    /// Create an empty loader using `converter`
    pub fn new(converter: Rc<dyn PixelConverter>) -> Self {
        Self {
            cache: ResourceCache::new("cursor"),
            converter,
        }
    }

    /// Acquire the native cursor for `cursor`, creating it on first use
    pub fn load(
        &mut self,
        native: &mut dyn NativeBinding,
        cursor: &Cursor,
    ) -> WindowResult<(CursorId, NativeCursor)> {
        let id = cursor.id();
        let converter = Rc::clone(&self.converter);
        let handle = *self.cache.acquire_with(&id, || {
            let image = prepare(converter.as_ref(), cursor.icon())?;
            Ok::<_, WindowError>(native.create_cursor(&image, cursor.hotspot()))
        })?;
        Ok((id, handle))
    }

    /// Native handle of a loaded cursor
    pub fn get(&self, id: &CursorId) -> Option<NativeCursor> {
        self.cache.get(id).copied()
    }

    /// Drop one reference, destroying the native cursor when unreferenced
    pub fn release(&mut self, native: &mut dyn NativeBinding, id: &CursorId) {
        if let Some(handle) = self.cache.release(id) {
            native.destroy_cursor(handle);
        }
    }

    /// References currently held on `id`
    pub fn ref_count(&self, id: &CursorId) -> usize {
        self.cache.ref_count(id)
    }

    /// Number of distinct native cursors alive
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no native cursor is alive
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Destroy every native cursor (teardown)
    pub fn clear(&mut self, native: &mut dyn NativeBinding) {
        for (id, handle) in self.cache.drain() {
            log::debug!("Destroying cached cursor {:?} at teardown", id);
            native.destroy_cursor(handle);
        }
    }
}
