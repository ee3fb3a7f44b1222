use crate::Image;
use anyhow::{bail, Result};
use image::imageops::{self, FilterType};

/// Fixed, deterministic resampling used for every resize in the pipeline.
/// The downstream geometry only needs the filter to be stable and monotonic
/// in coordinates, not any particular kernel.
const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

pub trait ResizeImage {
    fn resize_to(&mut self, size: (u32, u32)) -> Result<()>;
    fn resize_into(&self, size: (u32, u32)) -> Result<Self>
    where
        Self: Sized;
}

impl ResizeImage for Image {
    fn resize_to(&mut self, size: (u32, u32)) -> Result<()> {
        *self = self.resize_into(size)?;
        Ok(())
    }

    fn resize_into(&self, size: (u32, u32)) -> Result<Self> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            bail!("cannot resize to an empty frame ({width}x{height})");
        }
        // Identity resize still hands back a fresh buffer so the caller owns
        // its copy, but skips the resampler to stay bit-exact.
        if (width, height) == self.get_size() {
            return Ok(self.clone());
        }
        let frame = imageops::resize(self.frame(), width, height, RESAMPLE_FILTER);
        Ok(Image::from(frame))
    }
}
