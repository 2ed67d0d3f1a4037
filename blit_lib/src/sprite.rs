use std::marker::PhantomData;

use num_traits::ToPrimitive;

use crate::error::LayoutError;
use crate::geometry::Rect;

/// A crop of a sprite sheet, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRegion {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl SourceRegion {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        SourceRegion { x, y, w, h }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Fixed set of regions cut from one image, indexed by a closed enumeration `K`.
///
/// Built once after the image is loaded and never modified afterwards. Every
/// region is checked to lie inside the image it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet<K> {
    regions: Vec<SourceRegion>,
    _key: PhantomData<K>,
}

impl<K: ToPrimitive> SpriteSheet<K> {
    pub fn new(regions: Vec<SourceRegion>, width: u32, height: u32) -> Result<Self, LayoutError> {
        if regions.is_empty() {
            return Err(LayoutError::Empty);
        }
        for (index, r) in regions.iter().enumerate() {
            if !r.rect().fits_within(width, height) {
                return Err(LayoutError::OutOfBounds {
                    index,
                    x: r.x,
                    y: r.y,
                    w: r.w,
                    h: r.h,
                    width,
                    height,
                });
            }
        }

        Ok(SpriteSheet {
            regions,
            _key: PhantomData,
        })
    }

    /// `count` equally sized frames laid out left to right.
    pub fn columns(count: u32, w: u32, h: u32, width: u32, height: u32) -> Result<Self, LayoutError> {
        let regions = (0..count)
            .map(|i| {
                let x = offset(i, w, i, w, h, width, height)?;
                Ok(SourceRegion::new(x, 0, w, h))
            })
            .collect::<Result<_, _>>()?;
        Self::new(regions, width, height)
    }

    /// `count` equally sized frames stacked top to bottom.
    pub fn rows(count: u32, w: u32, h: u32, width: u32, height: u32) -> Result<Self, LayoutError> {
        let regions = (0..count)
            .map(|i| {
                let y = offset(i, h, i, w, h, width, height)?;
                Ok(SourceRegion::new(0, y, w, h))
            })
            .collect::<Result<_, _>>()?;
        Self::new(regions, width, height)
    }

    /// 2x2 grid in reading order: top left, top right, bottom left, bottom right.
    pub fn quadrants(w: u32, h: u32, width: u32, height: u32) -> Result<Self, LayoutError> {
        let w_off = offset(1, w, 1, w, h, width, height)?;
        let h_off = offset(1, h, 2, w, h, width, height)?;
        let regions = vec![
            SourceRegion::new(0, 0, w, h),
            SourceRegion::new(w_off, 0, w, h),
            SourceRegion::new(0, h_off, w, h),
            SourceRegion::new(w_off, h_off, w, h),
        ];
        Self::new(regions, width, height)
    }

    pub fn get(&self, key: K) -> Option<SourceRegion> {
        key.to_usize().and_then(|i| self.regions.get(i).copied())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceRegion> {
        self.regions.iter()
    }
}

/// Offset of the `step`-sized cell number `i`, rejected once it leaves the `i32` range.
fn offset(i: u32, step: u32, index: u32, w: u32, h: u32, width: u32, height: u32) -> Result<i32, LayoutError> {
    i.checked_mul(step)
        .and_then(|o| i32::try_from(o).ok())
        .ok_or(LayoutError::OutOfBounds {
            index: index as usize,
            x: i32::MAX,
            y: i32::MAX,
            w,
            h,
            width,
            height,
        })
}

/// Walks through the frames of a sprite sheet, holding each frame for
/// `ticks_per_frame` rendered frames before moving on and wrapping after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    frames: usize,
    ticks_per_frame: usize,
    tick: usize,
}

impl Animation {
    pub fn new(frames: usize, ticks_per_frame: usize) -> Self {
        assert!(frames > 0 && ticks_per_frame > 0);
        Animation {
            frames,
            ticks_per_frame,
            tick: 0,
        }
    }

    /// Index of the frame to show now
    pub fn frame(&self) -> usize {
        self.tick / self.ticks_per_frame
    }

    pub fn advance(&mut self) {
        self.tick += 1;
        if self.frame() >= self.frames {
            self.tick = 0;
        }
    }
}
