//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] trait from the embedded-graphics
//! ecosystem for [`FrameBuffer`], with [`Rgb888`] as the colour type. Drawing
//! only touches the framebuffer; the panel shows it on the next
//! [`render_frame`](crate::display::Display::render_frame).
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::Rgb888,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use hub75_bitbang::{Dimensions, FrameBuffer};
//!
//! let mut fb = FrameBuffer::new(Dimensions::PANEL_32X16, [0u32; 32 * 16]);
//!
//! let _ = Rectangle::new(Point::new(2, 2), Size::new(4, 3))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
//!     .draw(&mut fb);
//!
//! assert_eq!(fb.pixel(2, 2), Some(0x0000_00FF));
//! assert_eq!(fb.pixel(6, 2), Some(0));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb888,
    prelude::Pixel,
};

use crate::color::from_rgb888;
use crate::framebuffer::FrameBuffer;

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            self.set_pixel(x, y, from_rgb888(color));
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(from_rgb888(color));
        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.cols), u32::from(dims.rows))
    }
}
