//! Photo collage behind the proposal question.
//!
//! Drop images into `public/photos/` using the file names below. Placement
//! values are percentages of the page; `rotate` is in degrees. Missing files
//! render a heart placeholder labelled with the expected file name.

#[cfg(test)]
#[path = "collage_test.rs"]
mod collage_test;

/// Seconds between successive photo entrances.
pub const ENTRANCE_STAGGER_S: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollagePhoto {
    pub src: &'static str,
    pub alt: &'static str,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub rotate: f64,
}

impl CollagePhoto {
    /// Last path segment of `src`, shown when the image cannot load.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.src.rsplit('/').next().unwrap_or(self.src)
    }

    /// Inline style for the photo frame. The rotation is exposed as a custom
    /// property so the entrance keyframes can spin in from `rotate - 20deg`.
    #[must_use]
    pub fn frame_style(&self, index: usize) -> String {
        #[allow(clippy::cast_precision_loss)]
        let delay = index as f64 * ENTRANCE_STAGGER_S;
        format!(
            "top: {}%; left: {}%; width: {}%; --photo-rotate: {}deg; animation-delay: {delay:.2}s;",
            self.top, self.left, self.width, self.rotate
        )
    }
}

pub const PHOTO_COLLAGE: &[CollagePhoto] = &[
    CollagePhoto { src: "/photos/photo-1.jpg", alt: "Our memory 1", top: 5.0, left: 5.0, width: 30.0, rotate: -8.0 },
    CollagePhoto { src: "/photos/photo-2.jpg", alt: "Our memory 2", top: 8.0, left: 68.0, width: 28.0, rotate: 6.0 },
    CollagePhoto { src: "/photos/photo-3.jpg", alt: "Our memory 3", top: 55.0, left: 2.0, width: 25.0, rotate: 4.0 },
    CollagePhoto { src: "/photos/photo-4.jpg", alt: "Our memory 4", top: 60.0, left: 72.0, width: 26.0, rotate: -5.0 },
    CollagePhoto { src: "/photos/photo-5.jpg", alt: "Our memory 5", top: 25.0, left: 75.0, width: 22.0, rotate: 12.0 },
    CollagePhoto { src: "/photos/photo-6.jpg", alt: "Our memory 6", top: 70.0, left: 35.0, width: 24.0, rotate: -3.0 },
];
