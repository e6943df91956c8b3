//! Camera frame classification seam.

pub use image::DynamicImage;

/// Decides whether a camera frame shows a cat.
///
/// `confidence_threshold` is a percentage; implementations only answer
/// `true` when their confidence meets it.
pub trait ImageClassifier {
    fn contains_cat(&self, image: &DynamicImage, confidence_threshold: f32) -> bool;
}

impl<C: ImageClassifier + ?Sized> ImageClassifier for Box<C> {
    fn contains_cat(&self, image: &DynamicImage, confidence_threshold: f32) -> bool {
        (**self).contains_cat(image, confidence_threshold)
    }
}

/// Stand-in classifier that guesses at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeImageClassifier;

impl ImageClassifier for FakeImageClassifier {
    fn contains_cat(&self, _image: &DynamicImage, _confidence_threshold: f32) -> bool {
        rand::random::<bool>()
    }
}

/// Classifier with a constant verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedImageClassifier(pub bool);

impl ImageClassifier for FixedImageClassifier {
    fn contains_cat(&self, _image: &DynamicImage, _confidence_threshold: f32) -> bool {
        self.0
    }
}

/// Blank frame used when no camera capture is available.
pub fn blank_frame() -> DynamicImage {
    DynamicImage::new_rgb8(512, 512)
}
