//! Trait definitions
use rand::Rng;

/// Something from which values of type `X` can be drawn at random
pub trait Sampleable<X> {
    /// Single draw
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws
    fn sample<R: Rng>(&self, n: usize, mut rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(&mut rng)).collect()
    }

    /// Create a never-ending iterator of draws
    ///
    /// # Example
    ///
    /// ```
    /// use buffon::needle::NeedleDropper;
    /// use buffon::traits::Sampleable;
    /// use buffon::geom::Segment;
    ///
    /// let dropper = NeedleDropper::new(1.0, 10.0, 10.0).unwrap();
    /// let mut rng = rand::thread_rng();
    ///
    /// let needles: Vec<Segment> =
    ///     dropper.sample_stream(&mut rng).take(5).collect();
    /// assert_eq!(needles.len(), 5);
    /// ```
    fn sample_stream<'r, R: Rng>(
        &'r self,
        mut rng: &'r mut R,
    ) -> Box<dyn Iterator<Item = X> + 'r> {
        Box::new(std::iter::repeat_with(move || self.draw(&mut rng)))
    }
}
