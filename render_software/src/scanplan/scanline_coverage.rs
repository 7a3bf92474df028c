///
/// Accumulates how much of each pixel on a scanline is covered by a shape
///
/// Spans are added with a weight (the fraction of the pixel height they represent): pixels that are only
/// partially covered horizontally receive a proportional amount of that weight.
///
pub struct ScanlineCoverage {
    /// Coverage for pixels only partly covered by a span
    partial: Vec<f32>,

    /// Changes in the coverage for fully covered runs of pixels (summed from left to right)
    delta: Vec<f32>,

    /// The range of pixels that have been touched since the last clear
    touched: Option<(usize, usize)>,
}

impl ScanlineCoverage {
    ///
    /// Creates coverage for a scanline of the specified width
    ///
    pub fn new(width: usize) -> ScanlineCoverage {
        ScanlineCoverage {
            partial:    vec![0.0; width],
            delta:      vec![0.0; width+1],
            touched:    None,
        }
    }

    ///
    /// The width of this scanline
    ///
    #[inline]
    pub fn width(&self) -> usize {
        self.partial.len()
    }

    ///
    /// True if nothing has been added to this scanline since the last clear
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.touched.is_none()
    }

    ///
    /// Resets this scanline so that no pixels are covered
    ///
    pub fn clear(&mut self) {
        if let Some((min_x, max_x)) = self.touched.take() {
            self.partial[min_x..max_x].iter_mut().for_each(|val| *val = 0.0);
            self.delta[min_x..=max_x].iter_mut().for_each(|val| *val = 0.0);
        }
    }

    ///
    /// Adds a span covering the pixels between x0 and x1 with the specified weight
    ///
    pub fn add_span(&mut self, x0: f64, x1: f64, weight: f32) {
        let width   = self.partial.len() as f64;
        let x0      = x0.max(0.0);
        let x1      = x1.min(width);

        if !(x1 > x0) {
            return;
        }

        let first   = x0.floor() as usize;
        let last    = (x1.ceil() as usize).min(self.partial.len());

        if last <= first + 1 {
            // Span is entirely within a single pixel
            self.partial[first] += ((x1 - x0) as f32) * weight;
        } else {
            // Partial pixels at either end, and a run of full pixels in between
            self.partial[first]     += (((first+1) as f64 - x0) as f32) * weight;
            self.partial[last-1]    += ((x1 - (last-1) as f64) as f32) * weight;

            if last-1 > first+1 {
                self.delta[first+1] += weight;
                self.delta[last-1]  -= weight;
            }
        }

        self.touched = match self.touched {
            None                    => Some((first, last)),
            Some((min_x, max_x))    => Some((min_x.min(first), max_x.max(last))),
        };
    }

    ///
    /// Calls a function for every pixel with a non-zero coverage (the coverage passed in is clamped to 1.0)
    ///
    pub fn for_each_covered(&self, mut pixel_fn: impl FnMut(usize, f32)) {
        if let Some((min_x, max_x)) = self.touched {
            let mut running = 0.0;

            for x in min_x..max_x {
                running += self.delta[x];
                let coverage = (running + self.partial[x]).min(1.0);

                if coverage > 0.0 {
                    pixel_fn(x, coverage);
                }
            }
        }
    }
}
