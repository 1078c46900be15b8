// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// One step of `z <- z^2 + c`.
    ///
    /// The operation order is fixed so that every platform with IEEE-754
    /// doubles produces the same escape counts.
    #[must_use]
    pub fn mandelbrot_step(self, c: Complex) -> Self {
        let real = self.real * self.real - self.imag * self.imag + c.real;
        let imag = 2.0 * self.real * self.imag + c.imag;

        Self { real, imag }
    }
}
