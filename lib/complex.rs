//! Complex values and fixed-length sequences of complex samples.
//!
//! Single complex values are plain [`num_complex::Complex64`]s, which already
//! provide addition, multiplication, real scaling, and the squared modulus
//! ([`C64::norm_sqr`]). Sequences are stored as two parallel real arrays.

use ndarray as nd;
use crate::{ Arr1, error::LengthError };

pub use num_complex::Complex64 as C64;

/// Return the point on the unit circle at angle `theta`, i.e. `exp(i θ)`.
pub fn exponential(theta: f64) -> C64 { C64::cis(theta) }

/// Fixed-length, mutable sequence of complex samples, backed by separate
/// arrays of real and imaginary parts.
///
/// Both backing arrays always have the same length, which cannot change after
/// construction. Cloning produces a fully independent copy.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexSeq {
    re: nd::Array1<f64>,
    im: nd::Array1<f64>,
}

impl ComplexSeq {
    /// Create a sequence of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self { re: nd::Array1::zeros(n), im: nd::Array1::zeros(n) }
    }

    /// Create a purely real sequence.
    pub fn from_real(re: nd::Array1<f64>) -> Self {
        let im = nd::Array1::zeros(re.len());
        Self { re, im }
    }

    /// Create a sequence from its real and imaginary parts.
    pub fn from_parts(re: nd::Array1<f64>, im: nd::Array1<f64>)
        -> Result<Self, LengthError>
    {
        LengthError::check(&re, &im)?;
        Ok(Self { re, im })
    }

    /// Create a sequence from an array of complex values.
    pub fn from_array<S>(q: &Arr1<S>) -> Self
    where S: nd::Data<Elem = C64>
    {
        Self { re: q.mapv(|qk| qk.re), im: q.mapv(|qk| qk.im) }
    }

    /// Number of samples.
    pub fn len(&self) -> usize { self.re.len() }

    /// Return `true` if the sequence holds no samples.
    pub fn is_empty(&self) -> bool { self.re.is_empty() }

    /// Get the `i`-th sample.
    ///
    /// *Panics if `i` is out of bounds*.
    pub fn at(&self, i: usize) -> C64 { C64::new(self.re[i], self.im[i]) }

    /// Set the `i`-th sample.
    ///
    /// *Panics if `i` is out of bounds*.
    pub fn set(&mut self, i: usize, val: C64) {
        self.re[i] = val.re;
        self.im[i] = val.im;
    }

    /// Get a reference to the array of real parts.
    pub fn re(&self) -> &nd::Array1<f64> { &self.re }

    /// Get a reference to the array of imaginary parts.
    pub fn im(&self) -> &nd::Array1<f64> { &self.im }

    /// Iterate over all samples in order.
    pub fn iter(&self) -> impl Iterator<Item = C64> + '_ {
        self.re.iter().zip(&self.im).map(|(re, im)| C64::new(*re, *im))
    }

    /// Collect into an array of complex values.
    pub fn to_array(&self) -> nd::Array1<C64> { self.iter().collect() }

    /// Multiply every sample by a real factor in place.
    pub fn scale(&mut self, a: f64) {
        self.re *= a;
        self.im *= a;
    }

    /// Negate every sample in place.
    pub fn negate(&mut self) { self.scale(-1.0); }

    /// Return the squared modulus of every sample.
    pub fn norm_sqr(&self) -> nd::Array1<f64> {
        nd::Zip::from(&self.re).and(&self.im)
            .map_collect(|re, im| re * re + im * im)
    }

    /// Return `self + a * other`, sample-wise.
    ///
    /// Fails if the sequences have different lengths.
    pub fn add_scaled(&self, a: C64, other: &Self)
        -> Result<Self, LengthError>
    {
        LengthError::check_len(self.len(), other.len())?;
        Ok(self.iter().zip(other.iter()).map(|(x, y)| x + a * y).collect())
    }

    /// Return a copy of `self` with every sample multiplied by `w`.
    pub fn mul_all(&self, w: C64) -> Self {
        self.iter().map(|x| x * w).collect()
    }
}

impl FromIterator<C64> for ComplexSeq {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = C64>
    {
        let (re, im): (Vec<f64>, Vec<f64>)
            = iter.into_iter().map(|z| (z.re, z.im)).unzip();
        Self { re: re.into(), im: im.into() }
    }
}
