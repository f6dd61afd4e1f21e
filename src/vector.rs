use crate::error::MathError;
use ndarray::{Array1, Zip};

/// Accepted input for vector coordinates: integers, floats, and numeric
/// strings, normalized to `f64` at the boundary. Anything that does not
/// parse to a finite real number is rejected with `InvalidArgument`.
#[derive(Clone, Debug, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    fn into_f64(self) -> Result<f64, MathError> {
        match self {
            Numeric::Int(v) => Ok(v as f64),
            Numeric::Float(v) if v.is_finite() => Ok(v),
            Numeric::Float(v) => Err(MathError::invalid_argument(format!(
                "{} is not a finite number",
                v
            ))),
            Numeric::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    MathError::invalid_argument(format!("'{}' is not a numeric value", s))
                }),
        }
    }
}

impl From<i64> for Numeric {
    fn from(v: i64) -> Self {
        Numeric::Int(v)
    }
}

impl From<i32> for Numeric {
    fn from(v: i32) -> Self {
        Numeric::Int(v as i64)
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Numeric::Float(v)
    }
}

impl From<f32> for Numeric {
    fn from(v: f32) -> Self {
        Numeric::Float(v as f64)
    }
}

impl From<&str> for Numeric {
    fn from(v: &str) -> Self {
        Numeric::Text(v.to_string())
    }
}

impl From<String> for Numeric {
    fn from(v: String) -> Self {
        Numeric::Text(v)
    }
}

/// A fixed-dimension vector of real numbers. The dimension is set at
/// construction and never changes; coordinates may only be mutated through
/// the bounds-checked [`Vector::set`].
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    coords: Array1<f64>,
}

impl Vector {
    /// Zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Result<Self, MathError> {
        if dimension == 0 {
            return Err(MathError::invalid_argument(
                "dimension must be a positive integer",
            ));
        }
        Ok(Self {
            coords: Array1::zeros(dimension),
        })
    }

    /// Build a vector from any sequence of numeric values. The dimension
    /// is the sequence length.
    pub fn new<I, T>(values: I) -> Result<Self, MathError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Numeric>,
    {
        let coords = values
            .into_iter()
            .map(|v| v.into().into_f64())
            .collect::<Result<Vec<f64>, MathError>>()?;
        if coords.is_empty() {
            return Err(MathError::invalid_argument(
                "cannot build a vector from an empty sequence",
            ));
        }
        Ok(Self {
            coords: Array1::from(coords),
        })
    }

    pub fn from_slice(values: &[f64]) -> Result<Self, MathError> {
        Self::new(values.iter().copied())
    }

    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    pub fn coordinates(&self) -> Vec<f64> {
        self.coords.to_vec()
    }

    pub fn get(&self, index: usize) -> Result<f64, MathError> {
        self.coords
            .get(index)
            .copied()
            .ok_or_else(|| MathError::index_out_of_bounds(index, self.dimension()))
    }

    pub fn set(&mut self, index: usize, value: impl Into<Numeric>) -> Result<(), MathError> {
        if index >= self.dimension() {
            return Err(MathError::index_out_of_bounds(index, self.dimension()));
        }
        self.coords[index] = value.into().into_f64()?;
        Ok(())
    }

    /// Removing a coordinate would change the dimension, which is fixed
    /// for the life of the vector.
    pub fn remove(&mut self, _index: usize) -> Result<(), MathError> {
        Err(MathError::UnsupportedOperation {
            message: "a vector's coordinates cannot be removed",
        })
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        self.coords.dot(&self.coords).sqrt()
    }

    pub fn add(&self, other: &Vector) -> Result<Vector, MathError> {
        self.check_dimension(other)?;
        Ok(Vector {
            coords: &self.coords + &other.coords,
        })
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector, MathError> {
        self.check_dimension(other)?;
        Ok(Vector {
            coords: &self.coords - &other.coords,
        })
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Vector) -> Result<f64, MathError> {
        Ok(self.subtract(other)?.length())
    }

    pub fn min(&self, other: &Vector) -> Result<Vector, MathError> {
        self.check_dimension(other)?;
        Ok(Vector {
            coords: Zip::from(&self.coords)
                .and(&other.coords)
                .map_collect(|&a, &b| a.min(b)),
        })
    }

    pub fn max(&self, other: &Vector) -> Result<Vector, MathError> {
        self.check_dimension(other)?;
        Ok(Vector {
            coords: Zip::from(&self.coords)
                .and(&other.coords)
                .map_collect(|&a, &b| a.max(b)),
        })
    }

    /// Coordinate-wise minimum over a non-empty group of vectors, folded
    /// pairwise starting from the first element.
    pub fn group_min(vectors: &[Vector]) -> Result<Vector, MathError> {
        let (first, rest) = vectors
            .split_first()
            .ok_or_else(|| MathError::invalid_argument("cannot fold an empty group of vectors"))?;
        rest.iter().try_fold(first.clone(), |acc, v| acc.min(v))
    }

    /// Coordinate-wise maximum over a non-empty group of vectors.
    pub fn group_max(vectors: &[Vector]) -> Result<Vector, MathError> {
        let (first, rest) = vectors
            .split_first()
            .ok_or_else(|| MathError::invalid_argument("cannot fold an empty group of vectors"))?;
        rest.iter().try_fold(first.clone(), |acc, v| acc.max(v))
    }

    /// Coordinate-wise arithmetic mean of a non-empty group of vectors.
    pub fn average<'a, I>(vectors: I) -> Result<Vector, MathError>
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        let mut iter = vectors.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| MathError::invalid_argument("cannot average an empty group of vectors"))?;
        let mut sum = first.coords.clone();
        let mut count = 1usize;
        for v in iter {
            if v.dimension() != sum.len() {
                return Err(MathError::dimension_mismatch(sum.len(), v.dimension()));
            }
            sum += &v.coords;
            count += 1;
        }
        Ok(Vector {
            coords: sum / count as f64,
        })
    }

    /// True if every vector in the slice has the same dimension.
    /// Vacuously true for an empty slice.
    pub fn consistent(vectors: &[Vector]) -> bool {
        vectors
            .windows(2)
            .all(|pair| pair[0].dimension() == pair[1].dimension())
    }

    fn check_dimension(&self, other: &Vector) -> Result<(), MathError> {
        if self.dimension() != other.dimension() {
            return Err(MathError::dimension_mismatch(
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(())
    }
}
