use serde::{Deserialize, Serialize};

use crate::error::TspError;

/// A parsed symmetric Euclidean TSP instance.
///
/// City labels are 1-based: label `k` maps to coordinate list position
/// `k - 1`, and label 0 is unused by convention. The record is immutable
/// once constructed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Instance {
    dimension: usize,
    cities: Vec<(f64, f64)>,
}

impl Instance {
    /// Builds an instance from its coordinate list. Fails on an empty list.
    pub fn new(cities: Vec<(f64, f64)>) -> Result<Self, TspError> {
        if cities.is_empty() {
            return Err(TspError::InvalidInstance(
                "dimension must be at least 1".into(),
            ));
        }
        Ok(Self {
            dimension: cities.len(),
            cities,
        })
    }

    /// Builds from an externally reported dimension, checking it against the
    /// coordinate list length.
    pub fn from_parts(dimension: usize, cities: Vec<(f64, f64)>) -> Result<Self, TspError> {
        if dimension < 1 {
            return Err(TspError::InvalidInstance(
                "dimension must be at least 1".into(),
            ));
        }
        if cities.len() != dimension {
            return Err(TspError::InvalidInstance(format!(
                "dimension is {dimension} but {} coordinates were supplied",
                cities.len()
            )));
        }
        Ok(Self { dimension, cities })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cities(&self) -> &[(f64, f64)] {
        &self.cities
    }

    /// Coordinates of the city with 1-based label `label`.
    pub fn coord(&self, label: usize) -> (f64, f64) {
        self.cities[label - 1]
    }

    /// Euclidean distance between the cities labelled `i` and `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        let (xi, yi) = self.coord(i);
        let (xj, yj) = self.coord(j);
        (xi - xj).hypot(yi - yj)
    }
}
