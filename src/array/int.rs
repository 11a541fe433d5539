use super::{Array, IntArray};

impl IntArray {
    /// Row vector `[start, start + 1, ..., end]`, inclusive of `end`.
    ///
    /// Empty (`1 x 0`) when `end < start`.
    ///
    /// ```
    /// use labmath::IntArray;
    /// assert_eq!(IntArray::row_vector_from_to(2, 5).as_slice(), &[2, 3, 4, 5]);
    /// assert_eq!(IntArray::row_vector_from_to(5, 2).shape(), (1, 0));
    /// ```
    pub fn row_vector_from_to(start: usize, end: usize) -> Self {
        let data: Vec<usize> = if end < start {
            Vec::new()
        } else {
            (start..=end).collect()
        };
        Array::from_parts(1, data.len(), data)
    }
}
