//! Chart series domain logic for the finance control app.
//!
//! Each flow direction feeds its own append-only buffer of plot points.
//! The x indices are bookkept here so the chart layer only ever reads.

use shared::{SeriesPoint, TransactionDirection};

/// Append-only sequence of chart points for one flow direction
#[derive(Debug, Clone, Default)]
pub struct SeriesBuffer {
    points: Vec<SeriesPoint>,
}

impl SeriesBuffer {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point, keeping insertion order
    pub fn append(&mut self, point: SeriesPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest x in the buffer, scanning the whole buffer on every call
    pub fn min_x(&self) -> Option<i64> {
        self.points.iter().map(|p| p.x).min()
    }

    /// Largest x in the buffer, scanning the whole buffer on every call
    pub fn max_x(&self) -> Option<i64> {
        self.points.iter().map(|p| p.x).max()
    }
}

/// The two flow series and their running x counters.
///
/// Each direction keeps its own counter starting at 0: the inflow counter
/// increments after every inflow point, the outflow counter decrements
/// after every outflow point, so outflow x values run 0, -1, -2, ...
#[derive(Debug, Clone, Default)]
pub struct SeriesService {
    inflow: SeriesBuffer,
    outflow: SeriesBuffer,
    next_inflow_x: i64,
    next_outflow_x: i64,
}

impl SeriesService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted amount to the series matching its direction and
    /// return the point that was plotted.
    pub fn append(&mut self, amount: f64, direction: TransactionDirection) -> SeriesPoint {
        match direction {
            TransactionDirection::Inflow => {
                let point = SeriesPoint {
                    x: self.next_inflow_x,
                    y: amount,
                };
                self.inflow.append(point);
                self.next_inflow_x += 1;
                point
            }
            TransactionDirection::Outflow => {
                let point = SeriesPoint {
                    x: self.next_outflow_x,
                    y: amount,
                };
                self.outflow.append(point);
                self.next_outflow_x -= 1;
                point
            }
        }
    }

    pub fn inflow(&self) -> &SeriesBuffer {
        &self.inflow
    }

    pub fn outflow(&self) -> &SeriesBuffer {
        &self.outflow
    }

    pub fn buffer(&self, direction: TransactionDirection) -> &SeriesBuffer {
        match direction {
            TransactionDirection::Inflow => &self.inflow,
            TransactionDirection::Outflow => &self.outflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflow_x_increments_from_zero() {
        let mut service = SeriesService::new();

        let first = service.append(100.0, TransactionDirection::Inflow);
        let second = service.append(20.0, TransactionDirection::Inflow);

        assert_eq!((first.x, first.y), (0, 100.0));
        assert_eq!((second.x, second.y), (1, 20.0));
        assert_eq!(service.inflow().len(), 2);
    }

    #[test]
    fn test_outflow_x_decrements_from_zero() {
        let mut service = SeriesService::new();

        let first = service.append(30.0, TransactionDirection::Outflow);
        let second = service.append(10.0, TransactionDirection::Outflow);

        assert_eq!((first.x, first.y), (0, 30.0));
        assert_eq!((second.x, second.y), (-1, 10.0));
    }

    #[test]
    fn test_counters_are_independent_per_direction() {
        let mut service = SeriesService::new();

        service.append(100.0, TransactionDirection::Inflow);
        let out = service.append(30.0, TransactionDirection::Outflow);

        // The outflow series starts at 0 regardless of prior inflows
        assert_eq!((out.x, out.y), (0, 30.0));
        assert_eq!(service.inflow().points(), &[SeriesPoint { x: 0, y: 100.0 }]);
        assert_eq!(service.outflow().points(), &[SeriesPoint { x: 0, y: 30.0 }]);
    }

    #[test]
    fn test_min_max_x_over_full_buffer() {
        let mut service = SeriesService::new();

        assert_eq!(service.outflow().min_x(), None);
        assert_eq!(service.outflow().max_x(), None);

        service.append(5.0, TransactionDirection::Outflow);
        service.append(6.0, TransactionDirection::Outflow);
        service.append(7.0, TransactionDirection::Outflow);

        assert_eq!(service.outflow().min_x(), Some(-2));
        assert_eq!(service.outflow().max_x(), Some(0));
    }

    #[test]
    fn test_buffer_accessor_matches_direction() {
        let mut service = SeriesService::new();

        service.append(1.0, TransactionDirection::Inflow);
        service.append(2.0, TransactionDirection::Outflow);

        assert_eq!(service.buffer(TransactionDirection::Inflow).len(), 1);
        assert_eq!(
            service.buffer(TransactionDirection::Outflow).points()[0].y,
            2.0
        );
    }
}
