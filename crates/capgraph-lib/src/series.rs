//! Partitioning of raw metric series into per-direction value sequences

use crate::models::{Direction, DirectionBlock, MetricsResponse};

/// Ordered capacity values split by direction, gaps elided.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionedSeries {
    pub ingress: Vec<f64>,
    pub egress: Vec<f64>,
}

impl PartitionedSeries {
    /// Split the response's direction blocks into the two buckets.
    ///
    /// A structurally absent payload (no metrics, no series) partitions to
    /// two empty sequences; downstream rendering degenerates to an empty
    /// chart instead of failing.
    pub fn from_response(response: &MetricsResponse) -> Self {
        response
            .metrics
            .first()
            .map(|metric| partition(&metric.series))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.ingress.is_empty() && self.egress.is_empty()
    }

    pub fn values(&self, direction: Direction) -> &[f64] {
        match direction {
            Direction::Ingress => &self.ingress,
            Direction::Egress => &self.egress,
        }
    }
}

/// Append each block's samples to the bucket its direction label names.
///
/// Unrecognized labels are dropped without complaint, samples keep their
/// encounter order, and missing values are skipped. Only the first data
/// group of a block carries the sampled values.
pub fn partition(blocks: &[DirectionBlock]) -> PartitionedSeries {
    let mut split = PartitionedSeries::default();
    for block in blocks {
        let bucket = match Direction::from_label(&block.view.direction) {
            Some(Direction::Ingress) => &mut split.ingress,
            Some(Direction::Egress) => &mut split.egress,
            None => continue,
        };
        let Some(group) = block.data.first() else {
            continue;
        };
        bucket.extend(group.datapoints.iter().filter_map(|point| point.value));
    }
    split
}
