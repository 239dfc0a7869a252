//! The three label converters, dispatched once on [`ConversionJob`].
//!
//! Each converter is a single synchronous read, transform, write pass. All
//! validation happens before the output file is created, so a failed run
//! never leaves an output file behind.

mod annotate;
mod copy;
mod raw;

pub use annotate::annotation_to_label;
pub use copy::copy_labels;
pub use raw::raw_to_label;

use crate::error::Result;
use crate::model::ConversionJob;

/// Run one conversion job and return the number of data rows written.
pub fn run(job: &ConversionJob) -> Result<usize> {
    match job {
        ConversionJob::RawToLabel {
            data,
            output,
            column,
            pipeline,
        } => raw_to_label(data, output, column, pipeline),
        ConversionJob::AnnotationToLabel {
            data,
            labels,
            output,
            column,
            label_id,
        } => annotation_to_label(data, labels, output, column, *label_id),
        ConversionJob::CopyLabel {
            data,
            source,
            output,
        } => copy_labels(data, source, output),
    }
}
