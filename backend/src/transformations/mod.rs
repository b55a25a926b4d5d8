pub mod filtering;

pub use filtering::{
    filter_records, slicer_options, FilterSelection, InvalidSlicerValue, Slicer, SlicerOptions,
    WILDCARD,
};
